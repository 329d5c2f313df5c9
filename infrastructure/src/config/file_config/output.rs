//! Output configuration from TOML (`[output]` section)

use neuroform_domain::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format: "full", "best" or "json"
    pub format: Option<String>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// Parse the format string; unset means no preference.
    pub fn parse_format(&self) -> (Option<OutputFormat>, Vec<ConfigIssue>) {
        let Some(raw) = self.format.as_deref() else {
            return (None, vec![]);
        };
        match raw.parse::<OutputFormat>() {
            Ok(format) => (Some(format), vec![]),
            Err(_) => {
                let issue = ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "output.format".to_string(),
                        value: raw.to_string(),
                        valid_values: vec![
                            "full".to_string(),
                            "best".to_string(),
                            "json".to_string(),
                        ],
                    },
                    message: format!(
                        "output.format: unknown value '{}', falling back to 'full'",
                        raw
                    ),
                };
                (Some(OutputFormat::default()), vec![issue])
            }
        }
    }
}
