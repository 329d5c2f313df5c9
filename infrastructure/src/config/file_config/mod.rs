//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Enum-like fields stay strings here so that unknown values surface as
//! [`ConfigIssue`] warnings instead of parse failures.

mod analyzer;
mod logging;
mod output;
mod ranking;
mod sentiment;

pub use analyzer::FileAnalyzerConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use ranking::FileRankingConfig;
pub use sentiment::{FileSentimentConfig, SentimentBackendKind};

use neuroform_domain::ConfigIssue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration rejected because it contains error-severity issues
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("invalid configuration: {}", summarize(.0))]
    Invalid(Vec<ConfigIssue>),
}

fn summarize(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .filter(|i| i.is_error())
        .map(|i| i.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Sentiment backend selection
    pub sentiment: FileSentimentConfig,
    /// Built-in text analyzer settings
    pub analyzer: FileAnalyzerConfig,
    /// Ranking and batch settings
    pub ranking: FileRankingConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Log file locations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks enum strings (warnings) and numeric ranges plus required
    /// fields (errors).
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.sentiment.validate();
        issues.extend(self.ranking.to_ranking_params().1);
        issues.extend(self.output.parse_format().1);
        issues
    }

    /// Like [`validate`](Self::validate), but fails when any issue is an error.
    ///
    /// On success the remaining warnings are returned for reporting.
    pub fn check(&self) -> Result<Vec<ConfigIssue>, ConfigValidationError> {
        let issues = self.validate();
        if issues.iter().any(ConfigIssue::is_error) {
            Err(ConfigValidationError::Invalid(issues))
        } else {
            Ok(issues)
        }
    }
}
