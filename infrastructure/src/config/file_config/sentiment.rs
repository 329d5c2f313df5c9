//! Sentiment backend configuration from TOML (`[sentiment]` section)

use neuroform_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

/// Which sentiment implementation the engine is built with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SentimentBackendKind {
    /// Built-in word-list estimator, no model
    #[default]
    Lexical,
    /// Model served over HTTP
    Http,
}

impl SentimentBackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentBackendKind::Lexical => "lexical",
            SentimentBackendKind::Http => "http",
        }
    }
}

impl std::str::FromStr for SentimentBackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lexical" | "lexicon" | "none" => Ok(SentimentBackendKind::Lexical),
            "http" | "model" => Ok(SentimentBackendKind::Http),
            other => Err(format!("Unknown sentiment backend: {}", other)),
        }
    }
}

/// Raw sentiment configuration from TOML
///
/// # Example
///
/// ```toml
/// [sentiment]
/// backend = "http"                               # "lexical" or "http"
/// endpoint = "http://localhost:8080/sentiment"
/// api_key_env = "NEUROFORM_SENTIMENT_API_KEY"
/// timeout_seconds = 10
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSentimentConfig {
    pub backend: String,
    /// Model endpoint, required for the http backend
    pub endpoint: Option<String>,
    /// Environment variable holding the bearer token
    pub api_key_env: String,
    pub timeout_seconds: u64,
}

impl Default for FileSentimentConfig {
    fn default() -> Self {
        Self {
            backend: "lexical".to_string(),
            endpoint: None,
            api_key_env: "NEUROFORM_SENTIMENT_API_KEY".to_string(),
            timeout_seconds: 10,
        }
    }
}

impl FileSentimentConfig {
    /// Parse the backend string, warning and falling back to lexical on failure.
    pub fn parse_backend(&self) -> (SentimentBackendKind, Vec<ConfigIssue>) {
        match self.backend.parse::<SentimentBackendKind>() {
            Ok(kind) => (kind, vec![]),
            Err(_) => {
                let issue = ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "sentiment.backend".to_string(),
                        value: self.backend.clone(),
                        valid_values: vec!["lexical".to_string(), "http".to_string()],
                    },
                    message: format!(
                        "sentiment.backend: unknown value '{}', falling back to 'lexical'",
                        self.backend
                    ),
                };
                (SentimentBackendKind::default(), vec![issue])
            }
        }
    }

    /// API key from the configured environment variable, if set and non-empty.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let (kind, mut issues) = self.parse_backend();

        if self.timeout_seconds == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::OutOfRange {
                    field: "sentiment.timeout_seconds".to_string(),
                    value: "0".to_string(),
                },
                message: "sentiment.timeout_seconds cannot be 0".to_string(),
            });
        }

        let has_endpoint = self
            .endpoint
            .as_deref()
            .is_some_and(|e| !e.trim().is_empty());
        if kind == SentimentBackendKind::Http && !has_endpoint {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::MissingValue {
                    field: "sentiment.endpoint".to_string(),
                },
                message: "sentiment.endpoint is required when sentiment.backend = 'http'"
                    .to_string(),
            });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lexical() {
        let config = FileSentimentConfig::default();
        assert_eq!(config.parse_backend(), (SentimentBackendKind::Lexical, vec![]));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_unknown_backend_warns() {
        let config = FileSentimentConfig {
            backend: "transformer".to_string(),
            ..Default::default()
        };
        let (kind, issues) = config.parse_backend();
        assert_eq!(kind, SentimentBackendKind::Lexical);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_http_without_endpoint_is_error() {
        let config = FileSentimentConfig {
            backend: "HTTP".to_string(),
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert!(matches!(
            &issues[0].code,
            ConfigIssueCode::MissingValue { field } if field == "sentiment.endpoint"
        ));
    }

    #[test]
    fn test_zero_timeout_is_error() {
        let config = FileSentimentConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert!(config.validate().iter().any(ConfigIssue::is_error));
    }

    #[test]
    fn test_api_key_from_missing_variable() {
        let config = FileSentimentConfig {
            api_key_env: "NEUROFORM_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            ..Default::default()
        };
        assert!(config.api_key().is_none());
    }
}
