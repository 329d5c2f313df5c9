//! Ranking configuration from TOML (`[ranking]` section)

use neuroform_application::RankingParams;
use neuroform_domain::{ConfigIssue, ConfigIssueCode, DEFAULT_CONFIDENCE_THRESHOLD, Severity};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw ranking configuration from TOML
///
/// # Example
///
/// ```toml
/// [ranking]
/// confidence_threshold = 0.6   # autonomous selection at or above this
/// batch_concurrency = 4
/// question_timeout_seconds = 30
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRankingConfig {
    pub confidence_threshold: f64,
    pub batch_concurrency: usize,
    pub question_timeout_seconds: u64,
}

impl Default for FileRankingConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            batch_concurrency: 4,
            question_timeout_seconds: 30,
        }
    }
}

impl FileRankingConfig {
    /// Convert to [`RankingParams`], keeping the default for every invalid field.
    pub fn to_ranking_params(&self) -> (RankingParams, Vec<ConfigIssue>) {
        let mut params = RankingParams::default();
        let mut issues = Vec::new();

        if (0.0..=1.0).contains(&self.confidence_threshold) {
            params.confidence_threshold = self.confidence_threshold;
        } else {
            issues.push(out_of_range(
                "ranking.confidence_threshold",
                self.confidence_threshold.to_string(),
                format!(
                    "ranking.confidence_threshold must be within [0, 1], got {}",
                    self.confidence_threshold
                ),
            ));
        }

        if self.batch_concurrency == 0 {
            issues.push(out_of_range(
                "ranking.batch_concurrency",
                "0".to_string(),
                "ranking.batch_concurrency cannot be 0".to_string(),
            ));
        } else {
            params.batch_concurrency = self.batch_concurrency;
        }

        if self.question_timeout_seconds == 0 {
            issues.push(out_of_range(
                "ranking.question_timeout_seconds",
                "0".to_string(),
                "ranking.question_timeout_seconds cannot be 0".to_string(),
            ));
        } else {
            params.question_timeout = Some(Duration::from_secs(self.question_timeout_seconds));
        }

        (params, issues)
    }
}

fn out_of_range(field: &str, value: String, message: String) -> ConfigIssue {
    ConfigIssue {
        severity: Severity::Error,
        code: ConfigIssueCode::OutOfRange {
            field: field.to_string(),
            value,
        },
        message,
    }
}
