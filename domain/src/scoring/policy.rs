//! Autonomy policy: when is a ranking confident enough to act on?

use super::ranking::Ranking;
use serde::{Deserialize, Serialize};

/// Default minimum confidence for autonomous selection
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.6;

/// Threshold policy deciding between autonomous selection and deferring to
/// a human.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidencePolicy {
    threshold: f64,
}

impl ConfidencePolicy {
    /// Create a policy; the threshold is clamped into `[0.0, 1.0]`
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_autonomous(&self, ranking: &Ranking) -> bool {
        ranking.confidence >= self.threshold
    }
}

impl Default for ConfidencePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIDENCE_THRESHOLD)
    }
}

/// A ranking together with the policy verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub ranking: Ranking,
    /// Whether the orchestrator may select the answer without a human
    pub autonomous: bool,
    pub threshold: f64,
}

impl Decision {
    pub fn new(ranking: Ranking, policy: &ConfidencePolicy) -> Self {
        Self {
            autonomous: policy.is_autonomous(&ranking),
            threshold: policy.threshold(),
            ranking,
        }
    }
}
