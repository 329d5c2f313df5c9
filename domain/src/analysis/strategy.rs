//! Answer strategy selection.

use super::question_type::QuestionType;
use serde::{Deserialize, Serialize};

/// Heuristic bucket chosen for scoring based on question type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyTag {
    /// Favor affirmative options
    PreferYes,
    /// Favor options sharing keywords with the question
    KeywordMatch,
    /// Look for a specific piece of information
    SpecificInfo,
    /// Look for an explanation
    Explanation,
    /// No strategy-specific adjustment
    Balanced,
}

impl StrategyTag {
    /// Pure, total mapping from question type to strategy.
    pub fn for_question(question_type: QuestionType) -> Self {
        match question_type {
            QuestionType::YesNo => StrategyTag::PreferYes,
            QuestionType::Selection => StrategyTag::KeywordMatch,
            QuestionType::Factual
            | QuestionType::Temporal
            | QuestionType::Spatial
            | QuestionType::Person => StrategyTag::SpecificInfo,
            QuestionType::Reason => StrategyTag::Explanation,
            QuestionType::Process | QuestionType::GeneralQuestion | QuestionType::Statement => {
                StrategyTag::Balanced
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyTag::PreferYes => "prefer_yes",
            StrategyTag::KeywordMatch => "keyword_match",
            StrategyTag::SpecificInfo => "specific_info",
            StrategyTag::Explanation => "explanation",
            StrategyTag::Balanced => "balanced",
        }
    }
}

impl std::fmt::Display for StrategyTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
