//! Expected answer type derived from the question type.

use super::question_type::QuestionType;
use serde::{Deserialize, Serialize};

/// What kind of value the question is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedAnswerType {
    Boolean,
    Option,
    DateTime,
    Location,
    Entity,
    Text,
}

impl ExpectedAnswerType {
    pub fn for_question(question_type: QuestionType) -> Self {
        match question_type {
            QuestionType::YesNo => ExpectedAnswerType::Boolean,
            QuestionType::Selection => ExpectedAnswerType::Option,
            QuestionType::Temporal => ExpectedAnswerType::DateTime,
            QuestionType::Spatial => ExpectedAnswerType::Location,
            QuestionType::Person => ExpectedAnswerType::Entity,
            QuestionType::Factual
            | QuestionType::Reason
            | QuestionType::Process
            | QuestionType::GeneralQuestion
            | QuestionType::Statement => ExpectedAnswerType::Text,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpectedAnswerType::Boolean => "boolean",
            ExpectedAnswerType::Option => "option",
            ExpectedAnswerType::DateTime => "date_time",
            ExpectedAnswerType::Location => "location",
            ExpectedAnswerType::Entity => "entity",
            ExpectedAnswerType::Text => "text",
        }
    }
}

impl std::fmt::Display for ExpectedAnswerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_answer_types() {
        assert_eq!(
            ExpectedAnswerType::for_question(QuestionType::YesNo),
            ExpectedAnswerType::Boolean
        );
        assert_eq!(
            ExpectedAnswerType::for_question(QuestionType::Selection),
            ExpectedAnswerType::Option
        );
        assert_eq!(
            ExpectedAnswerType::for_question(QuestionType::Temporal),
            ExpectedAnswerType::DateTime
        );
        assert_eq!(
            ExpectedAnswerType::for_question(QuestionType::Spatial),
            ExpectedAnswerType::Location
        );
        assert_eq!(
            ExpectedAnswerType::for_question(QuestionType::Person),
            ExpectedAnswerType::Entity
        );
    }

    #[test]
    fn test_factual_expects_text() {
        assert_eq!(
            ExpectedAnswerType::for_question(QuestionType::Factual),
            ExpectedAnswerType::Text
        );
        assert_eq!(
            ExpectedAnswerType::for_question(QuestionType::Statement),
            ExpectedAnswerType::Text
        );
    }
}
