//! Question analysis entity

use super::expected_answer::ExpectedAnswerType;
use super::keywords::extract_keywords;
use super::question_type::QuestionType;
use super::sentiment::Sentiment;
use super::strategy::StrategyTag;
use super::token::Token;
use serde::{Deserialize, Serialize};

/// Everything the scorer needs to know about a question.
///
/// Created fresh per question and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnalysis {
    pub question_type: QuestionType,
    pub sentiment: Sentiment,
    /// Salient lemmas in first-occurrence order
    pub keywords: Vec<String>,
    pub answer_strategy: StrategyTag,
    pub expected_answer_type: ExpectedAnswerType,
}

impl QuestionAnalysis {
    /// Derive an analysis from the question's tokens, its raw text and its
    /// (already estimated) sentiment.
    pub fn from_tokens(tokens: &[Token], text: &str, sentiment: Sentiment) -> Self {
        let question_type = QuestionType::classify(tokens, text);
        Self {
            question_type,
            sentiment,
            keywords: extract_keywords(tokens),
            answer_strategy: StrategyTag::for_question(question_type),
            expected_answer_type: ExpectedAnswerType::for_question(question_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::PartOfSpeech;

    #[test]
    fn test_from_tokens_yes_no() {
        let tokens = vec![
            Token::new("do", "do", PartOfSpeech::Auxiliary, true),
            Token::new("you", "you", PartOfSpeech::Pronoun, true),
            Token::new("agree", "agree", PartOfSpeech::Verb, false),
            Token::new("?", "?", PartOfSpeech::Punctuation, false),
        ];
        let analysis = QuestionAnalysis::from_tokens(&tokens, "Do you agree?", Sentiment::Neutral);

        assert_eq!(analysis.question_type, QuestionType::YesNo);
        assert_eq!(analysis.answer_strategy, StrategyTag::PreferYes);
        assert_eq!(analysis.expected_answer_type, ExpectedAnswerType::Boolean);
        assert_eq!(analysis.keywords, vec!["agree"]);
        assert_eq!(analysis.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_serialize_shape() {
        let analysis = QuestionAnalysis::from_tokens(&[], "Tell us more.", Sentiment::Positive);
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["question_type"], "statement");
        assert_eq!(json["answer_strategy"], "balanced");
        assert_eq!(json["expected_answer_type"], "text");
        assert_eq!(json["sentiment"], "positive");
    }
}
