//! Question classification by leading question word.

use super::token::Token;
use serde::{Deserialize, Serialize};

/// Syntactic / semantic type of a form question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// "what ..."
    Factual,
    /// "when ..."
    Temporal,
    /// "where ..."
    Spatial,
    /// "who ..."
    Person,
    /// "why ..."
    Reason,
    /// "how ..."
    Process,
    /// "which ..."
    Selection,
    /// "can / do / is / are ..."
    YesNo,
    /// No question word, but ends with `?`
    GeneralQuestion,
    /// Anything else (prompts, imperatives)
    Statement,
}

/// Question words in lookup order.
///
/// The table is scanned top to bottom and the first entry present among the
/// leading tokens wins, regardless of where it sits in the text. So
/// "Is what you said true?" is `Factual`, not `YesNo`.
const QUESTION_WORDS: [(&str, QuestionType); 11] = [
    ("what", QuestionType::Factual),
    ("when", QuestionType::Temporal),
    ("where", QuestionType::Spatial),
    ("who", QuestionType::Person),
    ("why", QuestionType::Reason),
    ("how", QuestionType::Process),
    ("which", QuestionType::Selection),
    ("can", QuestionType::YesNo),
    ("do", QuestionType::YesNo),
    ("is", QuestionType::YesNo),
    ("are", QuestionType::YesNo),
];

/// Number of leading tokens inspected for a question word
pub const LEADING_TOKENS: usize = 3;

impl QuestionType {
    /// Classify a question from its tokens and raw text.
    ///
    /// Always returns a type; the exhaustive default is [`QuestionType::Statement`].
    ///
    /// # Example
    ///
    /// ```
    /// use neuroform_domain::analysis::question_type::QuestionType;
    /// use neuroform_domain::analysis::token::{PartOfSpeech, Token};
    ///
    /// let tokens: Vec<Token> = ["do", "you", "agree", "?"]
    ///     .iter()
    ///     .map(|w| Token::new(*w, *w, PartOfSpeech::Other, false))
    ///     .collect();
    /// assert_eq!(QuestionType::classify(&tokens, "Do you agree?"), QuestionType::YesNo);
    /// ```
    pub fn classify(tokens: &[Token], text: &str) -> Self {
        let leading: Vec<String> = tokens
            .iter()
            .take(LEADING_TOKENS)
            .map(|t| t.text.to_lowercase())
            .collect();

        for (word, question_type) in QUESTION_WORDS {
            if leading.iter().any(|t| t == word) {
                return question_type;
            }
        }

        if text.trim().ends_with('?') {
            QuestionType::GeneralQuestion
        } else {
            QuestionType::Statement
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Factual => "factual",
            QuestionType::Temporal => "temporal",
            QuestionType::Spatial => "spatial",
            QuestionType::Person => "person",
            QuestionType::Reason => "reason",
            QuestionType::Process => "process",
            QuestionType::Selection => "selection",
            QuestionType::YesNo => "yes_no",
            QuestionType::GeneralQuestion => "general_question",
            QuestionType::Statement => "statement",
        }
    }

    /// Every variant, for exhaustive table tests
    pub fn all() -> [QuestionType; 10] {
        [
            QuestionType::Factual,
            QuestionType::Temporal,
            QuestionType::Spatial,
            QuestionType::Person,
            QuestionType::Reason,
            QuestionType::Process,
            QuestionType::Selection,
            QuestionType::YesNo,
            QuestionType::GeneralQuestion,
            QuestionType::Statement,
        ]
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
