//! Token value objects produced by a text-analysis capability.

use serde::{Deserialize, Serialize};

/// Coarse part-of-speech tag (Universal POS subset)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    Noun,
    ProperNoun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Adposition,
    Auxiliary,
    Conjunction,
    Particle,
    Numeral,
    Punctuation,
    Other,
}

impl PartOfSpeech {
    /// Content words carry the meaning of a question: nouns, proper nouns,
    /// verbs and adjectives.
    pub fn is_content(&self) -> bool {
        matches!(
            self,
            PartOfSpeech::Noun
                | PartOfSpeech::ProperNoun
                | PartOfSpeech::Verb
                | PartOfSpeech::Adjective
        )
    }
}

/// A single token from tokenizing / tagging a piece of text
///
/// # Example
///
/// ```
/// use neuroform_domain::analysis::token::{PartOfSpeech, Token};
///
/// let token = Token::new("policies", "policy", PartOfSpeech::Noun, false);
/// assert!(token.is_keyword());
///
/// let stop = Token::new("the", "the", PartOfSpeech::Determiner, true);
/// assert!(!stop.is_keyword());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Lowercased surface form
    pub text: String,
    /// Dictionary base form
    pub lemma: String,
    pub pos: PartOfSpeech,
    pub is_stop: bool,
}

impl Token {
    pub fn new(
        text: impl Into<String>,
        lemma: impl Into<String>,
        pos: PartOfSpeech,
        is_stop: bool,
    ) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            pos,
            is_stop,
        }
    }

    /// A content word that is not a stop word
    pub fn is_keyword(&self) -> bool {
        self.pos.is_content() && !self.is_stop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_tags() {
        assert!(PartOfSpeech::Noun.is_content());
        assert!(PartOfSpeech::ProperNoun.is_content());
        assert!(PartOfSpeech::Verb.is_content());
        assert!(PartOfSpeech::Adjective.is_content());
        assert!(!PartOfSpeech::Adverb.is_content());
        assert!(!PartOfSpeech::Auxiliary.is_content());
        assert!(!PartOfSpeech::Punctuation.is_content());
    }

    #[test]
    fn test_stop_content_word_is_not_keyword() {
        let token = Token::new("make", "make", PartOfSpeech::Verb, true);
        assert!(!token.is_keyword());
    }
}
