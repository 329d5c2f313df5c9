//! Keyword extraction over tagged tokens.

use super::token::Token;
use std::collections::HashSet;

/// Salient lemmas of a text: content words that are not stop words,
/// deduplicated by first occurrence.
pub fn extract_keywords(tokens: &[Token]) -> Vec<String> {
    let mut seen = HashSet::new();
    content_lemmas(tokens)
        .filter(|lemma| seen.insert(lemma.clone()))
        .collect()
}

/// Content-word lemmas in text order, duplicates kept.
pub fn content_lemmas(tokens: &[Token]) -> impl Iterator<Item = String> + '_ {
    tokens
        .iter()
        .filter(|t| t.is_keyword())
        .map(|t| t.lemma.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::PartOfSpeech;

    fn token(lemma: &str, pos: PartOfSpeech, is_stop: bool) -> Token {
        Token::new(lemma, lemma, pos, is_stop)
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_keywords(&[]).is_empty());
    }

    #[test]
    fn test_keeps_content_words_only() {
        let tokens = vec![
            token("which", PartOfSpeech::Pronoun, true),
            token("payment", PartOfSpeech::Noun, false),
            token("do", PartOfSpeech::Auxiliary, true),
            token("you", PartOfSpeech::Pronoun, true),
            token("prefer", PartOfSpeech::Verb, false),
            token("quick", PartOfSpeech::Adjective, false),
            token("visa", PartOfSpeech::ProperNoun, false),
            token("?", PartOfSpeech::Punctuation, false),
        ];
        assert_eq!(
            extract_keywords(&tokens),
            vec!["payment", "prefer", "quick", "visa"]
        );
    }

    #[test]
    fn test_stop_words_dropped_even_when_content() {
        let tokens = vec![
            token("make", PartOfSpeech::Verb, true),
            token("choice", PartOfSpeech::Noun, false),
        ];
        assert_eq!(extract_keywords(&tokens), vec!["choice"]);
    }

    #[test]
    fn test_first_occurrence_order() {
        let tokens = vec![
            token("plan", PartOfSpeech::Noun, false),
            token("price", PartOfSpeech::Noun, false),
            token("plan", PartOfSpeech::Verb, false),
        ];
        assert_eq!(extract_keywords(&tokens), vec!["plan", "price"]);
        assert_eq!(content_lemmas(&tokens).count(), 3);
    }
}
