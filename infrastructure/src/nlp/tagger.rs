//! Heuristic part-of-speech tagger.
//!
//! Order of evidence: character class, closed-class lexicon, capitalisation,
//! left context, open-class lexicon, then suffixes. Anything left is a noun.

use super::{lemmatizer, lexicon};
use neuroform_domain::PartOfSpeech;

const ADJECTIVE_SUFFIXES: [&str; 8] = ["ful", "ous", "ive", "able", "ible", "less", "ical", "ish"];
const VERB_SUFFIXES: [&str; 3] = ["ize", "ise", "ify"];

/// Tag one word.
///
/// `raw` keeps the original casing, `lower` is its lowercased form, `index`
/// is the position in the text and `prev` the lowercased previous token.
pub fn tag(raw: &str, lower: &str, index: usize, prev: Option<&str>) -> PartOfSpeech {
    if !lower.chars().any(char::is_alphanumeric) {
        return PartOfSpeech::Punctuation;
    }
    if is_number(lower) {
        return PartOfSpeech::Numeral;
    }
    // "what's", "it's": a contracted "is", not the possessive.
    if lower == "'s" && prev.is_some_and(lexicon::contracts_is) {
        return PartOfSpeech::Auxiliary;
    }
    if let Some(pos) = lexicon::closed_class(lower) {
        return pos;
    }
    if index > 0 && is_capitalised(raw) && !prev.is_some_and(ends_sentence) {
        return PartOfSpeech::ProperNoun;
    }
    if prev.is_some_and(lexicon::introduces_noun) {
        return if is_adjective(lower) {
            PartOfSpeech::Adjective
        } else {
            PartOfSpeech::Noun
        };
    }
    if is_adjective(lower) {
        return PartOfSpeech::Adjective;
    }
    if lemmatizer::is_verb_form(lower) {
        return PartOfSpeech::Verb;
    }

    let chars = lower.chars().count();
    if chars > 4 && lower.ends_with("ly") && !lexicon::is_ly_noun(lower) {
        return PartOfSpeech::Adverb;
    }
    if chars > 5 && VERB_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return PartOfSpeech::Verb;
    }
    if chars > 5 && (lower.ends_with("ing") || lower.ends_with("ed")) {
        return PartOfSpeech::Verb;
    }
    PartOfSpeech::Noun
}

fn is_adjective(lower: &str) -> bool {
    lexicon::is_known_adjective(lower)
        || (lower.chars().count() > 5 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)))
}

fn is_number(lower: &str) -> bool {
    lower.chars().any(|c| c.is_ascii_digit())
        && lower
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | ':' | '/' | '-'))
}

/// Leading capital that isn't just shouting ("Visa" yes, "USA" no).
fn is_capitalised(raw: &str) -> bool {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => !chars.clone().any(char::is_uppercase),
        _ => false,
    }
}

fn ends_sentence(token: &str) -> bool {
    matches!(token, "." | "!" | "?" | ":" | ";")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_one(word: &str, index: usize, prev: Option<&str>) -> PartOfSpeech {
        tag(word, &word.to_lowercase(), index, prev)
    }

    #[test]
    fn test_punctuation_and_numbers() {
        assert_eq!(tag_one("?", 3, Some("agree")), PartOfSpeech::Punctuation);
        assert_eq!(tag_one("18", 3, Some("over")), PartOfSpeech::Numeral);
        assert_eq!(tag_one("3.5", 0, None), PartOfSpeech::Numeral);
    }

    #[test]
    fn test_function_words() {
        assert_eq!(tag_one("Do", 0, None), PartOfSpeech::Auxiliary);
        assert_eq!(tag_one("the", 4, Some("with")), PartOfSpeech::Determiner);
    }

    #[test]
    fn test_clitic_s() {
        assert_eq!(tag_one("'s", 1, Some("what")), PartOfSpeech::Auxiliary);
        assert_eq!(tag_one("'s", 1, Some("it")), PartOfSpeech::Auxiliary);
        assert_eq!(tag_one("'s", 1, Some("john")), PartOfSpeech::Particle);
    }

    #[test]
    fn test_verbs() {
        assert_eq!(tag_one("agree", 2, Some("you")), PartOfSpeech::Verb);
        assert_eq!(tag_one("Agree", 0, None), PartOfSpeech::Verb);
        assert_eq!(tag_one("prefers", 1, Some("she")), PartOfSpeech::Verb);
        assert_eq!(tag_one("organize", 1, Some("to")), PartOfSpeech::Verb);
    }

    #[test]
    fn test_nouns_after_determiner() {
        assert_eq!(tag_one("policy", 5, Some("the")), PartOfSpeech::Noun);
        assert_eq!(tag_one("plan", 2, Some("your")), PartOfSpeech::Noun);
        assert_eq!(tag_one("meeting", 2, Some("the")), PartOfSpeech::Noun);
    }

    #[test]
    fn test_adjectives_and_adverbs() {
        assert_eq!(tag_one("good", 3, Some("is")), PartOfSpeech::Adjective);
        assert_eq!(tag_one("helpful", 3, Some("very")), PartOfSpeech::Adjective);
        assert_eq!(tag_one("best", 2, Some("the")), PartOfSpeech::Adjective);
        assert_eq!(tag_one("Strongly", 0, None), PartOfSpeech::Adverb);
        assert_eq!(tag_one("family", 2, Some("large")), PartOfSpeech::Noun);
    }

    #[test]
    fn test_proper_nouns() {
        assert_eq!(tag_one("Visa", 2, Some("with")), PartOfSpeech::ProperNoun);
        // Sentence-initial capitals are not proper nouns.
        assert_eq!(tag_one("Payment", 0, None), PartOfSpeech::Noun);
        assert_eq!(tag_one("Payment", 3, Some(".")), PartOfSpeech::Noun);
        assert_eq!(tag_one("USA", 3, Some("in")), PartOfSpeech::Noun);
    }
}
