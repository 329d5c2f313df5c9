//! Built-in text analyzer: UAX #29 word segmentation plus the lexicon tagger.

use super::{lemmatizer, lexicon, tagger};
use neuroform_application::{AnalyzerError, TextAnalyzer};
use neuroform_domain::{PartOfSpeech, Token};
use std::collections::HashSet;
use tracing::trace;
use unicode_segmentation::UnicodeSegmentation;

/// Clitic suffixes split off a word ("don't" -> "do" + "n't").
const CLITICS: [&str; 7] = ["n't", "'s", "'re", "'ve", "'ll", "'d", "'m"];

/// Rule-based English analyzer with no external model.
///
/// Stateless apart from its stop-word additions, so one instance can be
/// shared across threads.
///
/// # Example
///
/// ```
/// use neuroform_application::TextAnalyzer;
/// use neuroform_infrastructure::LexiconTextAnalyzer;
///
/// let analyzer = LexiconTextAnalyzer::new();
/// let tokens = analyzer.analyze("Do you agree with the policies?").unwrap();
/// let lemmas: Vec<&str> = tokens.iter().map(|t| t.lemma.as_str()).collect();
/// assert_eq!(lemmas, ["do", "you", "agree", "with", "the", "policy", "?"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LexiconTextAnalyzer {
    extra_stop_words: HashSet<String>,
}

impl LexiconTextAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat additional words as stop words (compared lowercased).
    pub fn with_extra_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra_stop_words
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        self
    }

    fn is_stop(&self, lower: &str) -> bool {
        lexicon::is_stop_word(lower) || self.extra_stop_words.contains(lower)
    }
}

impl TextAnalyzer for LexiconTextAnalyzer {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn analyze(&self, text: &str) -> Result<Vec<Token>, AnalyzerError> {
        let words = segment(text);
        let mut tokens = Vec::with_capacity(words.len());
        let mut prev: Option<String> = None;

        for (index, raw) in words.iter().enumerate() {
            let lower = normalize(raw);
            let pos = tagger::tag(raw, &lower, index, prev.as_deref());
            // Lemmas are lowercase: a name capitalised mid-question is a
            // proper noun, but the same name as a one-word option is not.
            let lemma = lemmatizer::lemmatize(&lower, pos);
            let is_stop = self.is_stop(&lower);
            tokens.push(Token::new(lower.clone(), lemma, pos, is_stop));
            prev = Some(lower);
        }

        trace!("Analyzed {} tokens", tokens.len());
        Ok(tokens)
    }
}

/// Split text into word and punctuation segments, clitics separated.
fn segment(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    for word in text
        .split_word_bounds()
        .filter(|w| !w.chars().all(char::is_whitespace))
    {
        match split_clitic(word) {
            Some((stem, clitic)) => {
                out.push(stem);
                out.push(clitic);
            }
            None => out.push(word),
        }
    }
    out
}

fn split_clitic(word: &str) -> Option<(&str, &str)> {
    let normalized = normalize(word);
    CLITICS.iter().find_map(|clitic| {
        if !normalized.ends_with(clitic) || normalized.len() == clitic.len() {
            return None;
        }
        // Map the suffix back onto the original bytes; a curly apostrophe is
        // three bytes wide instead of one.
        let suffix_chars = clitic.chars().count();
        let split_at = word
            .char_indices()
            .rev()
            .nth(suffix_chars - 1)
            .map(|(i, _)| i)?;
        (split_at > 0).then(|| word.split_at(split_at))
    })
}

fn normalize(word: &str) -> String {
    word.to_lowercase().replace('\u{2019}', "'")
}

#[cfg(test)]
mod tests {
    use super::*;
    use neuroform_domain::extract_keywords;

    fn analyze(text: &str) -> Vec<Token> {
        LexiconTextAnalyzer::new().analyze(text).unwrap()
    }

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    // ==================== Segmentation ====================

    #[test]
    fn test_punctuation_split_off() {
        let tokens = analyze("Do you agree?");
        assert_eq!(texts(&tokens), ["do", "you", "agree", "?"]);
        assert_eq!(tokens[3].pos, PartOfSpeech::Punctuation);
    }

    #[test]
    fn test_contractions() {
        let tokens = analyze("I don't like it");
        assert_eq!(texts(&tokens), ["i", "do", "n't", "like", "it"]);

        let tokens = analyze("We can\u{2019}t attend");
        assert_eq!(texts(&tokens), ["we", "ca", "n't", "attend"]);
        assert_eq!(tokens[1].lemma, "can");
    }

    #[test]
    fn test_clitic_s_after_wh_word_is_be() {
        let tokens = analyze("What's your name?");
        assert_eq!(texts(&tokens), ["what", "'s", "your", "name", "?"]);
        assert_eq!(tokens[1].pos, PartOfSpeech::Auxiliary);
        assert_eq!(tokens[1].lemma, "be");
        assert!(tokens[1].is_stop);

        let tokens = analyze("Is this John's car?");
        let clitic = tokens.iter().find(|t| t.text == "'s").unwrap();
        assert_eq!(clitic.pos, PartOfSpeech::Particle);
        assert_eq!(clitic.lemma, "'s");
    }

    #[test]
    fn test_empty_text() {
        assert!(analyze("").is_empty());
        assert!(analyze("   ").is_empty());
    }

    // ==================== Keywords ====================

    #[test]
    fn test_keywords_from_yes_no_question() {
        let tokens = analyze("Do you agree with the policy?");
        assert_eq!(extract_keywords(&tokens), ["agree", "policy"]);
    }

    #[test]
    fn test_keywords_lemmatized_and_deduplicated() {
        let tokens = analyze("Which payment methods and payment plans are accepted?");
        let keywords = extract_keywords(&tokens);
        assert_eq!(keywords, ["payment", "method", "plan", "accept"]);
    }

    #[test]
    fn test_proper_noun_lemma_is_lowercase() {
        let tokens = analyze("Do you pay with Visa?");
        let visa = tokens.iter().find(|t| t.text == "visa").unwrap();
        assert_eq!(visa.pos, PartOfSpeech::ProperNoun);
        assert_eq!(visa.lemma, "visa");

        // The same name on its own is not tagged as a proper noun, but
        // keeps the same lemma.
        let option = analyze("Visa");
        assert_eq!(option[0].pos, PartOfSpeech::Noun);
        assert_eq!(option[0].lemma, visa.lemma);
    }

    #[test]
    fn test_extra_stop_words() {
        let analyzer = LexiconTextAnalyzer::new().with_extra_stop_words(["Policy"]);
        let tokens = analyzer.analyze("Do you agree with the policy?").unwrap();
        assert_eq!(extract_keywords(&tokens), ["agree"]);
    }

    #[test]
    fn test_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LexiconTextAnalyzer>();
    }
}
