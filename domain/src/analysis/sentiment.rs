//! Coarse sentiment labels and the lexical estimator.
//!
//! The lexical rule is the standalone fallback used whenever a model-backed
//! classifier is absent or fails. It counts case-insensitive substring hits,
//! so "unlike" counts as "like".

use serde::{Deserialize, Serialize};

const POSITIVE_WORDS: [&str; 8] = [
    "good", "great", "excellent", "best", "positive", "like", "love", "prefer",
];

const NEGATIVE_WORDS: [&str; 8] = [
    "bad", "poor", "worst", "negative", "dislike", "hate", "avoid", "terrible",
];

/// Coarse sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    /// Rule-based estimate from fixed word lists.
    ///
    /// ```
    /// use neuroform_domain::analysis::sentiment::Sentiment;
    ///
    /// assert_eq!(Sentiment::from_lexicon("This is a great and excellent result"), Sentiment::Positive);
    /// assert_eq!(Sentiment::from_lexicon("This is terrible and bad"), Sentiment::Negative);
    /// assert_eq!(Sentiment::from_lexicon("The sky is present"), Sentiment::Neutral);
    /// ```
    pub fn from_lexicon(text: &str) -> Self {
        let lower = text.to_lowercase();
        let positive = POSITIVE_WORDS.iter().filter(|w| lower.contains(*w)).count();
        let negative = NEGATIVE_WORDS.iter().filter(|w| lower.contains(*w)).count();

        match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => Sentiment::Positive,
            std::cmp::Ordering::Less => Sentiment::Negative,
            std::cmp::Ordering::Equal => Sentiment::Neutral,
        }
    }

    /// Whether two labels point in opposite directions (positive vs negative).
    pub fn opposes(&self, other: Sentiment) -> bool {
        matches!(
            (self, other),
            (Sentiment::Positive, Sentiment::Negative) | (Sentiment::Negative, Sentiment::Positive)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Sentiment {
    type Err = String;

    /// Accepts the plain labels plus the upper-case / abbreviated forms
    /// sentiment models tend to emit ("POSITIVE", "NEG", "neu").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" | "pos" => Ok(Sentiment::Positive),
            "negative" | "neg" => Ok(Sentiment::Negative),
            "neutral" | "neu" => Ok(Sentiment::Neutral),
            other => Err(format!("Unknown sentiment label: {}", other)),
        }
    }
}
