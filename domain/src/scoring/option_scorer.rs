//! Option scoring heuristics.
//!
//! Every option starts at [`BASE_SCORE`]; adjustments are summed and the
//! result is clamped to `[0.0, 1.0]`:
//!
//! | rule | condition | adjustment |
//! |------|-----------|------------|
//! | prefer_yes | affirmative marker present | +0.3 |
//! | prefer_yes | negative marker present | -0.2 |
//! | keyword_match | `m` question keywords among option lemmas | +0.2 * m / k |
//! | sentiment | same label as question | +0.1 |
//! | sentiment | positive vs negative | -0.1 |
//! | length | 5..=25 words | +0.05 |
//!
//! Marker checks are plain substring tests: "strongly disagree" contains
//! "agree", so both prefer_yes rules fire for it.

use crate::analysis::{QuestionAnalysis, Sentiment, StrategyTag};
use serde::{Deserialize, Serialize};

pub const BASE_SCORE: f64 = 0.5;

const AFFIRMATIVE_MARKERS: [&str; 5] = ["yes", "agree", "strongly agree", "definitely", "absolutely"];
const NEGATIVE_MARKERS: [&str; 4] = ["no", "disagree", "strongly disagree", "definitely not"];

const AFFIRMATIVE_BONUS: f64 = 0.3;
const NEGATIVE_PENALTY: f64 = -0.2;
const KEYWORD_WEIGHT: f64 = 0.2;
const SENTIMENT_MATCH_BONUS: f64 = 0.1;
const SENTIMENT_CLASH_PENALTY: f64 = -0.1;
const LENGTH_BONUS: f64 = 0.05;
const PREFERRED_WORDS: std::ops::RangeInclusive<usize> = 5..=25;

/// Option-side inputs to the scorer
#[derive(Debug, Clone, Copy)]
pub struct OptionFeatures<'a> {
    /// Raw option text
    pub text: &'a str,
    /// Content-word lemmas of the option
    pub lemmas: &'a [String],
    /// Sentiment of the option text
    pub sentiment: Sentiment,
}

/// Individual adjustments applied to an option, before clamping
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub strategy: f64,
    pub sentiment: f64,
    pub length: f64,
}

impl ScoreBreakdown {
    /// Base score plus all adjustments, unclamped
    pub fn raw(&self) -> f64 {
        BASE_SCORE + self.strategy + self.sentiment + self.length
    }

    /// Final score in `[0.0, 1.0]`
    pub fn score(&self) -> f64 {
        self.raw().clamp(0.0, 1.0)
    }
}

/// Score one option against the question's analysis.
pub fn score_option(option: &OptionFeatures<'_>, analysis: &QuestionAnalysis) -> ScoreBreakdown {
    ScoreBreakdown {
        strategy: strategy_adjustment(option, analysis),
        sentiment: sentiment_adjustment(option.sentiment, analysis.sentiment),
        length: length_adjustment(option.text),
    }
}

fn strategy_adjustment(option: &OptionFeatures<'_>, analysis: &QuestionAnalysis) -> f64 {
    match analysis.answer_strategy {
        StrategyTag::PreferYes => {
            let lower = option.text.to_lowercase();
            let mut adjustment = 0.0;
            if AFFIRMATIVE_MARKERS.iter().any(|m| lower.contains(m)) {
                adjustment += AFFIRMATIVE_BONUS;
            }
            if NEGATIVE_MARKERS.iter().any(|m| lower.contains(m)) {
                adjustment += NEGATIVE_PENALTY;
            }
            adjustment
        }
        StrategyTag::KeywordMatch => {
            if analysis.keywords.is_empty() {
                return 0.0;
            }
            let matches = analysis
                .keywords
                .iter()
                .filter(|kw| option.lemmas.contains(kw))
                .count();
            KEYWORD_WEIGHT * matches as f64 / analysis.keywords.len() as f64
        }
        StrategyTag::SpecificInfo | StrategyTag::Explanation | StrategyTag::Balanced => 0.0,
    }
}

fn sentiment_adjustment(option: Sentiment, question: Sentiment) -> f64 {
    if option == question {
        SENTIMENT_MATCH_BONUS
    } else if option.opposes(question) {
        SENTIMENT_CLASH_PENALTY
    } else {
        0.0
    }
}

fn length_adjustment(text: &str) -> f64 {
    if PREFERRED_WORDS.contains(&text.split_whitespace().count()) {
        LENGTH_BONUS
    } else {
        0.0
    }
}
