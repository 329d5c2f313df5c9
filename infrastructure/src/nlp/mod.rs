//! Built-in English text analysis.
//!
//! ```text
//! text ─▶ UAX #29 word bounds ─▶ clitic split ─▶ tagger ─▶ lemmatizer ─▶ Token
//!                                                  │
//!                                               lexicon (closed-class words, stop words)
//! ```
//!
//! Everything is table- and rule-driven, so results are deterministic and
//! need no model download.

mod analyzer;
mod lemmatizer;
mod lexicon;
mod tagger;

pub use analyzer::LexiconTextAnalyzer;
