//! The answer engine handle.
//!
//! Owns the text analyzer and the resolved sentiment model, built once by
//! [`AnswerEngineBuilder::build`] and then shared read-only across every
//! ranking call. The sentiment model is whichever capability was chosen at
//! build time: an injected model that passed its health check, or
//! [`LexicalSentimentModel`]. Nothing is stored in globals; drop the engine or call
//! [`AnswerEngine::shutdown`] to release the model resources.

use super::error::EngineError;
use crate::ports::sentiment_model::{LexicalSentimentModel, SentimentModel};
use crate::ports::text_analyzer::TextAnalyzer;
use neuroform_domain::util::preview;
use neuroform_domain::{
    DomainError, OptionFeatures, OptionScore, QuestionAnalysis, QuestionType, Ranking, Sentiment,
    Token, content_lemmas, extract_keywords, score_option,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Which sentiment path the engine is using
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SentimentBackend {
    /// Model-backed, falling back per call on failure
    Model { name: String },
    /// Word lists only
    Lexical { reason: String },
}

impl SentimentBackend {
    pub fn is_degraded(&self) -> bool {
        matches!(self, SentimentBackend::Lexical { .. })
    }
}

impl std::fmt::Display for SentimentBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentBackend::Model { name } => write!(f, "model ({})", name),
            SentimentBackend::Lexical { reason } => write!(f, "lexical ({})", reason),
        }
    }
}

/// Builder for [`AnswerEngine`]
#[derive(Default)]
pub struct AnswerEngineBuilder {
    analyzer: Option<Arc<dyn TextAnalyzer>>,
    sentiment_model: Option<Arc<dyn SentimentModel>>,
}

impl AnswerEngineBuilder {
    /// Set the (required) text analyzer
    pub fn text_analyzer(mut self, analyzer: Arc<dyn TextAnalyzer>) -> Self {
        self.analyzer = Some(analyzer);
        self
    }

    /// Set the (optional) model-backed sentiment classifier
    pub fn sentiment_model(mut self, model: Arc<dyn SentimentModel>) -> Self {
        self.sentiment_model = Some(model);
        self
    }

    /// Initialize the engine.
    ///
    /// Fails with [`EngineError::Configuration`] when the text analyzer is
    /// missing or its health check fails. A sentiment model that fails its
    /// health check is dropped and [`LexicalSentimentModel`] is installed
    /// in its place.
    pub fn build(self) -> Result<AnswerEngine, EngineError> {
        let analyzer = self.analyzer.ok_or_else(|| {
            EngineError::Configuration("no text analyzer configured".to_string())
        })?;

        analyzer.health_check().map_err(|e| {
            EngineError::Configuration(format!(
                "text analyzer '{}' failed to initialize: {}",
                analyzer.name(),
                e
            ))
        })?;
        info!("Loaded text analyzer: {}", analyzer.name());

        let lexical: Arc<dyn SentimentModel> = Arc::new(LexicalSentimentModel);
        let (sentiment_model, backend) = match self.sentiment_model {
            None => (
                lexical,
                SentimentBackend::Lexical {
                    reason: "no sentiment model configured".to_string(),
                },
            ),
            Some(model) => match model.health_check() {
                Ok(()) => {
                    info!("Loaded sentiment model: {}", model.name());
                    let name = model.name().to_string();
                    (model, SentimentBackend::Model { name })
                }
                Err(e) => {
                    warn!(
                        "Sentiment model '{}' unavailable, using lexical sentiment: {}",
                        model.name(),
                        e
                    );
                    (
                        lexical,
                        SentimentBackend::Lexical {
                            reason: e.to_string(),
                        },
                    )
                }
            },
        };

        Ok(AnswerEngine {
            analyzer,
            sentiment_model,
            fallback: LexicalSentimentModel,
            backend,
        })
    }
}

/// Answer-selection engine: classify, analyze, score and rank.
///
/// # Example
///
/// ```ignore
/// let engine = AnswerEngine::builder()
///     .text_analyzer(Arc::new(LexiconTextAnalyzer::new()))
///     .build()?;
///
/// let ranking = engine.rank(
///     "Do you agree with this policy?",
///     &["Strongly agree", "Strongly disagree", "No opinion"],
/// )?;
/// assert_eq!(ranking.best_index, 0);
/// ```
pub struct AnswerEngine {
    analyzer: Arc<dyn TextAnalyzer>,
    sentiment_model: Arc<dyn SentimentModel>,
    fallback: LexicalSentimentModel,
    backend: SentimentBackend,
}

impl AnswerEngine {
    pub fn builder() -> AnswerEngineBuilder {
        AnswerEngineBuilder::default()
    }

    pub fn analyzer_name(&self) -> &str {
        self.analyzer.name()
    }

    pub fn sentiment_backend(&self) -> &SentimentBackend {
        &self.backend
    }

    pub fn sentiment_model_name(&self) -> &str {
        self.sentiment_model.name()
    }

    /// Classify a question by its leading question word
    pub fn classify(&self, question: &str) -> Result<QuestionType, EngineError> {
        let tokens = self.tokens(question)?;
        Ok(QuestionType::classify(&tokens, question))
    }

    /// Coarse sentiment of `text`. Never fails: model errors fall back to
    /// the word lists.
    pub fn sentiment(&self, text: &str) -> Sentiment {
        match self.sentiment_model.predict(text) {
            Ok(prediction) => prediction.label,
            Err(e) => {
                warn!(
                    "Sentiment model '{}' failed, using lexical fallback: {}",
                    self.sentiment_model.name(),
                    e
                );
                self.fallback.label(text)
            }
        }
    }

    /// Salient lemmas of `text` in first-occurrence order
    pub fn keywords(&self, text: &str) -> Result<Vec<String>, EngineError> {
        let tokens = self.tokens(text)?;
        Ok(extract_keywords(&tokens))
    }

    /// Full analysis of a question
    pub fn analyze(&self, question: &str) -> Result<QuestionAnalysis, EngineError> {
        let tokens = self.tokens(question)?;
        let sentiment = self.sentiment(question);
        let analysis = QuestionAnalysis::from_tokens(&tokens, question, sentiment);
        debug!("Question analysis complete: {:?}", analysis);
        Ok(analysis)
    }

    /// Score a single option against an analysis, in `[0.0, 1.0]`
    pub fn score(&self, option: &str, analysis: &QuestionAnalysis) -> Result<f64, EngineError> {
        Ok(self.score_option(0, option, analysis)?.score)
    }

    /// Score a single option and keep the per-rule breakdown
    pub fn score_option(
        &self,
        index: usize,
        option: &str,
        analysis: &QuestionAnalysis,
    ) -> Result<OptionScore, EngineError> {
        let tokens = self.tokens(option)?;
        let lemmas: Vec<String> = content_lemmas(&tokens).collect();
        let sentiment = self.sentiment(option);
        let features = OptionFeatures {
            text: option,
            lemmas: &lemmas,
            sentiment,
        };
        let breakdown = score_option(&features, analysis);
        Ok(OptionScore::new(index, option, sentiment, breakdown))
    }

    /// Rank `options` for `question`.
    ///
    /// Fails with [`EngineError::InvalidInput`] when `options` is empty.
    /// Ties go to the first option.
    pub fn rank<S: AsRef<str>>(
        &self,
        question: &str,
        options: &[S],
    ) -> Result<Ranking, EngineError> {
        if options.is_empty() {
            return Err(DomainError::EmptyOptions.into());
        }

        info!("Ranking {} options for: {}", options.len(), preview(question, 50));

        let analysis = self.analyze(question)?;
        let scores = options
            .iter()
            .enumerate()
            .map(|(index, option)| self.score_option(index, option.as_ref(), &analysis))
            .collect::<Result<Vec<_>, _>>()?;

        let ranking = Ranking::new(question, analysis, scores)?;
        info!(
            "Selected option {} with confidence {:.2}",
            ranking.best_index, ranking.confidence
        );
        Ok(ranking)
    }

    /// Release the analyzer and sentiment model.
    pub fn shutdown(self) {
        info!(
            "Shutting down answer engine (analyzer: {}, sentiment: {})",
            self.analyzer.name(),
            self.backend
        );
    }

    fn tokens(&self, text: &str) -> Result<Vec<Token>, EngineError> {
        Ok(self.analyzer.analyze(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::sentiment_model::{SentimentModelError, SentimentPrediction};
    use crate::ports::text_analyzer::AnalyzerError;
    use neuroform_domain::{PartOfSpeech, StrategyTag};
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==================== Test Doubles ====================

    const STOP_WORDS: [&str; 8] = ["do", "you", "with", "this", "the", "is", "which", "a"];

    /// Whitespace analyzer: `?` and `,` split off as punctuation, stop words
    /// from a tiny list, everything else a noun with itself as lemma.
    struct WhitespaceAnalyzer;

    impl TextAnalyzer for WhitespaceAnalyzer {
        fn name(&self) -> &str {
            "whitespace"
        }

        fn analyze(&self, text: &str) -> Result<Vec<Token>, AnalyzerError> {
            Ok(text
                .replace('?', " ?")
                .replace(',', " ,")
                .split_whitespace()
                .map(|w| {
                    let lower = w.to_lowercase();
                    let pos = if lower == "?" || lower == "," {
                        PartOfSpeech::Punctuation
                    } else {
                        PartOfSpeech::Noun
                    };
                    let is_stop = STOP_WORDS.contains(&lower.as_str());
                    Token::new(lower.clone(), lower, pos, is_stop)
                })
                .collect())
        }
    }

    struct BrokenAnalyzer;

    impl TextAnalyzer for BrokenAnalyzer {
        fn name(&self) -> &str {
            "broken"
        }

        fn health_check(&self) -> Result<(), AnalyzerError> {
            Err(AnalyzerError::Unavailable("model files missing".to_string()))
        }

        fn analyze(&self, _text: &str) -> Result<Vec<Token>, AnalyzerError> {
            Err(AnalyzerError::Unavailable("model files missing".to_string()))
        }
    }

    /// Fails on every call, counting how often it was asked.
    struct FailingSentimentModel {
        calls: AtomicUsize,
        healthy: bool,
    }

    impl FailingSentimentModel {
        fn new(healthy: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                healthy,
            }
        }
    }

    impl SentimentModel for FailingSentimentModel {
        fn name(&self) -> &str {
            "failing"
        }

        fn health_check(&self) -> Result<(), SentimentModelError> {
            if self.healthy {
                Ok(())
            } else {
                Err(SentimentModelError::Unavailable("connection refused".to_string()))
            }
        }

        fn predict(&self, _text: &str) -> Result<SentimentPrediction, SentimentModelError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(SentimentModelError::Timeout)
        }
    }

    /// Labels everything negative.
    struct GloomyModel;

    impl SentimentModel for GloomyModel {
        fn name(&self) -> &str {
            "gloomy"
        }

        fn predict(&self, _text: &str) -> Result<SentimentPrediction, SentimentModelError> {
            Ok(SentimentPrediction::new(Sentiment::Negative, 0.99))
        }
    }

    fn engine() -> AnswerEngine {
        AnswerEngine::builder()
            .text_analyzer(Arc::new(WhitespaceAnalyzer))
            .build()
            .unwrap()
    }

    // ==================== Initialization ====================

    #[test]
    fn test_build_without_analyzer_is_configuration_error() {
        let result = AnswerEngine::builder().build();
        assert!(matches!(result, Err(EngineError::Configuration(_))));
    }

    #[test]
    fn test_build_with_broken_analyzer_is_configuration_error() {
        let result = AnswerEngine::builder()
            .text_analyzer(Arc::new(BrokenAnalyzer))
            .build();
        match result {
            Err(EngineError::Configuration(msg)) => assert!(msg.contains("broken")),
            _ => panic!("expected configuration error"),
        }
    }

    #[test]
    fn test_build_without_sentiment_model_is_lexical() {
        let engine = engine();
        assert!(engine.sentiment_backend().is_degraded());
        assert_eq!(engine.analyzer_name(), "whitespace");
        assert_eq!(engine.sentiment_model_name(), "lexical");
    }

    #[test]
    fn test_unhealthy_sentiment_model_degrades() {
        let model = Arc::new(FailingSentimentModel::new(false));
        let engine = AnswerEngine::builder()
            .text_analyzer(Arc::new(WhitespaceAnalyzer))
            .sentiment_model(model.clone())
            .build()
            .unwrap();

        assert!(engine.sentiment_backend().is_degraded());
        assert_eq!(engine.sentiment_model_name(), "lexical");
        assert_eq!(engine.sentiment("great"), Sentiment::Positive);
        // Dropped at build time, never queried.
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    // ==================== Sentiment ====================

    #[test]
    fn test_sentiment_fallback_on_call_failure() {
        let model = Arc::new(FailingSentimentModel::new(true));
        let engine = AnswerEngine::builder()
            .text_analyzer(Arc::new(WhitespaceAnalyzer))
            .sentiment_model(model.clone())
            .build()
            .unwrap();

        assert!(!engine.sentiment_backend().is_degraded());
        assert_eq!(engine.sentiment_model_name(), "failing");
        assert_eq!(
            engine.sentiment("This is a great and excellent result"),
            Sentiment::Positive
        );
        assert_eq!(engine.sentiment("This is terrible and bad"), Sentiment::Negative);
        assert_eq!(engine.sentiment("The sky is present"), Sentiment::Neutral);
        assert_eq!(model.calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_model_sentiment_used_when_available() {
        let engine = AnswerEngine::builder()
            .text_analyzer(Arc::new(WhitespaceAnalyzer))
            .sentiment_model(Arc::new(GloomyModel))
            .build()
            .unwrap();

        assert_eq!(engine.sentiment("great"), Sentiment::Negative);
        assert_eq!(
            engine.sentiment_backend(),
            &SentimentBackend::Model {
                name: "gloomy".to_string()
            }
        );
    }

    // ==================== Analysis ====================

    #[test]
    fn test_classify() {
        let engine = engine();
        assert_eq!(engine.classify("What is your name?").unwrap(), QuestionType::Factual);
        assert_eq!(engine.classify("Do you agree?").unwrap(), QuestionType::YesNo);
    }

    #[test]
    fn test_keywords() {
        let engine = engine();
        assert_eq!(
            engine.keywords("Which plan, the plan with support?").unwrap(),
            vec!["plan", "support"]
        );
        assert!(engine.keywords("").unwrap().is_empty());
    }

    #[test]
    fn test_analyze_yes_no() {
        let analysis = engine().analyze("Do you agree with this policy?").unwrap();
        assert_eq!(analysis.question_type, QuestionType::YesNo);
        assert_eq!(analysis.answer_strategy, StrategyTag::PreferYes);
        assert_eq!(analysis.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_analyzer_failure_propagates() {
        // Bypass the health check to simulate a runtime failure.
        let engine = AnswerEngine {
            analyzer: Arc::new(BrokenAnalyzer),
            sentiment_model: Arc::new(LexicalSentimentModel),
            fallback: LexicalSentimentModel,
            backend: SentimentBackend::Lexical {
                reason: "test".to_string(),
            },
        };
        assert!(matches!(
            engine.rank("Do you agree?", &["Yes"]),
            Err(EngineError::Analyzer(_))
        ));
    }

    // ==================== Ranking ====================

    #[test]
    fn test_rank_agree_scenario() {
        let engine = engine();
        let options = ["Strongly agree", "Strongly disagree", "No opinion"];
        let ranking = engine.rank("Do you agree with this policy?", &options).unwrap();

        assert_eq!(ranking.best_index, 0);
        assert!((ranking.confidence - 0.9).abs() < 1e-9);
        // "disagree" contains "agree": +0.3 and -0.2 both apply.
        assert!((ranking.scores[1].score - 0.7).abs() < 1e-9);
        assert!((ranking.scores[2].score - 0.4).abs() < 1e-9);
        assert!(ranking.confidence > ranking.scores[2].score);
    }

    #[test]
    fn test_rank_empty_options() {
        let options: [&str; 0] = [];
        assert_eq!(
            engine().rank("Any question?", &options).unwrap_err(),
            EngineError::InvalidInput(DomainError::EmptyOptions)
        );
    }

    #[test]
    fn test_rank_index_in_bounds_and_idempotent() {
        let engine = engine();
        let cases: Vec<(&str, Vec<&str>)> = vec![
            ("Which plan do you prefer?", vec!["Basic plan", "Premium plan with support"]),
            ("Why did you apply?", vec!["Because I love the product", "Money"]),
            ("Tell us more.", vec!["a b c d e", "x"]),
            ("Where?", vec!["Here"]),
        ];
        for (question, options) in cases {
            let first = engine.rank(question, &options).unwrap();
            let second = engine.rank(question, &options).unwrap();
            assert!(first.best_index < options.len());
            assert_eq!(first.selection(), second.selection());
            for score in &first.scores {
                assert!((0.0..=1.0).contains(&score.score));
            }
        }
    }

    #[test]
    fn test_rank_ties_go_to_first_option() {
        let ranking = engine().rank("Tell us more.", &["alpha", "beta", "gamma"]).unwrap();
        assert_eq!(ranking.best_index, 0);
        assert!(ranking.scores.iter().all(|s| s.score == ranking.confidence));
    }

    #[test]
    fn test_keyword_match_strategy() {
        let engine = engine();
        let ranking = engine
            .rank("Which plan includes support?", &["Basic", "Premium plan", "plan support"])
            .unwrap();
        assert_eq!(ranking.analysis.answer_strategy, StrategyTag::KeywordMatch);
        assert_eq!(ranking.best_index, 2);
    }

    #[test]
    fn test_score_matches_rank() {
        let engine = engine();
        let analysis = engine.analyze("Do you agree with this policy?").unwrap();
        let score = engine.score("Strongly agree", &analysis).unwrap();
        assert!((score - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnswerEngine>();
    }
}
