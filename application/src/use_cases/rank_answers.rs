//! Rank Answers use case
//!
//! Ranks the options of one form question, applies the confidence policy
//! and records the decision.

use crate::config::RankingParams;
use crate::engine::{AnswerEngine, EngineError};
use crate::ports::decision_logger::{DecisionEvent, DecisionLogger, NoDecisionLogger};
use neuroform_domain::{ConfidencePolicy, Decision};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Input for the [`RankAnswersUseCase`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RankAnswersInput {
    /// The question text as scraped from the page.
    pub question: String,
    /// Candidate answers in on-page order.
    pub options: Vec<String>,
}

impl RankAnswersInput {
    pub fn new(question: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            question: question.into(),
            options,
        }
    }
}

/// Use case for ranking one question's options.
#[derive(Clone)]
pub struct RankAnswersUseCase {
    engine: Arc<AnswerEngine>,
    policy: ConfidencePolicy,
    decision_logger: Arc<dyn DecisionLogger>,
}

impl RankAnswersUseCase {
    pub fn new(engine: Arc<AnswerEngine>, params: &RankingParams) -> Self {
        Self {
            engine,
            policy: params.policy(),
            decision_logger: Arc::new(NoDecisionLogger),
        }
    }

    /// Create with a decision logger.
    pub fn with_decision_logger(mut self, logger: Arc<dyn DecisionLogger>) -> Self {
        self.decision_logger = logger;
        self
    }

    pub fn policy(&self) -> &ConfidencePolicy {
        &self.policy
    }

    pub fn execute(&self, input: &RankAnswersInput) -> Result<Decision, EngineError> {
        let ranking = match self.engine.rank(&input.question, &input.options) {
            Ok(ranking) => ranking,
            Err(e) => {
                warn!("Could not rank question: {}", e);
                self.decision_logger.log(DecisionEvent::new(
                    "ranking_failed",
                    serde_json::json!({
                        "question": input.question,
                        "options": input.options,
                        "error": e.to_string(),
                    }),
                ));
                return Err(e);
            }
        };

        let decision = Decision::new(ranking, &self.policy);
        if !decision.autonomous {
            info!(
                "Confidence {:.2} below threshold {:.2}, deferring to a human",
                decision.ranking.confidence, decision.threshold
            );
        }

        self.decision_logger.log(DecisionEvent::new(
            "ranking",
            serde_json::json!({
                "question": input.question,
                "options": input.options,
                "question_type": decision.ranking.analysis.question_type,
                "strategy": decision.ranking.analysis.answer_strategy,
                "best_index": decision.ranking.best_index,
                "confidence": decision.ranking.confidence,
                "autonomous": decision.autonomous,
            }),
        ));

        Ok(decision)
    }
}
