//! Decoding classifier responses into a [`SentimentPrediction`].
//!
//! Accepted shapes (text-classification servers differ here):
//!
//! ```text
//! {"label": "POSITIVE", "score": 0.98}
//! [{"label": "NEG", "score": 0.7}, {"label": "POS", "score": 0.3}]
//! [[{"label": "LABEL_2", "score": 0.9}, ...]]
//! ```
//!
//! The highest-scoring candidate wins. `LABEL_0/1/2` follow the common
//! negative / neutral / positive ordering of three-way sentiment models.

use neuroform_application::{SentimentModelError, SentimentPrediction};
use neuroform_domain::Sentiment;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct Candidate {
    label: String,
    #[serde(default)]
    score: Option<f64>,
}

/// Decode a JSON response body into a prediction.
pub fn parse_prediction(body: &Value) -> Result<SentimentPrediction, SentimentModelError> {
    let candidates = candidates(body)?;
    let best = candidates
        .into_iter()
        .reduce(|best, c| {
            if c.score.unwrap_or(0.0) > best.score.unwrap_or(0.0) {
                c
            } else {
                best
            }
        })
        .ok_or_else(|| SentimentModelError::InvalidResponse("no labels in response".into()))?;

    let label = parse_label(&best.label)?;
    Ok(match best.score {
        Some(score) => SentimentPrediction::new(label, score),
        None => SentimentPrediction {
            label,
            confidence: None,
        },
    })
}

fn candidates(body: &Value) -> Result<Vec<Candidate>, SentimentModelError> {
    let invalid = |e: serde_json::Error| SentimentModelError::InvalidResponse(e.to_string());
    match body {
        Value::Object(_) => Ok(vec![Candidate::deserialize(body).map_err(invalid)?]),
        Value::Array(items) => match items.first() {
            Some(Value::Array(_)) => candidates(&items[0]),
            _ => Vec::<Candidate>::deserialize(body).map_err(invalid),
        },
        other => Err(SentimentModelError::InvalidResponse(format!(
            "expected object or array, got {}",
            other
        ))),
    }
}

fn parse_label(label: &str) -> Result<Sentiment, SentimentModelError> {
    match label.trim().to_uppercase().as_str() {
        "LABEL_0" => Ok(Sentiment::Negative),
        "LABEL_1" => Ok(Sentiment::Neutral),
        "LABEL_2" => Ok(Sentiment::Positive),
        _ => label
            .parse::<Sentiment>()
            .map_err(|_| SentimentModelError::UnknownLabel(label.to_string())),
    }
}
