//! Sentiment classification served over HTTP.

use super::labels::parse_prediction;
use neuroform_application::{SentimentModel, SentimentModelError, SentimentPrediction};
use std::time::Duration;
use tracing::debug;

/// Text used to probe the endpoint at engine build time
const PROBE_TEXT: &str = "ok";

/// Sentiment model behind an HTTP endpoint.
///
/// Sends `{"inputs": "<text>"}` as a JSON POST and decodes the response with
/// [`parse_prediction`]. Uses the blocking client, so calls must not be made
/// from inside an async task (batch ranking runs on blocking worker threads).
pub struct HttpSentimentModel {
    client: reqwest::blocking::Client,
    endpoint: reqwest::Url,
    api_key: Option<String>,
}

impl HttpSentimentModel {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, SentimentModelError> {
        let endpoint = reqwest::Url::parse(endpoint).map_err(|e| {
            SentimentModelError::Unavailable(format!("invalid endpoint '{}': {}", endpoint, e))
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(SentimentModelError::Unavailable(format!(
                "unsupported endpoint scheme '{}'",
                endpoint.scheme()
            )));
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("neuroform/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SentimentModelError::Unavailable(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            api_key: None,
        })
    }

    /// Send the key as a bearer token with every request.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

impl SentimentModel for HttpSentimentModel {
    fn name(&self) -> &str {
        "http"
    }

    fn health_check(&self) -> Result<(), SentimentModelError> {
        self.predict(PROBE_TEXT).map(|_| ())
    }

    fn predict(&self, text: &str) -> Result<SentimentPrediction, SentimentModelError> {
        let mut request = self
            .client
            .post(self.endpoint.clone())
            .json(&serde_json::json!({ "inputs": text }));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().map_err(map_transport_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(SentimentModelError::RequestFailed(format!(
                "endpoint returned {}",
                status
            )));
        }

        let body: serde_json::Value = response
            .json()
            .map_err(|e| SentimentModelError::InvalidResponse(e.to_string()))?;
        let prediction = parse_prediction(&body)?;
        debug!(
            "Sentiment model labelled text as {} ({:?})",
            prediction.label, prediction.confidence
        );
        Ok(prediction)
    }
}

fn map_transport_error(e: reqwest::Error) -> SentimentModelError {
    if e.is_timeout() {
        SentimentModelError::Timeout
    } else if e.is_connect() {
        SentimentModelError::Unavailable(e.to_string())
    } else {
        SentimentModelError::RequestFailed(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_endpoint() {
        assert!(matches!(
            HttpSentimentModel::new("not a url", Duration::from_secs(1)),
            Err(SentimentModelError::Unavailable(_))
        ));
        assert!(matches!(
            HttpSentimentModel::new("ftp://example.com/model", Duration::from_secs(1)),
            Err(SentimentModelError::Unavailable(_))
        ));
    }

    #[test]
    fn test_builder() {
        let model = HttpSentimentModel::new("http://localhost:8080/sentiment", Duration::from_secs(1))
            .unwrap()
            .with_api_key("secret");
        assert_eq!(model.endpoint(), "http://localhost:8080/sentiment");
        assert_eq!(model.api_key.as_deref(), Some("secret"));
        assert_eq!(model.name(), "http");
    }

    #[test]
    fn test_unreachable_endpoint_fails_health_check() {
        // Port 9 (discard) is closed on test machines; the connection is refused locally.
        let model =
            HttpSentimentModel::new("http://127.0.0.1:9/sentiment", Duration::from_secs(2)).unwrap();
        assert!(model.health_check().is_err());
    }
}
