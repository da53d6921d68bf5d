use crate::ingestion::response::{
    GeminiErrorEnvelope, GeminiGenerateRequest, GeminiGenerateResponse, GenerateRequest,
};
use anyhow::{Context, Result};
use parking_lot::Mutex;
use reqwest::blocking::Client as HttpClient;
use std::collections::VecDeque;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

const USER_AGENT: &str = concat!("wordmap/", env!("CARGO_PKG_VERSION"));
const API_KEY_HEADER: &str = "x-goog-api-key";

/// What the remote side can answer besides text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("unreadable response: {0}")]
    Decode(String),
}

impl TransportError {
    /// Gemini answers a bad key with 400 and a message rather than 401.
    pub fn is_authentication(&self) -> bool {
        let message = match self {
            TransportError::Status { status: 401 | 403, .. } => return true,
            TransportError::Status { message, .. } => message,
            TransportError::Network(message) | TransportError::Decode(message) => message,
        };
        let lowered = message.to_lowercase();
        lowered.contains("api key not valid")
            || lowered.contains("api_key_invalid")
            || lowered.contains("invalid api key")
    }
}

pub trait LLMClient: Send + Sync {
    fn generate(
        &self,
        api_key: &str,
        request: &GenerateRequest,
    ) -> std::result::Result<String, TransportError>;
}

pub struct GeminiLLMClient {
    endpoint: String,
    http: HttpClient,
}

impl GeminiLLMClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("unable to initialise the HTTP client for Gemini")?;

        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }

    fn url_for(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            model
        )
    }
}

impl LLMClient for GeminiLLMClient {
    fn generate(
        &self,
        api_key: &str,
        request: &GenerateRequest,
    ) -> std::result::Result<String, TransportError> {
        let url = self.url_for(&request.model);
        let payload = GeminiGenerateRequest::from(request);
        debug!(%url, temperature = request.temperature, "calling generateContent");

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&payload)
            .send()
            .map_err(|err| TransportError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let raw: GeminiGenerateResponse = response
            .json()
            .map_err(|err| TransportError::Decode(err.to_string()))?;
        raw.text()
            .ok_or_else(|| TransportError::Decode("no candidate text in response".to_string()))
    }
}

fn error_message(body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<GeminiErrorEnvelope>(body) {
        return match envelope.error.status {
            Some(status) if !envelope.error.message.is_empty() => {
                format!("{} ({})", envelope.error.message, status)
            }
            Some(status) => status,
            None => envelope.error.message,
        };
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "no error details".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Replays queued replies and records every request it receives.
#[derive(Clone, Default)]
pub struct MockLLMClient {
    replies: Arc<Mutex<VecDeque<std::result::Result<String, TransportError>>>>,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl MockLLMClient {
    pub fn push_text(&self, text: impl Into<String>) {
        self.replies.lock().push_back(Ok(text.into()));
    }

    pub fn push_error(&self, error: TransportError) {
        self.replies.lock().push_back(Err(error));
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().clone()
    }
}

impl LLMClient for MockLLMClient {
    fn generate(
        &self,
        _api_key: &str,
        request: &GenerateRequest,
    ) -> std::result::Result<String, TransportError> {
        self.requests.lock().push(request.clone());
        self.replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no mock reply queued".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_detection() {
        assert!(TransportError::Status {
            status: 400,
            message: "API key not valid. Please pass a valid API key. (INVALID_ARGUMENT)".into()
        }
        .is_authentication());
        assert!(TransportError::Status {
            status: 403,
            message: "forbidden".into()
        }
        .is_authentication());
        assert!(!TransportError::Status {
            status: 429,
            message: "Resource has been exhausted".into()
        }
        .is_authentication());
        assert!(!TransportError::Network("connection refused".into()).is_authentication());
    }

    #[test]
    fn error_message_prefers_envelope() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}}"#;
        assert_eq!(error_message(body), "API key not valid. (INVALID_ARGUMENT)");
        assert_eq!(error_message("  upstream timeout \n"), "upstream timeout");
        assert_eq!(error_message(""), "no error details");
    }

    #[test]
    fn url_joins_endpoint_and_model() {
        let client = GeminiLLMClient::new("https://example.test/v1beta/").unwrap();
        assert_eq!(
            client.url_for("gemini-2.5-flash"),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn mock_replays_in_order_and_counts() {
        let mock = MockLLMClient::default();
        mock.push_text("[]");
        mock.push_error(TransportError::Network("down".into()));
        let request = GenerateRequest::json("m", "p", 0.3);

        assert_eq!(mock.generate("k", &request).unwrap(), "[]");
        assert!(mock.generate("k", &request).is_err());
        assert!(matches!(
            mock.generate("k", &request),
            Err(TransportError::Network(_))
        ));
        assert_eq!(mock.call_count(), 3);
        assert_eq!(mock.requests()[0], request);
    }
}
