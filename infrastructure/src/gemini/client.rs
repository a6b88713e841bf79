//! Gemini HTTP client implementing the generation gateway port.

use super::protocol::{ApiErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use coach_application::ports::generation_gateway::{GatewayError, GenerationGateway};
use coach_domain::util::truncate_str;
use thiserror::Error;
use tracing::{debug, warn};

/// Model used when the config names none.
pub const DEFAULT_MODEL: &str = "gemini-pro";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// The supplied credential cannot configure the client.
///
/// Reported to the user at startup; the gateway stays unset and the
/// session keeps running with generation disabled.
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("API key is empty")]
    EmptyKey,

    #[error("HTTP client initialization failed: {0}")]
    HttpClient(String),
}

/// Client for the Generative Language `generateContent` endpoint.
///
/// One blocking call per prompt: no retry, no streaming, timeouts are
/// whatever the HTTP client defaults to.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, CredentialError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(CredentialError::EmptyKey);
        }
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| CredentialError::HttpClient(e.to_string()))?;
        Ok(Self {
            http,
            api_key,
            model: model.into(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", API_BASE, self.model)
    }

    /// Map a non-2xx body to a request failure, preferring the API's own
    /// error message when the envelope parses.
    fn error_from_body(status: reqwest::StatusCode, body: &str) -> GatewayError {
        match serde_json::from_str::<ApiErrorEnvelope>(body) {
            Ok(envelope) => GatewayError::RequestFailed(envelope.error.message),
            Err(_) => GatewayError::RequestFailed(format!(
                "HTTP {}: {}",
                status.as_u16(),
                truncate_str(body, 200)
            )),
        }
    }
}

#[async_trait]
impl GenerationGateway for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        let request = GenerateContentRequest::from_prompt(prompt);
        debug!(model = %self.model, "Sending generateContent request");

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Generation request failed");
            return Err(Self::error_from_body(status, &body));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        parsed.into_text().ok_or_else(|| {
            GatewayError::InvalidResponse("response contained no text".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_key_is_rejected() {
        assert!(matches!(
            GeminiClient::new("", DEFAULT_MODEL),
            Err(CredentialError::EmptyKey)
        ));
        assert!(matches!(
            GeminiClient::new("   ", DEFAULT_MODEL),
            Err(CredentialError::EmptyKey)
        ));
    }

    #[test]
    fn test_endpoint_includes_model() {
        let client = GeminiClient::new("test-key", "gemini-pro").unwrap();
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn test_error_from_body_prefers_api_message() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#;
        let err = GeminiClient::error_from_body(reqwest::StatusCode::BAD_REQUEST, body);
        assert!(matches!(
            err,
            GatewayError::RequestFailed(msg) if msg == "API key not valid"
        ));
    }

    #[test]
    fn test_error_from_body_falls_back_to_status_line() {
        let err =
            GeminiClient::error_from_body(reqwest::StatusCode::SERVICE_UNAVAILABLE, "not json");
        assert!(matches!(
            err,
            GatewayError::RequestFailed(msg) if msg.starts_with("HTTP 503")
        ));
    }
}
