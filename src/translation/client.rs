use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use super::error::TransportError;
use super::request::TranslatePayload;

/// The Sarvam AI translate endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.sarvam.ai/translate";

/// Header carrying the raw API key.
pub const AUTH_HEADER: &str = "API-Subscription-Key";

/// Sends one translate request and returns the raw response body.
///
/// Implementations make a single attempt; the orchestrator does not retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        credential: &str,
        payload: &TranslatePayload<'_>,
    ) -> Result<Value, TransportError>;
}

/// HTTP transport talking to a fixed endpoint.
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT.to_string())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        credential: &str,
        payload: &TranslatePayload<'_>,
    ) -> Result<Value, TransportError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            source = payload.source_language_code,
            target = payload.target_language_code,
            chars = payload.input.chars().count(),
            "sending translate request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTH_HEADER, credential)
            .json(payload)
            .send()
            .await
            .map_err(|e| connection_error(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Other(format!("Failed to read response body: {e}")))?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                message: error_message_from_body(status, &body),
            });
        }

        Ok(parse_success_body(body))
    }
}

fn connection_error(error: &reqwest::Error) -> TransportError {
    if error.is_connect() || error.is_timeout() || error.is_request() {
        TransportError::Connection(error.to_string())
    } else {
        TransportError::Other(error.to_string())
    }
}

/// Parses a 2xx body as JSON, keeping non-JSON bodies as a plain string.
fn parse_success_body(body: String) -> Value {
    serde_json::from_str(&body).unwrap_or(Value::String(body))
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<ErrorField>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorField {
    Text(String),
    Detail { message: String },
}

/// Builds the message for a non-2xx response.
///
/// Accepts `{"message": ..}`, `{"error": ".."}` and `{"error": {"message": ..}}`;
/// anything else falls back to the status line.
fn error_message_from_body(status: StatusCode, body: &str) -> String {
    let from_json = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| {
            parsed.message.or_else(|| {
                parsed.error.map(|field| match field {
                    ErrorField::Text(text) => text,
                    ErrorField::Detail { message } => message,
                })
            })
        })
        .filter(|message| !message.is_empty());

    from_json.unwrap_or_else(|| {
        format!(
            "HTTP {}: {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_message_field() {
        let body = r#"{"message": "Invalid API key"}"#;
        assert_eq!(
            error_message_from_body(StatusCode::UNAUTHORIZED, body),
            "Invalid API key"
        );
    }

    #[test]
    fn test_error_message_from_error_string() {
        let body = r#"{"error": "quota exhausted"}"#;
        assert_eq!(
            error_message_from_body(StatusCode::TOO_MANY_REQUESTS, body),
            "quota exhausted"
        );
    }

    #[test]
    fn test_error_message_from_error_object() {
        let body = r#"{"error": {"message": "Unsupported target", "code": "invalid_request"}}"#;
        assert_eq!(
            error_message_from_body(StatusCode::BAD_REQUEST, body),
            "Unsupported target"
        );
    }

    #[test]
    fn test_error_message_prefers_message_over_error() {
        let body = r#"{"message": "first", "error": "second"}"#;
        assert_eq!(error_message_from_body(StatusCode::BAD_REQUEST, body), "first");
    }

    #[test]
    fn test_error_message_plain_text_body() {
        assert_eq!(
            error_message_from_body(StatusCode::BAD_GATEWAY, "<html>Bad gateway</html>"),
            "HTTP 502: Bad Gateway"
        );
    }

    #[test]
    fn test_error_message_empty_json() {
        assert_eq!(
            error_message_from_body(StatusCode::INTERNAL_SERVER_ERROR, "{}"),
            "HTTP 500: Internal Server Error"
        );
    }

    #[test]
    fn test_parse_success_body_json() {
        let value = parse_success_body(r#"{"translated_text": "नमस्ते"}"#.to_string());
        assert_eq!(value["translated_text"], "नमस्ते");
    }

    #[test]
    fn test_parse_success_body_plain_text() {
        let value = parse_success_body("नमस्ते".to_string());
        assert_eq!(value, Value::String("नमस्ते".to_string()));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_connection_error() {
        // Port 9 (discard) on localhost is closed in test environments
        let transport = HttpTransport::new("http://127.0.0.1:9/translate".to_string());
        let payload = TranslatePayload {
            input: "Hello",
            source_language_code: "en-IN",
            target_language_code: "hi-IN",
            speaker_gender: "Male",
            model: "mayura:v1",
        };

        let result = transport.send("validkey123", &payload).await;
        assert!(matches!(result, Err(TransportError::Connection(_))));
    }
}
