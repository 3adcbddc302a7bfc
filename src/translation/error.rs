//! Error taxonomy and classification of transport failures.
//!
//! Validation problems are detected locally and never reach the network.
//! Everything that comes back from the transport, or a response we cannot
//! read, is funnelled through [`classify`] into a [`ServiceError`].

use thiserror::Error;

use super::response::UnrecognizedResponseShape;

/// Input problems detected before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter some text to translate")]
    EmptyInput,

    #[error("No API key set. Save one with 'stl key' or /key in chat mode")]
    MissingCredential,

    #[error("Please select a target language")]
    MissingTarget,

    #[error("Source and target languages cannot be the same")]
    SameLanguage,

    #[error("Unsupported language code for {role}: '{code}'")]
    UnsupportedLanguage { role: &'static str, code: String },

    #[error("Input is too long ({len} characters, maximum is {max})")]
    InputTooLong { len: usize, max: usize },
}

/// User-facing categories for failed requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidCredential,
    RateLimited,
    BadRequest,
    NetworkUnavailable,
    ServiceUnavailable,
}

impl ErrorKind {
    /// Fixed message shown to the user for this kind.
    pub const fn message(self) -> &'static str {
        match self {
            Self::InvalidCredential => "Invalid API key. Please check your Sarvam AI API key.",
            Self::RateLimited => "Rate limit exceeded. Please try again in a moment.",
            Self::BadRequest => {
                "Invalid request. Please check your input text and selected languages."
            }
            Self::NetworkUnavailable => "Network error. Please check your internet connection.",
            Self::ServiceUnavailable => "Translation service is currently unavailable.",
        }
    }
}

/// A classified failure. `Display` shows only the fixed message;
/// the provider's own text is kept in `diagnostic` for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .kind.message())]
pub struct ServiceError {
    pub kind: ErrorKind,
    pub diagnostic: String,
}

/// Raw failure reported by a transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The server answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// No response was obtained (DNS, refused connection, timeout, TLS).
    #[error("connection failed: {0}")]
    Connection(String),

    /// Anything else without a status, e.g. an unreadable body.
    #[error("{0}")]
    Other(String),
}

/// Error returned by `TranslationOrchestrator::translate`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl TranslateError {
    /// The service error kind, if this failure came from the provider.
    pub const fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Service(e) => Some(e.kind),
            Self::Validation(_) => None,
        }
    }
}

/// Classifies a transport failure.
///
/// The status code decides when one is present; message patterns are only
/// consulted for status-less failures.
pub fn classify(error: &TransportError) -> ServiceError {
    let kind = match error {
        TransportError::Status { status, .. } => kind_for_status(*status),
        TransportError::Connection(message) => {
            kind_for_message(message).unwrap_or(ErrorKind::NetworkUnavailable)
        }
        TransportError::Other(message) => {
            kind_for_message(message).unwrap_or(ErrorKind::ServiceUnavailable)
        }
    };

    ServiceError {
        kind,
        diagnostic: error.to_string(),
    }
}

/// Classifies a response body that matched none of the known shapes.
pub fn classify_shape(error: &UnrecognizedResponseShape) -> ServiceError {
    ServiceError {
        kind: ErrorKind::ServiceUnavailable,
        diagnostic: error.to_string(),
    }
}

const fn kind_for_status(status: u16) -> ErrorKind {
    match status {
        401 | 403 => ErrorKind::InvalidCredential,
        429 => ErrorKind::RateLimited,
        400 => ErrorKind::BadRequest,
        _ => ErrorKind::ServiceUnavailable,
    }
}

fn kind_for_message(message: &str) -> Option<ErrorKind> {
    const PATTERNS: &[(&[&str], ErrorKind)] = &[
        (
            &["unauthorized", "invalid api key", "authorization", "forbidden"],
            ErrorKind::InvalidCredential,
        ),
        (
            &["rate limit", "too many requests"],
            ErrorKind::RateLimited,
        ),
        (&["bad request", "malformed"], ErrorKind::BadRequest),
    ];

    let lower = message.to_lowercase();
    PATTERNS
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| lower.contains(n)))
        .map(|(_, kind)| *kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(status: u16, message: &str) -> TransportError {
        TransportError::Status {
            status,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_classify_by_status() {
        assert_eq!(classify(&status(401, "nope")).kind, ErrorKind::InvalidCredential);
        assert_eq!(classify(&status(403, "nope")).kind, ErrorKind::InvalidCredential);
        assert_eq!(classify(&status(429, "slow down")).kind, ErrorKind::RateLimited);
        assert_eq!(classify(&status(400, "bad")).kind, ErrorKind::BadRequest);
        assert_eq!(classify(&status(500, "boom")).kind, ErrorKind::ServiceUnavailable);
        assert_eq!(classify(&status(503, "down")).kind, ErrorKind::ServiceUnavailable);
    }

    #[test]
    fn test_status_wins_over_message() {
        // A 500 whose body mentions a rate limit is still a server failure.
        let err = classify(&status(500, "rate limit backend exploded"));
        assert_eq!(err.kind, ErrorKind::ServiceUnavailable);
    }

    #[test]
    fn test_connection_failure_is_network_unavailable() {
        let err = classify(&TransportError::Connection("dns error".to_string()));
        assert_eq!(err.kind, ErrorKind::NetworkUnavailable);
        assert!(err.diagnostic.contains("dns error"));
    }

    #[test]
    fn test_message_patterns_without_status() {
        let err = classify(&TransportError::Other("Unauthorized".to_string()));
        assert_eq!(err.kind, ErrorKind::InvalidCredential);

        let err = classify(&TransportError::Other("Too Many Requests".to_string()));
        assert_eq!(err.kind, ErrorKind::RateLimited);

        let err = classify(&TransportError::Other("malformed payload".to_string()));
        assert_eq!(err.kind, ErrorKind::BadRequest);

        let err = classify(&TransportError::Other("weird".to_string()));
        assert_eq!(err.kind, ErrorKind::ServiceUnavailable);
    }

    #[test]
    fn test_service_error_hides_diagnostic() {
        let err = classify(&status(502, "upstream secret stack trace"));
        assert_eq!(err.to_string(), ErrorKind::ServiceUnavailable.message());
        assert!(err.diagnostic.contains("upstream secret stack trace"));
    }

    #[test]
    fn test_unrecognized_shape_is_service_unavailable() {
        let err = classify_shape(&UnrecognizedResponseShape);
        assert_eq!(err.kind, ErrorKind::ServiceUnavailable);
    }

    #[test]
    fn test_translate_error_kind() {
        let err: TranslateError = ValidationError::EmptyInput.into();
        assert_eq!(err.kind(), None);

        let err: TranslateError = classify(&status(429, "")).into();
        assert_eq!(err.kind(), Some(ErrorKind::RateLimited));
    }
}
