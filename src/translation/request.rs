use serde::Serialize;

use super::error::ValidationError;
use super::language::{AUTO_DETECT, DEFAULT_SOURCE_LOCALE, is_supported};

/// Default maximum number of characters accepted per request.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 5000;

/// Voice selection sent with every request.
pub const SPEAKER_GENDER: &str = "Male";

/// Translation model sent with every request.
pub const MODEL: &str = "mayura:v1";

/// A validated translation request. Only [`RequestBuilder`] creates these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    text: String,
    source: String,
    target: String,
}

impl TranslationRequest {
    /// The trimmed input text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The source code as chosen by the caller (may be `auto`).
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// The wire body for this request, with `auto` replaced by the default locale.
    pub fn payload(&self) -> TranslatePayload<'_> {
        let source_language_code = if self.source == AUTO_DETECT {
            DEFAULT_SOURCE_LOCALE
        } else {
            &self.source
        };

        TranslatePayload {
            input: &self.text,
            source_language_code,
            target_language_code: &self.target,
            speaker_gender: SPEAKER_GENDER,
            model: MODEL,
        }
    }
}

// Borrowed so serialization does not clone the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TranslatePayload<'a> {
    pub input: &'a str,
    pub source_language_code: &'a str,
    pub target_language_code: &'a str,
    pub speaker_gender: &'static str,
    pub model: &'static str,
}

/// Validates user input and produces [`TranslationRequest`]s.
#[derive(Debug, Clone, Copy)]
pub struct RequestBuilder {
    max_chars: usize,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_INPUT_CHARS)
    }
}

impl RequestBuilder {
    pub const fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    pub const fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Builds a request, checking in order: empty text, missing target,
    /// identical languages, catalog membership, and length.
    pub fn build(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<TranslationRequest, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyInput);
        }
        if target.is_empty() {
            return Err(ValidationError::MissingTarget);
        }
        if source == target {
            return Err(ValidationError::SameLanguage);
        }
        if source != AUTO_DETECT && !is_supported(source) {
            return Err(ValidationError::UnsupportedLanguage {
                role: "source",
                code: source.to_string(),
            });
        }
        if !is_supported(target) {
            return Err(ValidationError::UnsupportedLanguage {
                role: "target",
                code: target.to_string(),
            });
        }

        let len = text.chars().count();
        if len > self.max_chars {
            return Err(ValidationError::InputTooLong {
                len,
                max: self.max_chars,
            });
        }

        Ok(TranslationRequest {
            text: text.to_string(),
            source: source.to_string(),
            target: target.to_string(),
        })
    }
}
