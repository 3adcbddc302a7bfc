mod client;
mod error;
mod language;
mod orchestrator;
mod request;
mod response;

pub use client::{AUTH_HEADER, DEFAULT_ENDPOINT, HttpTransport, Transport};
pub use error::{
    ErrorKind, ServiceError, TranslateError, TransportError, ValidationError, classify,
    classify_shape,
};
pub use language::{
    AUTO_DETECT, DEFAULT_SOURCE_LOCALE, SUPPORTED_LANGUAGES, SwapError, is_supported,
    language_name, print_languages, swap_languages, validate_source, validate_target,
};
pub use orchestrator::{Phase, Translated, TranslationOrchestrator};
pub use request::{
    DEFAULT_MAX_INPUT_CHARS, MODEL, RequestBuilder, SPEAKER_GENDER, TranslatePayload,
    TranslationRequest,
};
pub use response::{UnrecognizedResponseShape, extract};
