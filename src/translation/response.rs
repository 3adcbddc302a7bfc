//! Extraction of the translated text from provider responses.
//!
//! Different backend versions answer with different bodies. Each accepted
//! body has its own typed shape; they are tried in a fixed order and the
//! first one yielding non-empty text wins.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid response format from translation service")]
pub struct UnrecognizedResponseShape;

/// `{"translated_text": "..."}`
#[derive(Debug, Deserialize)]
struct Direct {
    translated_text: String,
}

/// `{"choices": [{"message": {"content": "..."}}]}`
#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// `{"translation": "..."}`
#[derive(Debug, Deserialize)]
struct Generic {
    translation: String,
}

const EXTRACTORS: &[fn(&Value) -> Option<String>] = &[direct, chat_completion, generic, bare];

fn direct(raw: &Value) -> Option<String> {
    shape::<Direct>(raw).map(|d| d.translated_text)
}

fn chat_completion(raw: &Value) -> Option<String> {
    shape::<ChatCompletion>(raw)
        .and_then(|c| c.choices.into_iter().next())
        .map(|choice| choice.message.content)
}

fn generic(raw: &Value) -> Option<String> {
    shape::<Generic>(raw).map(|g| g.translation)
}

fn bare(raw: &Value) -> Option<String> {
    raw.as_str().map(str::to_string)
}

fn shape<T: DeserializeOwned>(raw: &Value) -> Option<T> {
    T::deserialize(raw).ok()
}

/// Reads the translated text out of a raw response body.
///
/// A shape that matches but carries empty text counts as no match, so the
/// next shape is still tried.
pub fn extract(raw: &Value) -> Result<String, UnrecognizedResponseShape> {
    EXTRACTORS
        .iter()
        .filter_map(|extractor| extractor(raw))
        .find(|text| !text.is_empty())
        .ok_or(UnrecognizedResponseShape)
}
