//! Request lifecycle: validation, dispatch, timing and history updates.

use std::sync::Arc;
use std::time::{Duration, Instant};

use super::client::Transport;
use super::error::{TranslateError, ValidationError, classify, classify_shape};
use super::request::RequestBuilder;
use super::response::extract;
use crate::credential::CredentialStore;
use crate::history::{HistoryCache, TranslationResult, round_tenths};

/// Where a `translate` call currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    InFlight,
    Succeeded,
    Failed,
}

/// A successful translation as handed back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Translated {
    pub text: String,
    pub elapsed: Duration,
}

impl Translated {
    /// Elapsed seconds rounded to one decimal place.
    pub fn duration_secs(&self) -> f64 {
        round_tenths(self.elapsed)
    }
}

/// Coordinates one translation at a time.
///
/// `translate` borrows the orchestrator mutably for the whole call, so a
/// second request cannot start while one is in flight. Callers wanting
/// queueing must do it themselves.
pub struct TranslationOrchestrator<T> {
    transport: T,
    credentials: Arc<CredentialStore>,
    builder: RequestBuilder,
    history: HistoryCache,
    current: Option<String>,
    phase: Phase,
}

impl<T: Transport> TranslationOrchestrator<T> {
    pub fn new(transport: T, credentials: Arc<CredentialStore>) -> Self {
        Self::with_builder(transport, credentials, RequestBuilder::default())
    }

    pub fn with_builder(
        transport: T,
        credentials: Arc<CredentialStore>,
        builder: RequestBuilder,
    ) -> Self {
        Self {
            transport,
            credentials,
            builder,
            history: HistoryCache::new(),
            current: None,
            phase: Phase::Idle,
        }
    }

    /// Translates `text` from `source` to `target`.
    ///
    /// Validation failures return before the transport is touched. On
    /// success the result becomes the current translation and is pushed
    /// to history; on failure both are left as they were.
    pub async fn translate(
        &mut self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<Translated, TranslateError> {
        self.enter(Phase::Validating);
        let outcome = self.run(text, source, target).await;
        self.enter(if outcome.is_ok() {
            Phase::Succeeded
        } else {
            Phase::Failed
        });
        self.enter(Phase::Idle);
        outcome
    }

    async fn run(
        &mut self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<Translated, TranslateError> {
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyInput.into());
        }
        let credential = self
            .credentials
            .current()
            .ok_or(ValidationError::MissingCredential)?;
        let request = self.builder.build(text, source, target)?;

        self.enter(Phase::InFlight);
        let started = Instant::now();

        let raw = self
            .transport
            .send(&credential, &request.payload())
            .await
            .map_err(|e| {
                let classified = classify(&e);
                tracing::warn!(
                    kind = ?classified.kind,
                    diagnostic = %classified.diagnostic,
                    "translation request failed"
                );
                classified
            })?;

        let translated = extract(&raw).map_err(|e| {
            let classified = classify_shape(&e);
            tracing::warn!(response = %raw, "unrecognized response shape");
            classified
        })?;

        let elapsed = started.elapsed();
        tracing::debug!(elapsed_ms = elapsed.as_millis(), "translation completed");

        self.current = Some(translated.clone());
        self.history.push(TranslationResult::new(
            request.text().to_string(),
            translated.clone(),
            request.source().to_string(),
            request.target().to_string(),
            elapsed,
        ));

        Ok(Translated {
            text: translated,
            elapsed,
        })
    }

    fn enter(&mut self, phase: Phase) {
        tracing::trace!(from = ?self.phase, to = ?phase, "orchestrator phase");
        self.phase = phase;
    }
}

impl<T> TranslationOrchestrator<T> {
    /// Phase as seen between calls.
    ///
    /// `translate` holds `&mut self` until it returns to `Idle`, so callers
    /// only ever observe `Idle` here. The intermediate phases are emitted as
    /// trace events. A call whose future is dropped early leaves the phase it
    /// had reached until the next call starts.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Text of the last successful translation, if not cleared.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn clear_current(&mut self) {
        self.current = None;
    }

    /// Exchanges the current translation with the caller's input text.
    ///
    /// Used when the languages are swapped: the previous output becomes the
    /// new input (returned) and the previous input becomes the current
    /// translation. Returns `None` and changes nothing when there is no
    /// current translation.
    pub fn swap_with_current(&mut self, input: &str) -> Option<String> {
        let output = self.current.take()?;
        self.current = Some(input.to_string());
        Some(output)
    }

    pub const fn history(&self) -> &HistoryCache {
        &self.history
    }

    pub const fn history_mut(&mut self) -> &mut HistoryCache {
        &mut self.history
    }

    pub fn credentials(&self) -> &Arc<CredentialStore> {
        &self.credentials
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    pub const fn max_chars(&self) -> usize {
        self.builder.max_chars()
    }
}
