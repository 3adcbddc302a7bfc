//! Bounded, most-recent-first history of completed translations.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::time::Duration;
use uuid::Uuid;

/// Number of translations kept.
pub const HISTORY_CAPACITY: usize = 10;

/// One completed translation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    id: Uuid,
    original: String,
    translated: String,
    source: String,
    target: String,
    elapsed: Duration,
    created_at: DateTime<Utc>,
}

impl TranslationResult {
    pub fn new(
        original: String,
        translated: String,
        source: String,
        target: String,
        elapsed: Duration,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            original,
            translated,
            source,
            target,
            elapsed,
            created_at: Utc::now(),
        }
    }

    pub const fn id(&self) -> Uuid {
        self.id
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn translated(&self) -> &str {
        &self.translated
    }

    /// Source code as chosen by the user, `auto` included.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Elapsed time in seconds, rounded to one decimal place.
    pub fn elapsed_secs(&self) -> f64 {
        round_tenths(self.elapsed)
    }

    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Rounds a duration to tenths of a second.
pub fn round_tenths(duration: Duration) -> f64 {
    (duration.as_secs_f64() * 10.0).round() / 10.0
}

/// Fixed-capacity history. New entries go to the front; once full,
/// each insertion drops the oldest entry from the back.
#[derive(Debug, Clone, Default)]
pub struct HistoryCache {
    entries: VecDeque<TranslationResult>,
}

impl HistoryCache {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
        }
    }

    pub fn push(&mut self, result: TranslationResult) {
        self.entries.push_front(result);
        if self.entries.len() > HISTORY_CAPACITY {
            self.entries.pop_back();
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Snapshot of the entries, most recent first.
    pub fn list(&self) -> Vec<TranslationResult> {
        self.entries.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TranslationResult> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        HISTORY_CAPACITY
    }
}
