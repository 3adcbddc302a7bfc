//! API credential handling.
//!
//! A single key is held for the life of the process and mirrored into
//! session-scoped storage so later invocations in the same login session
//! can pick it up again.

mod storage;

pub use storage::{FileSessionStorage, MemorySessionStorage, SessionStorage};

use std::sync::{PoisonError, RwLock};
use thiserror::Error;

/// Storage key the credential is persisted under.
pub const CREDENTIAL_KEY: &str = "sarvam_api_key";

/// Minimum accepted credential length, in characters.
pub const MIN_CREDENTIAL_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("Please enter an API key")]
    EmptyCredential,

    #[error("API key seems too short ({len} characters). Please check and try again.")]
    TooShort { len: usize },

    #[error("Failed to save API key for this session: {0}")]
    Persist(String),
}

/// Trims and validates a raw credential.
pub fn validate_credential(raw: &str) -> Result<String, CredentialError> {
    let key = raw.trim();
    if key.is_empty() {
        return Err(CredentialError::EmptyCredential);
    }

    let len = key.chars().count();
    if len < MIN_CREDENTIAL_LEN {
        return Err(CredentialError::TooShort { len });
    }

    Ok(key.to_string())
}

/// Display form of a credential: the first four characters and an ellipsis.
pub fn mask(credential: &str) -> String {
    let prefix: String = credential.chars().take(4).collect();
    format!("{prefix}…")
}

/// Holds the API credential for the process.
///
/// Shared behind an `Arc` between the orchestrator and the caller; the
/// held value sits behind a lock so both can read and replace it.
pub struct CredentialStore {
    held: RwLock<Option<String>>,
    storage: Box<dyn SessionStorage>,
}

impl CredentialStore {
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self {
            held: RwLock::new(None),
            storage: Box::new(storage),
        }
    }

    /// A store whose persistence ends with the process.
    pub fn in_memory() -> Self {
        Self::new(MemorySessionStorage::default())
    }

    /// Validates, holds and persists a credential.
    pub fn save(&self, raw: &str) -> Result<(), CredentialError> {
        let key = validate_credential(raw)?;

        self.storage
            .set(CREDENTIAL_KEY, &key)
            .map_err(|e| CredentialError::Persist(format!("{e:#}")))?;

        self.replace(key);
        tracing::info!("API key saved for this session");
        Ok(())
    }

    /// Validates and holds a credential without persisting it.
    pub fn hold(&self, raw: &str) -> Result<(), CredentialError> {
        let key = validate_credential(raw)?;
        self.replace(key);
        Ok(())
    }

    /// The persisted credential, if any. Read errors are logged and treated as absent.
    pub fn load(&self) -> Option<String> {
        match self.storage.get(CREDENTIAL_KEY) {
            Ok(value) => value.and_then(|v| validate_credential(&v).ok()),
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "failed to read stored API key");
                None
            }
        }
    }

    /// Loads the persisted credential and holds it. Returns whether one was found.
    pub fn restore(&self) -> bool {
        let Some(key) = self.load() else {
            return false;
        };
        self.replace(key);
        tracing::info!("API key loaded from session storage");
        true
    }

    /// The held credential, if any.
    pub fn current(&self) -> Option<String> {
        self.held
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_set(&self) -> bool {
        self.held
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn replace(&self, key: String) {
        *self.held.write().unwrap_or_else(PoisonError::into_inner) = Some(key);
    }
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("held", &self.current().as_deref().map(mask))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    struct FailingStorage;

    impl SessionStorage for FailingStorage {
        fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
            bail!("disk on fire")
        }

        fn set(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
            bail!("disk on fire")
        }
    }

    #[test]
    fn test_save_empty_credential() {
        let store = CredentialStore::in_memory();
        assert_eq!(store.save(""), Err(CredentialError::EmptyCredential));
        assert_eq!(store.save("   \t"), Err(CredentialError::EmptyCredential));
        assert!(store.current().is_none());
    }

    #[test]
    fn test_save_too_short() {
        let store = CredentialStore::in_memory();
        assert_eq!(store.save("short"), Err(CredentialError::TooShort { len: 5 }));
        assert!(store.current().is_none());
    }

    #[test]
    fn test_save_valid_and_load() {
        let store = CredentialStore::in_memory();
        store.save("validkey123").unwrap();

        assert_eq!(store.current(), Some("validkey123".to_string()));
        assert_eq!(store.load(), Some("validkey123".to_string()));
    }

    #[test]
    fn test_save_trims_before_length_check() {
        let store = CredentialStore::in_memory();
        // Ten characters only once whitespace is counted
        assert_eq!(store.save("  abcdef  "), Err(CredentialError::TooShort { len: 6 }));

        store.save("  0123456789  ").unwrap();
        assert_eq!(store.current(), Some("0123456789".to_string()));
    }

    #[test]
    fn test_save_replaces_previous() {
        let store = CredentialStore::in_memory();
        store.save("first-key-000").unwrap();
        store.save("second-key-00").unwrap();
        assert_eq!(store.current(), Some("second-key-00".to_string()));
    }

    #[test]
    fn test_hold_does_not_persist() {
        let store = CredentialStore::in_memory();
        store.hold("validkey123").unwrap();

        assert_eq!(store.current(), Some("validkey123".to_string()));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_restore_from_storage() {
        let storage = MemorySessionStorage::default();
        storage.set(CREDENTIAL_KEY, "validkey123").unwrap();
        let store = CredentialStore::new(storage);

        assert!(store.current().is_none());
        assert!(store.restore());
        assert_eq!(store.current(), Some("validkey123".to_string()));
    }

    #[test]
    fn test_restore_without_stored_key() {
        let store = CredentialStore::in_memory();
        assert!(!store.restore());
        assert!(!store.is_set());
    }

    #[test]
    fn test_persist_failure_keeps_previous_key() {
        let store = CredentialStore::new(FailingStorage);
        store.hold("held-key-000").unwrap();

        let err = store.save("validkey123").unwrap_err();
        assert!(matches!(err, CredentialError::Persist(ref m) if m.contains("disk on fire")));
        assert_eq!(store.current(), Some("held-key-000".to_string()));
    }

    #[test]
    fn test_load_failure_is_none() {
        let store = CredentialStore::new(FailingStorage);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_mask() {
        assert_eq!(mask("validkey123"), "vali…");
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let store = CredentialStore::in_memory();
        store.hold("secretkey-123").unwrap();
        let debug = format!("{store:?}");
        assert!(!debug.contains("secretkey-123"));
    }
}
