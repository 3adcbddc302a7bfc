use anyhow::{Context, Result};
use std::sync::Arc;

use crate::config::ResolvedConfig;
use crate::credential::{CredentialStore, FileSessionStorage};
use crate::translation::{HttpTransport, RequestBuilder, TranslationOrchestrator};

/// Opens the session credential store and picks up any available key.
///
/// A key in the configured environment variable wins over the stored one
/// and is held for this process only.
pub fn open_credentials(config: &ResolvedConfig) -> Result<Arc<CredentialStore>> {
    let store = CredentialStore::new(FileSessionStorage::open_default()?);

    if let Some(key) = config.env_api_key() {
        store
            .hold(&key)
            .with_context(|| format!("Invalid API key in ${}", config.api_key_env))?;
        tracing::debug!(var = %config.api_key_env, "using API key from environment");
    } else {
        store.restore();
    }

    Ok(Arc::new(store))
}

pub fn build_orchestrator(
    config: &ResolvedConfig,
    credentials: Arc<CredentialStore>,
) -> TranslationOrchestrator<HttpTransport> {
    TranslationOrchestrator::with_builder(
        HttpTransport::new(config.endpoint.clone()),
        credentials,
        RequestBuilder::new(config.max_input_chars),
    )
}
