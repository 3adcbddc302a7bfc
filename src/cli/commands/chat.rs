use anyhow::Result;

use super::{build_orchestrator, open_credentials};
use crate::chat::{ChatSession, SessionConfig};
use crate::config::{ConfigManager, ResolveOptions, resolve_config};

pub struct ChatOptions {
    pub from: Option<String>,
    pub to: Option<String>,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;
    let config = resolve_config(
        &ResolveOptions {
            from: options.from,
            to: options.to,
        },
        &file_config,
    )?;

    let credentials = open_credentials(&config)?;
    let orchestrator = build_orchestrator(&config, credentials);

    let session_config = SessionConfig {
        source: config.source,
        target: config.target,
        endpoint: config.endpoint,
        api_key_env: config.api_key_env,
    };

    ChatSession::new(session_config, orchestrator).run().await
}
