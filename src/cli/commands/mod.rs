//! Subcommand implementations.

/// Chat mode command handler.
pub mod chat;

/// Configure command handler.
pub mod configure;

/// Session key command handler.
pub mod key;

/// One-shot translation command handler.
pub mod translate;

mod context;

pub use context::{build_orchestrator, open_credentials};
