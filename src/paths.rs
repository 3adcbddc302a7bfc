//! XDG-style path utilities for configuration and session state.
//!
//! Configuration lives under the XDG config home. The API key only lives
//! for the login session, so it goes to the XDG runtime directory, which
//! the OS empties at logout.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "sarvam-tl";

/// Returns the configuration directory.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/sarvam-tl` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/sarvam-tl` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join(APP_DIR)),
        _ => Ok(home_dir()?.join(".config").join(APP_DIR)),
    }
}

/// Returns the directory for session-scoped state.
///
/// Resolution order:
/// 1. `$XDG_RUNTIME_DIR/sarvam-tl` if `XDG_RUNTIME_DIR` is set
/// 2. `<system temp dir>/sarvam-tl-<user>` otherwise
pub fn session_dir() -> Result<PathBuf> {
    match std::env::var("XDG_RUNTIME_DIR") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join(APP_DIR)),
        _ => {
            let user = std::env::var("USER")
                .or_else(|_| std::env::var("USERNAME"))
                .unwrap_or_else(|_| "default".to_string());
            Ok(std::env::temp_dir().join(format!("{APP_DIR}-{user}")))
        }
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}
