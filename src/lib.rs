//! # stl - Sarvam AI translation CLI
//!
//! `stl` translates text between English and 22 Indian languages using the
//! Sarvam AI translate API.
//!
//! ## Quick Start
//!
//! ```bash
//! # Save an API key for this login session
//! stl key
//!
//! # Translate a file
//! stl --to hi-IN ./notes.txt
//!
//! # Translate from stdin with an explicit source language
//! echo "How are you?" | stl --from en-IN --to ta-IN
//!
//! # Interactive chat mode
//! stl chat --to te-IN
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/sarvam-tl/config.toml`:
//!
//! ```toml
//! [defaults]
//! from = "auto"
//! to = "hi-IN"
//!
//! [api]
//! api_key_env = "SARVAM_API_KEY"
//! max_input_chars = 5000
//! ```
//!
//! The library side is usable on its own: build a
//! [`translation::TranslationOrchestrator`] with any
//! [`translation::Transport`] and a [`credential::CredentialStore`].

/// Interactive chat mode for translation sessions.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and CLI override resolution.
pub mod config;

/// Session-scoped API key handling.
pub mod credential;

/// File system utilities.
pub mod fs;

/// Bounded most-recent-first translation history.
pub mod history;

/// Input reading from files and stdin.
pub mod input;

/// XDG-style path utilities for configuration and session state.
pub mod paths;

/// Request building, transport, response normalization and orchestration.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
