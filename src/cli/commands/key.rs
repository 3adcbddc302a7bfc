//! `stl key`: save or inspect the session API key.

use anyhow::Result;
use inquire::{Password, PasswordDisplayMode};

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::credential::{CredentialStore, FileSessionStorage, MIN_CREDENTIAL_LEN, mask};
use crate::ui::{Style, handle_prompt_cancellation};

pub fn run_key(key: Option<String>, show: bool) -> Result<()> {
    let store = CredentialStore::new(FileSessionStorage::open_default()?);

    if show {
        print_key_status(&store)?;
        return Ok(());
    }

    let raw = match key {
        Some(key) => key,
        None => match handle_prompt_cancellation(prompt_key)? {
            Some(key) => key,
            None => return Ok(()),
        },
    };

    store.save(&raw)?;
    println!("{} API key saved for this session", Style::success("✓"));
    Ok(())
}

fn prompt_key() -> Result<String> {
    let key = Password::new("Sarvam API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_help_message(&format!("At least {MIN_CREDENTIAL_LEN} characters"))
        .prompt()?;
    Ok(key)
}

fn print_key_status(store: &CredentialStore) -> Result<()> {
    match store.load() {
        Some(key) => println!("{}  {}", Style::label("session key"), Style::value(mask(&key))),
        None => println!(
            "{}  {}",
            Style::label("session key"),
            Style::secondary("(not set)")
        ),
    }

    let config = resolve_config(
        &ResolveOptions::default(),
        &ConfigManager::new()?.load_or_default()?,
    )?;
    if let Some(key) = config.env_api_key() {
        println!(
            "{}  {} {}",
            Style::label(format!("${}", config.api_key_env)),
            Style::value(mask(&key)),
            Style::hint("(takes priority)")
        );
    }
    Ok(())
}
