//! Chat mode UI components.

use crate::credential::{CredentialStore, mask};
use crate::history::HistoryCache;
use crate::translation::language_name;
use crate::ui::Style;

use super::command::SLASH_COMMANDS;
use super::session::SessionConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(config: &SessionConfig) {
    println!(
        "{} {} - Interactive Translation Mode",
        Style::header("stl"),
        Style::version(format!("v{VERSION}"))
    );
    println!(
        "{}",
        Style::secondary(format!("{} → {}", source_label(config), target_label(config)))
    );
    println!();
}

pub fn print_missing_key_hint() {
    println!(
        "{} No API key set. Use {} to add one.\n",
        Style::warning("!"),
        Style::command("/key")
    );
}

/// The text shown before the input cursor, e.g. `en-IN→hi-IN`.
pub fn prompt_label(config: &SessionConfig) -> String {
    format!(
        "{}→{}",
        config.source,
        config.target.as_deref().unwrap_or("?")
    )
}

fn source_label(config: &SessionConfig) -> String {
    language_name(&config.source).to_string()
}

fn target_label(config: &SessionConfig) -> String {
    config
        .target
        .as_deref()
        .map_or_else(|| "(no target)".to_string(), |t| language_name(t).to_string())
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_config(config: &SessionConfig, credentials: &CredentialStore) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}       {} {}",
        Style::label("from"),
        Style::code(&config.source),
        Style::secondary(source_label(config))
    );
    println!(
        "  {}         {} {}",
        Style::label("to"),
        Style::code(config.target.as_deref().unwrap_or("-")),
        Style::secondary(target_label(config))
    );
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!(
        "  {}    {}",
        Style::label("api key"),
        credentials.current().map_or_else(
            || Style::secondary(format!("(not set, ${} or /key)", config.api_key_env)),
            |key| Style::value(mask(&key))
        )
    );
    println!();
}

pub fn print_history(history: &HistoryCache) {
    if history.is_empty() {
        println!("{}\n", Style::secondary("No translations yet"));
        return;
    }

    println!(
        "{} {}",
        Style::header("Recent translations"),
        Style::secondary(format!("({}/{})", history.len(), history.capacity()))
    );
    for (index, entry) in history.iter().enumerate() {
        println!(
            "  {} {} → {}  {}",
            Style::label(format!("{:>2}.", index + 1)),
            Style::value(language_name(entry.source())),
            Style::value(language_name(entry.target())),
            Style::timing(format!(
                "{} · {:.1}s",
                entry.created_at().format("%H:%M:%S"),
                entry.elapsed_secs()
            ))
        );
        println!("      {}", entry.original());
        println!("      {}", Style::success(entry.translated()));
    }
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    let width = SLASH_COMMANDS
        .iter()
        .map(|(cmd, _)| cmd.len())
        .max()
        .unwrap_or_default();
    for (cmd, desc) in SLASH_COMMANDS {
        println!(
            "  {}{}  {}",
            Style::command(cmd),
            " ".repeat(width - cmd.len()),
            Style::secondary(desc)
        );
    }
    println!();
}

pub fn print_error(message: &str) {
    crate::ui::print_error(message);
    eprintln!();
}
