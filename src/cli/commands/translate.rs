use anyhow::Result;
use std::io::{self, Write};

use super::{build_orchestrator, open_credentials};
use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::input::InputReader;
use crate::ui::{self, Style};

pub struct TranslateOptions {
    pub file: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Translates a file or stdin once and prints the result to stdout.
///
/// Timing goes to stderr so the output can be piped.
pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;
    let config = resolve_config(
        &ResolveOptions {
            from: options.from,
            to: options.to,
        },
        &file_config,
    )?;

    let source_text = InputReader::read(options.file.as_deref())?;
    let trimmed = source_text.trim();
    ui::print_length_notice(trimmed.chars().count(), config.max_input_chars);

    let credentials = open_credentials(&config)?;
    let mut orchestrator = build_orchestrator(&config, credentials);

    let target = config.target.as_deref().unwrap_or_default();
    let spinner = ui::request_spinner("Translating...");
    let outcome = orchestrator
        .translate(trimmed, &config.source, target)
        .await;
    spinner.stop();
    let translated = outcome?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", translated.text)?;
    stdout.flush()?;

    eprintln!(
        "{}",
        Style::timing(format!("Completed in {:.1}s", translated.duration_secs()))
    );

    Ok(())
}
