//! Configure command handler for editing default settings.

use anyhow::Result;
use inquire::Select;

use crate::config::{ConfigFile, ConfigManager, DefaultsConfig, ResolveOptions, resolve_config};
use crate::translation::{AUTO_DETECT, SUPPORTED_LANGUAGES, language_name};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the effective configuration. Otherwise asks for the
/// default source and target languages and writes them to the config file,
/// leaving the `[api]` section untouched.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default()?;

    if show {
        return print_config(&manager, &config);
    }

    handle_prompt_cancellation(|| edit_defaults(&manager, config))?;
    Ok(())
}

fn edit_defaults(manager: &ConfigManager, mut config: ConfigFile) -> Result<()> {
    print_current_defaults(&config);

    let from = select_language(
        "Default source language:",
        true,
        config.defaults.from.as_deref(),
    )?;
    let to = select_language(
        "Default target language:",
        false,
        config.defaults.to.as_deref(),
    )?;

    config.defaults = DefaultsConfig {
        from: Some(from),
        to: Some(to),
    };
    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );
    Ok(())
}

fn describe(code: Option<&str>) -> String {
    code.map_or_else(
        || Style::secondary("(not set)"),
        |c| format!("{} {}", Style::code(c), Style::secondary(language_name(c))),
    )
}

fn print_current_defaults(config: &ConfigFile) {
    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}  {}",
        Style::label("from"),
        describe(config.defaults.from.as_deref())
    );
    println!(
        "  {}    {}",
        Style::label("to"),
        describe(config.defaults.to.as_deref())
    );
    println!();
}

fn print_config(manager: &ConfigManager, config: &ConfigFile) -> Result<()> {
    let resolved = resolve_config(&ResolveOptions::default(), config)?;

    println!(
        "{} {}",
        Style::header("Configuration"),
        Style::secondary(manager.config_path().display().to_string())
    );
    println!(
        "  {}             {}",
        Style::label("from"),
        describe(Some(&resolved.source))
    );
    println!(
        "  {}               {}",
        Style::label("to"),
        describe(resolved.target.as_deref())
    );
    println!(
        "  {}         {}",
        Style::label("endpoint"),
        Style::secondary(&resolved.endpoint)
    );
    println!(
        "  {}      {}",
        Style::label("api_key_env"),
        Style::value(&resolved.api_key_env)
    );
    println!(
        "  {}  {}",
        Style::label("max_input_chars"),
        Style::value(resolved.max_input_chars)
    );
    Ok(())
}

fn language_options(include_auto: bool) -> Vec<String> {
    let auto = include_auto.then(|| format!("{AUTO_DETECT} - {}", language_name(AUTO_DETECT)));
    auto.into_iter()
        .chain(
            SUPPORTED_LANGUAGES
                .iter()
                .map(|(code, name)| format!("{code} - {name}")),
        )
        .collect()
}

fn select_language(message: &str, include_auto: bool, default: Option<&str>) -> Result<String> {
    let options = language_options(include_auto);
    let default_index = default
        .and_then(|d| {
            options
                .iter()
                .position(|o| o.split(" - ").next() == Some(d))
        })
        .unwrap_or(0);

    let selection = Select::new(message, options)
        .with_starting_cursor(default_index)
        .prompt()?;

    let code = selection.split(" - ").next().unwrap_or(&selection);
    Ok(code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_options_source_starts_with_auto() {
        let options = language_options(true);
        assert_eq!(options.len(), SUPPORTED_LANGUAGES.len() + 1);
        assert_eq!(options[0], "auto - Auto-detect");
    }

    #[test]
    fn test_language_options_target_has_no_auto() {
        let options = language_options(false);
        assert_eq!(options.len(), SUPPORTED_LANGUAGES.len());
        assert!(options.iter().all(|o| !o.starts_with("auto")));
        assert!(options.contains(&"hi-IN - Hindi".to_string()));
    }
}
