use inquire::autocompletion::{Autocomplete, Replacement};

// (command, description), in the order shown by /help and autocomplete.
pub const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/from", "Set the source language (or 'auto')"),
    ("/to", "Set the target language"),
    ("/swap", "Swap source and target languages"),
    ("/history", "Show recent translations"),
    ("/clear", "Clear translation history"),
    ("/reset", "Discard the current translation"),
    ("/key", "Save an API key for this session"),
    ("/languages", "List supported language codes"),
    ("/config", "Show current settings"),
    ("/help", "Show available commands"),
    ("/quit", "Exit chat mode"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') || input.contains(char::is_whitespace) {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement = highlighted_suggestion
            .map(|s| s.split_whitespace().next().unwrap_or("").to_string() + " ");
        Ok(replacement)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    From(Option<String>),
    To(Option<String>),
    Swap,
    History,
    Clear,
    Reset,
    Key(Option<String>),
    Languages,
    Config,
    Help,
    Quit,
    Unknown(String),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    input
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let mut parts = cmd.split_whitespace();
    let name = parts.next();
    let arg = parts.next().map(str::to_string);

    let command = match name {
        Some("from") => SlashCommand::From(arg),
        Some("to") => SlashCommand::To(arg),
        Some("swap") => SlashCommand::Swap,
        Some("history") => SlashCommand::History,
        Some("clear") => SlashCommand::Clear,
        Some("reset") => SlashCommand::Reset,
        Some("key") => SlashCommand::Key(arg),
        Some("languages" | "langs") => SlashCommand::Languages,
        Some("config") => SlashCommand::Config,
        Some("help") => SlashCommand::Help,
        Some("quit" | "exit" | "q") => SlashCommand::Quit,
        _ => SlashCommand::Unknown(cmd.split_whitespace().collect::<Vec<_>>().join(" ")),
    };
    Input::Command(command)
}
