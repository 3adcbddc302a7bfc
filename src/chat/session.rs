use anyhow::Result;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use inquire::{Password, PasswordDisplayMode, Text};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::translation::{
    Transport, TranslationOrchestrator, language_name, print_languages, swap_languages,
    validate_source, validate_target,
};
use crate::ui::{Style, handle_prompt_cancellation, print_length_notice, request_spinner};

/// Settings a chat session starts with and can change through slash commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub source: String,
    pub target: Option<String>,
    pub endpoint: String,
    pub api_key_env: String,
}

/// An interactive chat session for translation.
pub struct ChatSession<T> {
    config: SessionConfig,
    orchestrator: TranslationOrchestrator<T>,
    // Input that produced the current translation, kept for /swap.
    last_input: Option<String>,
}

impl<T: Transport> ChatSession<T> {
    pub const fn new(config: SessionConfig, orchestrator: TranslationOrchestrator<T>) -> Self {
        Self {
            config,
            orchestrator,
            last_input: None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(&self.config);
        if !self.orchestrator.credentials().is_set() {
            ui::print_missing_key_hint();
        }

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let prompt_label = ui::prompt_label(&self.config);
            let input = Text::new(&prompt_label)
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Type text to translate, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd)? {
                            break;
                        }
                    }
                    Input::Text(text) => self.translate_and_print(&text).await,
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!();
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Applies a slash command. Returns `false` when the session should end.
    pub fn handle_command(&mut self, cmd: SlashCommand) -> Result<bool> {
        match cmd {
            SlashCommand::From(code) => self.set_source(code.as_deref()),
            SlashCommand::To(code) => self.set_target(code.as_deref()),
            SlashCommand::Swap => self.swap(),
            SlashCommand::History => ui::print_history(self.orchestrator.history()),
            SlashCommand::Clear => {
                self.orchestrator.history_mut().clear();
                println!("{} History cleared\n", Style::success("✓"));
            }
            SlashCommand::Reset => {
                self.orchestrator.clear_current();
                self.last_input = None;
                println!("{} Current translation discarded\n", Style::success("✓"));
            }
            SlashCommand::Key(key) => self.save_key(key)?,
            SlashCommand::Languages => {
                print_languages();
                println!();
            }
            SlashCommand::Config => {
                ui::print_config(&self.config, self.orchestrator.credentials());
            }
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Quit => return Ok(false),
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
            }
        }
        Ok(true)
    }

    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub const fn orchestrator(&self) -> &TranslationOrchestrator<T> {
        &self.orchestrator
    }

    pub fn last_input(&self) -> Option<&str> {
        self.last_input.as_deref()
    }

    fn set_source(&mut self, code: Option<&str>) {
        let Some(code) = code else {
            ui::print_error("Usage: /from <code>  (see /languages)");
            return;
        };
        if let Err(e) = validate_source(code) {
            ui::print_error(&e.to_string());
            return;
        }
        self.config.source = code.to_string();
        println!(
            "{} Source language set to {}\n",
            Style::success("✓"),
            Style::value(language_name(code))
        );
    }

    fn set_target(&mut self, code: Option<&str>) {
        let Some(code) = code else {
            ui::print_error("Usage: /to <code>  (see /languages)");
            return;
        };
        if let Err(e) = validate_target(code) {
            ui::print_error(&e.to_string());
            return;
        }
        self.config.target = Some(code.to_string());
        println!(
            "{} Target language set to {}\n",
            Style::success("✓"),
            Style::value(language_name(code))
        );
    }

    fn swap(&mut self) {
        let Some(target) = self.config.target.as_deref() else {
            ui::print_error("Please select a target language");
            return;
        };

        let (source, target) = match swap_languages(&self.config.source, target) {
            Ok(pair) => pair,
            Err(e) => {
                ui::print_error(&e.to_string());
                return;
            }
        };
        self.config.source = source;
        self.config.target = Some(target);

        if let Some(input) = self.last_input.take() {
            self.last_input = self.orchestrator.swap_with_current(&input);
        }

        println!(
            "{} Now translating {} → {}",
            Style::success("✓"),
            Style::value(language_name(&self.config.source)),
            Style::value(language_name(self.config.target.as_deref().unwrap_or_default()))
        );
        if let Some(input) = &self.last_input {
            println!("  {} {}", Style::label("input"), input);
        }
        println!();
    }

    fn save_key(&mut self, key: Option<String>) -> Result<()> {
        let raw = match key {
            Some(key) => key,
            None => {
                let prompted = handle_prompt_cancellation(|| {
                    Ok(Password::new("Sarvam API key:")
                        .with_display_mode(PasswordDisplayMode::Masked)
                        .without_confirmation()
                        .prompt()?)
                })?;
                let Some(key) = prompted else {
                    return Ok(());
                };
                key
            }
        };

        match self.orchestrator.credentials().save(&raw) {
            Ok(()) => println!("{} API key saved for this session\n", Style::success("✓")),
            Err(e) => ui::print_error(&e.to_string()),
        }
        Ok(())
    }

    /// Translates one line of input; failures are reported, never fatal.
    pub async fn translate_and_print(&mut self, text: &str) {
        print_length_notice(text.chars().count(), self.orchestrator.max_chars());

        let target = self.config.target.clone().unwrap_or_default();
        let spinner = request_spinner("Translating...");
        let outcome = self
            .orchestrator
            .translate(text, &self.config.source, &target)
            .await;
        spinner.stop();

        match outcome {
            Ok(translated) => {
                self.last_input = Some(text.trim().to_string());
                println!("{}", translated.text);
                println!(
                    "{}\n",
                    Style::timing(format!("Completed in {:.1}s", translated.duration_secs()))
                );
            }
            Err(e) => ui::print_error(&e.to_string()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::credential::CredentialStore;
    use crate::translation::{TranslatePayload, TransportError};
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::sync::Arc;

    struct EchoTransport;

    #[async_trait]
    impl Transport for EchoTransport {
        async fn send(
            &self,
            _credential: &str,
            payload: &TranslatePayload<'_>,
        ) -> Result<Value, TransportError> {
            Ok(json!({ "translated_text": format!("[{}] {}", payload.target_language_code, payload.input) }))
        }
    }

    fn session(source: &str, target: Option<&str>) -> ChatSession<EchoTransport> {
        let credentials = Arc::new(CredentialStore::in_memory());
        credentials.hold("validkey123").unwrap();
        let config = SessionConfig {
            source: source.to_string(),
            target: target.map(str::to_string),
            endpoint: "http://localhost".to_string(),
            api_key_env: "SARVAM_API_KEY".to_string(),
        };
        ChatSession::new(config, TranslationOrchestrator::new(EchoTransport, credentials))
    }

    #[test]
    fn test_to_command_sets_valid_target() {
        let mut session = session("en-IN", None);
        assert!(session.handle_command(SlashCommand::To(Some("ta-IN".to_string()))).unwrap());
        assert_eq!(session.config().target.as_deref(), Some("ta-IN"));
    }

    #[test]
    fn test_invalid_codes_leave_languages_unchanged() {
        let mut session = session("en-IN", Some("hi-IN"));
        session.handle_command(SlashCommand::To(Some("auto".to_string()))).unwrap();
        session.handle_command(SlashCommand::From(Some("xx".to_string()))).unwrap();
        assert_eq!(session.config().source, "en-IN");
        assert_eq!(session.config().target.as_deref(), Some("hi-IN"));
    }

    #[test]
    fn test_swap_rejected_for_auto_source() {
        let mut session = session("auto", Some("hi-IN"));
        session.handle_command(SlashCommand::Swap).unwrap();
        assert_eq!(session.config().source, "auto");
        assert_eq!(session.config().target.as_deref(), Some("hi-IN"));
    }

    #[tokio::test]
    async fn test_swap_exchanges_languages_and_texts() {
        let mut session = session("en-IN", Some("hi-IN"));
        session.translate_and_print("Hello").await;
        assert_eq!(session.orchestrator().current(), Some("[hi-IN] Hello"));

        session.handle_command(SlashCommand::Swap).unwrap();

        assert_eq!(session.config().source, "hi-IN");
        assert_eq!(session.config().target.as_deref(), Some("en-IN"));
        assert_eq!(session.last_input(), Some("[hi-IN] Hello"));
        assert_eq!(session.orchestrator().current(), Some("Hello"));
    }

    #[tokio::test]
    async fn test_swap_puts_back_trimmed_input() {
        let mut session = session("en-IN", Some("hi-IN"));
        session.translate_and_print("  Hello \n").await;
        assert_eq!(session.last_input(), Some("Hello"));

        session.handle_command(SlashCommand::Swap).unwrap();

        assert_eq!(session.orchestrator().current(), Some("Hello"));
        assert_eq!(session.last_input(), Some("[hi-IN] Hello"));
    }

    #[tokio::test]
    async fn test_clear_and_reset() {
        let mut session = session("en-IN", Some("hi-IN"));
        session.translate_and_print("Hello").await;
        assert_eq!(session.orchestrator().history().len(), 1);

        session.handle_command(SlashCommand::Clear).unwrap();
        assert!(session.orchestrator().history().is_empty());
        assert!(session.orchestrator().current().is_some());

        session.handle_command(SlashCommand::Reset).unwrap();
        assert!(session.orchestrator().current().is_none());
        assert!(session.last_input().is_none());
    }

    #[tokio::test]
    async fn test_failed_translation_keeps_session_state() {
        let mut session = session("en-IN", None);
        session.translate_and_print("Hello").await;
        assert!(session.orchestrator().current().is_none());
        assert!(session.orchestrator().history().is_empty());
    }

    #[test]
    fn test_key_command_rejects_short_key_without_error() {
        let mut session = session("en-IN", Some("hi-IN"));
        assert!(session.handle_command(SlashCommand::Key(Some("short".to_string()))).unwrap());
        assert_eq!(
            session.orchestrator().credentials().current().as_deref(),
            Some("validkey123")
        );
    }

    #[test]
    fn test_quit_ends_session() {
        let mut session = session("en-IN", Some("hi-IN"));
        assert!(!session.handle_command(SlashCommand::Quit).unwrap());
    }
}
