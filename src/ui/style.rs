//! Colour helpers for terminal output, built on owo-colors.

use owo_colors::OwoColorize;
use std::fmt::Display;

/// Semantic styles shared by the one-shot and chat front ends.
pub struct Style;

impl Style {
    /// Section headers ("Configuration", "Recent translations").
    pub fn header<T: Display>(text: T) -> String {
        format!("{}", text.bold())
    }

    /// Field labels in key/value listings.
    pub fn label<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }

    /// Primary values such as language names.
    pub fn value<T: Display>(text: T) -> String {
        format!("{}", text.cyan())
    }

    pub fn secondary<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }

    pub fn success<T: Display>(text: T) -> String {
        format!("{}", text.green())
    }

    pub fn error<T: Display>(text: T) -> String {
        format!("{}", text.red().bold())
    }

    pub fn warning<T: Display>(text: T) -> String {
        format!("{}", text.yellow())
    }

    /// Slash commands in chat help.
    pub fn command<T: Display>(text: T) -> String {
        format!("{}", text.green())
    }

    /// Language codes such as `hi-IN`.
    pub fn code<T: Display>(text: T) -> String {
        format!("{}", text.yellow())
    }

    pub fn hint<T: Display>(text: T) -> String {
        format!("{}", text.dimmed().italic())
    }

    /// Elapsed-time footers ("Completed in 1.2s").
    pub fn timing<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }

    pub fn version<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }
}
