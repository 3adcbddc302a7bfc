use anyhow::Result;
use inquire::InquireError;
use std::io::IsTerminal;

use crate::input::{LengthLevel, length_level};

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

/// True when the user dismissed a prompt with Escape or Ctrl+C.
pub const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Runs an interactive step, turning a prompt cancellation into `Ok(None)`.
///
/// A newline is printed on cancellation so the shell prompt starts on a
/// clean line. Any other error is passed through unchanged.
pub fn handle_prompt_cancellation<T, F>(f: F) -> Result<Option<T>>
where
    F: FnOnce() -> Result<T>,
{
    match f() {
        Ok(value) => Ok(Some(value)),
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            println!();
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Spinner for a request, drawn only when stderr is a terminal.
pub fn request_spinner(message: &str) -> Spinner {
    if std::io::stderr().is_terminal() {
        Spinner::new(message)
    } else {
        Spinner::hidden()
    }
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
}

pub fn print_warning(message: &str) {
    eprintln!("{} {message}", Style::warning("Warning:"));
}

/// Prints a character count notice once the input nears the limit.
pub fn print_length_notice(len: usize, max: usize) {
    let counter = format!("{len}/{max} characters");
    match length_level(len, max) {
        LengthLevel::Normal | LengthLevel::Over => {}
        LengthLevel::Warning => eprintln!("{}", Style::hint(counter)),
        LengthLevel::Danger => print_warning(&format!("{counter}, close to the limit")),
    }
}
