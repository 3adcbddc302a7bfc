use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

// Hard ceiling on raw bytes read, well above any accepted character limit.
const MAX_READ_BYTES: u64 = 256 * 1024;

/// Reads source text from a file or standard input.
pub struct InputReader;

impl InputReader {
    pub fn read(file_path: Option<&str>) -> Result<String> {
        file_path.map_or_else(Self::read_stdin, |path| Self::read_file(Path::new(path)))
    }

    fn read_file(path: &Path) -> Result<String> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to access file: {}", path.display()))?;

        if metadata.len() > MAX_READ_BYTES {
            bail!(
                "Input file is too large ({} KB).\n\n\
                 The translation service accepts short passages only.",
                metadata.len() / 1024
            );
        }

        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    fn read_stdin() -> Result<String> {
        let mut buffer = Vec::new();
        io::stdin()
            .lock()
            .take(MAX_READ_BYTES + 1)
            .read_to_end(&mut buffer)
            .context("Failed to read from stdin")?;

        if buffer.len() as u64 > MAX_READ_BYTES {
            bail!("Input from stdin is too large.\n\nThe translation service accepts short passages only.");
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}

/// How close an input is to the character limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LengthLevel {
    Normal,
    /// More than 80% of the limit.
    Warning,
    /// More than 90% of the limit.
    Danger,
    Over,
}

/// Classifies `len` characters against `max`.
pub const fn length_level(len: usize, max: usize) -> LengthLevel {
    if len > max {
        LengthLevel::Over
    } else if above_tenths(len, max, 9) {
        LengthLevel::Danger
    } else if above_tenths(len, max, 8) {
        LengthLevel::Warning
    } else {
        LengthLevel::Normal
    }
}

/// `len > max * tenths / 10`, widened so large limits cannot overflow.
const fn above_tenths(len: usize, max: usize, tenths: u128) -> bool {
    len as u128 * 10 > max as u128 * tenths
}
