//! Language catalog, validation and swapping.

use anyhow::Result;
use thiserror::Error;

use crate::ui::Style;

/// Sentinel source code asking the provider to guess the source language.
pub const AUTO_DETECT: &str = "auto";

/// Locale sent in place of [`AUTO_DETECT`]; the provider has no detect field.
pub const DEFAULT_SOURCE_LOCALE: &str = "en-IN";

/// Supported language codes (BCP-47 with the `IN` region) and their names.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("en-IN", "English"),
    ("hi-IN", "Hindi"),
    ("bn-IN", "Bengali"),
    ("ta-IN", "Tamil"),
    ("te-IN", "Telugu"),
    ("mr-IN", "Marathi"),
    ("gu-IN", "Gujarati"),
    ("kn-IN", "Kannada"),
    ("ml-IN", "Malayalam"),
    ("pa-IN", "Punjabi"),
    ("od-IN", "Odia"),
    ("as-IN", "Assamese"),
    ("ur-IN", "Urdu"),
    ("sa-IN", "Sanskrit"),
    ("ne-IN", "Nepali"),
    ("ks-IN", "Kashmiri"),
    ("kok-IN", "Konkani"),
    ("mni-IN", "Manipuri"),
    ("brx-IN", "Bodo"),
    ("doi-IN", "Dogri"),
    ("mai-IN", "Maithili"),
    ("sat-IN", "Santali"),
    ("sd-IN", "Sindhi"),
];

/// Returns `true` if `code` is in the catalog. `auto` is not.
pub fn is_supported(code: &str) -> bool {
    SUPPORTED_LANGUAGES.iter().any(|(c, _)| *c == code)
}

/// Display name for a code, falling back to the code itself.
pub fn language_name(code: &str) -> &str {
    if code == AUTO_DETECT {
        return "Auto-detect";
    }
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(code, |(_, name)| name)
}

/// Prints all supported language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported language codes"));
    println!(
        "  {:7} {}",
        Style::code(AUTO_DETECT),
        Style::secondary("Auto-detect (source only)")
    );
    for (code, name) in SUPPORTED_LANGUAGES {
        println!("  {:7} {}", Style::code(code), Style::secondary(name));
    }
}

/// Validates a code used as the source language. Accepts `auto`.
///
/// # Errors
///
/// Returns an error if the language code is not in the supported list.
pub fn validate_source(lang: &str) -> Result<()> {
    if lang == AUTO_DETECT || is_supported(lang) {
        Ok(())
    } else {
        invalid_code(lang)
    }
}

/// Validates a code used as the target language. Rejects `auto`.
///
/// # Errors
///
/// Returns an error if the language code is `auto` or not in the supported list.
pub fn validate_target(lang: &str) -> Result<()> {
    if lang == AUTO_DETECT {
        anyhow::bail!("'auto' can only be used as a source language");
    }
    if is_supported(lang) {
        Ok(())
    } else {
        invalid_code(lang)
    }
}

fn invalid_code(lang: &str) -> Result<()> {
    anyhow::bail!(
        "Invalid language code: '{lang}'\n\n\
         Valid language codes: en-IN, hi-IN, bn-IN, ta-IN, te-IN, ...\n\
         Run 'stl languages' to see all supported codes."
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwapError {
    #[error("Cannot swap languages when using auto-detect")]
    AutoDetectSource,
}

/// Swaps source and target, returning `(new_source, new_target)`.
///
/// Fails when the source is the auto-detect sentinel, since `auto`
/// would end up as the target.
pub fn swap_languages(source: &str, target: &str) -> Result<(String, String), SwapError> {
    if source == AUTO_DETECT {
        return Err(SwapError::AutoDetectSource);
    }
    Ok((target.to_string(), source.to_string()))
}
