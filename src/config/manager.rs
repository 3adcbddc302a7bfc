use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;
use crate::translation::{AUTO_DETECT, DEFAULT_ENDPOINT, DEFAULT_MAX_INPUT_CHARS};

/// Default environment variable consulted for the API key.
pub const DEFAULT_API_KEY_ENV: &str = "SARVAM_API_KEY";

/// Default languages in the `[defaults]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default source language code (`auto` allowed).
    pub from: Option<String>,
    /// Default target language code.
    pub to: Option<String>,
}

/// Provider settings in the `[api]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Translate endpoint URL.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// Maximum input length in characters.
    #[serde(default)]
    pub max_input_chars: Option<usize>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/sarvam-tl/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub source: String,
    /// `None` is reported by the orchestrator as a missing target.
    pub target: Option<String>,
    pub api_key_env: String,
    pub max_input_chars: usize,
}

impl ResolvedConfig {
    /// The API key from the configured environment variable, if set and non-blank.
    pub fn env_api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Resolves configuration: CLI options, then config file, then built-in defaults.
///
/// # Errors
///
/// Returns an error if the configured values are unusable.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let source = options
        .from
        .as_ref()
        .or(config_file.defaults.from.as_ref())
        .cloned()
        .unwrap_or_else(|| AUTO_DETECT.to_string());

    let target = options
        .to
        .as_ref()
        .or(config_file.defaults.to.as_ref())
        .cloned();

    let endpoint = config_file
        .api
        .endpoint
        .clone()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        bail!(
            "Invalid endpoint in config file: '{endpoint}'\n\n\
             The endpoint must be an http:// or https:// URL."
        );
    }

    let max_input_chars = config_file
        .api
        .max_input_chars
        .unwrap_or(DEFAULT_MAX_INPUT_CHARS);

    if max_input_chars == 0 {
        bail!("Invalid config: 'max_input_chars' must be greater than zero");
    }

    let api_key_env = config_file
        .api
        .api_key_env
        .clone()
        .unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string());

    Ok(ResolvedConfig {
        endpoint,
        source,
        target,
        api_key_env,
        max_input_chars,
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/sarvam-tl/config.toml`
    /// or `~/.config/sarvam-tl/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the config file, falling back to defaults when it is missing.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
            Ok(ConfigFile::default())
        }
    }
}
