use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::consts::{API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use crate::error::AppError;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) api_key: Option<String>,
    #[serde(default)]
    pub(crate) model: Option<String>,
    #[serde(default)]
    pub(crate) endpoint: Option<String>,
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .field("no_color", &self.no_color)
            .field("debug", &self.debug)
            .field("color", &self.color)
            .finish()
    }
}

impl Config {
    pub(crate) fn load() -> Self {
        Self::get_config_paths()
            .iter()
            .find_map(|path| Self::load_from(path))
            .unwrap_or_default()
    }

    /// Parse one config file; missing or invalid files yield `None`
    pub(crate) fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        let content = fs::read_to_string(path).ok()?;
        match toml::from_str::<Config>(&content) {
            Ok(config) => {
                if config.debug {
                    eprintln!("[debug] Loaded config from {}", path.display());
                }
                Some(config)
            }
            Err(e) => {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                None
            }
        }
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/token-explainer/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("token-explainer").join("config.toml"));
        }

        // 2. Platform config dir (macOS Application Support, Windows AppData)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("token-explainer").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.token-explainer.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".token-explainer.toml"));
        }

        paths
    }

    /// API key from the environment, else the config file.
    ///
    /// Blank values count as missing.
    pub(crate) fn resolve_api_key(&self, env_value: Option<String>) -> Result<String, AppError> {
        env_value
            .filter(|k| !k.trim().is_empty())
            .or_else(|| self.api_key.clone().filter(|k| !k.trim().is_empty()))
            .map(|k| k.trim().to_string())
            .ok_or(AppError::MissingApiKey)
    }

    pub(crate) fn api_key_from_env(&self) -> Result<String, AppError> {
        self.resolve_api_key(std::env::var(API_KEY_ENV).ok())
    }

    pub(crate) fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    pub(crate) fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    /// Request timeout; zero falls back to the default
    pub(crate) fn timeout(&self) -> Duration {
        match self.timeout_secs {
            Some(0) => {
                eprintln!("Warning: timeout_secs = 0 is not usable, using {DEFAULT_TIMEOUT_SECS}s");
                Duration::from_secs(DEFAULT_TIMEOUT_SECS)
            }
            Some(secs) => Duration::from_secs(secs),
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
