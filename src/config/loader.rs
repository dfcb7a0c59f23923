//! Configuration file loading with precedence handling.

use crate::model::PageSize;
use crate::source::pixabay::DEFAULT_API_BASE_URL;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A value is syntactically valid but out of range.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Config key that was rejected.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/pixsearch/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Pixabay API key.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Search endpoint, for proxies or test servers.
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// Results per page (3..=200).
    #[serde(default)]
    pub page_size: Option<u32>,

    /// HTTP request timeout in seconds.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Pixabay image type filter ("all", "photo", "illustration", "vector").
    #[serde(default)]
    pub image_type: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Pixabay API key. `None` until some source provides one.
    pub api_key: Option<String>,
    /// Search endpoint.
    pub api_base_url: String,
    /// Results per page.
    pub page_size: PageSize,
    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Image type filter.
    pub image_type: String,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

// Manual impl keeps the API key out of logs
impl std::fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_base_url", &self.api_base_url)
            .field("page_size", &self.page_size.get())
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("image_type", &self.image_type)
            .field("log_file_path", &self.log_file_path)
            .finish()
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: PageSize::DEFAULT,
            request_timeout_secs: 15,
            image_type: "photo".to_string(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/pixsearch/pixsearch.log` on Linux,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("pixsearch").join("pixsearch.log")
    } else {
        PathBuf::from("pixsearch.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/pixsearch/config.toml` on Linux, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pixsearch").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `PIXSEARCH_CONFIG` environment variable
/// 3. Default path `~/.config/pixsearch/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("PIXSEARCH_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for an out-of-range page size or a
/// zero request timeout.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let page_size = match config.page_size {
        Some(raw) => parse_page_size(raw)?,
        None => defaults.page_size,
    };

    let request_timeout_secs = match config.request_timeout_secs {
        Some(0) => {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_secs",
                reason: "timeout must be at least 1 second".to_string(),
            })
        }
        Some(secs) => secs,
        None => defaults.request_timeout_secs,
    };

    Ok(ResolvedConfig {
        api_key: config.api_key.or(defaults.api_key),
        api_base_url: config.api_base_url.unwrap_or(defaults.api_base_url),
        page_size,
        request_timeout_secs,
        image_type: config.image_type.unwrap_or(defaults.image_type),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

fn parse_page_size(raw: u32) -> Result<PageSize, ConfigError> {
    PageSize::new(raw).map_err(|e| ConfigError::InvalidValue {
        field: "page_size",
        reason: e.to_string(),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `PIXSEARCH_API_KEY`: Override API key
/// - `PIXSEARCH_PAGE_SIZE`: Override page size
///
/// Invalid values are skipped and returned alongside the config so the
/// caller can report them once logging is up.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> (ResolvedConfig, Vec<ConfigError>) {
    let mut rejected = Vec::new();

    if let Ok(key) = std::env::var("PIXSEARCH_API_KEY") {
        if !key.trim().is_empty() {
            config.api_key = Some(key.trim().to_string());
        }
    }

    if let Ok(raw) = std::env::var("PIXSEARCH_PAGE_SIZE") {
        match raw.trim().parse::<u32>().map_err(|e| e.to_string()).and_then(|n| {
            PageSize::new(n).map_err(|e| e.to_string())
        }) {
            Ok(page_size) => config.page_size = page_size,
            Err(reason) => rejected.push(ConfigError::InvalidValue {
                field: "PIXSEARCH_PAGE_SIZE",
                reason: format!("{raw:?}: {reason}"),
            }),
        }
    }

    (config, rejected)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    api_key_override: Option<String>,
    page_size_override: Option<PageSize>,
) -> ResolvedConfig {
    if let Some(key) = api_key_override {
        config.api_key = Some(key);
    }

    if let Some(page_size) = page_size_override {
        config.page_size = page_size;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
