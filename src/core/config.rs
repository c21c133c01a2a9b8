//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.chef/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::core::record::MAX_NAME_LEN;
use crate::core::store::DEFAULT_BUSY_TIMEOUT;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ChefConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub editor: EditorConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    pub path: Option<String>,
    pub busy_timeout_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EditorConfig {
    pub max_input_len: Option<usize>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "chef.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const DEFAULT_DB_FILE: &str = "chef.db";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub db_path: PathBuf,
    pub busy_timeout: Duration,
    pub max_input_len: usize,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.chef`, if a home directory exists.
pub fn chef_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".chef"))
}

/// Returns the path to `~/.chef/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    chef_dir().map(|d| d.join("config.toml"))
}

/// Where the file config came from. Loading runs before the logger exists,
/// so the caller logs this once logging is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Generated(PathBuf),
    /// The template could not be written; defaults are used.
    TemplateFailed { path: PathBuf, reason: String },
    NoHome,
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => info!("Loaded config from {}", path.display()),
            ConfigSource::Generated(path) => {
                info!("No config file found, generated default at {}", path.display())
            }
            ConfigSource::TemplateFailed { path, reason } => {
                warn!("Failed to write default config to {}: {}", path.display(), reason)
            }
            ConfigSource::NoHome => warn!("Could not determine home directory, using default config"),
        }
    }
}

/// Load config from `~/.chef/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ChefConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<(ChefConfig, ConfigSource), ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok((ChefConfig::default(), ConfigSource::NoHome)),
    }
}

pub fn load_config_from(path: &Path) -> Result<(ChefConfig, ConfigSource), ConfigError> {
    if !path.exists() {
        let source = match generate_default_config(path) {
            Ok(()) => ConfigSource::Generated(path.to_path_buf()),
            Err(e) => ConfigSource::TemplateFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        };
        return Ok((ChefConfig::default(), source));
    }

    let contents = fs::read_to_string(path)?;
    let config: ChefConfig = toml::from_str(&contents)?;
    Ok((config, ConfigSource::File(path.to_path_buf())))
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# Chef Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_file = "chef.log"              # Or set CHEF_LOG_FILE env var
# log_level = "debug"                # "error", "warn", "info", "debug", "trace", "off"

# [store]
# path = "~/.chef/chef.db"           # Or set CHEF_DB_PATH env var, or pass --db
# busy_timeout_ms = 5000             # How long a store call may wait on a locked database

# [editor]
# max_input_len = 156                # Longest item name the input accepts
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_db` is the `--db` flag (None = not specified).
pub fn resolve(config: &ChefConfig, cli_db: Option<&Path>) -> ResolvedConfig {
    resolve_with_env(config, cli_db, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &ChefConfig,
    cli_db: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Database: CLI → env → config → ~/.chef/chef.db → ./chef.db
    let db_path = cli_db
        .map(Path::to_path_buf)
        .or_else(|| env("CHEF_DB_PATH").map(|p| expand_home(&p)))
        .or_else(|| config.store.path.as_deref().map(expand_home))
        .or_else(|| chef_dir().map(|d| d.join(DEFAULT_DB_FILE)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE));

    let busy_timeout = config
        .store
        .busy_timeout_ms
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_BUSY_TIMEOUT);

    let max_input_len = config
        .editor
        .max_input_len
        .unwrap_or(MAX_NAME_LEN)
        .clamp(1, MAX_NAME_LEN);

    // Log file: env → config → default
    let log_file = env("CHEF_LOG_FILE")
        .or_else(|| config.general.log_file.clone())
        .map(|p| expand_home(&p))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    // Log level: env → config → default; unknown names fall back to the default
    let log_level = env("CHEF_LOG_LEVEL")
        .or_else(|| config.general.log_level.clone())
        .and_then(|level| LevelFilter::from_str(&level).ok())
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        db_path,
        busy_timeout,
        max_input_len,
        log_file,
        log_level,
    }
}

/// Expands a leading `~` to the home directory. Other paths pass through.
fn expand_home(raw: &str) -> PathBuf {
    let rest = match raw.strip_prefix('~') {
        Some("") => "",
        Some(rest) if rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return PathBuf::from(raw),
    };
    dirs::home_dir()
        .map(|home| home.join(rest))
        .unwrap_or_else(|| PathBuf::from(raw))
}
