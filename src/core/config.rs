//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars.
//!
//! Config lives at `~/.guidebook/config.toml` unless `--config` names
//! another file. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! Nothing here affects where reading starts: every session opens on the
//! first section with the sidebar shown.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GuidebookConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub sidebar_width: Option<u16>,
    pub code_theme: Option<String>,
    pub show_icons: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ExportConfig {
    pub wrap_width: Option<usize>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_SIDEBAR_WIDTH: u16 = 36;
pub const MIN_SIDEBAR_WIDTH: u16 = 20;
pub const MAX_SIDEBAR_WIDTH: u16 = 80;
pub const DEFAULT_CODE_THEME: &str = "base16-ocean.dark";
pub const DEFAULT_WRAP_WIDTH: usize = 80;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    pub sidebar_width: u16,
    pub code_theme: String,
    pub show_icons: bool,
    /// Paragraph wrap column for Markdown export; 0 leaves paragraphs unwrapped.
    pub wrap_width: usize,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_with(&GuidebookConfig::default(), |_| None)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.guidebook/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".guidebook").join("config.toml"))
}

/// Load config from `~/.guidebook/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `GuidebookConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<GuidebookConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(GuidebookConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(GuidebookConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path. A missing file is an error here.
pub fn load_config_from(path: &Path) -> Result<GuidebookConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: GuidebookConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Guidebook Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars.

# [general]
# log_level = "info"                 # "off", "error", "warn", "info", "debug", "trace"
#                                    # Or set GUIDEBOOK_LOG_LEVEL env var

# [display]
# sidebar_width = 36                 # Table of contents width in columns (20-80)
# code_theme = "base16-ocean.dark"   # Any syntect default theme
#                                    # Or set GUIDEBOOK_CODE_THEME env var
# show_icons = true

# [export]
# wrap_width = 80                    # Paragraph width for --dump markdown (0 = no wrap)
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars.
pub fn resolve(config: &GuidebookConfig) -> ResolvedConfig {
    resolve_with(config, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], with environment lookups going through `env`.
pub fn resolve_with<F>(config: &GuidebookConfig, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Log level: env → config → default
    let log_level = env("GUIDEBOOK_LOG_LEVEL")
        .or_else(|| config.general.log_level.clone())
        .map(|raw| match LevelFilter::from_str(raw.trim()) {
            Ok(level) => level,
            Err(_) => {
                warn!("Unknown log level {:?}, using {}", raw, DEFAULT_LOG_LEVEL);
                DEFAULT_LOG_LEVEL
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Code theme: env → config → default
    let code_theme = env("GUIDEBOOK_CODE_THEME")
        .or_else(|| config.display.code_theme.clone())
        .unwrap_or_else(|| DEFAULT_CODE_THEME.to_string());

    let sidebar_width = config
        .display
        .sidebar_width
        .unwrap_or(DEFAULT_SIDEBAR_WIDTH)
        .clamp(MIN_SIDEBAR_WIDTH, MAX_SIDEBAR_WIDTH);

    ResolvedConfig {
        log_level,
        sidebar_width,
        code_theme,
        show_icons: config.display.show_icons.unwrap_or(true),
        wrap_width: config.export.wrap_width.unwrap_or(DEFAULT_WRAP_WIDTH),
    }
}
