//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/nodetree/nodetree.toml`
//! 3. Explicit config file: `--config <FILE>` (must exist)
//! 4. Environment variables: `NODETREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::application::{ApplicationError, IoResultExt, RenderStyle};

/// Unified configuration for nodetree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Render style used when none is given on the command line
    pub style: RenderStyle,
    /// Spaces per depth level for the outline style
    pub indent: usize,
    /// Colorize terminal output
    pub color: bool,
}

/// Largest accepted `indent`; larger values are clamped.
pub const MAX_INDENT: usize = 16;

impl Default for Settings {
    fn default() -> Self {
        Self {
            style: RenderStyle::Plain,
            indent: 2,
            color: true,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawSettings {
    pub style: Option<RenderStyle>,
    pub indent: Option<usize>,
    pub color: Option<bool>,
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// Get the XDG config directory for nodetree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "nodetree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("nodetree.toml"))
}

/// Expand `~`, `$VAR` and `${VAR}` in a user-supplied path.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

fn clamp_indent(indent: usize) -> usize {
    if indent > MAX_INDENT {
        warn!("indent {} exceeds maximum, using {}", indent, MAX_INDENT);
    }
    indent.min(MAX_INDENT)
}

/// Parse a boolean env value: `true`/`false`/`1`/`0`/`yes`/`no`, case-insensitive.
fn parse_bool(key: &str, val: &str) -> Result<bool, ApplicationError> {
    match val.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ApplicationError::Config {
            message: format!("{} must be a boolean (true/false/1/0), got '{}'", key, val),
        }),
    }
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).with_path_context("read config", path)?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay config onto self: specified values win, everything else is kept.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            style: overlay.style.unwrap_or(self.style),
            indent: overlay.indent.map(clamp_indent).unwrap_or(self.indent),
            color: overlay.color.unwrap_or(self.color),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file (`--config`); it must exist
    ///
    /// See the module docs for precedence.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_layers(global_config_path().as_deref(), config_file)
    }

    /// Load settings from explicit layers.
    ///
    /// A missing global file is skipped; a missing explicit file is an error.
    #[instrument(level = "debug")]
    pub fn load_layers(
        global: Option<&Path>,
        config_file: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config, if present
        if let Some(global_path) = global {
            if global_path.exists() {
                debug!("Loading global config: {}", global_path.display());
                let raw = load_raw_settings(global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Explicit config file
        if let Some(path) = config_file {
            let path = expand_path(path);
            debug!("Loading config file: {}", path.display());
            let raw = load_raw_settings(&path)?;
            current = current.merge_with(&raw);
        }

        // 4. Environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        Ok(current)
    }

    /// Apply NODETREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("NODETREE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("style") {
            settings.style = val
                .parse()
                .map_err(|message| ApplicationError::Config { message })?;
        }
        if let Ok(val) = config.get_string("indent") {
            let indent = val.trim().parse().map_err(|_| ApplicationError::Config {
                message: format!("NODETREE_INDENT must be a non-negative integer, got '{}'", val),
            })?;
            settings.indent = clamp_indent(indent);
        }
        if let Ok(val) = config.get_string("color") {
            settings.color = parse_bool("NODETREE_COLOR", &val)?;
        }

        Ok(settings)
    }

    /// Serialize the effective settings as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
