use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::retry::FallbackPolicy;

/// Cask fallback parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// Upper bound (exclusive) of the random delay before the cask lookup, in milliseconds.
    pub max_jitter_ms: u64,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            max_jitter_ms: 3000,
        }
    }
}

/// Global configuration loaded from `~/.config/commentize/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentizeConfig {
    /// Maximum number of homepage lookups in flight at once.
    pub max_concurrent_lookups: usize,
    /// Package manager binary used for lookups.
    pub brew_path: String,
    /// Optional fallback policy; if missing, built-in defaults are used.
    pub fallback: Option<FallbackConfig>,
}

impl Default for CommentizeConfig {
    fn default() -> Self {
        Self {
            max_concurrent_lookups: 8,
            brew_path: "brew".to_string(),
            fallback: None,
        }
    }
}

impl CommentizeConfig {
    pub fn fallback_policy(&self) -> FallbackPolicy {
        let fallback = self.fallback.clone().unwrap_or_default();
        FallbackPolicy {
            max_jitter: Duration::from_millis(fallback.max_jitter_ms),
        }
    }
}

/// Location of the user config file. Nothing is created on disk.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("commentize")
        .context("locate XDG config dir for commentize")?;
    Ok(xdg_dirs.get_config_home().join("commentize").join("config.toml"))
}

/// Load `path` if it exists; `None` when there is no file there.
pub fn load_if_present(path: &Path) -> Result<Option<CommentizeConfig>> {
    if !path.is_file() {
        return Ok(None);
    }
    load_from_path(path).map(Some)
}

/// Load the user config file, or built-in defaults when there is none.
///
/// A config location that cannot be resolved is logged and ignored; only a
/// config file that exists but cannot be read or parsed is an error.
pub fn load_or_default() -> Result<CommentizeConfig> {
    let path = match config_path() {
        Ok(path) => path,
        Err(err) => {
            tracing::warn!("using default config: {:#}", err);
            return Ok(CommentizeConfig::default());
        }
    };
    match load_if_present(&path)? {
        Some(cfg) => {
            tracing::debug!("loaded config from {}", path.display());
            Ok(cfg)
        }
        None => Ok(CommentizeConfig::default()),
    }
}

/// Load configuration from an explicit path. The file must exist.
pub fn load_from_path(path: &Path) -> Result<CommentizeConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: CommentizeConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
