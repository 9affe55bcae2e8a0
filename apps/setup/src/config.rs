//! Optional installer configuration.
//!
//! Read from TOML at `$XDG_CONFIG_HOME/tmlsetup/setup.toml`, falling back to
//! `~/.config/tmlsetup/setup.toml`. A missing file means defaults; the file
//! is never written by the tool.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tmlsetup_steam::EnvLookup;

/// Installer configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Game directory override (`~` is expanded).
    #[serde(default)]
    pub install_dir: Option<String>,

    /// Directory holding the files to install (`~` is expanded).
    #[serde(default)]
    pub source_dir: Option<String>,
}

impl Config {
    /// Loads configuration from `path`, or returns defaults if it does not exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Configured game directory, with `~` expanded through `env`.
    pub fn install_dir(&self, env: &impl EnvLookup) -> anyhow::Result<Option<PathBuf>> {
        configured_path(self.install_dir.as_deref(), env)
            .context("invalid install_dir in configuration")
    }

    /// Configured source directory, with `~` expanded through `env`.
    pub fn source_dir(&self, env: &impl EnvLookup) -> anyhow::Result<Option<PathBuf>> {
        configured_path(self.source_dir.as_deref(), env)
            .context("invalid source_dir in configuration")
    }
}

fn configured_path(value: Option<&str>, env: &impl EnvLookup) -> anyhow::Result<Option<PathBuf>> {
    match value.filter(|v| !v.trim().is_empty()) {
        Some(v) => expand_home(v, env)
            .map(Some)
            .with_context(|| format!("cannot expand {v:?}: HOME is not set")),
        None => Ok(None),
    }
}

/// Expands a leading `~` to `$HOME`.
///
/// Returns `None` when the path needs `HOME` and it is unset.
pub fn expand_home(path: &str, env: &impl EnvLookup) -> Option<PathBuf> {
    if let Some(rest) = path.strip_prefix("~/") {
        Some(PathBuf::from(env.var("HOME")?).join(rest))
    } else if path == "~" {
        env.var("HOME").map(PathBuf::from)
    } else {
        Some(PathBuf::from(path))
    }
}

/// Returns the default configuration file path, if a base directory is known.
pub fn default_config_path(env: &impl EnvLookup) -> Option<PathBuf> {
    let base = match env.var("XDG_CONFIG_HOME") {
        Some(xdg) => PathBuf::from(xdg),
        None => PathBuf::from(env.var("HOME")?).join(".config"),
    };
    Some(base.join("tmlsetup").join("setup.toml"))
}
