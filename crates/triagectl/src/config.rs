//! triagectl configuration
//!
//! Optional TOML file; every field has a default. Lookup order:
//! 1. `--config` flag
//! 2. `$TRIAGECTL_CONFIG`
//! 3. `<config dir>/neutral-minds/config.toml` (XDG on Linux)
//!
//! A missing file means defaults. A file that exists but does not parse
//! is an error.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_ENV: &str = "TRIAGECTL_CONFIG";
const CONFIG_DIR: &str = "neutral-minds";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CtlConfig {
    /// Knowledge base file replacing the built-in catalog
    #[serde(default)]
    pub knowledge_base: Option<PathBuf>,

    /// Colored terminal output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Show lower matching levels under the triage result
    #[serde(default = "default_true")]
    pub show_all_levels: bool,

    /// Log filter used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CtlConfig {
    fn default() -> Self {
        Self {
            knowledge_base: None,
            color: true,
            show_all_levels: true,
            log_level: default_log_level(),
        }
    }
}

impl CtlConfig {
    /// Resolve the config path, explicit flag first
    pub fn discover_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load from `path`; defaults if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: CtlConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match Self::discover_path(explicit) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CtlConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, CtlConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "color = false\nknowledge_base = \"/opt/kb.toml\"\n").unwrap();

        let config = CtlConfig::load_from(&path).unwrap();
        assert!(!config.color);
        assert!(config.show_all_levels);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.knowledge_base, Some(PathBuf::from("/opt/kb.toml")));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "color = \"sometimes\"\n").unwrap();

        assert!(CtlConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_explicit_path_wins() {
        let explicit = PathBuf::from("/tmp/explicit.toml");
        assert_eq!(CtlConfig::discover_path(Some(&explicit)), Some(explicit));
    }
}
