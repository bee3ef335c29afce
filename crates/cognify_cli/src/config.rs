//! cognify-art configuration file handling

use anyhow::{Context, Result};
use cognify_text::DEFAULT_SEARCH_PATHS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up when no `--config` is given
pub const CONFIG_FILE: &str = "cognify-art.toml";

/// Top-level configuration (cognify-art.toml)
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct ArtConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub fonts: FontsConfig,
}

/// Where generated files are written
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Repository root; assets land in `<root>` and `<root>/docs/images`
    #[serde(default = "default_root")]
    pub root: PathBuf,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
        }
    }
}

/// Font lookup
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FontsConfig {
    /// Name substituted into each search path
    #[serde(default = "default_family")]
    pub family: String,
    /// Path templates containing `{name}`, tried in order
    #[serde(default = "default_search_paths")]
    pub search_paths: Vec<String>,
}

fn default_family() -> String {
    "HelveticaNeue".to_string()
}

fn default_search_paths() -> Vec<String> {
    DEFAULT_SEARCH_PATHS.iter().map(|p| p.to_string()).collect()
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            family: default_family(),
            search_paths: default_search_paths(),
        }
    }
}

impl ArtConfig {
    /// Load configuration from a directory (looks for cognify-art.toml) or
    /// from a file path. A missing file yields the defaults.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = if path.is_file() {
            path.to_path_buf()
        } else {
            path.join(CONFIG_FILE)
        };

        if !config_path.exists() {
            tracing::debug!("No {} found, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config: ArtConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(config)
    }

    /// Load an explicitly named file, which must exist
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            anyhow::bail!("Config file {} does not exist", path.display());
        }
        Self::load_from_dir(path)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
