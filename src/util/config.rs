use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::format::DEFAULT_UNITS_LIMIT;
use crate::i18n::Catalog;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub format: FormatConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatConfig {
    #[serde(default = "default_units_limit")]
    pub units_limit: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Fluent (`.ftl`) file; English is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_units_limit() -> usize {
    DEFAULT_UNITS_LIMIT
}

fn default_locale() -> String {
    "en-US".to_string()
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            units_limit: default_units_limit(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            locale: default_locale(),
        }
    }
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::read(path);
        }

        let mut candidates = Vec::new();

        // 1. ~/.config/reltime/config.toml
        if let Some(home) = std::env::var_os("HOME") {
            candidates.push(PathBuf::from(home).join(".config/reltime/config.toml"));
        }

        // 2. Platform-specific path (macOS: ~/Library/Application Support/reltime/)
        if let Some(proj_dirs) = ProjectDirs::from("", "", "reltime") {
            candidates.push(proj_dirs.config_dir().join("config.toml"));
        }

        for config_path in &candidates {
            if config_path.exists() {
                return Self::read(config_path);
            }
        }

        Ok(AppConfig::default())
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content).with_context(|| "Failed to parse config file")
    }

    /// The configured catalog, or the built-in English one.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match self.catalog.path {
            Some(ref path) => Catalog::load(path, &self.catalog.locale),
            None => Ok(Catalog::english()),
        }
    }

    pub fn log_dir(&self) -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "reltime") {
            return proj_dirs.data_dir().join("logs");
        }
        PathBuf::from(".local/share/reltime/logs")
    }
}
