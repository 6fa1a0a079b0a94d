//! Configuration management for imgsieve
//!
//! Optional YAML configuration (`imgsieve.yml` / `.imgsieve.yml`) discovered
//! from the current directory upward, or given explicitly via `--config`.
//! Every field has a default, so a missing file or a partial document works.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for imgsieve
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SieveConfig {
    /// Candidate enumeration settings
    #[serde(default)]
    pub scan: ScanConfig,

    /// Terminal action settings
    #[serde(default)]
    pub actions: ActionsConfig,
}

/// Candidate enumeration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Recognized image file extensions (case-sensitive, dot-prefixed)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    [".jpg", ".jpeg", ".png", ".bmp"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

/// Terminal action settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ActionsConfig {
    /// Ask for confirmation before each delete
    #[serde(default)]
    pub confirm_delete: bool,
}

impl SieveConfig {
    /// Load configuration from file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: SieveConfig = serde_yml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Find configuration file in current directory or parent directories
    pub fn find_config_file() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;

        loop {
            for name in ["imgsieve.yml", ".imgsieve.yml"] {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Load configuration from found file or use defaults
    pub fn load_or_default() -> Self {
        if let Some(config_path) = Self::find_config_file() {
            Self::load_from_file(&config_path).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.scan.extensions.is_empty() {
            anyhow::bail!("At least one image extension must be configured");
        }
        for extension in &self.scan.extensions {
            if !extension.starts_with('.') {
                anyhow::bail!("Image extensions must be dot-prefixed, got '{extension}'");
            }
        }

        Ok(())
    }
}
