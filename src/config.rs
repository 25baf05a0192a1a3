//! Configuration - data directory, page size, export directory
//!
//! Stored as JSON at ~/.campus-tui/config.json. A missing or unreadable
//! file falls back to defaults so the console always starts.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory containing the dataset JSON files
    pub data_dir: String,
    /// Fixed rows-per-page for every table
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Directory CSV exports are written to
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
}

fn default_page_size() -> usize {
    10
}

fn default_export_dir() -> String {
    ".".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            page_size: default_page_size(),
            export_dir: default_export_dir(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".campus-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }
        let contents = fs::read_to_string(&config_path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("could not determine config directory"))?;
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("could not determine config path"))?;
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_guard_page_size() {
        let config = Config::default();
        assert!(config.page_size >= 1);
        assert_eq!(config.data_dir, "data");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"data_dir": "/srv/campus"}"#).unwrap();
        assert_eq!(config.data_dir, "/srv/campus");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.export_dir, ".");
    }
}
