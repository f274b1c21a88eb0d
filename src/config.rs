use crate::error::{ExtractError, Result};
use keyword_extract_common::Locale;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub locale: Locale,
    /// アップロードファイルの一時置き場
    pub upload_dir: PathBuf,
    /// レポートの出力先（extract）
    pub results_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            upload_dir: PathBuf::from("uploads"),
            results_dir: PathBuf::from("results"),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &std::path::Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &std::path::Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ExtractError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("keyword-extract").join("config.json"))
    }
}
