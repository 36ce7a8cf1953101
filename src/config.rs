// src/config.rs

use crate::error::{ClassLogError, Result};
use crate::models::SheetNames;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 配置目录 (~/.config/classlog)
pub fn config_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or(ClassLogError::HomeDirNotFound)?;
    Ok(home_dir.join(".config/classlog"))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// 工作簿文件路径
    pub workbook: PathBuf,
    #[serde(default)]
    pub sheets: SheetNames,
}

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        Ok(config_dir()?.join("config.json"))
    }

    /// 读取 ~/.config/classlog/config.json，不存在时使用默认值
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Self::default_config()
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ClassLogError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn default_config() -> Result<Self> {
        Ok(Self {
            workbook: config_dir()?.join("classlog.db"),
            sheets: SheetNames::default(),
        })
    }
}
