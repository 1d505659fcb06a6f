use crate::cli::OutputFormat;
use crate::error::{BrandMatchError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// 未知のスタイル・オーディエンスをエラーにする
    pub strict_labels: bool,
    /// 1フィールドあたりの添付上限（1以上）
    pub max_attachments: u32,
    /// ウィザードのステップ切り替え待ち（ミリ秒）
    pub transition_delay_ms: u64,
    /// 判定前の演出待ち（ミリ秒、0で無効）
    pub analysis_delay_ms: u64,
    /// score の既定出力形式 (text/json)
    pub default_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict_labels: false,
            max_attachments: 5,
            transition_delay_ms: 300,
            analysis_delay_ms: 0,
            default_format: OutputFormat::Text,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content).map_err(|e| {
                BrandMatchError::Config(format!("{}: {}", config_path.display(), e))
            })?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| BrandMatchError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("brand-match").join("config.json"))
    }

    pub fn set_max_attachments(&mut self, max: u32) -> Result<()> {
        check_max_attachments(max)?;
        self.max_attachments = max;
        Ok(())
    }

    /// 読み込んだ値の検証
    pub fn validate(&self) -> Result<()> {
        check_max_attachments(self.max_attachments)
    }
}

fn check_max_attachments(max: u32) -> Result<()> {
    if max == 0 {
        return Err(BrandMatchError::Config("添付上限は1以上にしてください".into()));
    }
    Ok(())
}
