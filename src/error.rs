use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrandMatchError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("入力プロンプトエラー: {0}")]
    Prompt(String),

    #[error("判定対象がありません: {0}")]
    EmptyBatch(String),

    #[error(transparent)]
    Common(#[from] brand_match_common::Error),
}

pub type Result<T> = std::result::Result<T, BrandMatchError>;
