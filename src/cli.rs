use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "brand-match")]
#[command(about = "商品×インフルエンサー相性判定ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 1件を判定
    Score {
        /// 入力JSONファイル（SubmissionRecord）
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// 商品説明
        #[arg(short, long)]
        description: Option<String>,

        /// インフルエンサーのスタイル（例: "Minimalist", "luxury premium"）
        #[arg(short, long)]
        style: Option<String>,

        /// インフルエンサーのオーディエンス（例: "Gen Z", "eco-conscious"）
        #[arg(short, long)]
        audience: Option<String>,

        /// 商品写真（ファイルまたはフォルダ）
        #[arg(long, num_args = 1..)]
        photos: Vec<PathBuf>,

        /// インフルエンサー素材（ファイルまたはフォルダ）
        #[arg(long, num_args = 1..)]
        content: Vec<PathBuf>,

        /// 商品写真の枚数を直接指定
        #[arg(long)]
        photo_count: Option<u32>,

        /// インフルエンサー素材の件数を直接指定
        #[arg(long)]
        content_count: Option<u32>,

        /// 出力形式 (text/json、省略時は設定値)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// 強み・改善点を表示
        #[arg(long)]
        details: bool,

        /// 未知のラベルをエラーにする
        #[arg(long)]
        strict: bool,

        /// 結果をJSONで保存
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 対話形式で入力して判定
    Wizard {
        /// 入力内容と結果をJSONで保存
        #[arg(long)]
        save: Option<PathBuf>,

        /// 強み・改善点を常に表示
        #[arg(long)]
        details: bool,
    },

    /// JSON配列の入力をまとめて判定
    Batch {
        /// 入力JSONファイル（SubmissionRecordの配列）
        #[arg(required = true)]
        input: PathBuf,

        /// 出力形式 (json/excel/both)
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,

        /// 出力ファイル/ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// レポートタイトル
        #[arg(short, long, default_value = "brand-match-report")]
        title: String,

        /// 未知のラベルや上限超過のレコードを除外する
        #[arg(long)]
        strict: bool,
    },

    /// スタイル・オーディエンスのラベル一覧
    Labels {
        /// キーワードも表示
        #[arg(short, long)]
        keywords: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 厳格モードの既定値を設定
        #[arg(long)]
        set_strict: Option<bool>,

        /// 添付上限を設定
        #[arg(long)]
        set_max_attachments: Option<u32>,

        /// 既定値に戻す
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use text or json", s)),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Json,
    Excel,
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use json, excel, or both", s)),
        }
    }
}
