//! 入出力レコードの型定義
//!
//! CLIとレポート出力で共有される型:
//! - SubmissionRecord: 入力フォーム2ステップ分の内容
//! - MatchResult: 相性判定の結果
//! - ScoredSubmission: 入力と結果の組（保存・一括出力用）

use serde::{Deserialize, Serialize};

/// 入力レコード（スコアリング中は不変）
///
/// 欠損したテキストは空文字、欠損した件数は0として扱う。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionRecord {
    pub product_name: String,
    pub product_description: String,
    pub product_photo_count: u32,
    pub influencer_name: String,
    pub influencer_description: String,
    /// スタイルのラベル（未知の値も許容）
    pub influencer_style: String,
    /// オーディエンスのラベル（未知の値も許容）
    pub influencer_audience: String,
    pub influencer_content_count: u32,
}

/// 相性判定の結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub is_match: bool,
    pub score: u8,
    pub style_compatibility: u8,
    pub audience_compatibility: u8,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// 入力と判定結果の組
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredSubmission {
    pub submission: SubmissionRecord,
    pub result: MatchResult,
}
