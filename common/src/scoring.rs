//! 相性スコア計算
//!
//! 商品説明のキーワード部分一致と添付件数だけで決まる決定的な計算。
//! 状態を持たず、I/Oもしないので、どこから何度呼んでもよい。

use crate::advice::{generate_strengths, generate_weaknesses};
use crate::rules::{audience_rule, style_rule};
use crate::types::{MatchResult, SubmissionRecord};

/// スタイル相性の基準値
pub const STYLE_BASE: i32 = 75;
/// オーディエンス相性の基準値
pub const AUDIENCE_BASE: i32 = 70;
/// この件数以上の商品写真で加点
pub const PHOTO_THRESHOLD: u32 = 3;
/// この件数以上のインフルエンサー素材で加点
pub const CONTENT_THRESHOLD: u32 = 2;
/// 件数による加減点
pub const COUNT_ADJUSTMENT: i32 = 5;
/// マッチ判定の閾値
pub const MATCH_THRESHOLD: u8 = 70;

const STYLE_WEIGHT: f64 = 0.6;
const AUDIENCE_WEIGHT: f64 = 0.4;

/// 入力レコードから判定結果を作る
pub fn determine_match(record: &SubmissionRecord) -> MatchResult {
    let style_compatibility = calculate_style_compatibility(
        &record.product_description,
        &record.influencer_style,
        record.product_photo_count,
    );
    let audience_compatibility = calculate_audience_compatibility(
        &record.product_description,
        &record.influencer_audience,
        record.influencer_content_count,
    );

    let score = overall_score(style_compatibility, audience_compatibility);

    MatchResult {
        is_match: is_match(score),
        score,
        style_compatibility,
        audience_compatibility,
        strengths: generate_strengths(record, style_compatibility, audience_compatibility),
        weaknesses: generate_weaknesses(record, style_compatibility, audience_compatibility),
    }
}

/// スタイル相性（0-100）
pub fn calculate_style_compatibility(description: &str, style: &str, photo_count: u32) -> u8 {
    let lowered = description.to_lowercase();
    let keyword = style_rule(style).map_or(0, |rule| rule.adjustment(&lowered));
    let photos = count_adjustment(photo_count, PHOTO_THRESHOLD);

    clamp_percent(STYLE_BASE + keyword + photos)
}

/// オーディエンス相性（0-100）
pub fn calculate_audience_compatibility(
    description: &str,
    audience: &str,
    content_count: u32,
) -> u8 {
    let lowered = description.to_lowercase();
    let keyword = audience_rule(audience).map_or(0, |rule| rule.adjustment(&lowered));
    let content = count_adjustment(content_count, CONTENT_THRESHOLD);

    clamp_percent(AUDIENCE_BASE + keyword + content)
}

/// 加重平均（スタイル6:オーディエンス4）を四捨五入
pub fn overall_score(style_compatibility: u8, audience_compatibility: u8) -> u8 {
    let weighted = f64::from(style_compatibility) * STYLE_WEIGHT
        + f64::from(audience_compatibility) * AUDIENCE_WEIGHT;
    // 0.5 は切り上げ
    let rounded = (weighted + 0.5).floor();
    clamp_percent(rounded as i32)
}

pub fn is_match(score: u8) -> bool {
    score >= MATCH_THRESHOLD
}

fn count_adjustment(count: u32, threshold: u32) -> i32 {
    if count >= threshold {
        COUNT_ADJUSTMENT
    } else {
        -COUNT_ADJUSTMENT
    }
}

fn clamp_percent(value: i32) -> u8 {
    value.clamp(0, 100) as u8
}
