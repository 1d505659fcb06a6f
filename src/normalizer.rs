//! ラベル表記ゆれの正規化
//!
//! コマンドラインで入力されたスタイル・オーディエンス名を正式ラベルに寄せる。
//! 例: "luxury premium" → "Luxury/Premium", "gen-z" → "Gen Z"

use brand_match_common::{InfluencerAudience, InfluencerStyle};
use regex::Regex;

/// 比較用キー（小文字化し、区切り記号と "and" を除去）
pub fn label_key(text: &str) -> String {
    lazy_static::lazy_static! {
        static ref AND_RE: Regex = Regex::new(r"(?i)\band\b").unwrap();
        static ref SEPARATOR_RE: Regex = Regex::new(r"[\s/_\-&.,]+").unwrap();
    }

    let without_and = AND_RE.replace_all(text, "");
    SEPARATOR_RE.replace_all(&without_and, "").to_lowercase()
}

/// スタイル名を正式ラベルに解決
///
/// "Luxury/Premium" のような複合ラベルは片側だけでも一致とみなす。
pub fn canonical_style(text: &str) -> Option<InfluencerStyle> {
    let key = label_key(text);
    if key.is_empty() {
        return None;
    }

    InfluencerStyle::ALL.iter().copied().find(|style| {
        let label = style.as_str();
        label_key(label) == key || label.split('/').any(|part| label_key(part) == key)
    })
}

/// オーディエンス名を正式ラベルに解決
pub fn canonical_audience(text: &str) -> Option<InfluencerAudience> {
    let key = label_key(text);
    if key.is_empty() {
        return None;
    }

    InfluencerAudience::ALL
        .iter()
        .copied()
        .find(|audience| label_key(audience.as_str()) == key)
}

/// 解決できればその正式ラベル、できなければ入力をそのまま返す
///
/// 未知ラベルはスコアリングで加減点0として扱われる。
pub fn normalize_style_label(text: &str) -> String {
    canonical_style(text)
        .map(|s| s.as_str().to_string())
        .unwrap_or_else(|| text.trim().to_string())
}

pub fn normalize_audience_label(text: &str) -> String {
    canonical_audience(text)
        .map(|a| a.as_str().to_string())
        .unwrap_or_else(|| text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_key() {
        assert_eq!(label_key("Luxury/Premium"), "luxurypremium");
        assert_eq!(label_key("Gen Z"), "genz");
        assert_eq!(label_key("Fitness & Wellness"), "fitnesswellness");
        assert_eq!(label_key("fitness and wellness"), "fitnesswellness");
        assert_eq!(label_key("eco_conscious"), "ecoconscious");
    }

    #[test]
    fn test_canonical_style() {
        assert_eq!(canonical_style("luxury premium"), Some(InfluencerStyle::LuxuryPremium));
        assert_eq!(canonical_style("MINIMALIST"), Some(InfluencerStyle::Minimalist));
        assert_eq!(canonical_style("organic"), Some(InfluencerStyle::NaturalOrganic));
        assert_eq!(canonical_style("vibrant"), Some(InfluencerStyle::ColorfulVibrant));
        assert_eq!(canonical_style("gothic"), None);
        assert_eq!(canonical_style("  "), None);
    }

    #[test]
    fn test_canonical_audience() {
        assert_eq!(canonical_audience("gen-z"), Some(InfluencerAudience::GenZ));
        assert_eq!(canonical_audience("eco conscious"), Some(InfluencerAudience::EcoConscious));
        assert_eq!(canonical_audience("beauty_lovers"), Some(InfluencerAudience::BeautyLovers));
        assert_eq!(canonical_audience("gamers"), None);
    }

    #[test]
    fn test_normalize_keeps_unknown_labels() {
        assert_eq!(normalize_style_label("natural organic"), "Natural/Organic");
        assert_eq!(normalize_style_label(" Gothic "), "Gothic");
        assert_eq!(normalize_audience_label("Gen Z"), "Gen Z");
        assert_eq!(normalize_audience_label("Gamers"), "Gamers");
    }
}
