//! キーワードルール表
//!
//! ラベルごとの加点・減点キーワードを静的テーブルで持つ。
//! ラベルを増やすときはテーブルに1行足すだけでよい。

use crate::labels::{InfluencerAudience, InfluencerStyle};

/// 減点側の判定方法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PenaltyCheck {
    /// 減点なし
    Never,
    /// いずれかのキーワードを含めば減点
    AnyOf(&'static [&'static str]),
    /// どのキーワードも含まなければ減点（加点側とは別のキーワード集合）
    NoneOf(&'static [&'static str]),
}

impl PenaltyCheck {
    fn fires(&self, text: &str) -> bool {
        match self {
            PenaltyCheck::Never => false,
            PenaltyCheck::AnyOf(words) => contains_any(text, words),
            PenaltyCheck::NoneOf(words) => !contains_any(text, words),
        }
    }
}

/// 1ラベル分のルール
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub label: &'static str,
    pub positive: &'static [&'static str],
    pub bonus: i32,
    pub penalty_check: PenaltyCheck,
    pub penalty: i32,
}

impl KeywordRule {
    /// 小文字化済みの説明文に対する加減点
    ///
    /// 加点キーワードが1つでもあれば減点判定は行わない。
    pub fn adjustment(&self, lowered: &str) -> i32 {
        if contains_any(lowered, self.positive) {
            self.bonus
        } else if self.penalty_check.fires(lowered) {
            -self.penalty
        } else {
            0
        }
    }
}

pub const STYLE_RULES: &[KeywordRule] = &[
    KeywordRule {
        label: "Minimalist",
        positive: &["simple", "clean", "minimal"],
        bonus: 20,
        penalty_check: PenaltyCheck::AnyOf(&["luxury", "ornate", "complex"]),
        penalty: 15,
    },
    KeywordRule {
        label: "Luxury/Premium",
        positive: &["premium", "luxury", "high-end"],
        bonus: 20,
        penalty_check: PenaltyCheck::AnyOf(&["budget", "affordable", "cheap"]),
        penalty: 15,
    },
    KeywordRule {
        label: "Natural/Organic",
        positive: &["organic", "natural", "eco"],
        bonus: 20,
        penalty_check: PenaltyCheck::AnyOf(&["synthetic", "artificial"]),
        penalty: 15,
    },
    KeywordRule {
        label: "Colorful/Vibrant",
        positive: &["vibrant", "colorful", "bright"],
        bonus: 20,
        penalty_check: PenaltyCheck::AnyOf(&["monochrome", "muted", "subtle"]),
        penalty: 10,
    },
];

pub const AUDIENCE_RULES: &[KeywordRule] = &[
    KeywordRule {
        label: "Gen Z",
        positive: &["trend", "young", "social media"],
        bonus: 25,
        penalty_check: PenaltyCheck::AnyOf(&["traditional", "classic", "mature"]),
        penalty: 15,
    },
    KeywordRule {
        label: "Millennials",
        positive: &["experience", "sustainable", "quality"],
        bonus: 25,
        penalty_check: PenaltyCheck::Never,
        penalty: 0,
    },
    KeywordRule {
        label: "Beauty Lovers",
        positive: &["beauty", "cosmetic", "skincare"],
        bonus: 25,
        penalty_check: PenaltyCheck::NoneOf(&["appearance", "look", "skin"]),
        penalty: 15,
    },
    KeywordRule {
        label: "Eco-Conscious",
        positive: &["sustainable", "eco", "green", "natural"],
        bonus: 25,
        penalty_check: PenaltyCheck::AnyOf(&["plastic", "disposable"]),
        penalty: 15,
    },
];

/// スタイルのラベル文字列からルールを引く（完全一致）
pub fn style_rule(label: &str) -> Option<&'static KeywordRule> {
    STYLE_RULES.iter().find(|r| r.label == label)
}

/// オーディエンスのラベル文字列からルールを引く（完全一致）
pub fn audience_rule(label: &str) -> Option<&'static KeywordRule> {
    AUDIENCE_RULES.iter().find(|r| r.label == label)
}

impl InfluencerStyle {
    /// このスタイルにキーワードルールがあるか
    pub fn rule(&self) -> Option<&'static KeywordRule> {
        style_rule(self.as_str())
    }
}

impl InfluencerAudience {
    pub fn rule(&self) -> Option<&'static KeywordRule> {
        audience_rule(self.as_str())
    }
}

fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text.contains(w))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_tables_use_known_labels() {
        for rule in STYLE_RULES {
            assert!(InfluencerStyle::parse(rule.label).is_some(), "{}", rule.label);
        }
        for rule in AUDIENCE_RULES {
            assert!(InfluencerAudience::parse(rule.label).is_some(), "{}", rule.label);
        }
    }

    #[test]
    fn test_special_cased_label_counts() {
        let styles = InfluencerStyle::ALL.iter().filter(|s| s.rule().is_some()).count();
        let audiences = InfluencerAudience::ALL.iter().filter(|a| a.rule().is_some()).count();
        assert_eq!(styles, 4);
        assert_eq!(audiences, 4);
    }

    #[test]
    fn test_positive_wins_over_penalty() {
        let rule = style_rule("Minimalist").unwrap();
        // "clean" と "luxury" の両方を含む → 加点のみ
        assert_eq!(rule.adjustment("clean luxury look"), 20);
        assert_eq!(rule.adjustment("an ornate vase"), -15);
        assert_eq!(rule.adjustment("a vase"), 0);
    }

    #[test]
    fn test_colorful_penalty_is_ten() {
        let rule = style_rule("Colorful/Vibrant").unwrap();
        assert_eq!(rule.adjustment("muted tones"), -10);
    }

    #[test]
    fn test_millennials_has_no_penalty() {
        let rule = audience_rule("Millennials").unwrap();
        assert_eq!(rule.adjustment("anything at all"), 0);
        assert_eq!(rule.penalty_check, PenaltyCheck::Never);
    }

    #[test]
    fn test_beauty_lovers_asymmetric_penalty() {
        let rule = audience_rule("Beauty Lovers").unwrap();
        assert_eq!(rule.adjustment("a skincare serum"), 25);
        // 二次キーワード "skin" があれば減点しない
        assert_eq!(rule.adjustment("soft on skin"), 0);
        assert_eq!(rule.adjustment("a garden hose"), -15);
    }

    #[test]
    fn test_substring_matching() {
        // "eco" は "economy" にも一致する（部分一致）
        let rule = audience_rule("Eco-Conscious").unwrap();
        assert_eq!(rule.adjustment("economy pack"), 25);
    }

    #[test]
    fn test_unknown_label_has_no_rule() {
        assert!(style_rule("Gothic").is_none());
        assert!(audience_rule("").is_none());
        assert!(style_rule("minimalist").is_none());
    }
}
