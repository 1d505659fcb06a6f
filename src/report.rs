//! 判定結果のテキスト表示

use brand_match_common::{InfluencerAudience, InfluencerStyle, KeywordRule, MatchResult, PenaltyCheck};

const BAR_WIDTH: usize = 20;

pub fn headline(result: &MatchResult) -> &'static str {
    if result.is_match {
        "It's a Match!"
    } else {
        "Not a Strong Match"
    }
}

pub fn summary_sentence(result: &MatchResult) -> &'static str {
    if result.is_match {
        "This influencer would be a great fit for your product based on our analysis."
    } else {
        "We think there might be better influencers for your product."
    }
}

/// スコアを20マスのバーで表す（5点ごとに1マス、端数切り捨て）
pub fn score_bar(score: u8) -> String {
    let filled = (usize::from(score.min(100)) * BAR_WIDTH) / 100;
    format!("[{}{}] {}%", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled), score)
}

/// 判定結果をテキストに整形
///
/// `show_details` が false のときは強み・改善点を省く。
pub fn render_text(result: &MatchResult, show_details: bool) -> String {
    let badge = if result.is_match { "✅" } else { "⚠" };
    let mut lines = vec![
        format!("{} {}", badge, headline(result)),
        summary_sentence(result).to_string(),
        String::new(),
        score_bar(result.score),
        format!("Poor Match{:>width$}", "Perfect Match", width = BAR_WIDTH + 2),
        String::new(),
        format!("  Style Compatibility: {}%", result.style_compatibility),
        format!("  Audience Alignment:  {}%", result.audience_compatibility),
    ];

    if show_details {
        lines.push(String::new());
        lines.push("Strengths".to_string());
        lines.extend(result.strengths.iter().map(|s| format!("  • {}", s)));
        lines.push(String::new());
        lines.push("Areas for Improvement".to_string());
        lines.extend(result.weaknesses.iter().map(|w| format!("  • {}", w)));
    }

    lines.join("\n")
}

/// ラベル一覧（キーワードルールのあるラベルに * を付ける）
pub fn render_label_table(show_keywords: bool) -> String {
    let mut lines = vec!["Styles".to_string()];
    for style in InfluencerStyle::ALL {
        lines.push(label_line(style.as_str(), style.rule(), show_keywords));
    }

    lines.push(String::new());
    lines.push("Audiences".to_string());
    for audience in InfluencerAudience::ALL {
        lines.push(label_line(audience.as_str(), audience.rule(), show_keywords));
    }

    lines.join("\n")
}

fn label_line(label: &str, rule: Option<&KeywordRule>, show_keywords: bool) -> String {
    match rule {
        Some(rule) if show_keywords => {
            let mut line = format!(
                "  * {:<24} +{} [{}]",
                label,
                rule.bonus,
                rule.positive.join(", ")
            );
            match rule.penalty_check {
                PenaltyCheck::Never => {}
                PenaltyCheck::AnyOf(words) => {
                    line.push_str(&format!(" / -{} [{}]", rule.penalty, words.join(", ")));
                }
                // いずれの語も含まないときに減点
                PenaltyCheck::NoneOf(words) => {
                    line.push_str(&format!(" / -{} unless [{}]", rule.penalty, words.join(", ")));
                }
            }
            line
        }
        Some(_) => format!("  * {}", label),
        None => format!("    {}", label),
    }
}
