//! 強み・改善点コメントの生成
//!
//! 規則は上から順に評価し、各規則は最大1件を追加する。
//! 2件未満なら汎用コメントを1件足すので、結果は必ず1件以上になる。

use crate::types::SubmissionRecord;

/// 強みとして扱うスタイル相性の下限（超過）
const STRONG_STYLE: u8 = 80;
const GOOD_STYLE: u8 = 60;
const STRONG_AUDIENCE: u8 = 80;
const GOOD_AUDIENCE: u8 = 60;

/// 懸念として扱う相性の上限（未満）
const POOR_FIT: u8 = 50;
const WEAK_FIT: u8 = 70;

const MIN_COMMENTS: usize = 2;

/// 強みを生成
pub fn generate_strengths(
    record: &SubmissionRecord,
    style_compatibility: u8,
    audience_compatibility: u8,
) -> Vec<String> {
    let mut strengths = Vec::new();

    if style_compatibility > STRONG_STYLE {
        strengths.push(format!(
            "The influencer's {} style perfectly complements your product's aesthetic.",
            record.influencer_style
        ));
    } else if style_compatibility > GOOD_STYLE {
        strengths.push(
            "The influencer's style has good potential to showcase your product effectively.".to_string(),
        );
    }

    if audience_compatibility > STRONG_AUDIENCE {
        strengths.push(format!(
            "Your product strongly appeals to the influencer's {} audience.",
            record.influencer_audience
        ));
    } else if audience_compatibility > GOOD_AUDIENCE {
        strengths.push(
            "There's good alignment between your product and the influencer's audience demographics."
                .to_string(),
        );
    }

    if record.influencer_content_count >= 3 {
        strengths.push(
            "The influencer has provided multiple content examples, showing versatility.".to_string(),
        );
    }

    if record.product_photo_count >= 3 {
        strengths.push("Your product is well-represented with multiple high-quality images.".to_string());
    }

    if strengths.len() < MIN_COMMENTS {
        strengths.push("The collaboration has potential to increase brand awareness.".to_string());
    }

    strengths
}

/// 改善点を生成
pub fn generate_weaknesses(
    record: &SubmissionRecord,
    style_compatibility: u8,
    audience_compatibility: u8,
) -> Vec<String> {
    let mut weaknesses = Vec::new();

    if style_compatibility < POOR_FIT {
        weaknesses.push(format!(
            "The influencer's {} style may not be the best fit for your product presentation.",
            record.influencer_style
        ));
    } else if style_compatibility < WEAK_FIT {
        weaknesses.push(
            "There are some style inconsistencies between the influencer and your product.".to_string(),
        );
    }

    if audience_compatibility < POOR_FIT {
        weaknesses.push(format!(
            "Your product may not strongly resonate with the influencer's {} audience.",
            record.influencer_audience
        ));
    } else if audience_compatibility < WEAK_FIT {
        weaknesses.push("There's room to improve alignment with the influencer's audience.".to_string());
    }

    if record.influencer_content_count < 2 {
        weaknesses.push(
            "More content examples from the influencer would help assess compatibility better."
                .to_string(),
        );
    }

    if record.product_photo_count < 2 {
        weaknesses.push("Additional product photos would improve the matching accuracy.".to_string());
    }

    if weaknesses.len() < MIN_COMMENTS {
        weaknesses.push(
            "Consider providing more detailed information for more accurate matching.".to_string(),
        );
    }

    weaknesses
}
