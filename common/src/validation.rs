//! 入力レコードの厳格検証
//!
//! スコアリング自体は未知ラベルを黙って受け入れる（加減点0）。
//! ここでは呼び出し側が明示的に求めた場合にだけ不正を報告する。

use crate::error::{Error, Result};
use crate::labels::{InfluencerAudience, InfluencerStyle};
use crate::types::SubmissionRecord;

/// 添付ファイルの上限（入力フォームと同じ）
pub const MAX_ATTACHMENTS: u32 = 5;

/// ラベルと件数を検証
///
/// 最初に見つかった問題を返す。
pub fn validate_submission(record: &SubmissionRecord) -> Result<()> {
    validate_submission_with_limit(record, MAX_ATTACHMENTS)
}

/// 添付上限を指定して検証
pub fn validate_submission_with_limit(record: &SubmissionRecord, max_attachments: u32) -> Result<()> {
    if InfluencerStyle::parse(&record.influencer_style).is_none() {
        return Err(Error::UnknownStyle(record.influencer_style.clone()));
    }

    if InfluencerAudience::parse(&record.influencer_audience).is_none() {
        return Err(Error::UnknownAudience(record.influencer_audience.clone()));
    }

    check_count("productPhotoCount", record.product_photo_count, max_attachments)?;
    check_count("influencerContentCount", record.influencer_content_count, max_attachments)?;

    Ok(())
}

fn check_count(field: &str, count: u32, max: u32) -> Result<()> {
    if count > max {
        return Err(Error::InvalidInput {
            field: field.to_string(),
            reason: format!("{} attachments exceeds the limit of {}", count, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> SubmissionRecord {
        SubmissionRecord {
            product_description: "simple".into(),
            influencer_style: "Minimalist".into(),
            influencer_audience: "Gen Z".into(),
            product_photo_count: 3,
            influencer_content_count: 2,
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_record() {
        assert!(validate_submission(&valid()).is_ok());
    }

    #[test]
    fn test_unknown_style() {
        let record = SubmissionRecord { influencer_style: "Gothic".into(), ..valid() };
        let err = validate_submission(&record).unwrap_err();
        assert!(matches!(err, Error::UnknownStyle(ref s) if s == "Gothic"));
    }

    #[test]
    fn test_empty_audience_is_unknown() {
        let record = SubmissionRecord { influencer_audience: String::new(), ..valid() };
        let err = validate_submission(&record).unwrap_err();
        assert!(matches!(err, Error::UnknownAudience(_)));
    }

    #[test]
    fn test_too_many_attachments() {
        let record = SubmissionRecord { product_photo_count: 6, ..valid() };
        let err = validate_submission(&record).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { ref field, .. } if field == "productPhotoCount"));

        assert!(validate_submission_with_limit(&record, 10).is_ok());
    }

    #[test]
    fn test_empty_description_is_allowed() {
        let record = SubmissionRecord { product_description: String::new(), ..valid() };
        assert!(validate_submission(&record).is_ok());
    }
}
