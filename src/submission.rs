//! コマンドライン引数から入力レコードを組み立てる

use crate::error::{BrandMatchError, Result};
use crate::intake::{collect_attachments, AttachmentKind};
use crate::normalizer::{normalize_audience_label, normalize_style_label};
use brand_match_common::SubmissionRecord;
use std::path::{Path, PathBuf};

/// score コマンドの入力
#[derive(Debug, Clone, Default)]
pub struct SubmissionArgs {
    pub description: Option<String>,
    pub style: Option<String>,
    pub audience: Option<String>,
    pub photos: Vec<PathBuf>,
    pub content: Vec<PathBuf>,
    pub photo_count: Option<u32>,
    pub content_count: Option<u32>,
}

/// JSONファイルから1件読み込む
pub fn load_submission(path: &Path) -> Result<SubmissionRecord> {
    if !path.exists() {
        return Err(BrandMatchError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let record: SubmissionRecord = serde_json::from_str(&content)?;
    Ok(record)
}

/// ベースのレコードに引数を上書きする
///
/// 件数は 直接指定 > 添付パスの件数 > ベースの値 の順に採用する。
pub fn assemble_submission(
    base: SubmissionRecord,
    args: &SubmissionArgs,
    max_attachments: u32,
) -> Result<SubmissionRecord> {
    let mut record = base;

    if let Some(description) = &args.description {
        record.product_description = description.clone();
    }
    if let Some(style) = &args.style {
        record.influencer_style = normalize_style_label(style);
    }
    if let Some(audience) = &args.audience {
        record.influencer_audience = normalize_audience_label(audience);
    }

    if let Some(count) = args.photo_count {
        record.product_photo_count = count;
    } else if !args.photos.is_empty() {
        let photos = collect_attachments(&args.photos, AttachmentKind::ProductPhoto, max_attachments)?;
        log_attachments("photos", photos.count(), photos.rejected.len(), photos.truncated);
        record.product_photo_count = photos.count();
    }

    if let Some(count) = args.content_count {
        record.influencer_content_count = count;
    } else if !args.content.is_empty() {
        let content = collect_attachments(&args.content, AttachmentKind::InfluencerContent, max_attachments)?;
        log_attachments("content", content.count(), content.rejected.len(), content.truncated);
        record.influencer_content_count = content.count();
    }

    Ok(record)
}

fn log_attachments(kind: &str, accepted: u32, rejected: usize, truncated: usize) {
    tracing::debug!(kind, accepted, rejected, truncated, "attachments collected");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_assemble_from_flags() {
        let args = SubmissionArgs {
            description: Some("A simple lamp".into()),
            style: Some("minimalist".into()),
            audience: Some("gen-z".into()),
            photo_count: Some(3),
            ..Default::default()
        };

        let record = assemble_submission(SubmissionRecord::default(), &args, 5).unwrap();
        assert_eq!(record.product_description, "A simple lamp");
        assert_eq!(record.influencer_style, "Minimalist");
        assert_eq!(record.influencer_audience, "Gen Z");
        assert_eq!(record.product_photo_count, 3);
        assert_eq!(record.influencer_content_count, 0);
    }

    #[test]
    fn test_flags_override_base() {
        let base = SubmissionRecord {
            product_name: "Lamp".into(),
            product_description: "old".into(),
            influencer_content_count: 4,
            ..Default::default()
        };
        let args = SubmissionArgs { description: Some("new".into()), ..Default::default() };

        let record = assemble_submission(base, &args, 5).unwrap();
        assert_eq!(record.product_name, "Lamp");
        assert_eq!(record.product_description, "new");
        assert_eq!(record.influencer_content_count, 4);
    }

    #[test]
    fn test_counts_from_attachment_paths() {
        let dir = tempdir().expect("Failed to create temp dir");
        File::create(dir.path().join("a.jpg")).unwrap();
        File::create(dir.path().join("b.jpg")).unwrap();
        File::create(dir.path().join("clip.mp4")).unwrap();

        let args = SubmissionArgs {
            photos: vec![dir.path().to_path_buf()],
            content: vec![dir.path().to_path_buf()],
            ..Default::default()
        };

        let record = assemble_submission(SubmissionRecord::default(), &args, 5).unwrap();
        assert_eq!(record.product_photo_count, 2);
        assert_eq!(record.influencer_content_count, 3);
    }

    #[test]
    fn test_explicit_count_wins_over_paths() {
        let args = SubmissionArgs {
            photos: vec![PathBuf::from("/nonexistent/never-read.jpg")],
            photo_count: Some(1),
            ..Default::default()
        };
        let record = assemble_submission(SubmissionRecord::default(), &args, 5).unwrap();
        assert_eq!(record.product_photo_count, 1);
    }

    #[test]
    fn test_load_submission_missing() {
        let err = load_submission(Path::new("/nonexistent/submission.json")).unwrap_err();
        assert!(matches!(err, BrandMatchError::FileNotFound(_)));
    }
}
