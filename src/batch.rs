//! 一括判定
//!
//! JSON配列の入力レコードをまとめて判定する。スコアリングは純粋関数なので
//! レコード単位で並列に処理し、結果は入力順に並べる。

use crate::error::{BrandMatchError, Result};
use brand_match_common::{determine_match, validate_submission_with_limit, ScoredSubmission, SubmissionRecord};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 検証で除外したレコード
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedRecord {
    /// 入力配列内の位置（0始まり）
    pub index: usize,
    pub reason: String,
}

/// 一括判定レポート
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub generated_at: String,
    /// 入力件数（除外分を含む）
    pub total: usize,
    /// 判定済み件数
    pub scored: usize,
    pub matches: usize,
    #[serde(default)]
    pub skipped: Vec<SkippedRecord>,
    pub entries: Vec<ScoredSubmission>,
}

/// 判定オプション
#[derive(Debug, Clone, Copy)]
pub struct BatchOptions {
    pub strict: bool,
    pub max_attachments: u32,
    pub show_progress: bool,
}

/// 入力JSON（レコードの配列）を読み込む
pub fn load_submissions(path: &Path) -> Result<Vec<SubmissionRecord>> {
    if !path.exists() {
        return Err(BrandMatchError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let records: Vec<SubmissionRecord> = serde_json::from_str(&content)?;
    Ok(records)
}

/// レコード群を判定
pub fn score_batch(records: &[SubmissionRecord], options: BatchOptions) -> Result<BatchReport> {
    if records.is_empty() {
        return Err(BrandMatchError::EmptyBatch("入力レコードが0件です".into()));
    }

    let progress = if options.show_progress {
        let bar = ProgressBar::new(records.len() as u64);
        if let Ok(style) = ProgressStyle::with_template("  {bar:30} {pos}/{len} {msg}") {
            bar.set_style(style);
        }
        bar
    } else {
        ProgressBar::hidden()
    };

    let outcomes: Vec<std::result::Result<ScoredSubmission, SkippedRecord>> = records
        .par_iter()
        .enumerate()
        .map(|(index, record)| {
            let outcome = score_one(index, record, options);
            progress.inc(1);
            outcome
        })
        .collect();

    progress.finish_and_clear();

    let mut report = BatchReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        ..Default::default()
    };

    for outcome in outcomes {
        match outcome {
            Ok(entry) => report.entries.push(entry),
            Err(skipped) => {
                tracing::warn!(index = skipped.index, reason = %skipped.reason, "record skipped");
                report.skipped.push(skipped);
            }
        }
    }

    report.total = records.len();
    report.scored = report.entries.len();
    report.matches = report.entries.iter().filter(|e| e.result.is_match).count();

    Ok(report)
}

fn score_one(
    index: usize,
    record: &SubmissionRecord,
    options: BatchOptions,
) -> std::result::Result<ScoredSubmission, SkippedRecord> {
    if options.strict {
        validate_submission_with_limit(record, options.max_attachments).map_err(|e| SkippedRecord {
            index,
            reason: e.to_string(),
        })?;
    }

    let result = determine_match(record);
    tracing::debug!(
        index,
        style = %record.influencer_style,
        audience = %record.influencer_audience,
        score = result.score,
        "scored"
    );

    Ok(ScoredSubmission { submission: record.clone(), result })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(strict: bool) -> BatchOptions {
        BatchOptions { strict, max_attachments: 5, show_progress: false }
    }

    fn record(style: &str) -> SubmissionRecord {
        SubmissionRecord {
            product_description: "simple and clean".into(),
            influencer_style: style.into(),
            influencer_audience: "Millennials".into(),
            product_photo_count: 3,
            influencer_content_count: 2,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_batch() {
        let err = score_batch(&[], options(false)).unwrap_err();
        assert!(matches!(err, BrandMatchError::EmptyBatch(_)));
    }

    #[test]
    fn test_batch_keeps_input_order() {
        let records: Vec<_> = (0..20)
            .map(|i| SubmissionRecord { product_name: format!("p{}", i), ..record("Minimalist") })
            .collect();

        let report = score_batch(&records, options(false)).unwrap();
        assert_eq!(report.total, 20);
        assert_eq!(report.scored, 20);
        for (i, entry) in report.entries.iter().enumerate() {
            assert_eq!(entry.submission.product_name, format!("p{}", i));
        }
    }

    #[test]
    fn test_batch_counts_matches() {
        // Minimalist + simple → 100, Millennials → 75 → score 90
        // Gothic → 80, Millennials → 75 → score 78
        let records = vec![record("Minimalist"), record("Gothic")];
        let report = score_batch(&records, options(false)).unwrap();
        assert_eq!(report.entries[0].result.score, 90);
        assert_eq!(report.entries[1].result.score, 78);
        assert_eq!(report.matches, 2);
    }

    #[test]
    fn test_strict_batch_skips_unknown_labels() {
        let records = vec![record("Minimalist"), record("Gothic")];
        let report = score_batch(&records, options(true)).unwrap();
        assert_eq!(report.total, 2);
        assert_eq!(report.scored, 1);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].index, 1);
        assert!(report.skipped[0].reason.contains("Gothic"));
    }
}
