//! JSON/Excel出力の統合テスト
//!
//! 一括判定から書き出しまでを通しで検証

use brand_match::batch::{score_batch, BatchOptions, BatchReport};
use brand_match::cli::ExportFormat;
use brand_match::export::{excel, export_report, json};
use brand_match_common::SubmissionRecord;
use tempfile::tempdir;

fn create_test_record(index: usize) -> SubmissionRecord {
    SubmissionRecord {
        product_name: format!("Product {}", index),
        product_description: "A simple, clean serum made with natural ingredients".to_string(),
        product_photo_count: 3,
        influencer_name: format!("Influencer {}", index),
        influencer_description: "Calm daily routines".to_string(),
        influencer_style: if index % 2 == 0 { "Minimalist" } else { "Edgy/Alternative" }.to_string(),
        influencer_audience: "Eco-Conscious".to_string(),
        influencer_content_count: index as u32,
    }
}

fn create_test_report(count: usize) -> BatchReport {
    let records: Vec<SubmissionRecord> = (1..=count).map(create_test_record).collect();
    let options = BatchOptions { strict: false, max_attachments: 5, show_progress: false };
    score_batch(&records, options).expect("判定に失敗")
}

#[test]
fn test_json_export_roundtrip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("report.json");
    let report = create_test_report(4);

    json::write_json(&report, &output_path).expect("JSON出力に失敗");

    let content = std::fs::read_to_string(&output_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["total"], 4);
    assert_eq!(value["scored"], 4);
    assert_eq!(value["entries"].as_array().unwrap().len(), 4);
    // キーはcamelCase
    assert!(value["entries"][0]["result"]["styleCompatibility"].is_number());
    assert!(value["entries"][0]["submission"]["influencerStyle"].is_string());
}

#[test]
fn test_excel_generation() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("report.xlsx");
    let report = create_test_report(5);

    let result = excel::generate_excel(&report, &output_path, "テストレポート");
    assert!(result.is_ok(), "Excel生成に失敗: {:?}", result.err());

    let metadata = std::fs::metadata(&output_path).expect("ファイルメタデータ取得失敗");
    assert!(metadata.len() > 0, "Excelファイルが空");
}

#[test]
fn test_export_both_into_directory() {
    let dir = tempdir().expect("Failed to create temp dir");
    let report = create_test_report(2);

    let written = export_report(&report, &ExportFormat::Both, dir.path(), "summary").unwrap();

    assert_eq!(written.len(), 2);
    assert!(dir.path().join("summary.json").exists());
    assert!(dir.path().join("summary.xlsx").exists());
}

#[test]
fn test_export_json_to_explicit_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("custom.json");
    let report = create_test_report(1);

    let written = export_report(&report, &ExportFormat::Json, &output_path, "ignored").unwrap();

    assert_eq!(written, vec![output_path.clone()]);
    assert!(output_path.exists());
    assert!(!dir.path().join("ignored.json").exists());
}

#[test]
fn test_batch_report_counts_matches() {
    let report = create_test_report(4);
    let matches = report.entries.iter().filter(|e| e.result.is_match).count();

    assert_eq!(report.total, 4);
    assert_eq!(report.matches, matches);
    // 入力順を保つ
    for (i, entry) in report.entries.iter().enumerate() {
        assert_eq!(entry.submission.product_name, format!("Product {}", i + 1));
    }
}
