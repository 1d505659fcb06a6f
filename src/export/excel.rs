//! Excel生成（CLI版）
//!
//! 共通ライブラリでバッファを作り、ファイルに書き出す。

use crate::batch::BatchReport;
use crate::error::{BrandMatchError, Result};
use brand_match_common::export::excel_core::generate_report_buffer;
use std::path::Path;

pub fn generate_excel(report: &BatchReport, output_path: &Path, title: &str) -> Result<()> {
    let buffer = generate_report_buffer(&report.entries, report.skipped.len(), title, &report.generated_at)
        .map_err(BrandMatchError::ExcelGeneration)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(output_path, buffer)
        .map_err(|e| BrandMatchError::ExcelGeneration(format!("ファイル書き込みエラー: {}", e)))?;

    Ok(())
}
