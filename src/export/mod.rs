pub mod json;
pub mod excel;

use crate::batch::BatchReport;
use crate::cli::ExportFormat;
use crate::error::Result;
use std::path::{Path, PathBuf};

pub fn output_path_for_format(output: &Path, title: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", title, extension))
    } else {
        output.to_path_buf()
    }
}

pub fn output_paths_for_both(output: &Path, title: &str) -> (PathBuf, PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        let json_path = output.join(format!("{}.json", title));
        let excel_path = output.join(format!("{}.xlsx", title));
        (json_path, excel_path)
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(title);
        let json_path = parent.join(format!("{}.json", stem));
        let excel_path = parent.join(format!("{}.xlsx", stem));
        (json_path, excel_path)
    }
}

/// 一括判定レポートを書き出し、作成したファイルを返す
pub fn export_report(
    report: &BatchReport,
    format: &ExportFormat,
    output: &Path,
    title: &str,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    match format {
        ExportFormat::Json => {
            let output_path = output_path_for_format(output, title, "json");
            println!("- JSONを生成中...");
            json::write_json(report, &output_path)?;
            println!("✔ JSON出力: {}", output_path.display());
            written.push(output_path);
        }
        ExportFormat::Excel => {
            let output_path = output_path_for_format(output, title, "xlsx");
            println!("- Excelを生成中...");
            excel::generate_excel(report, &output_path, title)?;
            println!("✔ Excel出力: {}", output_path.display());
            written.push(output_path);
        }
        ExportFormat::Both => {
            let (json_path, excel_path) = output_paths_for_both(output, title);

            println!("- JSONを生成中...");
            json::write_json(report, &json_path)?;
            println!("✔ JSON出力: {}", json_path.display());

            println!("- Excelを生成中...");
            excel::generate_excel(report, &excel_path, title)?;
            println!("✔ Excel出力: {}", excel_path.display());

            written.push(json_path);
            written.push(excel_path);
        }
    }

    Ok(written)
}
