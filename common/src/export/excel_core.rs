//! 一括判定レポートのExcel生成（共通ライブラリ）
//!
//! 1行1件の一覧シートと、件数を集計したサマリーシートを作る。

use crate::types::ScoredSubmission;
use rust_xlsxwriter::*;

/// 一覧シートの列定義
pub struct ReportColumn {
    pub key: &'static str,
    pub label: &'static str,
    pub width: f64,
}

pub const REPORT_COLUMNS: &[ReportColumn] = &[
    ReportColumn { key: "index", label: "#", width: 5.0 },
    ReportColumn { key: "productName", label: "Product", width: 22.0 },
    ReportColumn { key: "influencerName", label: "Influencer", width: 22.0 },
    ReportColumn { key: "influencerStyle", label: "Style", width: 18.0 },
    ReportColumn { key: "influencerAudience", label: "Audience", width: 18.0 },
    ReportColumn { key: "score", label: "Score", width: 8.0 },
    ReportColumn { key: "styleCompatibility", label: "Style %", width: 9.0 },
    ReportColumn { key: "audienceCompatibility", label: "Audience %", width: 11.0 },
    ReportColumn { key: "verdict", label: "Verdict", width: 12.0 },
    ReportColumn { key: "strengths", label: "Strengths", width: 60.0 },
    ReportColumn { key: "weaknesses", label: "Areas for Improvement", width: 60.0 },
];

/// 判定ラベル
pub fn verdict_label(is_match: bool) -> &'static str {
    if is_match { "MATCH" } else { "NO MATCH" }
}

enum CellValue<'a> {
    Text(std::borrow::Cow<'a, str>),
    Number(f64),
}

fn cell_value<'a>(index: usize, entry: &'a ScoredSubmission, key: &str) -> CellValue<'a> {
    let s = &entry.submission;
    let r = &entry.result;
    match key {
        "index" => CellValue::Number((index + 1) as f64),
        "productName" => CellValue::Text(s.product_name.as_str().into()),
        "influencerName" => CellValue::Text(s.influencer_name.as_str().into()),
        "influencerStyle" => CellValue::Text(s.influencer_style.as_str().into()),
        "influencerAudience" => CellValue::Text(s.influencer_audience.as_str().into()),
        "score" => CellValue::Number(f64::from(r.score)),
        "styleCompatibility" => CellValue::Number(f64::from(r.style_compatibility)),
        "audienceCompatibility" => CellValue::Number(f64::from(r.audience_compatibility)),
        "verdict" => CellValue::Text(verdict_label(r.is_match).into()),
        "strengths" => CellValue::Text(bullet_lines(&r.strengths).into()),
        "weaknesses" => CellValue::Text(bullet_lines(&r.weaknesses).into()),
        _ => CellValue::Text("-".into()),
    }
}

/// サマリーシートの行
///
/// 入力件数は判定済みと除外の合計。平均は判定済みのみで計算する。
fn summary_rows<'a>(
    entries: &[ScoredSubmission],
    skipped: usize,
    generated_at: &'a str,
) -> Vec<(&'static str, CellValue<'a>)> {
    let matches = entries.iter().filter(|e| e.result.is_match).count();
    let average = if entries.is_empty() {
        0.0
    } else {
        entries.iter().map(|e| f64::from(e.result.score)).sum::<f64>() / entries.len() as f64
    };

    vec![
        ("Generated", CellValue::Text(generated_at.into())),
        ("Submissions", CellValue::Number((entries.len() + skipped) as f64)),
        ("Scored", CellValue::Number(entries.len() as f64)),
        ("Skipped", CellValue::Number(skipped as f64)),
        ("Matches", CellValue::Number(matches as f64)),
        ("Average score", CellValue::Number((average * 10.0).round() / 10.0)),
    ]
}

fn bullet_lines(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("• {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Excelをバッファに生成
///
/// # Arguments
/// * `entries` - 判定済みレコード
/// * `skipped` - 検証で除外した件数
/// * `title` - サマリーシートの見出し
/// * `generated_at` - 生成日時（表示用の文字列）
pub fn generate_report_buffer(
    entries: &[ScoredSubmission],
    skipped: usize,
    title: &str,
    generated_at: &str,
) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let title_format = Format::new().set_bold().set_font_size(14.0);

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0x555555))
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xAAAAAA));

    let value_format = Format::new()
        .set_align(FormatAlign::Top)
        .set_text_wrap()
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let match_format = value_format.clone().set_font_color(Color::RGB(0x0B7A3E)).set_bold();
    let no_match_format = value_format.clone().set_font_color(Color::RGB(0xC0392B)).set_bold();

    let summary = workbook.add_worksheet();
    summary.set_name("Summary")
        .map_err(|e| format!("シート名設定エラー: {}", e))?;
    summary.set_column_width(0, 20.0)
        .map_err(|e| format!("列幅設定エラー: {}", e))?;
    summary.set_column_width(1, 32.0)
        .map_err(|e| format!("列幅設定エラー: {}", e))?;
    summary.write_string_with_format(0, 0, title, &title_format)
        .map_err(|e| format!("見出し書き込みエラー: {}", e))?;

    let rows = summary_rows(entries, skipped, generated_at);
    for (i, (label, value)) in rows.iter().enumerate() {
        let row = (i + 2) as u32;
        summary.write_string_with_format(row, 0, *label, &header_format)
            .map_err(|e| format!("ラベル書き込みエラー: {}", e))?;
        write_cell(summary, row, 1, value, &value_format)?;
    }

    // 一覧
    let sheet = workbook.add_worksheet();
    sheet.set_name("Results")
        .map_err(|e| format!("シート名設定エラー: {}", e))?;

    for (col, column) in REPORT_COLUMNS.iter().enumerate() {
        let col = col as u16;
        sheet.set_column_width(col, column.width)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
        sheet.write_string_with_format(0, col, column.label, &header_format)
            .map_err(|e| format!("ヘッダー書き込みエラー: {}", e))?;
    }
    sheet.set_freeze_panes(1, 0)
        .map_err(|e| format!("ウィンドウ枠固定エラー: {}", e))?;

    for (index, entry) in entries.iter().enumerate() {
        let row = (index + 1) as u32;
        for (col, column) in REPORT_COLUMNS.iter().enumerate() {
            let format = match column.key {
                "verdict" if entry.result.is_match => &match_format,
                "verdict" => &no_match_format,
                _ => &value_format,
            };
            write_cell(sheet, row, col as u16, &cell_value(index, entry, column.key), format)?;
        }
    }

    // バッファに書き出し
    workbook.save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}

fn write_cell(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &CellValue,
    format: &Format,
) -> Result<(), String> {
    let written = match value {
        CellValue::Text(text) => sheet.write_string_with_format(row, col, text.as_ref(), format),
        CellValue::Number(n) => sheet.write_number_with_format(row, col, *n, format),
    };
    written
        .map(|_| ())
        .map_err(|e| format!("セル書き込みエラー: {}", e))
}
