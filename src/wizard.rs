//! 対話式の入力ウィザード
//!
//! 商品 → インフルエンサー → 判定結果 の3ステップ。ステップ間の待ち時間は
//! 表示上の演出で、判定内容には影響しない。

use crate::config::Config;
use crate::error::{BrandMatchError, Result};
use crate::intake::{collect_attachments, AttachmentKind, AttachmentSet};
use crate::report;
use brand_match_common::{determine_match, InfluencerAudience, InfluencerStyle, ScoredSubmission, SubmissionRecord};
use dialoguer::{Confirm, Input, Select};
use std::path::PathBuf;
use std::time::Duration;

/// ウィザードのステップ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Product,
    Influencer,
    Results,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [WizardStep::Product, WizardStep::Influencer, WizardStep::Results];

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Product => "Product Details",
            WizardStep::Influencer => "Influencer Content",
            WizardStep::Results => "Match Results",
        }
    }
}

/// 直線的なステップ移動（両端で止まる）
#[derive(Debug, Clone, Default)]
pub struct StepNavigator {
    index: usize,
}

impl StepNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> WizardStep {
        WizardStep::ALL[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index == WizardStep::ALL.len() - 1
    }

    /// 次へ（最後のステップでは何もしない）
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// 前へ（最初のステップでは何もしない）
    pub fn previous(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// 進捗率（0-100）
    pub fn progress(&self) -> f32 {
        self.index as f32 / (WizardStep::ALL.len() - 1) as f32 * 100.0
    }
}

/// 入力欄ごとのエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// 商品ステップの必須チェック
pub fn validate_product_step(record: &SubmissionRecord) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if record.product_name.trim().is_empty() {
        errors.push(FieldError { field: "productName", message: "Product name is required." });
    }
    if record.product_description.trim().is_empty() {
        errors.push(FieldError {
            field: "productDescription",
            message: "Product description is required.",
        });
    }
    if record.product_photo_count == 0 {
        errors.push(FieldError {
            field: "productPhotos",
            message: "Please upload at least one product photo.",
        });
    }

    errors
}

/// カンマ区切りのパス入力を分解
pub fn parse_path_list(input: &str) -> Vec<PathBuf> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// ウィザードを実行して判定結果を返す
pub fn run_wizard(config: &Config, show_details: bool) -> Result<ScoredSubmission> {
    let mut navigator = StepNavigator::new();
    let mut record = SubmissionRecord::default();
    let mut photo_input = String::new();
    let mut content_input = String::new();

    loop {
        let step = navigator.current();
        println!(
            "\n[{}/{}] {} ({:.0}%)",
            navigator.index() + 1,
            WizardStep::ALL.len(),
            step.title(),
            navigator.progress()
        );

        match step {
            WizardStep::Product => {
                record.product_name = prompt_text("Product Name", &record.product_name)?;
                record.product_description =
                    prompt_text("Product Description", &record.product_description)?;
                photo_input = prompt_text(
                    "Product Photos (files or folders, comma-separated)",
                    &photo_input,
                )?;
                let photos = gather(&photo_input, AttachmentKind::ProductPhoto, config)?;
                record.product_photo_count = photos.count();

                let errors = validate_product_step(&record);
                if !errors.is_empty() {
                    for e in &errors {
                        println!("  ⚠ {}", e.message);
                    }
                    continue;
                }
            }
            WizardStep::Influencer => {
                record.influencer_name = prompt_text("Influencer Name", &record.influencer_name)?;
                record.influencer_description =
                    prompt_text("Influencer Description", &record.influencer_description)?;
                content_input = prompt_text(
                    "Influencer Content (files or folders, comma-separated)",
                    &content_input,
                )?;
                let content = gather(&content_input, AttachmentKind::InfluencerContent, config)?;
                record.influencer_content_count = content.count();

                let styles: Vec<&str> = InfluencerStyle::ALL.iter().map(|s| s.as_str()).collect();
                let style_idx = prompt_select("Influencer's Style", &styles, &record.influencer_style)?;
                record.influencer_style = styles[style_idx].to_string();

                let audiences: Vec<&str> = InfluencerAudience::ALL.iter().map(|a| a.as_str()).collect();
                let audience_idx = prompt_select(
                    "Influencer's Primary Audience",
                    &audiences,
                    &record.influencer_audience,
                )?;
                record.influencer_audience = audiences[audience_idx].to_string();

                let go_back = Select::new()
                    .with_prompt("Continue")
                    .items(&["Next", "Back"])
                    .default(0)
                    .interact()
                    .map_err(|e| BrandMatchError::Prompt(e.to_string()))?
                    == 1;
                if go_back {
                    transition(config);
                    navigator.previous();
                    continue;
                }
            }
            WizardStep::Results => {
                println!("Analyzing compatibility...");
                if config.analysis_delay_ms > 0 {
                    std::thread::sleep(Duration::from_millis(config.analysis_delay_ms));
                }

                let result = determine_match(&record);
                tracing::debug!(
                    style = result.style_compatibility,
                    audience = result.audience_compatibility,
                    score = result.score,
                    "wizard scored"
                );

                let details = show_details
                    || Confirm::new()
                        .with_prompt("Show Details")
                        .default(true)
                        .interact()
                        .map_err(|e| BrandMatchError::Prompt(e.to_string()))?;

                println!("\n{}", report::render_text(&result, details));
                return Ok(ScoredSubmission { submission: record, result });
            }
        }

        transition(config);
        navigator.next();
    }
}

fn transition(config: &Config) {
    if config.transition_delay_ms > 0 {
        std::thread::sleep(Duration::from_millis(config.transition_delay_ms));
    }
}

fn gather(input: &str, kind: AttachmentKind, config: &Config) -> Result<AttachmentSet> {
    let paths = parse_path_list(input);
    let set = match collect_attachments(&paths, kind, config.max_attachments) {
        Ok(set) => set,
        Err(BrandMatchError::FileNotFound(path)) => {
            // 入力し直せるようにエラーにはしない
            println!("  ⚠ ファイルが見つかりません: {}", path);
            return Ok(AttachmentSet::default());
        }
        Err(e) => return Err(e),
    };

    for rejected in &set.rejected {
        println!("  - 対象外のファイル ({}): {}", kind.accept_label(), rejected.display());
    }
    if set.truncated > 0 {
        println!(
            "  - 上限{}件を超えた{}件を除外しました",
            config.max_attachments, set.truncated
        );
    }
    println!("  ✔ {}件を添付", set.count());

    Ok(set)
}

fn prompt_text(prompt: &str, initial: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| BrandMatchError::Prompt(e.to_string()))
}

fn prompt_select(prompt: &str, items: &[&str], current: &str) -> Result<usize> {
    let default = items.iter().position(|i| *i == current).unwrap_or(0);
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact()
        .map_err(|e| BrandMatchError::Prompt(e.to_string()))
}
