use clap::Parser;
use brand_match::{batch, cli, config, error, export, logging, report, submission, wizard};
use brand_match_common::{determine_match, validate_submission_with_limit, ScoredSubmission, SubmissionRecord};
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Score {
            input,
            description,
            style,
            audience,
            photos,
            content,
            photo_count,
            content_count,
            format,
            details,
            strict,
            output,
        } => {
            let base = match input {
                Some(path) => submission::load_submission(&path)?,
                None => SubmissionRecord::default(),
            };
            let args = submission::SubmissionArgs {
                description,
                style,
                audience,
                photos,
                content,
                photo_count,
                content_count,
            };
            let record = submission::assemble_submission(base, &args, config.max_attachments)?;

            if strict || config.strict_labels {
                validate_submission_with_limit(&record, config.max_attachments)?;
            }

            if config.analysis_delay_ms > 0 {
                std::thread::sleep(std::time::Duration::from_millis(config.analysis_delay_ms));
            }

            let result = determine_match(&record);
            tracing::debug!(
                style = %record.influencer_style,
                audience = %record.influencer_audience,
                style_compatibility = result.style_compatibility,
                audience_compatibility = result.audience_compatibility,
                score = result.score,
                "scored"
            );

            match format.unwrap_or(config.default_format) {
                OutputFormat::Text => println!("{}", report::render_text(&result, details)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            }

            if let Some(path) = output {
                let scored = ScoredSubmission { submission: record, result };
                export::json::write_json(&scored, &path)?;
                println!("✔ 結果を保存: {}", path.display());
            }
        }

        Commands::Wizard { save, details } => {
            println!("🎯 brand-match - 相性判定ウィザード");

            let scored = wizard::run_wizard(&config, details)?;

            if let Some(path) = save {
                export::json::write_json(&scored, &path)?;
                println!("\n✔ 結果を保存: {}", path.display());
            }
        }

        Commands::Batch { input, format, output, title, strict } => {
            println!("📋 brand-match - 一括判定\n");

            println!("[1/3] 入力を読み込み中...");
            let records = batch::load_submissions(&input)?;
            println!("✔ {}件のレコードを検出\n", records.len());

            println!("[2/3] 判定中...");
            let options = batch::BatchOptions {
                strict: strict || config.strict_labels,
                max_attachments: config.max_attachments,
                show_progress: true,
            };
            let report = batch::score_batch(&records, options)?;
            println!(
                "✔ 判定完了: {}件中 {}件がマッチ{}\n",
                report.scored,
                report.matches,
                if report.skipped.is_empty() {
                    String::new()
                } else {
                    format!("（{}件を除外）", report.skipped.len())
                }
            );

            if cli.verbose {
                for skipped in &report.skipped {
                    println!("  - #{}: {}", skipped.index + 1, skipped.reason);
                }
            }

            println!("[3/3] 結果を保存中...");
            let output_dir = output.unwrap_or_else(|| {
                input.parent().map(|p| p.to_path_buf()).unwrap_or_else(|| std::path::PathBuf::from("."))
            });
            export::export_report(&report, &format, &output_dir, &title)?;

            println!("\n✅ 完了");
        }

        Commands::Labels { keywords } => {
            println!("{}", report::render_label_table(keywords));
        }

        Commands::Config { show, set_strict, set_max_attachments, reset } => {
            let mut config = if reset { Config::default() } else { config };
            let mut changed = reset;

            if let Some(strict) = set_strict {
                config.strict_labels = strict;
                changed = true;
            }

            if let Some(max) = set_max_attachments {
                config.set_max_attachments(max)?;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  厳格モード: {}", if config.strict_labels { "有効" } else { "無効" });
                println!("  添付上限: {}件", config.max_attachments);
                println!("  ステップ切り替え待ち: {}ms", config.transition_delay_ms);
                println!("  判定前の待ち: {}ms", config.analysis_delay_ms);
                println!("  既定の出力形式: {}", config.default_format);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
