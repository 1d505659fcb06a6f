//! 診断ログの初期化
//!
//! 利用者向けの進捗表示は println! のまま。ここで設定するのは
//! tracing の出力（標準エラー）だけ。

use tracing_subscriber::{fmt, EnvFilter};

/// `RUST_LOG` があればそれを、なければ verbose に応じて debug / warn を使う
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();
}
