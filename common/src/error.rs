//! エラー型定義
//!
//! スコアリング自体は失敗しない。ここに並ぶのは厳格モードの入力検証エラー。
//! ファイル・設定まわりのエラーはCLI側で扱う。

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// 入力レコードの不正（厳格モードのみ）
    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Unknown influencer style: {0:?}")]
    UnknownStyle(String),

    #[error("Unknown influencer audience: {0:?}")]
    UnknownAudience(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_input() {
        let error = Error::InvalidInput {
            field: "productPhotoCount".to_string(),
            reason: "too many files".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Invalid input: productPhotoCount: too many files"
        );
    }

    #[test]
    fn test_error_display_unknown_labels() {
        let style = Error::UnknownStyle("Gothic".to_string());
        assert_eq!(format!("{}", style), "Unknown influencer style: \"Gothic\"");

        let audience = Error::UnknownAudience("Gamers".to_string());
        assert!(format!("{}", audience).contains("Gamers"));
    }
}
