//! 添付ファイルの種別判定
//!
//! ブラウザの accept 属性（image/*, video/*）を拡張子で近似する。

use std::path::Path;

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "m4v", "webm", "avi", "mkv"];

/// メディアの大分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Image,
    Video,
}

/// ファイルのメディア種別（判定できなければ None）
pub fn detect_media_type(path: &Path) -> Option<MediaType> {
    if image::ImageFormat::from_path(path).is_ok() {
        return Some(MediaType::Image);
    }

    let ext = path.extension()?.to_string_lossy().to_lowercase();
    if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaType::Video)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_images() {
        assert_eq!(detect_media_type(Path::new("a.jpg")), Some(MediaType::Image));
        assert_eq!(detect_media_type(Path::new("a.JPEG")), Some(MediaType::Image));
        assert_eq!(detect_media_type(Path::new("a.png")), Some(MediaType::Image));
        assert_eq!(detect_media_type(Path::new("a.webp")), Some(MediaType::Image));
    }

    #[test]
    fn test_detect_videos() {
        assert_eq!(detect_media_type(Path::new("clip.mp4")), Some(MediaType::Video));
        assert_eq!(detect_media_type(Path::new("clip.MOV")), Some(MediaType::Video));
    }

    #[test]
    fn test_detect_other() {
        assert_eq!(detect_media_type(Path::new("notes.txt")), None);
        assert_eq!(detect_media_type(Path::new("README")), None);
    }
}
