//! 添付ファイルの取り込み
//!
//! 指定パス（ファイルまたはフォルダ）から受け付け可能なファイルを集め、
//! 上限件数で切り詰める。ファイルの中身は読まない。

mod media;

pub use media::{detect_media_type, MediaType};

use crate::error::{BrandMatchError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 添付の用途
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    /// 商品写真（image/*）
    ProductPhoto,
    /// インフルエンサーの素材（image/*, video/*）
    InfluencerContent,
}

impl AttachmentKind {
    pub fn accepts(&self, media: MediaType) -> bool {
        match self {
            AttachmentKind::ProductPhoto => media == MediaType::Image,
            AttachmentKind::InfluencerContent => true,
        }
    }

    /// accept 属性表記
    pub fn accept_label(&self) -> &'static str {
        match self {
            AttachmentKind::ProductPhoto => "image/*",
            AttachmentKind::InfluencerContent => "image/*,video/*",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Attachment {
    pub path: PathBuf,
    pub file_name: String,
    pub media: MediaType,
}

/// 取り込み結果
#[derive(Debug, Clone, Default)]
pub struct AttachmentSet {
    pub accepted: Vec<Attachment>,
    /// 種別が合わず除外したファイル
    pub rejected: Vec<PathBuf>,
    /// 上限超過で切り捨てた件数
    pub truncated: usize,
}

impl AttachmentSet {
    pub fn count(&self) -> u32 {
        self.accepted.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }
}

/// パス群から添付を集める
///
/// フォルダは直下のみをファイル名順に見る。指定順は保ったまま、
/// 先頭から `max_files` 件までを採用する。
pub fn collect_attachments(
    paths: &[PathBuf],
    kind: AttachmentKind,
    max_files: u32,
) -> Result<AttachmentSet> {
    let max_files = max_files as usize;
    let mut set = AttachmentSet::default();

    for path in paths {
        for file in expand_path(path)? {
            let file_name = file
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();

            match detect_media_type(&file) {
                Some(media) if kind.accepts(media) => {
                    set.accepted.push(Attachment { path: file, file_name, media });
                }
                _ => set.rejected.push(file),
            }
        }
    }

    if set.accepted.len() > max_files {
        set.truncated = set.accepted.len() - max_files;
        set.accepted.truncate(max_files);
    }

    Ok(set)
}

fn expand_path(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    if !path.is_dir() {
        return Err(BrandMatchError::FileNotFound(path.display().to_string()));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect();

    // ファイル名でソート
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}
