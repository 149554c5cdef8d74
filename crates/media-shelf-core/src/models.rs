use crate::media;
use serde::Serialize;
use std::fs::Metadata;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

/// A file discovered below the library root.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileRecord {
    pub filename: String,
    /// The only field that should be used for filesystem operations.
    pub full_path: PathBuf,
    pub relative_path: String,
    pub directory: String,
    pub extension: String,
    pub size: u64,
    /// Seconds since the Unix epoch.
    pub modified: f64,
    pub is_video: bool,
    pub is_subtitle: bool,
}

impl FileRecord {
    /// Build a record for `path` from already-fetched metadata. `relative_path`
    /// falls back to the path as given when it does not live under `root`.
    pub fn from_metadata(root: &Path, path: &Path, metadata: &Metadata) -> Self {
        let filename = path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default();

        let relative = path.strip_prefix(root).unwrap_or(path);
        let directory = relative
            .parent()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();

        let extension = media::normalized_extension(path).unwrap_or_default();

        let modified = metadata
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);

        FileRecord {
            filename,
            full_path: path.to_path_buf(),
            relative_path: relative.to_string_lossy().into_owned(),
            directory,
            is_video: media::is_video_extension(&extension),
            is_subtitle: media::is_subtitle_extension(&extension),
            extension,
            size: metadata.len(),
            modified,
        }
    }
}

/// Pagination metadata for one [`PageResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub current_page: usize,
    pub per_page: usize,
    pub total_files: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Aggregates over the whole filtered set, not just the returned page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total_files: usize,
    pub video_files: usize,
    pub subtitle_files: usize,
    pub total_size: u64,
}

impl CatalogStats {
    pub fn collect(records: &[FileRecord]) -> Self {
        records.iter().fold(CatalogStats::default(), |mut stats, r| {
            stats.total_files += 1;
            stats.video_files += usize::from(r.is_video);
            stats.subtitle_files += usize::from(r.is_subtitle);
            stats.total_size += r.size;
            stats
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageResult {
    pub files: Vec<FileRecord>,
    pub pagination: Pagination,
    pub stats: CatalogStats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenameKind {
    Main,
    Subtitle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenamedFile {
    pub old: PathBuf,
    pub new: PathBuf,
    #[serde(rename = "type")]
    pub kind: RenameKind,
}

/// Result of a paired rename. `renamed_files` lists exactly the renames that
/// completed, main file first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameOutcome {
    pub success: bool,
    pub message: String,
    pub renamed_files: Vec<RenamedFile>,
}

impl RenameOutcome {
    pub fn failed(message: impl Into<String>) -> Self {
        RenameOutcome {
            success: false,
            message: message.into(),
            renamed_files: Vec::new(),
        }
    }
}

/// Companion subtitle state, only present for video files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubtitleLink {
    pub has_subtitle: bool,
    pub subtitle_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileInfo {
    #[serde(flatten)]
    pub record: FileRecord,
    #[serde(flatten)]
    pub subtitle: Option<SubtitleLink>,
}
