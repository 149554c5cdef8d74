use super::subtitle::find_related_subtitle;
use crate::models::{FileInfo, FileRecord, SubtitleLink};
use std::fs;
use std::path::Path;
use tracing::{debug, error};

/// Stat a single path without scanning the library. Videos also report their
/// companion subtitle. Returns `None` when the path does not exist.
pub fn file_info(root: &Path, path: &Path) -> Option<FileInfo> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!("File not found: {}", path.display());
            return None;
        }
        Err(err) => {
            error!("Error getting metadata for {}: {}", path.display(), err);
            return None;
        }
    };

    let record = FileRecord::from_metadata(root, path, &metadata);
    let subtitle = record.is_video.then(|| {
        let subtitle_path = find_related_subtitle(path);
        SubtitleLink {
            has_subtitle: subtitle_path.is_some(),
            subtitle_path,
        }
    });

    Some(FileInfo { record, subtitle })
}
