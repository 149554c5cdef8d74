use crate::media;
use crate::models::FileRecord;
use crate::progress::ProgressReporter;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, warn};
use walkdir::WalkDir;

/// Files catalogued between two `on_scan_progress` notifications.
pub const PROGRESS_INTERVAL: usize = 50;

/// Recursive walk below `root`, keeping regular files with a supported media
/// extension. Entries are visited in file-name order within each directory.
///
/// Symlinks to regular files are catalogued through the link; symlinked
/// directories are not descended into.
///
/// A missing root, or a root that is not a directory, yields an empty
/// catalog. Any I/O error stops the walk and the records gathered so far are
/// returned.
pub fn scan_library(root: &Path, reporter: &dyn ProgressReporter) -> Vec<FileRecord> {
    let mut records = Vec::new();

    if !root.exists() {
        warn!("Library path does not exist: {}", root.display());
        return records;
    }
    if !root.is_dir() {
        warn!("Library path is not a directory: {}", root.display());
        return records;
    }

    let root_display = root.to_string_lossy();
    reporter.on_scan_start(&root_display);
    let started = Instant::now();

    for entry_result in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(err) => {
                let at = err
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| root_display.to_string());
                error!("Error scanning library path at {}: {}", at, err);
                break;
            }
        };

        let file_type = entry.file_type();
        if !file_type.is_file() && !file_type.is_symlink() {
            continue;
        }

        let path = entry.path();
        let Some(ext) = media::normalized_extension(path) else {
            continue;
        };
        if !media::is_supported_extension(&ext) {
            continue;
        }

        // Symlinks are stat'ed through the link.
        let stat = if file_type.is_symlink() {
            fs::metadata(path)
        } else {
            entry.metadata().map_err(std::io::Error::from)
        };
        let metadata = match stat {
            Ok(metadata) => metadata,
            Err(err) => {
                error!("Error getting metadata for {}: {}", path.display(), err);
                break;
            }
        };
        if !metadata.is_file() {
            continue;
        }

        records.push(FileRecord::from_metadata(root, path, &metadata));

        if records.len() % PROGRESS_INTERVAL == 0 {
            reporter.on_scan_progress(records.len(), &path.to_string_lossy());
        }
    }

    let elapsed = started.elapsed().as_secs_f64();
    debug!(
        "Scanned {} in {:.2}s ({} media files)",
        root.display(),
        elapsed,
        records.len()
    );
    reporter.on_scan_complete(records.len(), elapsed);

    records
}
