use super::subtitle::find_related_subtitle;
use crate::media;
use crate::models::{RenameKind, RenameOutcome, RenamedFile};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Rename `old_path` within its directory to the stem of `new_name` plus the
/// file's original extension, taking the companion subtitle along when the
/// file is a video and `rename_subtitle` is set.
///
/// Only the main rename decides `success`. A subtitle that cannot follow is
/// logged and left where it is; the main rename is never rolled back.
pub fn rename_with_subtitle(
    old_path: &Path,
    new_name: &str,
    rename_subtitle: bool,
) -> RenameOutcome {
    if !old_path.exists() {
        warn!("Rename source not found: {}", old_path.display());
        return RenameOutcome::failed(format!("File not found: {}", old_path.display()));
    }

    let new_stem = match target_stem(new_name) {
        Ok(stem) => stem,
        Err(message) => {
            warn!("Rejected rename of {}: {}", old_path.display(), message);
            return RenameOutcome::failed(message);
        }
    };

    let dir = old_path.parent().unwrap_or_else(|| Path::new(""));
    let new_path = sibling_with_stem(dir, &new_stem, old_path.extension());

    if new_path != old_path && new_path.exists() {
        let new_filename = new_path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default();
        warn!("Rename destination occupied: {}", new_path.display());
        return RenameOutcome::failed(format!(
            "Destination file already exists: {}",
            new_filename
        ));
    }

    // Located before the main rename so the lookup runs against the old stem.
    let subtitle = if rename_subtitle && media::is_video(old_path) {
        find_related_subtitle(old_path)
    } else {
        None
    };

    if let Err(err) = fs::rename(old_path, &new_path) {
        error!("Error renaming file {}: {}", old_path.display(), err);
        return RenameOutcome::failed(format!("Error: {}", err));
    }
    info!("Renamed file: {} -> {}", old_path.display(), new_path.display());

    let mut renamed_files = vec![RenamedFile {
        old: old_path.to_path_buf(),
        new: new_path,
        kind: RenameKind::Main,
    }];

    if let Some(subtitle_path) = subtitle {
        if let Some(renamed) = rename_companion(&subtitle_path, dir, &new_stem) {
            renamed_files.push(renamed);
        }
    }

    RenameOutcome {
        success: true,
        message: format!("Successfully renamed {} file(s)", renamed_files.len()),
        renamed_files,
    }
}

fn rename_companion(
    subtitle_path: &Path,
    dir: &Path,
    new_stem: &OsString,
) -> Option<RenamedFile> {
    let new_subtitle_path = sibling_with_stem(dir, new_stem, subtitle_path.extension());

    if new_subtitle_path == subtitle_path {
        return None;
    }
    if new_subtitle_path.exists() {
        warn!(
            "Not renaming subtitle {}: {} already exists",
            subtitle_path.display(),
            new_subtitle_path.display()
        );
        return None;
    }

    match fs::rename(subtitle_path, &new_subtitle_path) {
        Ok(()) => {
            info!(
                "Renamed subtitle: {} -> {}",
                subtitle_path.display(),
                new_subtitle_path.display()
            );
            Some(RenamedFile {
                old: subtitle_path.to_path_buf(),
                new: new_subtitle_path,
                kind: RenameKind::Subtitle,
            })
        }
        Err(err) => {
            warn!("Failed to rename subtitle {}: {}", subtitle_path.display(), err);
            None
        }
    }
}

/// Stem of the requested name. Any extension the caller typed is dropped.
fn target_stem(new_name: &str) -> Result<OsString, String> {
    if new_name.contains('/') || new_name.contains(std::path::MAIN_SEPARATOR) {
        return Err(format!(
            "New name must not contain a path separator: {}",
            new_name
        ));
    }
    Path::new(new_name)
        .file_stem()
        .filter(|stem| !stem.is_empty())
        .map(|stem| stem.to_os_string())
        .ok_or_else(|| format!("Invalid new name: {:?}", new_name))
}

fn sibling_with_stem(dir: &Path, stem: &OsString, extension: Option<&OsStr>) -> PathBuf {
    let mut name = stem.clone();
    if let Some(ext) = extension {
        name.push(".");
        name.push(ext);
    }
    dir.join(name)
}
