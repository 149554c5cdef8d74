use crate::media::SUBTITLE_EXTENSIONS;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Look for `<dir>/<stem><ext>` next to the video for each subtitle extension,
/// in `SUBTITLE_EXTENSIONS` priority order. Language-tagged names such as
/// `movie.en.srt` are not considered.
pub fn find_related_subtitle(video_path: &Path) -> Option<PathBuf> {
    let stem = video_path.file_stem()?;
    let dir = video_path.parent().unwrap_or_else(|| Path::new(""));

    let found = SUBTITLE_EXTENSIONS.iter().find_map(|ext| {
        let mut name = stem.to_os_string();
        name.push(ext);
        let candidate = dir.join(name);
        candidate.is_file().then_some(candidate)
    });

    if found.is_none() {
        debug!("No subtitle found for {}", video_path.display());
    }
    found
}
