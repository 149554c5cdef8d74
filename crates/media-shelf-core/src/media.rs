//! Extension-based file classification.
//!
//! All extensions are stored normalized: lower-case with the leading dot.

use std::path::Path;

pub const VIDEO_EXTENSIONS: &[&str] = &[
    ".mp4", ".mkv", ".avi", ".mov", ".wmv", ".flv", ".webm", ".m4v", ".mpg", ".mpeg",
];

/// Also the lookup priority when several companion subtitles share a stem.
pub const SUBTITLE_EXTENSIONS: &[&str] = &[".srt", ".vtt", ".ass", ".ssa", ".sub"];

/// Catalogued but neither video nor subtitle.
pub const OTHER_EXTENSIONS: &[&str] = &[
    ".mp3", ".flac", ".wav", ".aac", ".m4a", ".pdf", ".epub", ".mobi",
];

/// Lower-cased extension of `path` including the dot, or `None` when the file
/// has no extension.
pub fn normalized_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
}

pub fn is_video_extension(ext: &str) -> bool {
    VIDEO_EXTENSIONS.contains(&ext)
}

pub fn is_subtitle_extension(ext: &str) -> bool {
    SUBTITLE_EXTENSIONS.contains(&ext)
}

pub fn is_supported_extension(ext: &str) -> bool {
    is_video_extension(ext) || is_subtitle_extension(ext) || OTHER_EXTENSIONS.contains(&ext)
}

pub fn is_video(path: &Path) -> bool {
    normalized_extension(path).is_some_and(|ext| is_video_extension(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_extension_lowercases_and_prefixes_dot() {
        assert_eq!(
            normalized_extension(Path::new("/lib/Movie.MKV")).as_deref(),
            Some(".mkv")
        );
        assert_eq!(
            normalized_extension(Path::new("show.s01e01.Srt")).as_deref(),
            Some(".srt")
        );
        assert_eq!(normalized_extension(Path::new("README")), None);
        assert_eq!(normalized_extension(Path::new(".hidden")), None);
    }

    #[test]
    fn test_classification_sets_are_disjoint() {
        for ext in VIDEO_EXTENSIONS {
            assert!(!is_subtitle_extension(ext), "{ext} is both video and subtitle");
            assert!(!OTHER_EXTENSIONS.contains(ext));
        }
        for ext in SUBTITLE_EXTENSIONS {
            assert!(!OTHER_EXTENSIONS.contains(ext));
        }
    }

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_extension(".mp4"));
        assert!(is_supported_extension(".ssa"));
        assert!(is_supported_extension(".epub"));
        assert!(!is_supported_extension(".txt"));
        assert!(!is_supported_extension(".nfo"));
        assert!(!is_supported_extension("mp4"));
    }

    #[test]
    fn test_is_video_is_case_insensitive() {
        assert!(is_video(Path::new("a/b/Film.MP4")));
        assert!(!is_video(Path::new("a/b/Film.srt")));
        assert!(!is_video(Path::new("a/b/Film")));
    }
}
