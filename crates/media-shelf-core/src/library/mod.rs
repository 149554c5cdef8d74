//! Query and rename engine over a library root.
//!
//! Nothing is cached between calls: each query re-walks the tree, so the
//! catalog can never be stale and changing the root takes effect immediately.

mod info;
mod query;
mod rename;
mod subtitle;

pub use info::file_info;
pub use query::{build_page, ListQuery, SortField, SortOrder};
pub use rename::rename_with_subtitle;
pub use subtitle::find_related_subtitle;

use crate::config::AppConfig;
use crate::models::{FileInfo, FileRecord, PageResult, RenameOutcome};
use crate::progress::{ProgressReporter, SilentReporter};
use crate::scanner;
use std::path::{Path, PathBuf};
use tracing::info;

pub struct Library {
    root: PathBuf,
}

impl Library {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.library_path)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Point the library at a new root. The next scan uses it.
    pub fn set_root(&mut self, root: impl Into<PathBuf>) {
        self.root = root.into();
        info!("Library path updated to: {}", self.root.display());
    }

    /// Fresh walk of the whole library.
    pub fn scan(&self, reporter: &dyn ProgressReporter) -> Vec<FileRecord> {
        scanner::scan_library(&self.root, reporter)
    }

    pub fn query(&self, query: &ListQuery) -> PageResult {
        self.query_with_progress(query, &SilentReporter)
    }

    pub fn query_with_progress(
        &self,
        query: &ListQuery,
        reporter: &dyn ProgressReporter,
    ) -> PageResult {
        build_page(self.scan(reporter), query)
    }

    pub fn find_related_subtitle(&self, video_path: &Path) -> Option<PathBuf> {
        find_related_subtitle(video_path)
    }

    pub fn rename(&self, old_path: &Path, new_name: &str, rename_subtitle: bool) -> RenameOutcome {
        rename_with_subtitle(old_path, new_name, rename_subtitle)
    }

    pub fn file_info(&self, path: &Path) -> Option<FileInfo> {
        file_info(&self.root, path)
    }
}
