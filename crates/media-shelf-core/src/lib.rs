pub mod config;
pub mod error;
pub mod library;
pub mod media;
pub mod metadata;
pub mod models;
pub mod progress;
pub mod scanner;

pub use crate::config::AppConfig;
pub use error::Error;
pub use library::{Library, ListQuery, SortField, SortOrder};
pub use models::{FileInfo, FileRecord, PageResult, RenameKind, RenameOutcome};
pub use progress::{ProgressReporter, SilentReporter};
