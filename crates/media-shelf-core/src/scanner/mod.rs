mod walk;

pub use walk::{scan_library, PROGRESS_INTERVAL};
