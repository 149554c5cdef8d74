/// Trait for reporting library scan progress.
///
/// The CLI implements it with an indicatif spinner; library callers that don't
/// care pass [`SilentReporter`]. All methods default to no-ops.
pub trait ProgressReporter: Send + Sync {
    fn on_scan_start(&self, _root: &str) {}
    fn on_scan_progress(&self, _files_found: usize, _current_path: &str) {}
    fn on_scan_complete(&self, _total_files: usize, _duration_secs: f64) {}
}

/// No-op progress reporter for silent operation.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {}
