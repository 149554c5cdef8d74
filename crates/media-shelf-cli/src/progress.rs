use indicatif::{ProgressBar, ProgressStyle};
use media_shelf_core::ProgressReporter;
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown while the library is walked. File count is unknown upfront.
pub struct CliReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl CliReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn with_bar(&self, f: impl FnOnce(&mut Option<ProgressBar>)) {
        if let Ok(mut guard) = self.bar.lock() {
            f(&mut guard);
        }
    }
}

impl ProgressReporter for CliReporter {
    fn on_scan_start(&self, root: &str) {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
        }
        pb.set_message(format!("Scanning {}...", root));
        pb.enable_steady_tick(Duration::from_millis(80));
        self.with_bar(|bar| {
            if let Some(old) = bar.replace(pb) {
                old.finish_and_clear();
            }
        });
    }

    fn on_scan_progress(&self, files_found: usize, _current_path: &str) {
        self.with_bar(|bar| {
            if let Some(pb) = bar.as_ref() {
                pb.set_message(format!("Scanning... {} files found", files_found));
            }
        });
    }

    fn on_scan_complete(&self, total_files: usize, duration_secs: f64) {
        self.with_bar(|bar| {
            if let Some(pb) = bar.take() {
                pb.finish_and_clear();
            }
        });
        eprintln!(
            "  \x1b[32m✓\x1b[0m Scan complete: {} files in {:.2}s",
            total_files, duration_secs
        );
    }
}
