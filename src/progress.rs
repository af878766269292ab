//! Progress reporting utilities

use indicatif::{ProgressBar, ProgressStyle};

/// Per-sheet row progress, drawn on stderr
#[derive(Debug)]
pub struct ScanProgress {
    enabled: bool,
    bar: Option<ProgressBar>,
}

impl ScanProgress {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, bar: None }
    }

    /// Progress reporter that never draws anything
    pub fn hidden() -> Self {
        Self::new(false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Replace any current bar with one for `sheet_name`
    pub fn start_sheet(&mut self, sheet_name: &str, row_count: usize) {
        self.finish_sheet();
        if self.enabled {
            self.bar = Some(create_progress_bar(row_count as u64, sheet_name));
        }
    }

    pub fn row_done(&self) {
        if let Some(pb) = &self.bar {
            pb.inc(1);
        }
    }

    pub fn finish_sheet(&mut self) {
        if let Some(pb) = self.bar.take() {
            pb.finish_and_clear();
        }
    }
}

impl Drop for ScanProgress {
    fn drop(&mut self) {
        self.finish_sheet();
    }
}

/// Create a progress bar with known total
fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>7}/{len:7} ({per_sec}) {eta} {msg}")
            .expect("Invalid progress template")
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}
