//! Search and batch progress display built on indicatif

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {prefix} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Puzzles: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Attempt counter display for one assembly search
///
/// Fed by the assembler at a fixed cadence and closed with the verdict
/// once the search returns.
pub struct SearchProgress {
    bar: ProgressBar,
}

impl SearchProgress {
    /// Create a standalone spinner for a named puzzle
    pub fn standalone(name: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.set_prefix(name.to_string());
        Self { bar }
    }

    /// Update the display with the running attempt count
    pub fn record_attempts(&self, attempts: u64) {
        self.bar.set_message(format!("{attempts} placements tried"));
        self.bar.tick();
    }

    /// Close the display with the search verdict
    pub fn finish(self, solved: bool, attempts: u64) {
        let verdict = if solved { "assembled" } else { "no assembly" };
        self.bar
            .finish_with_message(format!("{verdict} after {attempts} placements"));
    }
}

/// Coordinates progress display for batch solving
///
/// Shows one spinner per puzzle while it is being solved and adds a batch
/// bar when the file count would otherwise spam the terminal.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
        }
    }

    /// Initialize batch display based on file count
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }
    }

    /// Create the attempt spinner for the next puzzle file
    pub fn start_file(&self, path: &Path) -> SearchProgress {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.set_prefix(display_name);
        SearchProgress {
            bar: self.multi_progress.add(bar),
        }
    }

    /// Mark one file as finished and advance the batch bar
    pub fn complete_file(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All puzzles processed");
        }
        let _ = self.multi_progress.clear();
    }
}
