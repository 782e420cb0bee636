//! Growth progress display

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] order {{pos:>5}}/{{len}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks growth toward a target order on a single progress bar
///
/// Each growth cycle moves the bar by one order; the message shows the
/// current domino count.
pub struct ProgressManager {
    bar: ProgressBar,
    target: u32,
}

impl ProgressManager {
    /// Create a progress bar for growing a diamond up to `target`
    pub fn new(target: u32) -> Self {
        let bar = ProgressBar::new(u64::from(target));
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_position(1);
        Self { bar, target }
    }

    /// Create a progress bar that never draws
    pub fn hidden(target: u32) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(u64::from(target));
        bar.set_position(1);
        Self { bar, target }
    }

    /// Order currently shown
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Report that the diamond reached `order`
    pub fn update_order(&self, order: u32, dominoes: usize) {
        self.bar.set_position(u64::from(order));
        self.bar.set_message(format!("{dominoes} dominoes"));
    }

    /// Mark the run as finished
    pub fn finish(&self, elapsed: Duration) {
        self.bar.set_position(u64::from(self.target));
        self.bar
            .finish_with_message(format!("done in {:.2}s", elapsed.as_secs_f64()));
    }
}
