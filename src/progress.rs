//! Spinner display for long-running waits

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while polling the cluster.
///
/// indicatif hides the bar automatically when stderr is not a terminal,
/// so non-interactive runs stay quiet.
pub struct WaitSpinner {
    bar: ProgressBar,
}

impl WaitSpinner {
    /// Start a spinner with the given message
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Stop the spinner, leaving a final message
    pub fn finish(self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }

    /// Stop the spinner without leaving output
    pub fn clear(self) {
        self.bar.finish_and_clear();
    }
}
