use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Single spinner on stderr, shown while a lookup is in flight.
pub struct Loader {
    enabled: bool,
    spinner: ProgressBar,
}

impl Loader {
    pub fn new(enabled: bool) -> Self {
        if !enabled {
            return Self {
                enabled: false,
                spinner: ProgressBar::hidden(),
            };
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}  [{elapsed_precise}]").unwrap(),
        );
        spinner.enable_steady_tick(Duration::from_millis(80));
        Self {
            enabled: true,
            spinner,
        }
    }

    pub fn set_stage(&self, msg: impl Into<String>) {
        if !self.enabled {
            return;
        }
        self.spinner.set_message(msg.into());
    }

    /// Called on every lookup exit path, success or failure.
    pub fn finish(&self) {
        if !self.enabled {
            return;
        }
        self.spinner.finish_and_clear();
    }
}
