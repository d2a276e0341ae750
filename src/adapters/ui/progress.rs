//! Spinner shown while a workflow step is running.

use crate::usecases::Step;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub struct StepSpinner {
    bar: ProgressBar,
}

impl StepSpinner {
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.magenta} {msg} [{elapsed}]") {
            bar.set_style(style);
        }
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    pub fn step(&self, step: Step) {
        self.bar.set_message(step.label());
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for StepSpinner {
    fn default() -> Self {
        Self::new()
    }
}
