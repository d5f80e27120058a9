use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;
use std::time::Duration;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Steps are shown on an indicatif spinner so they don't interfere with the
/// graph written to stdout. The spinner hides itself when stderr is not a
/// terminal.
pub struct StderrProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
        }
    }

    fn get_or_create_spinner(&self) -> ProgressBar {
        let mut slot = self.spinner.borrow_mut();
        if let Some(spinner) = slot.as_ref() {
            return spinner.clone();
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("   {spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.enable_steady_tick(Duration::from_millis(100));
        *slot = Some(spinner.clone());
        spinner
    }

    fn finish_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        let spinner = self.get_or_create_spinner();
        if spinner.is_hidden() {
            eprintln!("{}", message);
        }
        spinner.set_message(message.to_string());
    }

    fn report_error(&self, message: &str) {
        let line = format!("⚠️  {}", message);
        match self.spinner.borrow().as_ref() {
            Some(spinner) => spinner.suspend(|| eprintln!("{}", line.yellow())),
            None => eprintln!("{}", line.yellow()),
        }
    }

    fn report_completion(&self, message: &str) {
        self.finish_spinner();
        eprintln!("{}", message.green());
    }
}
