use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it never mixes with the BOM document on
/// stdout. Scan progress renders as an indicatif bar; plain messages
/// and warnings go straight to stderr.
pub struct StderrProgressReporter {
    scan_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            scan_bar: RefCell::new(None),
        }
    }

    fn scan_bar(&self, total: usize) -> ProgressBar {
        let mut bar = self.scan_bar.borrow_mut();
        match bar.as_ref() {
            Some(existing) => existing.clone(),
            None => {
                let created = ProgressBar::new(total as u64);
                created.set_style(
                    ProgressStyle::default_bar()
                        .template("   {spinner:.green} {pos}/{len} scanned {wide_bar:.cyan/blue} {msg}")
                        .expect("Failed to set progress bar template")
                        .progress_chars("#>-"),
                );
                *bar = Some(created.clone());
                created
            }
        }
    }

    fn clear_bar(&self) {
        if let Some(bar) = self.scan_bar.borrow_mut().take() {
            bar.finish_and_clear();
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
        eprintln!("{}", message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let bar = self.scan_bar(total);
        bar.set_position(current as u64);
        if let Some(msg) = message {
            bar.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.clear_bar();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.clear_bar();
        eprintln!();
        eprintln!("{}", message);
    }
}
