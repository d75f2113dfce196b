//! Progress reporting for answer submission

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use survey_application::SubmitProgressNotifier;
use survey_domain::QuestionId;
use std::sync::Mutex;

/// Reports submission progress with a progress bar
pub struct SubmitProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl SubmitProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .map(|style| style.progress_chars("=>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
    }
}

impl Default for SubmitProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmitProgressNotifier for SubmitProgressReporter {
    fn on_submit_start(&self, total_writes: usize) {
        let pb = ProgressBar::new(total_writes as u64);
        pb.set_style(Self::bar_style());
        pb.set_prefix("Submitting");
        pb.set_message("Saving answers...");

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_answer_saved(&self, question_id: &QuestionId, success: bool) {
        let Ok(bar) = self.bar.lock() else { return };
        if let Some(pb) = bar.as_ref() {
            let status = if success {
                format!("{} {}", "v".green(), question_id)
            } else {
                format!("{} {}", "x".red(), question_id)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_submit_complete(&self, success: bool) {
        let Ok(mut bar) = self.bar.lock() else { return };
        if let Some(pb) = bar.take() {
            if success {
                pb.finish_with_message(format!("{}", "done".green()));
            } else {
                pb.abandon_with_message(format!("{}", "failed".red()));
            }
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl SubmitProgressNotifier for SimpleProgress {
    fn on_submit_start(&self, total_writes: usize) {
        println!(
            "{} {} ({} answers)",
            "->".cyan(),
            "Submitting".bold(),
            total_writes
        );
    }

    fn on_answer_saved(&self, question_id: &QuestionId, success: bool) {
        if success {
            println!("  {} {}", "v".green(), question_id);
        } else {
            println!("  {} {} (failed)", "x".red(), question_id);
        }
    }

    fn on_submit_complete(&self, _success: bool) {
        println!();
    }
}
