//! Progress reporting for batch ranking

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use neuroform_application::{BatchItemError, RankingProgressNotifier};
use neuroform_domain::Decision;
use std::sync::Mutex;

/// Reports batch progress with a progress bar on stderr
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn batch_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }

    fn label(id: &str) -> &str {
        if id.is_empty() { "(unnamed)" } else { id }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RankingProgressNotifier for ProgressReporter {
    fn on_batch_start(&self, total: usize) {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(Self::batch_style());
        pb.set_prefix("Ranking");
        pb.set_message("Starting...");

        if let Ok(mut guard) = self.bar.lock() {
            *guard = Some(pb);
        }
    }

    fn on_question_ranked(&self, id: &str, decision: &Decision) {
        self.with_bar(|pb| {
            pb.set_message(format!(
                "{} {} -> {} ({:.2})",
                "v".green(),
                Self::label(id),
                decision.ranking.best_index,
                decision.ranking.confidence
            ));
            pb.inc(1);
        });
    }

    fn on_question_failed(&self, id: &str, _error: &BatchItemError) {
        self.with_bar(|pb| {
            pb.set_message(format!("{} {}", "x".red(), Self::label(id)));
            pb.inc(1);
        });
    }

    fn on_batch_complete(&self, succeeded: usize, failed: usize) {
        let taken = self.bar.lock().ok().and_then(|mut guard| guard.take());
        if let Some(pb) = taken {
            let summary = if failed == 0 {
                format!("{} ranked", succeeded).green().to_string()
            } else {
                format!("{} ranked, {} failed", succeeded, failed)
                    .yellow()
                    .to_string()
            };
            pb.finish_with_message(summary);
        }
    }
}

/// Simple text-based progress (no fancy UI), written to stderr
pub struct SimpleProgress;

impl RankingProgressNotifier for SimpleProgress {
    fn on_batch_start(&self, total: usize) {
        eprintln!("{} {} ({} questions)", "->".cyan(), "Ranking".bold(), total);
    }

    fn on_question_ranked(&self, id: &str, decision: &Decision) {
        eprintln!(
            "  {} {} -> option {} ({:.2})",
            "v".green(),
            ProgressReporter::label(id),
            decision.ranking.best_index,
            decision.ranking.confidence
        );
    }

    fn on_question_failed(&self, id: &str, error: &BatchItemError) {
        eprintln!("  {} {} ({})", "x".red(), ProgressReporter::label(id), error);
    }

    fn on_batch_complete(&self, succeeded: usize, failed: usize) {
        eprintln!("{} ranked, {} failed", succeeded, failed);
    }
}
