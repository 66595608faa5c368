// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::time::Duration;

use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

/// Presentation side effects of the wizard. Nothing here affects control flow.
pub trait ProgressReporter {
    /// Wipe the screen between steps.
    fn clear(&mut self);

    /// Begin a long-running step.
    fn start(&mut self, msg: &str);

    /// End the running step successfully.
    fn succeed(&mut self, msg: &str);

    /// End the running step with a failure.
    fn fail(&mut self, msg: &str);

    /// Standalone success line, no spinner involved.
    fn success(&mut self, msg: &str);

    /// Neutral note.
    fn info(&mut self, msg: &str);

    /// Something the user should look at before going on.
    fn warn(&mut self, msg: &str);

    /// Something went wrong or the run is ending early.
    fn error(&mut self, msg: &str);

    /// Titled bullet list.
    fn list(&mut self, title: &str, items: &[String]);

    /// Titled, emphasised value (e.g. the suggested message).
    fn highlight(&mut self, title: &str, body: &str);
}

/// Spinners and coloured lines on stderr.
pub struct TerminalReporter {
    term: Term,
    clear_screen: bool,
    spinner: Option<ProgressBar>,
}

impl TerminalReporter {
    pub fn new(clear_screen: bool) -> Self {
        Self {
            term: Term::stderr(),
            clear_screen,
            spinner: None,
        }
    }

    fn finish_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl ProgressReporter for TerminalReporter {
    fn clear(&mut self) {
        if self.clear_screen && self.term.is_term() {
            self.term.clear_screen().ok();
        }
    }

    fn start(&mut self, msg: &str) {
        self.finish_spinner();
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(msg.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    fn succeed(&mut self, msg: &str) {
        self.finish_spinner();
        eprintln!("{} {}", style("✓").green().bold(), msg);
    }

    fn fail(&mut self, msg: &str) {
        self.finish_spinner();
        eprintln!("{} {}", style("✗").red().bold(), msg);
    }

    fn success(&mut self, msg: &str) {
        eprintln!("\n{} {}\n", style("✓").green().bold(), style(msg).green());
    }

    fn info(&mut self, msg: &str) {
        eprintln!("{} {}", style("info:").cyan(), msg);
    }

    fn warn(&mut self, msg: &str) {
        eprintln!("{} {}", style("warning:").yellow().bold(), msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{} {}", style("error:").red().bold(), msg);
    }

    fn list(&mut self, title: &str, items: &[String]) {
        eprintln!("\n{}\n", style(title).blue().bold());
        for item in items {
            eprintln!("  {} {}", style("•").yellow(), style(item).yellow());
        }
        eprintln!();
    }

    fn highlight(&mut self, title: &str, body: &str) {
        eprintln!("\n{}", style(title).green().bold());
        eprintln!("\n  {}\n", style(format!("\"{body}\"")).yellow());
    }
}

impl Drop for TerminalReporter {
    fn drop(&mut self) {
        self.finish_spinner();
    }
}
