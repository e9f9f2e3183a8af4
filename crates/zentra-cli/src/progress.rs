//! Stage progress for `zentra generate`.

use std::cell::RefCell;
use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tracing::debug;

use zentra_core::application::{Stage, StageListener};

/// Shows a spinner while a stage runs and a `✓`/`✗` line once it ends.
///
/// Lines go to stderr so `generate` output can still be piped.
pub struct StageProgress {
    spinner: bool,
    quiet: bool,
    no_color: bool,
    current: RefCell<Option<ProgressBar>>,
    term: Term,
}

impl StageProgress {
    pub fn new(spinner: bool, quiet: bool, no_color: bool) -> Self {
        Self {
            spinner,
            quiet,
            no_color,
            current: RefCell::new(None),
            term: Term::stderr(),
        }
    }

    fn status_line(&self, stage: Stage, ok: bool) -> String {
        let text = stage.description();
        let mark = if ok { "\u{2713}" } else { "\u{2717}" }; // ✓ / ✗
        match (self.no_color, ok) {
            (true, _) => format!("{mark} {text}"),
            (false, true) => format!("{} {}", mark.green().bold(), text),
            (false, false) => format!("{} {}", mark.red().bold(), text.red()),
        }
    }
}

impl StageListener for StageProgress {
    fn started(&self, stage: Stage) {
        debug!(%stage, "stage started");
        if self.quiet || !self.spinner {
            return;
        }

        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ");
        bar.set_style(style);
        bar.set_message(format!("{}...", stage.description()));
        bar.enable_steady_tick(Duration::from_millis(80));
        *self.current.borrow_mut() = Some(bar);
    }

    fn finished(&self, stage: Stage, ok: bool) {
        debug!(%stage, ok, "stage finished");
        if let Some(bar) = self.current.borrow_mut().take() {
            bar.finish_and_clear();
        }
        if self.quiet {
            return;
        }
        let _ = self.term.write_line(&self.status_line(stage, ok));
    }
}
