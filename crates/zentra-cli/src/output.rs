//! Terminal output: status lines and success panels.
//!
//! Errors are rendered by [`crate::error::CliError`] and go to stderr;
//! everything here writes to stdout.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::{AnsiColors, OwoColorize};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::messages::{GETTING_STARTED_URL, MessageTemplate, code};

/// Status symbol plus the colour used for it and its message.
#[derive(Debug, Clone, Copy)]
enum Mark {
    Success,
    Error,
    Warning,
    Info,
}

impl Mark {
    fn symbol(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}", // ✓
            Self::Error => "\u{2717}",   // ✗
            Self::Warning => "\u{26a0}", // ⚠
            Self::Info => "\u{2139}",    // ℹ
        }
    }

    fn color(self) -> AnsiColors {
        match self {
            Self::Success => AnsiColors::Green,
            Self::Error => AnsiColors::Red,
            Self::Warning => AnsiColors::Yellow,
            Self::Info => AnsiColors::Blue,
        }
    }
}

pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// `auto` becomes `human` on a terminal and `plain` otherwise.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let resolved_format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    fn render(&self, mark: Mark, msg: &str) -> String {
        if self.no_color {
            format!("{} {msg}", mark.symbol())
        } else {
            format!(
                "{} {}",
                mark.symbol().color(mark.color()).bold(),
                msg.color(mark.color())
            )
        }
    }

    fn write(&self, line: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(line)
    }

    /// Plain line; suppressed in quiet mode like every other method except
    /// [`error`](Self::error).
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.write(msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.write(&self.render(Mark::Success, msg))
    }

    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(&self.render(Mark::Error, msg))
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.write(&self.render(Mark::Warning, msg))
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.write(&self.render(Mark::Info, msg))
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.no_color {
            self.write(text)
        } else {
            self.write(&text.cyan().bold().to_string())
        }
    }

    /// Panel for a status code: title, `body`, then next steps.
    pub fn panel(&self, template: &MessageTemplate, body: &[String]) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.write("")?;
        if template.is_error() {
            self.error(template.title)?;
        } else {
            self.success(template.title)?;
        }

        if !body.is_empty() {
            self.write("")?;
            for line in body {
                self.write(&format!("  {line}"))?;
            }
        }

        if !template.details.is_empty() {
            self.write("")?;
            self.header("Next steps:")?;
            for detail in template.details {
                self.write(&format!("  \u{2022} {detail}"))?;
            }
        }

        if template.code == code::SETUP_COMPLETE {
            self.write("")?;
            self.info(&format!("Getting started guide: {GETTING_STARTED_URL}"))?;
        }
        Ok(())
    }

    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// `true` when spinners and other terminal decoration make sense.
    pub fn is_interactive(&self) -> bool {
        self.resolved_format == OutputFormat::Human && !self.quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::AppConfig;
    use crate::messages;
    use std::path::PathBuf;

    fn make_manager(quiet: bool, no_color: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            project_dir: PathBuf::from("."),
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn plain_render_has_symbol() {
        let out = make_manager(false, true, OutputFormat::Plain);
        assert_eq!(out.render(Mark::Success, "done"), "\u{2713} done");
        assert_eq!(out.render(Mark::Warning, "careful"), "\u{26a0} careful");
    }

    #[test]
    fn colored_render_keeps_message() {
        let out = make_manager(false, false, OutputFormat::Plain);
        let line = out.render(Mark::Error, "failed");
        assert!(line.contains("failed"));
        assert_ne!(line, "\u{2717} failed");
    }

    #[test]
    fn quiet_still_writes_errors() {
        let out = make_manager(true, true, OutputFormat::Plain);
        assert!(out.print("hello").is_ok());
        assert!(out.error("something went wrong").is_ok());
        assert!(out.is_quiet());
    }

    #[test]
    fn config_can_disable_color() {
        let mut config = AppConfig::default();
        config.output.no_color = true;
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            project_dir: PathBuf::from("."),
            output_format: OutputFormat::Human,
        };
        assert!(!OutputManager::new(&args, &config).supports_color());
    }

    #[test]
    fn explicit_format_is_kept() {
        let out = make_manager(false, false, OutputFormat::Human);
        assert_eq!(out.resolved_format, OutputFormat::Human);
        assert!(out.is_interactive());
        assert!(!make_manager(true, false, OutputFormat::Human).is_interactive());
    }

    #[test]
    fn panel_writes_without_error() {
        let out = make_manager(false, true, OutputFormat::Plain);
        let template = messages::lookup(messages::code::SETUP_COMPLETE);
        assert!(out.panel(template, &["+ zentra/models".into()]).is_ok());
    }
}
