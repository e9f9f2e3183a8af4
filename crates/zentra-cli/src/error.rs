//! CLI error handling.
//!
//! Wraps core errors and CLI-only failures, maps each one to its status
//! code and renders the error panel printed on stderr.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use zentra_core::application::ApplicationError;
use zentra_core::error::{ErrorCategory as CoreCategory, ZentraError};

use crate::messages::{self, MessageTemplate, code};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// An error from a `generate` or `list` run.
    #[error(transparent)]
    Core(#[from] ZentraError),

    /// An error from `init`. Only differs from [`CliError::Core`] in the
    /// code used for a project without components.
    #[error(transparent)]
    Setup(ZentraError),

    /// The CLI's own configuration could not be read or shown.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The user declined a confirmation prompt.
    #[error("Operation cancelled")]
    Cancelled,
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core) | Self::Setup(core) => {
                let mut suggestions = core.suggestions();
                if core.is_retryable() {
                    suggestions.push("This looks temporary, run the command again".into());
                }
                suggestions
            }

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Show the active config file with `zentra config path`".into(),
                "ZENTRA__* environment variables override the file".into(),
            ],

            Self::IoError { .. } => vec![
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],

            Self::Cancelled => vec![
                "No changes were made".into(),
                "Pass --yes to skip the prompt".into(),
            ],
        }
    }

    /// Get the error category for log levels.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(core) | Self::Setup(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Configuration => {
                    ErrorCategory::UserError
                }
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Remote => ErrorCategory::Remote,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Cancelled => ErrorCategory::UserError,
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Status code for this error, also used as the process exit code.
    ///
    /// | Error                       | Code |
    /// |-----------------------------|------|
    /// | Models file missing         |  1   |
    /// | Invalid models file         |  2   |
    /// | Models file empty           |  3   |
    /// | Models folder missing       |  5   |
    /// | `init`: no components       | 12   |
    /// | No components               | 22   |
    /// | Remote source failures      | 90   |
    /// | Everything else             | 70   |
    pub fn status(&self) -> u8 {
        match self {
            Self::Core(core) => core_status(core, code::NO_COMPONENTS),
            Self::Setup(core) => core_status(core, code::SETUP_NO_COMPONENTS),
            Self::ConfigError { .. } | Self::IoError { .. } | Self::Cancelled => code::INTERNAL,
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.status()
    }

    /// Panel title and checks for this error.
    fn template(&self) -> &'static MessageTemplate {
        match self {
            Self::Core(ZentraError::Application(ApplicationError::MalformedPayload { .. }))
            | Self::Setup(ZentraError::Application(ApplicationError::MalformedPayload { .. })) => {
                &messages::MALFORMED_PAYLOAD
            }
            _ => messages::lookup(self.status()),
        }
    }

    /// Format the error panel with colors.
    pub fn format_colored(&self, verbose: bool) -> String {
        let template = self.template();
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            template.title.red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        if !template.details.is_empty() {
            output.push_str(&format!("\n{}\n", "Check that:".yellow().bold()));
            for detail in template.details {
                output.push_str(&format!("  • {}\n", detail));
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  • {}\n", suggestion));
            }
        }

        output.push_str(&format!("\n{}\n", "More help:".cyan().bold()));
        for (label, url) in messages::more_help() {
            output.push_str(&format!("  {}: {}\n", label, url.underline()));
        }

        output.push_str(&format!(
            "\n{}\n",
            format!("Error code: {}", template.code).dimmed()
        ));

        if !verbose {
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let template = self.template();
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n\n  {}\n", template.title, self));

        if verbose {
            let mut src = Error::source(self);
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        if !template.details.is_empty() {
            out.push_str("\nCheck that:\n");
            for detail in template.details {
                out.push_str(&format!("  - {detail}\n"));
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  - {s}\n"));
            }
        }

        out.push_str("\nMore help:\n");
        for (label, url) in messages::more_help() {
            out.push_str(&format!("  {label}: {url}\n"));
        }

        out.push_str(&format!("\nError code: {}\n", template.code));

        if !verbose {
            out.push_str("Use -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        let status = self.status();
        match self.category() {
            ErrorCategory::UserError => tracing::warn!(status, "User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!(status, "Not found: {}", self),
            ErrorCategory::Remote => tracing::error!(status, "Remote source error: {}", self),
            ErrorCategory::Configuration => {
                tracing::error!(status, "Configuration error: {}", self)
            }
            ErrorCategory::Internal => tracing::error!(status, "Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

fn core_status(err: &ZentraError, no_components: u8) -> u8 {
    match err {
        ZentraError::Domain(_) => code::INVALID_CONFIG,
        ZentraError::Application(app) => match app {
            ApplicationError::ConfigMissing { .. } => code::CONFIG_MISSING,
            ApplicationError::InvalidConfig { .. } => code::INVALID_CONFIG,
            ApplicationError::ConfigEmpty { .. } => code::CONFIG_EMPTY,
            ApplicationError::ModelsDirMissing { .. } => code::MODELS_DIR_MISSING,
            ApplicationError::NoComponents => no_components,
            ApplicationError::RequestFailed { .. } | ApplicationError::MalformedPayload { .. } => {
                code::REQUEST_FAILED
            }
            ApplicationError::FilesystemError { .. }
            | ApplicationError::StoreLockError
            | ApplicationError::RollbackFailed { .. }
            | ApplicationError::Cancelled => code::INTERNAL,
        },
        ZentraError::Internal { .. } => code::INTERNAL,
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad models file or declined prompt.
    UserError,
    NotFound,
    /// The remote component source failed.
    Remote,
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
///
/// - `Result<T, std::io::Error>` → `CliError::IoError`
/// - `Result<T, ZentraError>`    → `CliError::Core`
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for Result<T, ZentraError> {
    /// Core errors carry their own context, the message is only logged.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| {
            tracing::debug!(context = %f().into(), "core error");
            CliError::Core(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;
    use zentra_core::domain::DomainError;

    fn app(err: ApplicationError) -> ZentraError {
        err.into()
    }

    fn path() -> PathBuf {
        PathBuf::from("zentra/models/zentra.toml")
    }

    // ── status codes ──────────────────────────────────────────────────────

    #[test]
    fn config_conditions_have_distinct_codes() {
        let cases = [
            (ApplicationError::ConfigMissing { path: path() }, 1),
            (
                ApplicationError::InvalidConfig {
                    path: path(),
                    reason: "x".into(),
                },
                2,
            ),
            (ApplicationError::ConfigEmpty { path: path() }, 3),
            (ApplicationError::ModelsDirMissing { path: path() }, 5),
        ];
        for (err, expected) in cases {
            assert_eq!(CliError::Core(app(err)).status(), expected);
        }
    }

    #[test]
    fn no_components_depends_on_command() {
        assert_eq!(
            CliError::Core(app(ApplicationError::NoComponents)).status(),
            22
        );
        assert_eq!(
            CliError::Setup(app(ApplicationError::NoComponents)).status(),
            12
        );
    }

    #[test]
    fn domain_errors_are_invalid_config() {
        let err = CliError::Core(
            DomainError::UnknownPage {
                name: "Landing".into(),
            }
            .into(),
        );
        assert_eq!(err.status(), 2);
    }

    #[test]
    fn remote_failures_share_a_code() {
        let failed = CliError::Core(app(ApplicationError::RequestFailed {
            status: 404,
            url: "u".into(),
        }));
        let malformed = CliError::Core(app(ApplicationError::MalformedPayload {
            url: "u".into(),
            reason: "no script".into(),
        }));
        assert_eq!(failed.status(), 90);
        assert_eq!(malformed.status(), 90);
    }

    #[test]
    fn malformed_payload_has_its_own_title() {
        let malformed = CliError::Core(app(ApplicationError::MalformedPayload {
            url: "u".into(),
            reason: "no script".into(),
        }));
        let s = malformed.format_plain(false);
        assert!(s.contains(messages::MALFORMED_PAYLOAD.title));
        assert!(s.contains("Error code: 90"));

        let failed = CliError::Core(app(ApplicationError::RequestFailed {
            status: 404,
            url: "u".into(),
        }));
        assert!(
            failed
                .format_plain(false)
                .contains(messages::lookup(code::REQUEST_FAILED).title)
        );
    }

    #[test]
    fn cli_failures_are_internal() {
        assert_eq!(CliError::Cancelled.exit_code(), 70);
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            70
        );
    }

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn retryable_errors_suggest_running_again() {
        let err = CliError::Core(app(ApplicationError::RequestFailed {
            status: 503,
            url: "u".into(),
        }));
        assert!(err.suggestions().iter().any(|s| s.contains("again")));
    }

    #[test]
    fn cancelled_mentions_yes() {
        assert!(CliError::Cancelled.suggestions().iter().any(|s| s.contains("--yes")));
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_panel_sections() {
        let err = CliError::Core(app(ApplicationError::ConfigEmpty { path: path() }));
        let s = err.format_plain(false);
        assert!(s.contains("Error: Models file is empty!"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains(messages::ERROR_GUIDE_URL));
        assert!(s.contains(messages::ISSUES_URL));
        assert!(s.contains("Error code: 3"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let err = CliError::Cancelled;
        let s = err.format_plain(true);
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn format_colored_has_code() {
        let err = CliError::Core(app(ApplicationError::NoComponents));
        assert!(err.format_colored(false).contains("Error code: 22"));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }

    #[test]
    fn into_cli_core_error() {
        let result: Result<(), ZentraError> = Err(app(ApplicationError::NoComponents));
        let cli = result.with_cli_context(|| "generating");
        assert!(matches!(cli, Err(CliError::Core(_))));
    }
}
