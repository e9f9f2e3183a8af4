//! Application layer errors.
//!
//! These errors represent failures in orchestration, not model rules.
//! Model rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while checking, retrieving or building.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    // ── project configuration ─────────────────────────────────────────────
    #[error("Models folder not found at {path}")]
    ModelsDirMissing { path: PathBuf },

    #[error("Models file not found at {path}")]
    ConfigMissing { path: PathBuf },

    #[error("Models file at {path} is empty")]
    ConfigEmpty { path: PathBuf },

    #[error("Invalid models file at {path}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("No components found in the registered pages")]
    NoComponents,

    // ── remote source ─────────────────────────────────────────────────────
    #[error("Request to {url} failed with status {status}")]
    RequestFailed { status: u16, url: String },

    #[error("Unexpected page content from {url}: {reason}")]
    MalformedPayload { url: String, reason: String },

    // ── local I/O ─────────────────────────────────────────────────────────
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The run-scoped listing cache lock was poisoned.
    #[error("Listing cache is unavailable")]
    StoreLockError,

    /// Rollback failed (best-effort cleanup failed).
    #[error("Rollback failed for {path}: {reason}")]
    RollbackFailed { path: PathBuf, reason: String },

    #[error("Operation cancelled")]
    Cancelled,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ModelsDirMissing { .. } | Self::ConfigMissing { .. } => vec![
                "Run `zentra init` to set up the project".into(),
                "Or pass --project-dir to point at an existing project".into(),
            ],
            Self::ConfigEmpty { path } => vec![
                format!("Add an [app] table and at least one page to {}", path.display()),
                "Delete the file and run `zentra init` to restore the starter".into(),
            ],
            Self::InvalidConfig { .. } => vec![
                "Fix the reported field and run the command again".into(),
                "Every component needs a `type` and only its own fields".into(),
            ],
            Self::NoComponents => vec![
                "Register at least one page in [app] register".into(),
                "Add components under [[pages.blocks.components]]".into(),
            ],
            Self::RequestFailed { status, url } => vec![
                format!("GitHub answered {} for {}", status, url),
                "Check your connection and the `base_url` setting".into(),
            ],
            Self::MalformedPayload { .. } => vec![
                "GitHub may have changed its page layout".into(),
                "Check `zentra --version` against the latest release".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
            Self::RollbackFailed { path, .. } => vec![format!(
                "Remove partially written files under {} by hand",
                path.display()
            )],
            Self::Cancelled => Vec::new(),
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ModelsDirMissing { .. } | Self::ConfigMissing { .. } => ErrorCategory::NotFound,
            Self::ConfigEmpty { .. } | Self::InvalidConfig { .. } | Self::NoComponents => {
                ErrorCategory::Configuration
            }
            Self::RequestFailed { .. } | Self::MalformedPayload { .. } => ErrorCategory::Remote,
            Self::FilesystemError { .. }
            | Self::StoreLockError
            | Self::RollbackFailed { .. }
            | Self::Cancelled => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_errors_share_a_category() {
        let failed = ApplicationError::RequestFailed {
            status: 500,
            url: "u".into(),
        };
        let malformed = ApplicationError::MalformedPayload {
            url: "u".into(),
            reason: "no script".into(),
        };
        assert_eq!(failed.category(), ErrorCategory::Remote);
        assert_eq!(malformed.category(), ErrorCategory::Remote);
    }

    #[test]
    fn missing_config_suggests_init() {
        let err = ApplicationError::ConfigMissing {
            path: "zentra/models/zentra.toml".into(),
        };
        assert!(err.suggestions()[0].contains("zentra init"));
    }
}
