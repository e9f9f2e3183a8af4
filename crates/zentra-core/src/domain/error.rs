// ============================================================================
// domain/error.rs - MODEL VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside `ZentraError`, which is `Clone`)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Naming
    // ========================================================================
    #[error("invalid model name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("invalid page name '{name}': {reason}")]
    InvalidPageName { name: String, reason: String },

    // ========================================================================
    // Registration
    // ========================================================================
    #[error("page '{name}' is registered but never defined")]
    UnknownPage { name: String },

    #[error("page '{name}' is defined more than once")]
    DuplicatePage { name: String },

    #[error("model name '{name}' is used more than once on page '{page}'")]
    DuplicateName { page: String, name: String },

    #[error("state variable '{state}' is declared more than once on page '{page}'")]
    StateConflict { page: String, state: String },

    // ========================================================================
    // Component constraints
    // ========================================================================
    #[error("invalid {component} model: {reason}")]
    InvalidComponent {
        component: &'static str,
        reason: String,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name, .. } => vec![
                format!("'{}' must be a single camelCase word", name),
                "Start with a lowercase letter, use letters and digits only".into(),
                "Keep names to 30 characters or fewer, e.g. 'monthlyCalendar'".into(),
            ],
            Self::InvalidPageName { name, .. } => vec![
                format!("'{}' must be PascalCase", name),
                "Examples: Landing, Dashboard, Settings2".into(),
            ],
            Self::UnknownPage { name } => vec![
                format!("Add a [[pages]] entry with name = \"{}\"", name),
                "Or remove it from the `register` list in [app]".into(),
            ],
            Self::DuplicatePage { name } => {
                vec![format!("Rename or merge the pages called '{}'", name)]
            }
            Self::DuplicateName { page, name } => vec![
                format!("Give each model on page '{}' its own name", page),
                format!("'{}' is used to build variable names, so it cannot repeat", name),
            ],
            Self::StateConflict { state, .. } => vec![
                format!("Two models would both declare '{}'", state),
                "Change the first word of one checkbox menu item".into(),
            ],
            Self::InvalidComponent { component, .. } => vec![format!(
                "Check the fields of the {} model in zentra/models/zentra.toml",
                component
            )],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownPage { .. } => ErrorCategory::NotFound,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_page_is_not_found() {
        let err = DomainError::UnknownPage {
            name: "Landing".into(),
        };
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.suggestions()[0].contains("Landing"));
    }

    #[test]
    fn invalid_name_is_validation() {
        let err = DomainError::InvalidName {
            name: "Bad Name".into(),
            reason: "contains a space".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.to_string(), "invalid model name 'Bad Name': contains a space");
    }
}
