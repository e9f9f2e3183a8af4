use crate::domain::error::DomainError;

/// Longest allowed per-instance model name.
pub const MAX_NAME_LENGTH: usize = 30;

/// Centralized domain validation.
///
/// All naming rules live here, not scattered across models.
pub struct DomainValidator;

impl DomainValidator {
    /// A model name is a single lower camelCase word of at most
    /// [`MAX_NAME_LENGTH`] ASCII letters and digits.
    pub fn validate_model_name(name: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        let Some(first) = name.chars().next() else {
            return Err(invalid("cannot be empty"));
        };
        if name.len() > MAX_NAME_LENGTH {
            return Err(invalid("longer than 30 characters"));
        }
        if !first.is_ascii_lowercase() {
            return Err(invalid("must start with a lowercase letter"));
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(invalid("only letters and digits are allowed"));
        }

        Ok(())
    }

    /// A page name is PascalCase and may contain digits.
    pub fn validate_page_name(name: &str) -> Result<(), DomainError> {
        let invalid = |reason: &str| DomainError::InvalidPageName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        let Some(first) = name.chars().next() else {
            return Err(invalid("cannot be empty"));
        };
        if !first.is_ascii_uppercase() {
            return Err(invalid("must start with an uppercase letter"));
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(invalid("only letters and digits are allowed"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_names_pass() {
        assert!(DomainValidator::validate_model_name("monthlyCalendar").is_ok());
        assert!(DomainValidator::validate_model_name("cal2").is_ok());
    }

    #[test]
    fn bad_model_names_fail() {
        for bad in ["", "Calendar", "my-cal", "my cal", "a".repeat(31).as_str()] {
            assert!(
                DomainValidator::validate_model_name(bad).is_err(),
                "expected '{bad}' to be rejected"
            );
        }
    }

    #[test]
    fn page_names_are_pascal_case() {
        assert!(DomainValidator::validate_page_name("Landing2").is_ok());
        assert!(DomainValidator::validate_page_name("landing").is_err());
        assert!(DomainValidator::validate_page_name("My_Page").is_err());
    }
}
