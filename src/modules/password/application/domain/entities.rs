use std::fmt;

use serde::Serialize;

/// A single violated password rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub code: String,
    pub description: String,
}

impl ValidationError {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }
}

/// Result of validating one password against a policy.
///
/// Errors keep insertion order: base policy errors first, then the
/// consecutive-run error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Success,
    Failure(Vec<ValidationError>),
}

impl ValidationOutcome {
    /// Builds an outcome from a collected error list. An empty list is a success.
    pub fn failed(errors: Vec<ValidationError>) -> Self {
        if errors.is_empty() {
            Self::Success
        } else {
            Self::Failure(errors)
        }
    }

    pub fn succeeded(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Self::Success => &[],
            Self::Failure(errors) => errors,
        }
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        match self {
            Self::Success => Vec::new(),
            Self::Failure(errors) => errors,
        }
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "Succeeded"),
            Self::Failure(errors) => {
                let codes: Vec<&str> = errors.iter().map(|e| e.code.as_str()).collect();
                write!(f, "Failed : {}", codes.join(","))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_with_empty_list_is_success() {
        let outcome = ValidationOutcome::failed(vec![]);

        assert!(outcome.succeeded());
        assert!(outcome.errors().is_empty());
    }

    #[test]
    fn test_failed_keeps_error_order_and_duplicates() {
        let errors = vec![
            ValidationError::new("A", "first"),
            ValidationError::new("B", "second"),
            ValidationError::new("A", "third"),
        ];

        let outcome = ValidationOutcome::failed(errors.clone());

        assert!(!outcome.succeeded());
        assert_eq!(outcome.errors(), errors.as_slice());
        assert_eq!(outcome.into_errors(), errors);
    }

    #[test]
    fn test_display_lists_codes() {
        let outcome = ValidationOutcome::failed(vec![
            ValidationError::new("PasswordTooShort", "too short"),
            ValidationError::new("PasswordRequiresDigit", "no digit"),
        ]);

        assert_eq!(ValidationOutcome::Success.to_string(), "Succeeded");
        assert_eq!(
            outcome.to_string(),
            "Failed : PasswordTooShort,PasswordRequiresDigit"
        );
    }
}
