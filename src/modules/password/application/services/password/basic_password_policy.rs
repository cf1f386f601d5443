use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::password::application::domain::entities::{ValidationError, ValidationOutcome};
use crate::password::application::ports::outgoing::{BaseCheckError, BasePasswordCheck};
use crate::password::application::services::password::policy_config::PolicyConfiguration;

/// Baseline length and character-class rules, for hosts whose identity store
/// has no password rules of its own.
#[derive(Debug, Clone)]
pub struct CharacterClassPolicy {
    config: Arc<PolicyConfiguration>,
}

impl CharacterClassPolicy {
    pub fn new(config: Arc<PolicyConfiguration>) -> Self {
        Self { config }
    }

    /// Every rule `password` breaks, in a fixed order.
    pub fn violations(&self, password: &str) -> Vec<ValidationError> {
        let config = &self.config;
        let mut errors = Vec::new();
        let length = password.chars().count();

        if password.trim().is_empty() || length < config.min_length() {
            errors.push(ValidationError::new(
                "PasswordTooShort",
                format!(
                    "Passwords must be at least {} characters.",
                    config.min_length()
                ),
            ));
        }

        if length > config.max_length() {
            errors.push(ValidationError::new(
                "PasswordTooLong",
                format!(
                    "Passwords must be no longer than {} characters.",
                    config.max_length()
                ),
            ));
        }

        if config.require_symbol() && password.chars().all(|c| c.is_ascii_alphanumeric()) {
            errors.push(ValidationError::new(
                "PasswordRequiresNonAlphanumeric",
                "Passwords must have at least one non alphanumeric character.",
            ));
        }

        if config.require_digit() && !password.chars().any(|c| c.is_ascii_digit()) {
            errors.push(ValidationError::new(
                "PasswordRequiresDigit",
                "Passwords must have at least one digit ('0'-'9').",
            ));
        }

        if config.require_lowercase() && !password.chars().any(|c| c.is_ascii_lowercase()) {
            errors.push(ValidationError::new(
                "PasswordRequiresLower",
                "Passwords must have at least one lowercase ('a'-'z').",
            ));
        }

        if config.require_uppercase() && !password.chars().any(|c| c.is_ascii_uppercase()) {
            errors.push(ValidationError::new(
                "PasswordRequiresUpper",
                "Passwords must have at least one uppercase ('A'-'Z').",
            ));
        }

        let unique = password.chars().collect::<HashSet<char>>().len();
        if unique < config.required_unique_chars() {
            errors.push(ValidationError::new(
                "PasswordRequiresUniqueChars",
                format!(
                    "Passwords must use at least {} different characters.",
                    config.required_unique_chars()
                ),
            ));
        }

        errors
    }
}

#[async_trait]
impl<M, U> BasePasswordCheck<M, U> for CharacterClassPolicy
where
    M: Sync,
    U: Sync,
{
    async fn check(
        &self,
        _manager: &M,
        _user: &U,
        password: &str,
    ) -> Result<ValidationOutcome, BaseCheckError> {
        Ok(ValidationOutcome::failed(self.violations(password)))
    }
}
