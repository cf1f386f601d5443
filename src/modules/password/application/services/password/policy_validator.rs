use std::sync::Arc;

use async_trait::async_trait;

use crate::password::application::domain::entities::{ValidationError, ValidationOutcome};
use crate::password::application::ports::incoming::{
    InvalidArgument, PasswordPolicy, PasswordValidationError,
};
use crate::password::application::ports::outgoing::BasePasswordCheck;
use crate::password::application::services::password::basic_password_policy::CharacterClassPolicy;
use crate::password::application::services::password::consecutive_run_scanner::has_excessive_run;
use crate::password::application::services::password::policy_config::PolicyConfiguration;

pub const TOO_MANY_CONSECUTIVE_CHARACTERS: &str = "TooManyConsecutiveCharacters";

// ============================================================================
// Password Policy Validator
// ============================================================================

/// Runs the identity store's base check plus the consecutive-run rule and
/// reports every violation from both in one outcome.
#[derive(Clone)]
pub struct PasswordPolicyValidator<B> {
    config: Arc<PolicyConfiguration>,
    base_check: B,
}

impl<B> PasswordPolicyValidator<B> {
    pub fn new(config: Arc<PolicyConfiguration>, base_check: B) -> Self {
        Self { config, base_check }
    }

    fn consecutive_run_error(
        &self,
        password: &str,
    ) -> Result<Option<ValidationError>, InvalidArgument> {
        // Blank passwords are left to the base policy's length rule
        if password.trim().is_empty() {
            return Ok(None);
        }

        let limit = self.config.max_consecutive_identical_chars();
        if !has_excessive_run(password, limit)? {
            return Ok(None);
        }

        Ok(Some(ValidationError::new(
            TOO_MANY_CONSECUTIVE_CHARACTERS,
            format!(
                "Passwords must not contain more than {} consecutive identical characters.",
                limit
            ),
        )))
    }
}

impl PasswordPolicyValidator<CharacterClassPolicy> {
    /// Validator backed by [`CharacterClassPolicy`] using the same configuration.
    pub fn with_character_class_policy(config: Arc<PolicyConfiguration>) -> Self {
        let base_check = CharacterClassPolicy::new(Arc::clone(&config));
        Self::new(config, base_check)
    }
}

#[async_trait]
impl<B, M, U> PasswordPolicy<M, U> for PasswordPolicyValidator<B>
where
    B: BasePasswordCheck<M, U>,
    M: Sync,
    U: Sync,
{
    async fn validate(
        &self,
        manager: Option<&M>,
        user: &U,
        password: Option<&str>,
    ) -> Result<ValidationOutcome, PasswordValidationError> {
        let Some(manager) = manager else {
            tracing::warn!("Password validation called without an identity store manager");
            return Err(InvalidArgument::MissingManager.into());
        };
        let Some(password) = password else {
            tracing::warn!("Password validation called without a password");
            return Err(InvalidArgument::MissingPassword.into());
        };

        // 1️⃣ Base policy from the identity store
        let base_outcome = self
            .base_check
            .check(manager, user, password)
            .await
            .map_err(|e| {
                tracing::warn!("Base password check failed: {}", e);
                e
            })?;
        let mut errors = base_outcome.into_errors();

        // 2️⃣ Consecutive identical characters, regardless of step 1
        if let Some(error) = self.consecutive_run_error(password)? {
            errors.push(error);
        }

        let outcome = ValidationOutcome::failed(errors);
        if !outcome.succeeded() {
            tracing::debug!("Password rejected: {}", outcome);
        }

        Ok(outcome)
    }
}
