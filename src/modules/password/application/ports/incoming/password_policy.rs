use async_trait::async_trait;

use crate::password::application::domain::entities::ValidationOutcome;
use crate::password::application::ports::outgoing::BaseCheckError;

/// Caller misuse. Never returned for a password that merely breaks a rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArgument {
    #[error("manager must not be absent")]
    MissingManager,

    #[error("password must not be absent")]
    MissingPassword,

    #[error("password must not be empty or whitespace")]
    BlankPassword,

    #[error("maximum run length must be at least 1")]
    ZeroRunLength,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PasswordValidationError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    #[error("Base password check failed: {0}")]
    BaseCheck(#[from] BaseCheckError),
}

/// Entry point used by the host's account pipeline when a credential is
/// created or changed.
///
/// `M` is the identity-store handle and `U` the subject; both are opaque here.
/// Policy violations come back as `Ok(ValidationOutcome::Failure(..))`.
#[async_trait]
pub trait PasswordPolicy<M, U>: Send + Sync
where
    M: Sync,
    U: Sync,
{
    async fn validate(
        &self,
        manager: Option<&M>,
        user: &U,
        password: Option<&str>,
    ) -> Result<ValidationOutcome, PasswordValidationError>;
}
