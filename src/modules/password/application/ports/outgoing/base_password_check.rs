// application/ports/outgoing/base_password_check.rs
use async_trait::async_trait;

use crate::password::application::domain::entities::ValidationOutcome;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BaseCheckError {
    #[error("Identity store error: {0}")]
    IdentityStore(String),
}

/// Baseline rule set supplied by the identity store.
///
/// Implementations may suspend (e.g. to look the user up). A reported
/// `ValidationOutcome::Failure` is policy data; `Err` means the check itself
/// could not run.
#[async_trait]
pub trait BasePasswordCheck<M, U>: Send + Sync
where
    M: Sync,
    U: Sync,
{
    async fn check(
        &self,
        manager: &M,
        user: &U,
        password: &str,
    ) -> Result<ValidationOutcome, BaseCheckError>;
}
