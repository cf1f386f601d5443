use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::password::application::domain::entities::{ValidationError, ValidationOutcome};
use crate::password::application::ports::outgoing::{BaseCheckError, BasePasswordCheck};
use crate::password::application::services::password::CharacterClassPolicy;

#[derive(Debug, Clone)]
pub struct StubUser {
    pub id: u64,
}

/// In-memory stand-in for the host's identity store.
#[derive(Debug, Clone, Default)]
pub struct StubUserManager {
    usernames: HashMap<u64, String>,
    unavailable: bool,
}

impl StubUserManager {
    pub fn with_user(mut self, id: u64, username: &str) -> Self {
        self.usernames.insert(id, username.to_string());
        self
    }

    /// Every lookup fails as if the store were down.
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    pub async fn find_username(&self, id: u64) -> Result<Option<String>, BaseCheckError> {
        tokio::task::yield_now().await;
        if self.unavailable {
            return Err(BaseCheckError::IdentityStore(
                "connection refused".to_string(),
            ));
        }
        Ok(self.usernames.get(&id).cloned())
    }
}

/// Character-class rules plus a lookup-based "password contains username"
/// rule, the way a real identity store combines its own checks.
#[derive(Clone)]
pub struct StubIdentityStoreCheck {
    rules: CharacterClassPolicy,
    calls: Arc<AtomicUsize>,
}

impl StubIdentityStoreCheck {
    pub fn new(rules: CharacterClassPolicy) -> Self {
        Self {
            rules,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BasePasswordCheck<StubUserManager, StubUser> for StubIdentityStoreCheck {
    async fn check(
        &self,
        manager: &StubUserManager,
        user: &StubUser,
        password: &str,
    ) -> Result<ValidationOutcome, BaseCheckError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let mut errors = self.rules.violations(password);

        if let Some(username) = manager.find_username(user.id).await? {
            if password.to_lowercase().contains(&username.to_lowercase()) {
                errors.push(ValidationError::new(
                    "PasswordContainsUserName",
                    "Passwords must not contain the user name.",
                ));
            }
        }

        Ok(ValidationOutcome::failed(errors))
    }
}

/// Never completes; used to check that dropping the validation future
/// cancels the delegated check.
#[derive(Clone, Default)]
pub struct PendingBaseCheck;

#[async_trait]
impl BasePasswordCheck<StubUserManager, StubUser> for PendingBaseCheck {
    async fn check(
        &self,
        _manager: &StubUserManager,
        _user: &StubUser,
        _password: &str,
    ) -> Result<ValidationOutcome, BaseCheckError> {
        std::future::pending::<Result<ValidationOutcome, BaseCheckError>>().await
    }
}
