//! Session identity as an injected capability.
//!
//! The portal keeps the signed-in user's id in a `userId` cookie. The engine
//! never reads that global directly; whoever constructs the view or the
//! client passes in a `SessionReader`, which keeps the pipeline testable and
//! the cookie mechanism swappable.

use std::sync::Arc;

pub const USER_ID_COOKIE: &str = "userId";

pub trait SessionReader: Send + Sync {
    /// The signed-in user's id, if any.
    fn current_user_id(&self) -> Option<String>;
}

/// Fixed identity, for tests and one-shot CLI runs.
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    user_id: Option<String>,
}

impl StaticSession {
    #[must_use]
    pub fn signed_in(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }

    #[must_use]
    pub const fn anonymous() -> Self {
        Self { user_id: None }
    }
}

impl SessionReader for StaticSession {
    fn current_user_id(&self) -> Option<String> {
        self.user_id.clone()
    }
}

/// Reads the identity from `FILESHELF_USER_ID` at each call, so a long-lived
/// process observes changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSession;

pub const USER_ID_ENV: &str = "FILESHELF_USER_ID";

impl SessionReader for EnvSession {
    fn current_user_id(&self) -> Option<String> {
        std::env::var(USER_ID_ENV)
            .ok()
            .map(|raw| raw.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}

pub type SharedSession = Arc<dyn SessionReader>;
