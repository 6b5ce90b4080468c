//! Authentication state machine
//!
//! Session lifecycle is an explicit state machine instead of ad-hoc
//! boolean/nullable flags. Transitions happen only through the auth
//! provider; everything else just reads the current state.

use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::models::User;

/// Where the session currently stands
#[derive(Debug, Clone, Default)]
pub enum AuthState {
    /// No session; the token store is empty
    #[default]
    Anonymous,
    /// A login or signup call is in flight
    Authenticating,
    /// Logged in as the carried user
    Authenticated(User),
    /// The last login or signup attempt failed with this message
    Failed(String),
}

impl AuthState {
    pub fn name(&self) -> &'static str {
        match self {
            AuthState::Anonymous => "anonymous",
            AuthState::Authenticating => "authenticating",
            AuthState::Authenticated(_) => "authenticated",
            AuthState::Failed(_) => "failed",
        }
    }
}

/// Shared handle on the session state
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    inner: Arc<RwLock<AuthState>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current state
    pub fn current(&self) -> AuthState {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// The signed-in user, if any
    pub fn user(&self) -> Option<User> {
        match self.current() {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Derived from the state machine, never tracked separately
    pub fn is_authenticated(&self) -> bool {
        matches!(self.current(), AuthState::Authenticated(_))
    }

    pub(crate) fn transition(&self, next: AuthState) {
        let mut state = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        debug!("Auth state {} -> {}", state.name(), next.name());
        *state = next;
    }

    /// Mutate the signed-in user in place; a no-op when not authenticated.
    /// Returns whether an update happened.
    pub(crate) fn update_user(&self, apply: impl FnOnce(&mut User)) -> bool {
        let mut state = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        match &mut *state {
            AuthState::Authenticated(user) => {
                apply(user);
                true
            }
            _ => false,
        }
    }
}

/// A 401 response tears the whole session down: the request client clears
/// the token, and through this hook the state machine drops to anonymous in
/// the same step.
impl api::UnauthorizedHook for SessionState {
    fn on_unauthorized(&self) {
        self.transition(AuthState::Anonymous);
    }
}
