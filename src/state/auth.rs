//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. Only `state::session` writes it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserIdentity;

/// Snapshot of the authentication session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<UserIdentity>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

/// Coarse phase of a session, derived from its flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Initializing,
    Authenticated,
    Anonymous,
}

impl AuthState {
    /// Signed out, nothing pending.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A stored token awaiting initialization.
    #[must_use]
    pub fn pending(token: String) -> Self {
        Self { user: None, token: Some(token), is_authenticated: false, is_loading: true }
    }

    /// A token accepted by the server for `user`.
    #[must_use]
    pub fn authenticated(token: String, user: UserIdentity) -> Self {
        Self { user: Some(user), token: Some(token), is_authenticated: true, is_loading: false }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.is_loading {
            SessionPhase::Initializing
        } else if self.is_authenticated {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Anonymous
        }
    }

    /// Whether the session belongs to an authenticated administrator.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.is_authenticated && self.user.as_ref().is_some_and(UserIdentity::is_admin)
    }
}
