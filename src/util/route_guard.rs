//! Route protection policy.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same decision so redirect behavior stays
//! identical across pages. The decision is pure; `components::protected_route`
//! turns it into a spinner, a redirect or the page itself.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use crate::state::auth::AuthState;

/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/login";
/// Where authenticated visitors without the required role are sent.
pub const LANDING_PATH: &str = "/home";

/// What a route requires of the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RouteAccess {
    /// Any signed-in user.
    #[default]
    Authenticated,
    /// Signed-in users with the `ADMIN` role.
    Admin,
}

/// Outcome of guarding a navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    /// Verification is pending; show a placeholder rather than redirecting.
    Loading,
    Redirect(&'static str),
}

/// Decide whether a route requiring `access` can be served for `state`.
#[must_use]
pub fn evaluate(access: RouteAccess, state: &AuthState) -> GuardDecision {
    if state.is_loading {
        return GuardDecision::Loading;
    }
    if !state.is_authenticated {
        return GuardDecision::Redirect(LOGIN_PATH);
    }
    match access {
        RouteAccess::Admin if !state.is_admin() => GuardDecision::Redirect(LANDING_PATH),
        RouteAccess::Admin | RouteAccess::Authenticated => GuardDecision::Render,
    }
}
