//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages read the session through context and never touch the token slot
//! directly. Access control lives in `components::protected_route`, so a
//! protected page can assume a signed-in user when it renders.

pub mod account;
pub mod admin;
pub mod home;
pub mod login;
pub mod register;

/// Shown whenever the library service cannot be reached.
#[cfg(any(test, feature = "csr"))]
pub(crate) const UNREACHABLE_MESSAGE: &str = "Could not reach the library service. Try again.";
