//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is the plain session snapshot components read; `session` is the
//! manager that owns and mutates it.

pub mod auth;
pub mod session;
