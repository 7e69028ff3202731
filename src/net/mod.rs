//! Networking modules for the library service REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session_client` handles the auth endpoints on its own transport, `api` is
//! the general-purpose client for everything else, and `types` defines the
//! shared wire schema.

pub mod api;
mod http;
pub mod session_client;
pub mod types;
