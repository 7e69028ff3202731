//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome and the route guard while reading shared
//! session state from Leptos context providers.

pub mod navbar;
pub mod protected_route;
pub mod spinner;
