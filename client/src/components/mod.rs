//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render layout chrome and shared widgets while reading/writing
//! shared state from Leptos context providers.

pub mod nav_shell;
pub mod protected;
pub mod spinner;
pub mod stat_card;
