//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `dashboard`, `ui`) so individual
//! components can depend on small focused models. Models are plain structs;
//! components wrap them in signals.

pub mod dashboard;
pub mod session;
pub mod ui;
