//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Every page except `login` renders behind the route guard.

pub mod clients;
pub mod dashboard;
pub mod invoices;
pub mod login;
