//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (list controllers, favorites
//! wiring, auth redirects) and delegates rendering details to `components`.

pub mod dashboard;
pub mod discover;
pub mod login;
pub mod orders;
pub mod pricing;
