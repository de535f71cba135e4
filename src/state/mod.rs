//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `list`, `favorites`, `pricing`) so
//! individual pages can depend on small focused models. Everything here is
//! plain data with pure transitions; async drivers live under `net`.

pub mod auth;
pub mod favorites;
pub mod list;
pub mod pricing;
