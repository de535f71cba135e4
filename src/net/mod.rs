//! Networking modules for the Paradise Pay REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `error` normalizes every failure into one
//! taxonomy, `types` defines the wire schema, and the `*_client` modules
//! drive the async list and favorites state machines.

pub mod api;
pub mod error;
pub mod favorites_client;
pub mod list_client;
pub mod types;
