//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render list items and page chrome while reading shared state
//! from Leptos context providers. Markup is semantic with class hooks only;
//! the visual design system lives outside this crate.

pub mod error_banner;
pub mod event_card;
pub mod filter_bar;
pub mod order_row;
pub mod pagination;
pub mod plan_table;
pub mod search_bar;
