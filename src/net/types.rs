//! Wire DTOs for the Paradise Pay REST backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads so serde round-trips stay
//! lossless. The backend is the source of truth; the client keeps only
//! read-through snapshots of these records.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in account as reported by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique account identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Sign-in email.
    pub email: String,
    /// Account role, `"user"` or `"admin"`.
    pub role: String,
    /// Optional avatar image URL.
    pub avatar_url: Option<String>,
}

/// An event row as rendered on the Discover grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    /// Unique event identifier (UUID string).
    pub id: String,
    /// Event title.
    pub name: String,
    /// Venue name.
    pub venue: String,
    /// Venue city.
    pub city: String,
    /// Category slug (`"music"`, `"sports"`, ...), used by the filter bar.
    pub category: String,
    /// Start time as an RFC 3339 timestamp string.
    pub starts_at: String,
    /// Cheapest ticket price in cents; `0` means free entry.
    pub price_cents: u32,
    /// Whether every ticket tier is sold out.
    #[serde(default)]
    pub sold_out: bool,
}

/// Lifecycle of a ticket order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Paid,
    Pending,
    Refunded,
}

/// A ticket order as rendered on the Orders and Dashboard screens.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier (UUID string).
    pub id: String,
    /// Event the order is for.
    pub event_id: String,
    /// Event title, denormalized for list rendering.
    pub event_name: String,
    /// Number of tickets in the order.
    pub quantity: u32,
    /// Total charged in cents.
    pub total_cents: u32,
    /// Current order lifecycle state.
    pub status: OrderStatus,
    /// Purchase time as an RFC 3339 timestamp string.
    pub created_at: String,
}

/// A single issued ticket belonging to an order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique ticket identifier (UUID string).
    pub id: String,
    /// Order this ticket belongs to.
    pub order_id: String,
    /// Scannable entry code.
    pub code: String,
    /// Assigned seat label, if the venue is seated.
    pub seat: Option<String>,
}

/// One page of a paginated collection plus the server-reported total count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total: u64,
}

/// Successful response from `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent authenticated calls.
    pub token: String,
    /// The account that signed in.
    pub user: User,
}
