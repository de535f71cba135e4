//! REST API helpers for communicating with the Paradise Pay backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is normalized to `ApiError` (see `net::error`); fetch
//! functions reject on transport or server error rather than silently
//! returning empty data. A bearer credential is attached when the injected
//! `CredentialProvider` holds one.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{EventSummary, LoginResponse, Order, PageResult, Ticket, User};
use crate::state::list::ListQuery;
use crate::util::session::CredentialProvider;

#[cfg(any(test, feature = "hydrate"))]
fn encode_component(raw: &str) -> String {
    use std::fmt::Write as _;
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(char::from(byte));
            }
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}

#[cfg(any(test, feature = "hydrate"))]
fn list_query_string(query: &ListQuery) -> String {
    let mut parts = vec![
        format!("page={}", query.page),
        format!("page_size={}", query.page_size),
    ];
    if !query.search.is_empty() {
        parts.push(format!("search={}", encode_component(&query.search)));
    }
    for (key, value) in &query.filters {
        parts.push(format!("{}={}", encode_component(key), encode_component(value)));
    }
    parts.join("&")
}

#[cfg(any(test, feature = "hydrate"))]
fn events_endpoint(query: &ListQuery) -> String {
    format!("/api/events?{}", list_query_string(query))
}

#[cfg(any(test, feature = "hydrate"))]
fn orders_endpoint(query: &ListQuery) -> String {
    format!("/api/orders?{}", list_query_string(query))
}

#[cfg(any(test, feature = "hydrate"))]
fn favorite_endpoint(event_id: &str) -> String {
    format!("/api/favorites/{}", encode_component(event_id))
}

#[cfg(any(test, feature = "hydrate"))]
fn order_tickets_endpoint(order_id: &str) -> String {
    format!("/api/orders/{}/tickets", encode_component(order_id))
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

#[cfg(feature = "hydrate")]
fn authorized(
    builder: gloo_net::http::RequestBuilder,
    session: &CredentialProvider,
) -> gloo_net::http::RequestBuilder {
    match session.header_value() {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}

/// Map a non-2xx response to an `ApiError`, preferring the server-supplied
/// message when the body carries one.
#[cfg(feature = "hydrate")]
async fn server_error(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    if status == 401 {
        return ApiError::Unauthenticated;
    }
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
        error: Option<String>,
    }
    let message = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message.or(body.error))
        .unwrap_or_else(|| request_failed_message(status));
    ApiError::Server { status, message }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(
    session: &CredentialProvider,
    url: &str,
) -> Result<T, ApiError> {
    let resp = authorized(gloo_net::http::Request::get(url), session)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(server_error(resp).await);
    }
    resp.json::<T>().await.map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn send_empty(
    builder: gloo_net::http::RequestBuilder,
    session: &CredentialProvider,
) -> Result<(), ApiError> {
    let resp = authorized(builder, session)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(server_error(resp).await);
    }
    Ok(())
}

/// Sign in via `POST /api/auth/login`.
///
/// # Errors
///
/// Rejects with a normalized `ApiError` on transport failure, a non-2xx
/// status (401 maps to `Unauthenticated`), or a malformed body.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(server_error(resp).await);
        }
        resp.json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user(session: &CredentialProvider) -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<User>(session, "/api/auth/me").await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        None
    }
}

/// Invalidate the current session via `POST /api/auth/logout`.
pub async fn logout(session: &CredentialProvider) {
    #[cfg(feature = "hydrate")]
    {
        let _ = send_empty(gloo_net::http::Request::post("/api/auth/logout"), session).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Fetch one page of events from `/api/events`.
///
/// # Errors
///
/// Rejects with a normalized `ApiError`; it never silently returns an empty
/// page on failure.
pub async fn fetch_events(
    session: &CredentialProvider,
    query: &ListQuery,
) -> Result<PageResult<EventSummary>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(session, &events_endpoint(query)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, query);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch one page of the signed-in user's orders from `/api/orders`.
///
/// # Errors
///
/// Rejects with a normalized `ApiError` on any failure.
pub async fn fetch_orders(
    session: &CredentialProvider,
    query: &ListQuery,
) -> Result<PageResult<Order>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(session, &orders_endpoint(query)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, query);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch the issued tickets for one order.
///
/// # Errors
///
/// Rejects with a normalized `ApiError` on any failure.
pub async fn fetch_order_tickets(
    session: &CredentialProvider,
    order_id: &str,
) -> Result<Vec<Ticket>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(session, &order_tickets_endpoint(order_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, order_id);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch the signed-in user's favorited event ids from `/api/favorites`.
///
/// # Errors
///
/// Rejects with a normalized `ApiError` on any failure.
pub async fn fetch_favorites(session: &CredentialProvider) -> Result<Vec<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(session, "/api/favorites").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Add an event to the user's favorites via `POST /api/favorites/{id}`.
///
/// # Errors
///
/// Rejects with a normalized `ApiError` on any failure.
pub async fn add_favorite(session: &CredentialProvider, event_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_empty(gloo_net::http::Request::post(&favorite_endpoint(event_id)), session).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, event_id);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Remove an event from the user's favorites via `DELETE /api/favorites/{id}`.
///
/// # Errors
///
/// Rejects with a normalized `ApiError` on any failure.
pub async fn remove_favorite(session: &CredentialProvider, event_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_empty(gloo_net::http::Request::delete(&favorite_endpoint(event_id)), session).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, event_id);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}
