//! Bearer-token session storage and the credential provider handed to
//! REST calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Token persistence is the only place this crate touches `localStorage` for
//! auth. Controllers and API helpers receive an explicit
//! `CredentialProvider` value instead of reading ambient browser state, so
//! the fetch layer stays testable. Token issuance and refresh belong to the
//! backend.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "paradise_pay_token";

/// Credential handed into API calls; holds the bearer token, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialProvider {
    token: Option<String>,
}

impl CredentialProvider {
    /// A provider with no credential (signed-out requests).
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    /// A provider carrying `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Some(token.into()) }
    }

    /// A provider initialized from persisted session storage. Anonymous on
    /// the server or when no token is stored.
    pub fn from_storage() -> Self {
        Self { token: load_token() }
    }

    /// The raw bearer token, if present.
    pub fn bearer_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The `Authorization` header value, if a token is present.
    pub fn header_value(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {token}"))
    }
}

/// Read the persisted session token from `localStorage`.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the session token to `localStorage`.
pub fn store_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the persisted session token, e.g. on logout.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
