//! Normalized error taxonomy for every REST interaction.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx responses, and malformed bodies all collapse
//! into a single `ApiError` so pages can render one banner path. Errors land
//! in state fields; nothing in this crate throws into the render path.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A failed REST interaction, normalized for display.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure: no connectivity, DNS, aborted request.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    ///
    /// `message` is the server-supplied message when the body carried one,
    /// otherwise a generic status line.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Parse(String),

    /// The caller has no active session; the UI should redirect to sign-in.
    #[error("not signed in")]
    Unauthenticated,
}

/// Coarse error category, used for banner styling and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiErrorKind {
    Network,
    Server,
    Parse,
    Unauthenticated,
}

impl ApiError {
    /// The coarse category of this error.
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            Self::Network(_) => ApiErrorKind::Network,
            Self::Server { .. } => ApiErrorKind::Server,
            Self::Parse(_) => ApiErrorKind::Parse,
            Self::Unauthenticated => ApiErrorKind::Unauthenticated,
        }
    }
}
