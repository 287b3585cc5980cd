//! Request failure taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Every API helper returns `Result<T, ApiError>`. Views never show the
//! variant; they show one generic message per component, while the log line
//! keeps the distinction between transport, status, and decode failures.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why a backend request produced no usable body.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Connection refused, DNS failure, CORS rejection, and the like.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("backend returned status {0}")]
    Status(u16),
    /// The body was not the JSON shape the endpoint promises.
    #[error("malformed response: {0}")]
    Decode(String),
    /// The backend answered 200 with an `{"error": ...}` body.
    #[error("{0}")]
    Backend(String),
    /// A newer request for the same sync key superseded this one.
    #[error("superseded by a newer request")]
    Aborted,
    /// Requests are only issued from the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Superseded requests are dropped without touching their slot.
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}

/// Generic failure text shown by generator forms and advisory panels.
pub const BACKEND_ERROR_MESSAGE: &str = "Backend Error: Ensure server is running!";

/// Dashboard metrics failure text.
pub const BACKEND_OFFLINE_MESSAGE: &str = "⚠️ Backend Offline";

/// Chat widget failure bubble.
pub const CHAT_ERROR_MESSAGE: &str = "⚠️ Error: Could not connect to SalesSpark Brain.";

/// Message to show for an advisory request failure.
///
/// Backend refusals carry their own reason; every other failure collapses to
/// the generic backend message.
pub fn advisory_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Backend(reason) => format!("❌ {reason}"),
        _ => format!("❌ {BACKEND_ERROR_MESSAGE}"),
    }
}
