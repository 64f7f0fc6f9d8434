use serde_json::Value;
use thiserror::Error;

/// Failure taxonomy for remote calls. Every variant is handled at the point
/// of call; nothing here is fatal to the process.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Login or registration rejected; carries the server's own message.
    #[error("{0}")]
    Credentials(String),
    /// Expired or invalid bearer token on an authenticated call. Never
    /// retried or refreshed; the caller must prompt for a fresh login.
    #[error("your session is no longer valid — please log in again")]
    Unauthorized,
    /// Any other non-success status.
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },
    /// Network or transport failure. Not silently retried.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    /// A response body the client cannot use at all.
    #[error("unexpected response from server: {0}")]
    UnexpectedResponse(String),
}

/// Pull a human-readable message out of an error payload. The API is not
/// consistent about the field name: login failures use `detail`, registration
/// failures use `message`, and some handlers use `error`.
pub fn error_message(body: &Value, status: reqwest::StatusCode) -> String {
    for key in ["detail", "message", "error"] {
        if let Some(msg) = body.get(key).and_then(Value::as_str) {
            return msg.to_string();
        }
    }
    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}
