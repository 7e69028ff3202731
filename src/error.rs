//! Error taxonomy for the auth session subsystem.
//!
//! DESIGN
//! ======
//! Each network operation gets its own closed enum so the session manager can
//! match outcomes exhaustively instead of probing status codes after the fact.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a `GET /auth/me` identity check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    /// The server rejected the token (HTTP 401).
    #[error("token rejected by identity endpoint")]
    Unauthorized,
    /// The server refused access for this token (HTTP 403).
    #[error("token forbidden by identity endpoint")]
    Forbidden,
    /// Timeout, 5xx, connectivity loss or an undecodable body.
    #[error("identity check failed: {0}")]
    Network(String),
}

impl VerifyError {
    /// Whether this outcome must end the session.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Unauthorized | Self::Forbidden)
    }
}

/// Failure of a `POST /auth/login` request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),
    #[error("login request failed: {0}")]
    Network(String),
}

/// Failure of a `POST /auth/register` request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
    #[error("registration rejected: {0}")]
    Validation(String),
    #[error("registration request failed: {0}")]
    Network(String),
}

/// Failure of the durable storage slot backing the token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage area exists (no window, storage disabled by the browser).
    #[error("storage unavailable")]
    Unavailable,
    /// The storage area exists but the operation failed (quota, security error).
    #[error("storage operation failed: {0}")]
    Backend(String),
}

/// Failure of a request through the general-purpose API transport.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request to {path} failed with status {status}")]
    Status { path: String, status: u16 },
    #[error("request failed: {0}")]
    Network(String),
    #[error("response decode failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether the server rejected the attached credential.
    ///
    /// The account page re-verifies the session on this; the transport itself
    /// never clears the token.
    #[must_use]
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }
}
