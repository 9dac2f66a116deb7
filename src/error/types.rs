/**
 * API Error Types
 *
 * This module defines the error taxonomy used by all HTTP handlers.
 * Every downstream failure (database, password hashing, token handling,
 * file storage) is caught in a handler and mapped to the nearest variant
 * here; nothing is allowed to crash the process or leak internals.
 *
 * # Taxonomy
 *
 * - `BadRequest` - missing or invalid input
 * - `Unauthorized` - missing/invalid/expired token, or bad credentials
 * - `Forbidden` - authenticated but not entitled
 * - `Conflict` - duplicate unique field (e.g. email)
 * - `NotFound` - entity absent, or an id that cannot address any entity
 * - `Internal` - downstream store/oracle failure
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Error taxonomy for the HTTP API
///
/// Each variant carries a human-readable message that is safe to return
/// to the caller. Internal details (driver errors, io errors) are logged
/// at the conversion boundary, never serialized into responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid input
    #[error("{0}")]
    BadRequest(String),

    /// Missing, malformed or expired token, or bad credentials
    #[error("{0}")]
    Unauthorized(String),

    /// Authenticated but not entitled to perform the operation
    #[error("{0}")]
    Forbidden(String),

    /// Duplicate unique field
    #[error("{0}")]
    Conflict(String),

    /// Entity absent or unaddressable id
    #[error("{0}")]
    NotFound(String),

    /// Downstream failure; the message is a generic placeholder
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Duplicate RSVP on an event (400)
    pub fn already_registered() -> Self {
        Self::BadRequest("You are already registered for this event".to_string())
    }

    /// Owner attempting to rent their own instrument (403)
    pub fn self_rental_forbidden() -> Self {
        Self::Forbidden("You cannot rent your own instrument".to_string())
    }

    /// Rent attempt on an instrument that is not available (400)
    pub fn not_available() -> Self {
        Self::BadRequest("This instrument is not available for rent".to_string())
    }

    /// Return attempt by someone other than the current renter (403)
    pub fn not_renter() -> Self {
        Self::Forbidden("Only the current renter can return this instrument".to_string())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the user-visible error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Database failures surface as `Internal`; the driver error is logged at
/// the point of conversion and never shown to the caller.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        Self::Internal("Internal server error".to_string())
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        tracing::error!("Password hashing error: {:?}", err);
        Self::Internal("Internal server error".to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("File storage error: {:?}", err);
        Self::Internal("Internal server error".to_string())
    }
}

impl From<axum::extract::multipart::MultipartError> for ApiError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        tracing::warn!("Malformed multipart body: {:?}", err);
        Self::BadRequest("Malformed multipart request body".to_string())
    }
}
