//! Middleware for request processing
//!
//! Currently contains the bearer-token authentication middleware and the
//! `AuthUser` extractor used by protected handlers.

/// Bearer-token authentication
pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
