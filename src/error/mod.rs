//! Error Types
//!
//! This module defines the error taxonomy shared by every HTTP handler and
//! its conversion into structured JSON error responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - ApiError taxonomy and downstream conversions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Propagation Policy
//!
//! Handlers return `Result<_, ApiError>`. Downstream failures (sqlx, bcrypt,
//! io, multipart) convert into the nearest taxonomy kind via `From` impls;
//! internal details are logged, never serialized. Nothing is retried.

/// ApiError taxonomy
pub mod types;

/// IntoResponse conversion
pub mod conversion;

pub use types::ApiError;
