//! Authentication Module
//!
//! This module handles user registration, authentication and session
//! management. It provides HTTP handlers for the auth endpoints and manages
//! user data and JWT tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model, role enum, database operations
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: profile + password → validated → user persisted
//! 2. **Login**: email + password → verified → JWT token returned
//! 3. **Protected routes**: bearer token → verified by middleware → handler
//!    receives the authenticated user
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - JWT tokens are stateless and expire after one hour
//! - Invalid credentials return 401 with no information leakage

/// User data model and database operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
pub use handlers::{get_profile, get_usernames, login, put_profile, register};
