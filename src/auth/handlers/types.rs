/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * registration, login and profile handlers.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::{Role, User, Username};

/// Registration request
///
/// The role arrives as a plain string and is validated against the closed
/// role set in the handler, so an unknown role is a 400 rather than a
/// deserialization rejection.
#[derive(Debug, Deserialize, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    /// Plain password; hashed before storage, never persisted or logged
    pub password: String,
    /// One of "musician", "artist", "user"
    pub role: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub locale: String,
    /// Free-text description; only accepted for artists
    #[serde(default)]
    pub description: Option<String>,
}

/// Login request
#[derive(Debug, Deserialize, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// User view safe to return to clients (no password hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub phone: String,
    pub address: String,
    pub locale: String,
    pub description: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            role: user.role,
            phone: user.phone,
            address: user.address,
            locale: user.locale,
            description: user.description,
        }
    }
}

/// Registration response: the created user, no token and no sensitive fields
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub user: UserResponse,
}

/// Login response carrying the signed session token
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub token: String,
    pub user: UserResponse,
}

/// Profile fetch/update response
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub success: bool,
    pub user: UserResponse,
}

/// Response for the usernames listing
#[derive(Debug, Serialize)]
pub struct UsernamesResponse {
    pub success: bool,
    pub users: Vec<Username>,
}
