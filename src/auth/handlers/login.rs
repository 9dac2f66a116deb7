/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Generate a JWT token bound to the user identifier
 * 4. Return token and safe user view
 *
 * # Security
 *
 * - Unknown email and wrong password return the same 401 (no enumeration)
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;
use sqlx::PgPool;

use crate::auth::handlers::types::{AuthResponse, LoginRequest, UserResponse};
use crate::auth::sessions::create_token;
use crate::auth::users::get_user_by_email;
use crate::error::ApiError;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - unknown email or password mismatch
/// * `500 Internal Server Error` - database or token signing failure
pub async fn login(
    State(pool): State<PgPool>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    tracing::info!("Login request for: {}", request.email);

    let user = get_user_by_email(&pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login for unknown email: {}", request.email);
            ApiError::unauthorized("Invalid email or password")
        })?;

    let valid = verify(&request.password, &user.password_hash)?;
    if !valid {
        tracing::warn!("Invalid password for user: {}", user.id);
        return Err(ApiError::unauthorized("Invalid email or password"));
    }

    let token = create_token(user.id, user.email.clone()).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        ApiError::internal("Internal server error")
    })?;

    tracing::info!("User logged in: {} ({})", user.name, user.email);

    Ok(Json(AuthResponse {
        success: true,
        token,
        user: UserResponse::from(user),
    }))
}
