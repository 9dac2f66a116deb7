/**
 * Registration Handler
 *
 * This module implements the user registration handler for POST /register.
 *
 * # Registration Process
 *
 * 1. Validate role, email shape, password length and the artist-only
 *    description rule
 * 2. Check the email is not already registered
 * 3. Hash the password with bcrypt
 * 4. Persist the user with a fresh identifier
 * 5. Return the safe user view (no token, no sensitive fields)
 */

use axum::{extract::State, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;

use crate::auth::handlers::types::{RegisterRequest, RegisterResponse, UserResponse};
use crate::auth::users::{create_user, get_user_by_email, NewUser, Role};
use crate::error::ApiError;

/// Validate a registration request and resolve the role
///
/// Returns the parsed role on success so the handler does not re-parse it.
fn validate_registration(request: &RegisterRequest) -> Result<Role, ApiError> {
    let role: Role = request
        .role
        .parse()
        .map_err(|_| ApiError::bad_request("Role must be one of musician, artist, user"))?;

    if request.name.trim().is_empty() {
        return Err(ApiError::bad_request("Name must not be empty"));
    }

    if !request.email.contains('@') {
        return Err(ApiError::bad_request("Invalid email format"));
    }

    if request.password.len() < 8 {
        return Err(ApiError::bad_request(
            "Password must be at least 8 characters",
        ));
    }

    let has_description = request
        .description
        .as_deref()
        .is_some_and(|d| !d.trim().is_empty());
    if has_description && role != Role::Artist {
        return Err(ApiError::bad_request(
            "Only artists can provide a description",
        ));
    }

    Ok(role)
}

/// Registration handler
///
/// # Errors
///
/// * `400 Bad Request` - invalid role, email, password or description
/// * `409 Conflict` - email already registered
/// * `500 Internal Server Error` - hashing or database failure
pub async fn register(
    State(pool): State<PgPool>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    tracing::info!("Registration request for email: {}", request.email);

    let role = validate_registration(&request)?;

    if get_user_by_email(&pool, &request.email).await?.is_some() {
        tracing::warn!("Email already registered: {}", request.email);
        return Err(ApiError::conflict("Email already registered"));
    }

    let password_hash = hash(&request.password, DEFAULT_COST)?;

    let user = create_user(
        &pool,
        NewUser {
            name: request.name,
            email: request.email,
            password_hash,
            role,
            phone: request.phone,
            address: request.address,
            locale: request.locale,
            description: request.description,
        },
    )
    .await?;

    tracing::info!("User created: {} ({})", user.name, user.email);

    Ok(Json(RegisterResponse {
        success: true,
        message: "Registration successful".to_string(),
        user: UserResponse::from(user),
    }))
}
