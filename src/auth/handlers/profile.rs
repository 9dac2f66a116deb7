/**
 * Profile Handlers
 *
 * Handlers for the authenticated profile surface:
 *
 * - `GET /user` - current user's profile (no password hash)
 * - `PUT /user` - partial profile update
 * - `GET /usernames` - (id, name) projection of all users
 *
 * All three require a valid bearer token; the auth middleware resolves the
 * token to an `AuthUser` before these handlers run.
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::auth::handlers::types::{ProfileResponse, UserResponse, UsernamesResponse};
use crate::auth::users::{get_user_by_id, list_usernames, update_profile, ProfileUpdate, Role};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Get the current user's profile
///
/// # Errors
///
/// * `401 Unauthorized` - missing or invalid token
/// * `404 Not Found` - token subject no longer exists
pub async fn get_profile(
    AuthUser(user): AuthUser,
    State(pool): State<PgPool>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = get_user_by_id(&pool, user.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(ProfileResponse {
        success: true,
        user: UserResponse::from(user),
    }))
}

/// Apply a partial profile update
///
/// Unset fields keep their stored values. The artist-only description rule
/// is re-checked against the stored role.
///
/// # Errors
///
/// * `400 Bad Request` - non-artist submitting a non-empty description
/// * `401 Unauthorized` - missing or invalid token
/// * `404 Not Found` - token subject no longer exists
pub async fn put_profile(
    AuthUser(auth): AuthUser,
    State(pool): State<PgPool>,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<ProfileResponse>, ApiError> {
    tracing::info!("Profile update for user: {}", auth.user_id);

    let current = get_user_by_id(&pool, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    let wants_description = update
        .description
        .as_deref()
        .is_some_and(|d| !d.trim().is_empty());
    if wants_description && current.role != Role::Artist {
        return Err(ApiError::bad_request(
            "Only artists can provide a description",
        ));
    }

    let user = update_profile(&pool, auth.user_id, update).await?;

    Ok(Json(ProfileResponse {
        success: true,
        user: UserResponse::from(user),
    }))
}

/// List the (id, name) projection of every user
pub async fn get_usernames(
    AuthUser(_): AuthUser,
    State(pool): State<PgPool>,
) -> Result<Json<UsernamesResponse>, ApiError> {
    let users = list_usernames(&pool).await?;
    Ok(Json(UsernamesResponse {
        success: true,
        users,
    }))
}
