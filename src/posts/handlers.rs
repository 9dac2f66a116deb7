/**
 * Post Feed Handlers
 *
 * HTTP handlers for the social feed:
 *
 * - `POST /posts` - create a post (broadcasts `newPost`)
 * - `GET /posts` - list all posts, newest first
 * - `PUT /posts/like/{id}` - toggle the requester in the liked-set
 *   (broadcasts `updatePost`)
 * - `DELETE /posts/{id}` - author-only hard delete (broadcasts `deletePost`)
 *
 * Every mutation persists first, then notifies the feed broadcaster; the
 * HTTP response and the broadcast delivery are independent of each other.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::users::get_user_by_id;
use crate::error::ApiError;
use crate::feed::{FeedBroadcaster, FeedEvent};
use crate::middleware::auth::AuthUser;
use crate::posts::db::{self, Post};

/// Create-post request body
#[derive(Debug, Deserialize, Serialize)]
pub struct CreatePostRequest {
    pub message: String,
}

/// Single-post response
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub success: bool,
    pub post: Post,
}

/// Post listing response
#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub success: bool,
    pub posts: Vec<Post>,
}

/// Deletion acknowledgement
#[derive(Debug, Serialize)]
pub struct DeletePostResponse {
    pub success: bool,
    pub id: Uuid,
}

/// Create a post (POST /posts)
///
/// The author's display name is denormalized onto the post at write time.
///
/// # Errors
///
/// * `400 Bad Request` - empty message
/// * `401 Unauthorized` - missing or invalid token
pub async fn create_post(
    AuthUser(auth): AuthUser,
    State(pool): State<PgPool>,
    State(feed): State<FeedBroadcaster>,
    Json(request): Json<CreatePostRequest>,
) -> Result<Json<PostResponse>, ApiError> {
    let message = request.message.trim();
    if message.is_empty() {
        return Err(ApiError::bad_request("Post message must not be empty"));
    }

    let author = get_user_by_id(&pool, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid or expired token"))?;

    let post = db::create_post(&pool, author.id, &author.name, message).await?;
    tracing::info!("Post {} created by {}", post.id, author.id);

    feed.broadcast(FeedEvent::NewPost(post.clone()));

    Ok(Json(PostResponse {
        success: true,
        post,
    }))
}

/// List all posts, newest first (GET /posts)
pub async fn list_posts(
    State(pool): State<PgPool>,
) -> Result<Json<PostListResponse>, ApiError> {
    let posts = db::list_posts(&pool).await?;
    Ok(Json(PostListResponse {
        success: true,
        posts,
    }))
}

/// Toggle the requester's like on a post (PUT /posts/like/{id})
///
/// Present in the liked-set → removed; absent → added. The full updated
/// post is broadcast as `updatePost`.
///
/// # Errors
///
/// * `401 Unauthorized` - missing or invalid token
/// * `404 Not Found` - post absent
pub async fn toggle_like(
    AuthUser(auth): AuthUser,
    State(pool): State<PgPool>,
    State(feed): State<FeedBroadcaster>,
    Path(id): Path<Uuid>,
) -> Result<Json<PostResponse>, ApiError> {
    let post = db::get_post(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Post not found"))?;

    // Toggle membership; read-modify-write, last write wins
    let mut liked_by = post.liked_by;
    if let Some(pos) = liked_by.iter().position(|u| *u == auth.user_id) {
        liked_by.remove(pos);
    } else {
        liked_by.push(auth.user_id);
    }

    let post = db::set_liked_by(&pool, id, &liked_by)
        .await?
        .ok_or_else(|| ApiError::not_found("Post not found"))?;

    feed.broadcast(FeedEvent::UpdatePost(post.clone()));

    Ok(Json(PostResponse {
        success: true,
        post,
    }))
}

/// Delete a post (DELETE /posts/{id})
///
/// Author-only, hard delete. Only the identifier is broadcast.
///
/// # Errors
///
/// * `401 Unauthorized` - missing or invalid token
/// * `403 Forbidden` - requester is not the author
/// * `404 Not Found` - post absent
pub async fn delete_post(
    AuthUser(auth): AuthUser,
    State(pool): State<PgPool>,
    State(feed): State<FeedBroadcaster>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeletePostResponse>, ApiError> {
    let post = db::get_post(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Post not found"))?;

    if post.author != auth.user_id {
        tracing::warn!(
            "User {} attempted to delete post {} owned by {}",
            auth.user_id,
            id,
            post.author
        );
        return Err(ApiError::forbidden("Only the author can delete this post"));
    }

    db::delete_post(&pool, id).await?;
    tracing::info!("Post {} deleted by {}", id, auth.user_id);

    feed.broadcast(FeedEvent::DeletePost { id });

    Ok(Json(DeletePostResponse { success: true, id }))
}
