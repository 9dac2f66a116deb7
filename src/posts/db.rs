/**
 * Post Model and Database Operations
 *
 * This module defines the feed post record and all database operations on
 * the posts table. The liked-set is a UUID[] column with unique membership
 * maintained by the handlers (read, toggle, write back).
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// A feed post
///
/// `author_name` is denormalized at creation time; a later rename of the
/// author leaves stale copies, which is accepted behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub author: Uuid,
    pub author_name: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    /// Users who liked the post; unique membership
    pub liked_by: Vec<Uuid>,
}

/// Create a new post with a fresh identifier and the current timestamp
pub async fn create_post(
    pool: &PgPool,
    author: Uuid,
    author_name: &str,
    message: &str,
) -> Result<Post, sqlx::Error> {
    let id = Uuid::new_v4();

    sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (id, author, author_name, message, created_at, liked_by)
        VALUES ($1, $2, $3, $4, now(), '{}')
        RETURNING id, author, author_name, message, created_at, liked_by
        "#,
    )
    .bind(id)
    .bind(author)
    .bind(author_name)
    .bind(message)
    .fetch_one(pool)
    .await
}

/// List all posts, newest first
pub async fn list_posts(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, author, author_name, message, created_at, liked_by
        FROM posts
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Get a post by id
pub async fn get_post(pool: &PgPool, id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, author, author_name, message, created_at, liked_by
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Replace a post's liked-set and return the updated post
///
/// Concurrent toggles on the same post race; the last write to reach the
/// store wins (accepted behavior).
pub async fn set_liked_by(
    pool: &PgPool,
    id: Uuid,
    liked_by: &[Uuid],
) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET liked_by = $1
        WHERE id = $2
        RETURNING id, author, author_name, message, created_at, liked_by
        "#,
    )
    .bind(liked_by)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Hard-delete a post
///
/// # Returns
/// `true` when a row was removed
pub async fn delete_post(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
