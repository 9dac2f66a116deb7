//! Post feed integration tests
//!
//! Exercises the post lifecycle (create, like toggle, author-only delete)
//! and the feed broadcasts each mutation produces, against a live Postgres.

mod common;

use axum::extract::{Path, State};
use axum::response::Json;
use serial_test::serial;

use bandspace::error::ApiError;
use bandspace::feed::{FeedBroadcaster, FeedEvent};
use bandspace::posts::handlers::CreatePostRequest;
use bandspace::posts::{create_post, delete_post, list_posts, toggle_like};

use common::auth_helpers::{auth_user, create_unique_test_user};
use common::database::TestDatabase;

fn feed() -> FeedBroadcaster {
    FeedBroadcaster::new(16)
}

#[tokio::test]
#[serial]
#[ignore = "requires a running Postgres"]
async fn test_create_post_and_list_newest_first() {
    let db = TestDatabase::new().await;
    let pool = db.pool().clone();
    let feed = feed();

    let author = create_unique_test_user(&pool).await.unwrap();

    for message in ["first", "second"] {
        create_post(
            auth_user(&author),
            State(pool.clone()),
            State(feed.clone()),
            Json(CreatePostRequest {
                message: message.to_string(),
            }),
        )
        .await
        .unwrap();
        // Distinct creation timestamps for a deterministic ordering
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let Json(listing) = list_posts(State(pool)).await.unwrap();
    let messages: Vec<&str> = listing.posts.iter().map(|p| p.message.as_str()).collect();
    assert_eq!(messages, vec!["second", "first"]);
    assert_eq!(listing.posts[0].author_name, author.name);
}

#[tokio::test]
#[serial]
#[ignore = "requires a running Postgres"]
async fn test_create_post_empty_message_rejected() {
    let db = TestDatabase::new().await;
    let pool = db.pool().clone();

    let author = create_unique_test_user(&pool).await.unwrap();

    let result = create_post(
        auth_user(&author),
        State(pool),
        State(feed()),
        Json(CreatePostRequest {
            message: "   ".to_string(),
        }),
    )
    .await;
    assert!(matches!(result, Err(ApiError::BadRequest(_))));
}

#[tokio::test]
#[serial]
#[ignore = "requires a running Postgres"]
async fn test_like_toggles_membership() {
    let db = TestDatabase::new().await;
    let pool = db.pool().clone();
    let feed = feed();

    let author = create_unique_test_user(&pool).await.unwrap();
    let fan = create_unique_test_user(&pool).await.unwrap();

    let Json(created) = create_post(
        auth_user(&author),
        State(pool.clone()),
        State(feed.clone()),
        Json(CreatePostRequest {
            message: "new single out".to_string(),
        }),
    )
    .await
    .unwrap();

    let Json(liked) = toggle_like(
        auth_user(&fan),
        State(pool.clone()),
        State(feed.clone()),
        Path(created.post.id),
    )
    .await
    .unwrap();
    assert_eq!(liked.post.liked_by, vec![fan.id]);

    let Json(unliked) = toggle_like(
        auth_user(&fan),
        State(pool),
        State(feed),
        Path(created.post.id),
    )
    .await
    .unwrap();
    assert!(unliked.post.liked_by.is_empty());
}

#[tokio::test]
#[serial]
#[ignore = "requires a running Postgres"]
async fn test_delete_post_author_only() {
    let db = TestDatabase::new().await;
    let pool = db.pool().clone();
    let feed = feed();

    let author = create_unique_test_user(&pool).await.unwrap();
    let stranger = create_unique_test_user(&pool).await.unwrap();

    let Json(created) = create_post(
        auth_user(&author),
        State(pool.clone()),
        State(feed.clone()),
        Json(CreatePostRequest {
            message: "gig tonight".to_string(),
        }),
    )
    .await
    .unwrap();

    let denied = delete_post(
        auth_user(&stranger),
        State(pool.clone()),
        State(feed.clone()),
        Path(created.post.id),
    )
    .await;
    assert!(matches!(denied, Err(ApiError::Forbidden(_))));

    let Json(ack) = delete_post(
        auth_user(&author),
        State(pool.clone()),
        State(feed.clone()),
        Path(created.post.id),
    )
    .await
    .unwrap();
    assert_eq!(ack.id, created.post.id);

    let second = delete_post(
        auth_user(&author),
        State(pool),
        State(feed),
        Path(created.post.id),
    )
    .await;
    assert!(matches!(second, Err(ApiError::NotFound(_))));
}

#[tokio::test]
#[serial]
#[ignore = "requires a running Postgres"]
async fn test_mutations_broadcast_feed_events() {
    let db = TestDatabase::new().await;
    let pool = db.pool().clone();
    let feed = feed();
    let mut rx = feed.subscribe();

    let author = create_unique_test_user(&pool).await.unwrap();

    let Json(created) = create_post(
        auth_user(&author),
        State(pool.clone()),
        State(feed.clone()),
        Json(CreatePostRequest {
            message: "hello feed".to_string(),
        }),
    )
    .await
    .unwrap();

    toggle_like(
        auth_user(&author),
        State(pool.clone()),
        State(feed.clone()),
        Path(created.post.id),
    )
    .await
    .unwrap();

    delete_post(
        auth_user(&author),
        State(pool),
        State(feed),
        Path(created.post.id),
    )
    .await
    .unwrap();

    let first = rx.recv().await.unwrap();
    assert!(matches!(first, FeedEvent::NewPost(ref p) if p.id == created.post.id));

    let second = rx.recv().await.unwrap();
    assert!(matches!(second, FeedEvent::UpdatePost(ref p) if p.liked_by == vec![author.id]));

    let third = rx.recv().await.unwrap();
    assert!(matches!(third, FeedEvent::DeletePost { id } if id == created.post.id));
}
