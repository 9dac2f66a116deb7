//! Authentication API integration tests
//!
//! Exercises registration, login and the profile surface against a live
//! Postgres by calling the handlers directly.

mod common;

use axum::extract::State;
use axum::response::Json;
use serial_test::serial;

use bandspace::auth::users::{ProfileUpdate, Role};
use bandspace::auth::{
    get_profile, get_usernames, login, put_profile, register, LoginRequest, RegisterRequest,
};
use bandspace::error::ApiError;

use common::auth_helpers::{auth_user, create_test_user};
use common::database::TestDatabase;

fn register_request(name: &str, email: &str, role: &str) -> RegisterRequest {
    RegisterRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: "password123".to_string(),
        role: role.to_string(),
        phone: "555-0199".to_string(),
        address: String::new(),
        locale: String::new(),
        description: None,
    }
}

#[tokio::test]
#[serial]
#[ignore = "requires a running Postgres"]
async fn test_register_then_login_round_trip() {
    let db = TestDatabase::new().await;
    let pool = db.pool().clone();

    let Json(registered) = register(
        State(pool.clone()),
        Json(register_request("Ada", "ada@example.com", "musician")),
    )
    .await
    .unwrap();
    assert!(registered.success);
    assert_eq!(registered.user.email, "ada@example.com");
    assert_eq!(registered.user.role, Role::Musician);

    let Json(logged_in) = login(
        State(pool),
        Json(LoginRequest {
            email: "ada@example.com".to_string(),
            password: "password123".to_string(),
        }),
    )
    .await
    .unwrap();
    assert!(logged_in.success);
    assert!(!logged_in.token.is_empty());
    assert_eq!(logged_in.user.id, registered.user.id);
}

#[tokio::test]
#[serial]
#[ignore = "requires a running Postgres"]
async fn test_register_duplicate_email_conflict() {
    let db = TestDatabase::new().await;
    let pool = db.pool().clone();

    register(
        State(pool.clone()),
        Json(register_request("Ada", "ada@example.com", "musician")),
    )
    .await
    .unwrap();

    let result = register(
        State(pool),
        Json(register_request("Imposter", "ada@example.com", "user")),
    )
    .await;
    assert!(matches!(result, Err(ApiError::Conflict(_))));
}

#[tokio::test]
#[serial]
#[ignore = "requires a running Postgres"]
async fn test_login_wrong_password_unauthorized() {
    let db = TestDatabase::new().await;
    let pool = db.pool().clone();

    create_test_user(&pool, "Ada", "ada@example.com", "password123", Role::Musician)
        .await
        .unwrap();

    let result = login(
        State(pool),
        Json(LoginRequest {
            email: "ada@example.com".to_string(),
            password: "wrongpassword".to_string(),
        }),
    )
    .await;
    assert!(matches!(result, Err(ApiError::Unauthorized(_))));
}

#[tokio::test]
#[serial]
#[ignore = "requires a running Postgres"]
async fn test_login_unknown_email_unauthorized() {
    let db = TestDatabase::new().await;

    let result = login(
        State(db.pool().clone()),
        Json(LoginRequest {
            email: "nobody@example.com".to_string(),
            password: "password123".to_string(),
        }),
    )
    .await;
    assert!(matches!(result, Err(ApiError::Unauthorized(_))));
}

#[tokio::test]
#[serial]
#[ignore = "requires a running Postgres"]
async fn test_get_profile_returns_current_user() {
    let db = TestDatabase::new().await;
    let pool = db.pool().clone();

    let user = create_test_user(&pool, "Ada", "ada@example.com", "password123", Role::Musician)
        .await
        .unwrap();

    let Json(profile) = get_profile(auth_user(&user), State(pool)).await.unwrap();
    assert!(profile.success);
    assert_eq!(profile.user.email, "ada@example.com");
    assert_eq!(profile.user.name, "Ada");
}

#[tokio::test]
#[serial]
#[ignore = "requires a running Postgres"]
async fn test_put_profile_partial_update_keeps_unset_fields() {
    let db = TestDatabase::new().await;
    let pool = db.pool().clone();

    let user = create_test_user(&pool, "Ada", "ada@example.com", "password123", Role::Musician)
        .await
        .unwrap();

    let Json(updated) = put_profile(
        auth_user(&user),
        State(pool),
        Json(ProfileUpdate {
            name: Some("Ada L.".to_string()),
            ..ProfileUpdate::default()
        }),
    )
    .await
    .unwrap();

    assert_eq!(updated.user.name, "Ada L.");
    // Unset fields keep their stored values
    assert_eq!(updated.user.phone, "555-0000");
    assert_eq!(updated.user.email, "ada@example.com");
}

#[tokio::test]
#[serial]
#[ignore = "requires a running Postgres"]
async fn test_put_profile_description_requires_artist() {
    let db = TestDatabase::new().await;
    let pool = db.pool().clone();

    let musician =
        create_test_user(&pool, "Ada", "ada@example.com", "password123", Role::Musician)
            .await
            .unwrap();

    let result = put_profile(
        auth_user(&musician),
        State(pool.clone()),
        Json(ProfileUpdate {
            description: Some("Plays the theremin".to_string()),
            ..ProfileUpdate::default()
        }),
    )
    .await;
    assert!(matches!(result, Err(ApiError::BadRequest(_))));

    let artist =
        create_test_user(&pool, "Eno", "eno@example.com", "password123", Role::Artist)
            .await
            .unwrap();

    let Json(updated) = put_profile(
        auth_user(&artist),
        State(pool),
        Json(ProfileUpdate {
            description: Some("Ambient pioneer".to_string()),
            ..ProfileUpdate::default()
        }),
    )
    .await
    .unwrap();
    assert_eq!(updated.user.description.as_deref(), Some("Ambient pioneer"));
}

#[tokio::test]
#[serial]
#[ignore = "requires a running Postgres"]
async fn test_get_usernames_lists_all_users() {
    let db = TestDatabase::new().await;
    let pool = db.pool().clone();

    let ada = create_test_user(&pool, "Ada", "ada@example.com", "password123", Role::Musician)
        .await
        .unwrap();
    create_test_user(&pool, "Eno", "eno@example.com", "password123", Role::Artist)
        .await
        .unwrap();

    let Json(listing) = get_usernames(auth_user(&ada), State(pool)).await.unwrap();
    assert_eq!(listing.users.len(), 2);
    let names: Vec<&str> = listing.users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Ada", "Eno"]);
}
