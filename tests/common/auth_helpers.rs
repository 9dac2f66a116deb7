//! Authentication test helpers
//!
//! Provides utilities for creating test users, generating tokens and
//! constructing the authenticated-user extractor handlers receive.

use sqlx::PgPool;
use uuid::Uuid;

use bandspace::auth::sessions::create_token;
use bandspace::auth::users::{create_user, NewUser, Role, User};
use bandspace::middleware::auth::{AuthUser, AuthenticatedUser};

/// Test user credentials
pub struct TestUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Create a test user in the database
pub async fn create_test_user(
    pool: &PgPool,
    name: &str,
    email: &str,
    password: &str,
    role: Role,
) -> Result<TestUser, Box<dyn std::error::Error>> {
    let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;

    let user: User = create_user(
        pool,
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
            role,
            phone: "555-0000".to_string(),
            address: String::new(),
            locale: String::new(),
            description: None,
        },
    )
    .await?;

    let token = create_token(user.id, user.email.clone())?;

    Ok(TestUser {
        id: user.id,
        name: user.name,
        email: user.email,
        password: password.to_string(),
        token,
    })
}

/// Create a test user with a unique email
pub async fn create_unique_test_user(
    pool: &PgPool,
) -> Result<TestUser, Box<dyn std::error::Error>> {
    let email = format!("test_{}@example.com", Uuid::new_v4());
    create_test_user(pool, "Test User", &email, "test_password_123", Role::Musician).await
}

/// Build the extractor protected handlers receive for this user
pub fn auth_user(user: &TestUser) -> AuthUser {
    AuthUser(AuthenticatedUser {
        user_id: user.id,
        email: user.email.clone(),
    })
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
