/**
 * User Model and Database Operations
 *
 * This module defines the user record, the closed role enumeration, and
 * all database operations on the users table.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::str::FromStr;
use uuid::Uuid;

/// User role
///
/// A closed enumeration validated at the API boundary. Stored as lowercase
/// text in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Musician,
    Artist,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Musician => "musician",
            Self::Artist => "artist",
            Self::User => "user",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "musician" => Ok(Self::Musician),
            "artist" => Ok(Self::Artist),
            "user" => Ok(Self::User),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl sqlx::Type<sqlx::Postgres> for Role {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <&str as sqlx::Type<sqlx::Postgres>>::type_info()
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Role {
    fn decode(
        value: sqlx::postgres::PgValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let text = <&str as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Role::from_str(text).map_err(Into::into)
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Postgres> for Role {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

/// User record as stored in the database
///
/// The password hash never leaves this struct; outward-facing views are
/// built from it explicitly (see `auth::handlers::types::UserResponse`).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Role (musician, artist, user)
    pub role: Role,
    pub phone: String,
    pub address: String,
    pub locale: String,
    /// Free-text description; only non-empty for artists
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a new user
#[derive(Debug)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub phone: String,
    pub address: String,
    pub locale: String,
    pub description: Option<String>,
}

/// Partial profile update; `None` fields are left unchanged
#[derive(Debug, Default, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub locale: Option<String>,
    pub description: Option<String>,
}

/// Lightweight (id, name) projection of a user
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Username {
    pub id: Uuid,
    pub name: String,
}

/// Contact projection used by the booked-users listing
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Create a new user with a fresh identifier
pub async fn create_user(pool: &PgPool, new_user: NewUser) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, name, email, password_hash, role, phone, address, locale, description, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING id, name, email, password_hash, role, phone, address, locale, description, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&new_user.name)
    .bind(&new_user.email)
    .bind(&new_user.password_hash)
    .bind(new_user.role)
    .bind(&new_user.phone)
    .bind(&new_user.address)
    .bind(&new_user.locale)
    .bind(&new_user.description)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, role, phone, address, locale, description, created_at, updated_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, password_hash, role, phone, address, locale, description, created_at, updated_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Apply a partial profile update
///
/// Unset fields keep their stored values (COALESCE semantics). Returns the
/// updated user.
pub async fn update_profile(
    pool: &PgPool,
    user_id: Uuid,
    update: ProfileUpdate,
) -> Result<User, sqlx::Error> {
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET name = COALESCE($1, name),
            phone = COALESCE($2, phone),
            address = COALESCE($3, address),
            locale = COALESCE($4, locale),
            description = COALESCE($5, description),
            updated_at = $6
        WHERE id = $7
        RETURNING id, name, email, password_hash, role, phone, address, locale, description, created_at, updated_at
        "#,
    )
    .bind(&update.name)
    .bind(&update.phone)
    .bind(&update.address)
    .bind(&update.locale)
    .bind(&update.description)
    .bind(now)
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// List the (id, name) projection of every user
pub async fn list_usernames(pool: &PgPool) -> Result<Vec<Username>, sqlx::Error> {
    sqlx::query_as::<_, Username>("SELECT id, name FROM users ORDER BY name")
        .fetch_all(pool)
        .await
}

/// Resolve a set of user ids to their contact projection (name, email, phone)
pub async fn get_contacts_by_ids(
    pool: &PgPool,
    ids: &[Uuid],
) -> Result<Vec<UserContact>, sqlx::Error> {
    sqlx::query_as::<_, UserContact>(
        "SELECT name, email, phone FROM users WHERE id = ANY($1)",
    )
    .bind(ids)
    .fetch_all(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_role_round_trip() {
        for role in [Role::Musician, Role::Artist, Role::User] {
            let parsed: Role = role.as_str().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn test_role_parse_is_case_insensitive() {
        assert_eq!("Musician".parse::<Role>().unwrap(), Role::Musician);
        assert_eq!("ARTIST".parse::<Role>().unwrap(), Role::Artist);
    }

    #[test]
    fn test_role_parse_rejects_unknown() {
        assert!("admin".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serde() {
        let json = serde_json::to_string(&Role::Artist).unwrap();
        assert_eq!(json, r#""artist""#);
        let role: Role = serde_json::from_str(r#""musician""#).unwrap();
        assert_eq!(role, Role::Musician);
    }
}
