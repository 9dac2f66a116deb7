/**
 * Event Model and Database Operations
 *
 * This module defines the bookable event record and all database operations
 * on the events table. The attendee set is a UUID[] column; membership is
 * checked before appending so a reference appears at most once.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// A bookable event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    pub genre: String,
    pub host: String,
    pub description: String,
    pub location: String,
    pub event_date: DateTime<Utc>,
    /// Generated filename of the uploaded image, if any
    pub image: Option<String>,
    /// Capacity; stored only, not enforced
    pub slots: i32,
    pub link: String,
    pub owner: Uuid,
    /// Attendee references; each appears at most once
    pub booked_users: Vec<Uuid>,
}

/// Fields required to create a new event
#[derive(Debug)]
pub struct NewEvent {
    pub name: String,
    pub genre: String,
    pub host: String,
    pub description: String,
    pub location: String,
    pub event_date: DateTime<Utc>,
    pub image: Option<String>,
    pub slots: i32,
    pub link: String,
    pub owner: Uuid,
}

/// Create a new event with a fresh identifier and an empty attendee set
pub async fn create_event(pool: &PgPool, new_event: NewEvent) -> Result<Event, sqlx::Error> {
    let id = Uuid::new_v4();

    sqlx::query_as::<_, Event>(
        r#"
        INSERT INTO events (id, name, genre, host, description, location, event_date, image, slots, link, owner, booked_users)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, '{}')
        RETURNING id, name, genre, host, description, location, event_date, image, slots, link, owner, booked_users
        "#,
    )
    .bind(id)
    .bind(&new_event.name)
    .bind(&new_event.genre)
    .bind(&new_event.host)
    .bind(&new_event.description)
    .bind(&new_event.location)
    .bind(new_event.event_date)
    .bind(&new_event.image)
    .bind(new_event.slots)
    .bind(&new_event.link)
    .bind(new_event.owner)
    .fetch_one(pool)
    .await
}

/// List all events
pub async fn list_events(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>(
        r#"
        SELECT id, name, genre, host, description, location, event_date, image, slots, link, owner, booked_users
        FROM events
        ORDER BY event_date
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Get an event by id
pub async fn get_event(pool: &PgPool, id: Uuid) -> Result<Option<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>(
        r#"
        SELECT id, name, genre, host, description, location, event_date, image, slots, link, owner, booked_users
        FROM events
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Append an attendee to an event and return the updated event
///
/// The caller checks membership first; this append is unconditional.
pub async fn add_attendee(
    pool: &PgPool,
    event_id: Uuid,
    user_id: Uuid,
) -> Result<Option<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>(
        r#"
        UPDATE events
        SET booked_users = array_append(booked_users, $1)
        WHERE id = $2
        RETURNING id, name, genre, host, description, location, event_date, image, slots, link, owner, booked_users
        "#,
    )
    .bind(user_id)
    .bind(event_id)
    .fetch_optional(pool)
    .await
}
