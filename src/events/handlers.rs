/**
 * Event Handlers
 *
 * HTTP handlers for event booking:
 *
 * - `POST /addevent` - create an event (multipart, optional image upload)
 * - `GET /eventsdata` - list all events
 * - `GET /eventsdata/{id}` - get one event
 * - `POST /eventsdata/{id}/rsvp` - register the requester as an attendee
 * - `GET /event/{id}/booked-users` - resolve attendees to a contact view
 *
 * # Id Handling
 *
 * Get-by-id treats a malformed id as unaddressable and returns 404; the
 * booked-users listing returns 400 for a malformed id and 404 only when
 * the event is genuinely absent.
 */

use axum::{
    extract::{Multipart, Path, State},
    response::Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::events::db::{self, Event, NewEvent};
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;
use crate::uploads::{collect_form, store_image, FormData};

/// Single-event response
#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub success: bool,
    pub event: Event,
}

/// Event listing response
#[derive(Debug, Serialize)]
pub struct EventListResponse {
    pub success: bool,
    pub events: Vec<Event>,
}

/// RSVP acknowledgement
#[derive(Debug, Serialize)]
pub struct RsvpResponse {
    pub success: bool,
    pub message: String,
}

/// Booked-users listing response
#[derive(Debug, Serialize)]
pub struct BookedUsersResponse {
    pub success: bool,
    pub users: Vec<crate::auth::users::UserContact>,
}

/// Mandatory text fields of the create-event form
#[derive(Debug)]
struct EventForm {
    name: String,
    genre: String,
    host: String,
    description: String,
    location: String,
    event_date: DateTime<Utc>,
    slots: i32,
    link: String,
}

/// Parse the mandatory event fields out of a collected multipart form
fn parse_event_form(form: &FormData) -> Result<EventForm, ApiError> {
    let date_raw = form.require("date")?;
    let event_date = DateTime::parse_from_rfc3339(date_raw)
        .map_err(|_| ApiError::bad_request("Field `date` must be an RFC 3339 date-time"))?
        .with_timezone(&Utc);

    let slots: i32 = form
        .require("slots")?
        .parse()
        .map_err(|_| ApiError::bad_request("Field `slots` must be a number"))?;

    Ok(EventForm {
        name: form.require("name")?.to_string(),
        genre: form.require("genre")?.to_string(),
        host: form.require("host")?.to_string(),
        description: form.require("description")?.to_string(),
        location: form.require("location")?.to_string(),
        event_date,
        slots,
        link: form.require("link")?.to_string(),
    })
}

/// Create an event (POST /addevent, multipart)
///
/// An optional `image` part is written to the blob store and its generated
/// filename persisted as the event's image reference.
///
/// # Errors
///
/// * `400 Bad Request` - missing mandatory field or malformed body
/// * `401 Unauthorized` - missing or invalid token
pub async fn create_event(
    AuthUser(auth): AuthUser,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<EventResponse>, ApiError> {
    let form = collect_form(multipart).await?;
    let parsed = parse_event_form(&form)?;

    let image = match &form.image {
        Some(part) => Some(store_image(&state.config.upload_dir, part).await?),
        None => None,
    };

    let event = db::create_event(
        &state.pool,
        NewEvent {
            name: parsed.name,
            genre: parsed.genre,
            host: parsed.host,
            description: parsed.description,
            location: parsed.location,
            event_date: parsed.event_date,
            image,
            slots: parsed.slots,
            link: parsed.link,
            owner: auth.user_id,
        },
    )
    .await?;

    tracing::info!("Event {} created by {}", event.id, auth.user_id);

    Ok(Json(EventResponse {
        success: true,
        event,
    }))
}

/// List all events (GET /eventsdata)
pub async fn list_events(
    State(pool): State<PgPool>,
) -> Result<Json<EventListResponse>, ApiError> {
    let events = db::list_events(&pool).await?;
    Ok(Json(EventListResponse {
        success: true,
        events,
    }))
}

/// Get an event by id (GET /eventsdata/{id})
///
/// A malformed id cannot address any event, so it is a 404 like an absent
/// one.
pub async fn get_event(
    State(pool): State<PgPool>,
    Path(id): Path<String>,
) -> Result<Json<EventResponse>, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::not_found("Event not found"))?;

    let event = db::get_event(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Event not found"))?;

    Ok(Json(EventResponse {
        success: true,
        event,
    }))
}

/// RSVP to an event (POST /eventsdata/{id}/rsvp)
///
/// Idempotent-guarded: a second RSVP by the same user returns 400 and
/// leaves the attendee set unchanged.
///
/// # Errors
///
/// * `400 Bad Request` - requester already registered
/// * `401 Unauthorized` - missing or invalid token
/// * `404 Not Found` - event absent or id malformed
pub async fn rsvp(
    AuthUser(auth): AuthUser,
    State(pool): State<PgPool>,
    Path(id): Path<String>,
) -> Result<Json<RsvpResponse>, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::not_found("Event not found"))?;

    let event = db::get_event(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Event not found"))?;

    if event.booked_users.contains(&auth.user_id) {
        tracing::warn!("Duplicate RSVP by {} on event {}", auth.user_id, id);
        return Err(ApiError::already_registered());
    }

    db::add_attendee(&pool, id, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Event not found"))?;

    tracing::info!("User {} registered for event {}", auth.user_id, id);

    Ok(Json(RsvpResponse {
        success: true,
        message: "Registration successful".to_string(),
    }))
}

/// List an event's attendees as a contact projection
/// (GET /event/{id}/booked-users)
///
/// # Errors
///
/// * `400 Bad Request` - malformed id
/// * `404 Not Found` - event absent
pub async fn booked_users(
    State(pool): State<PgPool>,
    Path(id): Path<String>,
) -> Result<Json<BookedUsersResponse>, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::bad_request("Invalid event id"))?;

    let event = db::get_event(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Event not found"))?;

    let users = crate::auth::users::get_contacts_by_ids(&pool, &event.booked_users).await?;

    Ok(Json(BookedUsersResponse {
        success: true,
        users,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(fields: &[(&str, &str)]) -> FormData {
        let mut form = FormData::default();
        for (k, v) in fields {
            form.fields.insert(k.to_string(), v.to_string());
        }
        form
    }

    fn complete_form() -> FormData {
        form_with(&[
            ("name", "Open mic night"),
            ("genre", "Jazz"),
            ("host", "Blue Note"),
            ("date", "2026-09-01T20:00:00Z"),
            ("description", "Bring your own instrument"),
            ("location", "Downtown"),
            ("slots", "25"),
            ("link", "https://example.com/openmic"),
        ])
    }

    #[test]
    fn test_parse_complete_form() {
        let parsed = parse_event_form(&complete_form()).unwrap();
        assert_eq!(parsed.name, "Open mic night");
        assert_eq!(parsed.slots, 25);
        assert_eq!(parsed.event_date.to_rfc3339(), "2026-09-01T20:00:00+00:00");
    }

    #[test]
    fn test_missing_mandatory_field() {
        let mut form = complete_form();
        form.fields.remove("location");
        let err = parse_event_form(&form).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
        assert!(err.message().contains("location"));
    }

    #[test]
    fn test_bad_date_rejected() {
        let mut form = complete_form();
        form.fields.insert("date".to_string(), "next tuesday".to_string());
        assert!(parse_event_form(&form).is_err());
    }

    #[test]
    fn test_bad_slots_rejected() {
        let mut form = complete_form();
        form.fields.insert("slots".to_string(), "many".to_string());
        assert!(parse_event_form(&form).is_err());
    }
}
