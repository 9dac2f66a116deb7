/**
 * Instrument Rental Handlers
 *
 * HTTP handlers for peer-to-peer instrument rental:
 *
 * - `POST /addnewinstrument` - create a listing (multipart, optional image)
 * - `GET /instruments` - list all listings
 * - `GET /instruments/{id}` - get one listing
 * - `PUT /instruments/rent/{id}` - rent (not the owner, must be available)
 * - `PUT /instruments/return/{id}` - return (current renter only)
 */

use axum::{
    extract::{Multipart, Path, State},
    response::Json,
};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::users::get_user_by_id;
use crate::error::ApiError;
use crate::instruments::db::{self, Instrument, NewInstrument, Status};
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;
use crate::uploads::{collect_form, store_image, FormData};

/// Single-instrument response
#[derive(Debug, Serialize)]
pub struct InstrumentResponse {
    pub success: bool,
    pub instrument: Instrument,
}

/// Instrument listing response
#[derive(Debug, Serialize)]
pub struct InstrumentListResponse {
    pub success: bool,
    pub instruments: Vec<Instrument>,
}

/// Optional rent request body; `return_by` defaults to one week out
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RentRequest {
    pub return_by: Option<DateTime<Utc>>,
}

/// Mandatory text fields of the create-instrument form
struct InstrumentForm {
    name: String,
    description: String,
    category: String,
    rent_amount: f64,
    phone: String,
    email: String,
}

fn parse_instrument_form(form: &FormData) -> Result<InstrumentForm, ApiError> {
    let rent_amount: f64 = form
        .require("amount")?
        .parse()
        .map_err(|_| ApiError::bad_request("Field `amount` must be a number"))?;

    Ok(InstrumentForm {
        name: form.require("name")?.to_string(),
        description: form.require("description")?.to_string(),
        category: form.require("category")?.to_string(),
        rent_amount,
        phone: form.get("phone").unwrap_or_default().to_string(),
        email: form.get("email").unwrap_or_default().to_string(),
    })
}

/// Create an instrument listing (POST /addnewinstrument, multipart)
///
/// The listing starts out `available`; the owner's display name is
/// denormalized onto it.
///
/// # Errors
///
/// * `400 Bad Request` - missing mandatory field or malformed body
/// * `401 Unauthorized` - missing or invalid token
pub async fn create_instrument(
    AuthUser(auth): AuthUser,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<InstrumentResponse>, ApiError> {
    let form = collect_form(multipart).await?;
    let parsed = parse_instrument_form(&form)?;

    let owner = get_user_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid or expired token"))?;

    let image = match &form.image {
        Some(part) => Some(store_image(&state.config.upload_dir, part).await?),
        None => None,
    };

    let instrument = db::create_instrument(
        &state.pool,
        NewInstrument {
            name: parsed.name,
            description: parsed.description,
            category: parsed.category,
            rent_amount: parsed.rent_amount,
            image,
            owner: owner.id,
            owner_name: owner.name,
            phone: parsed.phone,
            email: parsed.email,
        },
    )
    .await?;

    tracing::info!("Instrument {} listed by {}", instrument.id, auth.user_id);

    Ok(Json(InstrumentResponse {
        success: true,
        instrument,
    }))
}

/// List all instrument listings (GET /instruments)
pub async fn list_instruments(
    State(pool): State<PgPool>,
) -> Result<Json<InstrumentListResponse>, ApiError> {
    let instruments = db::list_instruments(&pool).await?;
    Ok(Json(InstrumentListResponse {
        success: true,
        instruments,
    }))
}

/// Get an instrument by id (GET /instruments/{id})
pub async fn get_instrument(
    State(pool): State<PgPool>,
    Path(id): Path<String>,
) -> Result<Json<InstrumentResponse>, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::not_found("Instrument not found"))?;

    let instrument = db::get_instrument(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Instrument not found"))?;

    Ok(Json(InstrumentResponse {
        success: true,
        instrument,
    }))
}

/// Rent an instrument (PUT /instruments/rent/{id})
///
/// # Errors
///
/// * `400 Bad Request` - instrument not available
/// * `401 Unauthorized` - missing or invalid token
/// * `403 Forbidden` - requester owns the instrument
/// * `404 Not Found` - instrument absent
pub async fn rent_instrument(
    AuthUser(auth): AuthUser,
    State(pool): State<PgPool>,
    Path(id): Path<String>,
    body: Option<Json<RentRequest>>,
) -> Result<Json<InstrumentResponse>, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::not_found("Instrument not found"))?;

    let instrument = db::get_instrument(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Instrument not found"))?;

    if instrument.owner == auth.user_id {
        return Err(ApiError::self_rental_forbidden());
    }

    if instrument.status != Status::Available {
        return Err(ApiError::not_available());
    }

    let rented_on = Utc::now();
    let return_by = body
        .and_then(|Json(request)| request.return_by)
        .unwrap_or_else(|| rented_on + Duration::days(7));

    let instrument = db::mark_rented(&pool, id, auth.user_id, rented_on, return_by)
        .await?
        .ok_or_else(|| ApiError::not_found("Instrument not found"))?;

    tracing::info!("Instrument {} rented by {}", id, auth.user_id);

    Ok(Json(InstrumentResponse {
        success: true,
        instrument,
    }))
}

/// Return a rented instrument (PUT /instruments/return/{id})
///
/// # Errors
///
/// * `401 Unauthorized` - missing or invalid token
/// * `403 Forbidden` - requester is not the current renter
/// * `404 Not Found` - instrument absent
pub async fn return_instrument(
    AuthUser(auth): AuthUser,
    State(pool): State<PgPool>,
    Path(id): Path<String>,
) -> Result<Json<InstrumentResponse>, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::not_found("Instrument not found"))?;

    let instrument = db::get_instrument(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Instrument not found"))?;

    if instrument.rented_by != Some(auth.user_id) {
        tracing::warn!(
            "User {} attempted to return instrument {} they did not rent",
            auth.user_id,
            id
        );
        return Err(ApiError::not_renter());
    }

    let instrument = db::mark_returned(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Instrument not found"))?;

    tracing::info!("Instrument {} returned by {}", id, auth.user_id);

    Ok(Json(InstrumentResponse {
        success: true,
        instrument,
    }))
}
