/**
 * Instrument Model and Database Operations
 *
 * This module defines the rental instrument record, its availability
 * status, and all database operations on the instruments table.
 *
 * # Rental Invariant
 *
 * status = not-available implies rented_on, return_by and rented_by are
 * all set; status = available implies all three are NULL. Both transitions
 * (`mark_rented`, `mark_returned`) write the status and all three fields
 * in one statement so the invariant cannot be half-applied.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::str::FromStr;
use uuid::Uuid;

/// Instrument availability status
///
/// Stored as text (`available` / `not-available`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Available,
    NotAvailable,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::NotAvailable => "not-available",
        }
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "not-available" => Ok(Self::NotAvailable),
            other => Err(format!("unknown status '{}'", other)),
        }
    }
}

impl sqlx::Type<sqlx::Postgres> for Status {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <&str as sqlx::Type<sqlx::Postgres>>::type_info()
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Status {
    fn decode(
        value: sqlx::postgres::PgValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let text = <&str as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Status::from_str(text).map_err(Into::into)
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Postgres> for Status {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

/// A rentable instrument listing
///
/// `owner_name` is denormalized at creation time; stale copies after a
/// rename are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Instrument {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub category: String,
    pub rent_amount: f64,
    pub image: Option<String>,
    pub owner: Uuid,
    pub owner_name: String,
    pub phone: String,
    pub email: String,
    pub status: Status,
    pub rented_on: Option<DateTime<Utc>>,
    pub return_by: Option<DateTime<Utc>>,
    pub rented_by: Option<Uuid>,
}

/// Fields required to create a new instrument listing
#[derive(Debug)]
pub struct NewInstrument {
    pub name: String,
    pub description: String,
    pub category: String,
    pub rent_amount: f64,
    pub image: Option<String>,
    pub owner: Uuid,
    pub owner_name: String,
    pub phone: String,
    pub email: String,
}

const INSTRUMENT_COLUMNS: &str = "id, name, description, category, rent_amount, image, owner, owner_name, phone, email, status, rented_on, return_by, rented_by";

/// Create a new instrument listing, available by default
pub async fn create_instrument(
    pool: &PgPool,
    new_instrument: NewInstrument,
) -> Result<Instrument, sqlx::Error> {
    let id = Uuid::new_v4();

    sqlx::query_as::<_, Instrument>(&format!(
        r#"
        INSERT INTO instruments (id, name, description, category, rent_amount, image, owner, owner_name, phone, email, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, 'available')
        RETURNING {INSTRUMENT_COLUMNS}
        "#,
    ))
    .bind(id)
    .bind(&new_instrument.name)
    .bind(&new_instrument.description)
    .bind(&new_instrument.category)
    .bind(new_instrument.rent_amount)
    .bind(&new_instrument.image)
    .bind(new_instrument.owner)
    .bind(&new_instrument.owner_name)
    .bind(&new_instrument.phone)
    .bind(&new_instrument.email)
    .fetch_one(pool)
    .await
}

/// List all instrument listings
pub async fn list_instruments(pool: &PgPool) -> Result<Vec<Instrument>, sqlx::Error> {
    sqlx::query_as::<_, Instrument>(&format!(
        "SELECT {INSTRUMENT_COLUMNS} FROM instruments ORDER BY name"
    ))
    .fetch_all(pool)
    .await
}

/// Get an instrument by id
pub async fn get_instrument(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<Instrument>, sqlx::Error> {
    sqlx::query_as::<_, Instrument>(&format!(
        "SELECT {INSTRUMENT_COLUMNS} FROM instruments WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Transition an instrument to not-available with all rental fields set
pub async fn mark_rented(
    pool: &PgPool,
    id: Uuid,
    renter: Uuid,
    rented_on: DateTime<Utc>,
    return_by: DateTime<Utc>,
) -> Result<Option<Instrument>, sqlx::Error> {
    sqlx::query_as::<_, Instrument>(&format!(
        r#"
        UPDATE instruments
        SET status = 'not-available', rented_on = $1, return_by = $2, rented_by = $3
        WHERE id = $4
        RETURNING {INSTRUMENT_COLUMNS}
        "#,
    ))
    .bind(rented_on)
    .bind(return_by)
    .bind(renter)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Transition an instrument back to available with rental fields cleared
pub async fn mark_returned(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<Instrument>, sqlx::Error> {
    sqlx::query_as::<_, Instrument>(&format!(
        r#"
        UPDATE instruments
        SET status = 'available', rented_on = NULL, return_by = NULL, rented_by = NULL
        WHERE id = $1
        RETURNING {INSTRUMENT_COLUMNS}
        "#,
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_round_trip() {
        for status in [Status::Available, Status::NotAvailable] {
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
        }
    }

    #[test]
    fn test_status_serde_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Status::NotAvailable).unwrap(),
            r#""not-available""#
        );
        let status: Status = serde_json::from_str(r#""available""#).unwrap();
        assert_eq!(status, Status::Available);
    }

    #[test]
    fn test_status_parse_rejects_unknown() {
        assert!("rented".parse::<Status>().is_err());
    }
}
