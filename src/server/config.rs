/**
 * Server Configuration
 *
 * This module loads server configuration from environment variables and
 * initializes the database connection pool.
 *
 * # Recognized Options
 *
 * - `DATABASE_URL` - Postgres connection string (required)
 * - `SERVER_PORT`  - listen port (default 3000)
 * - `JWT_SECRET`   - token signing secret (read by the session module;
 *                    falls back to a development default with a warning)
 * - `UPLOAD_DIR`   - directory for uploaded images (default "uploads")
 *
 * No other external configuration surface exists.
 */

use sqlx::PgPool;
use std::path::PathBuf;

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub upload_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Fails when `DATABASE_URL` is missing: every operation in this
    /// service needs the store, so there is no degraded mode.
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL must be set".to_string())?;

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);

        let upload_dir = std::env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("uploads"));

        Ok(Self {
            database_url,
            port,
            upload_dir,
        })
    }
}

/// Create the database connection pool and run migrations
///
/// # Errors
///
/// Fails when the database is unreachable or a migration cannot be
/// applied; the server does not start without its store.
pub async fn load_database(database_url: &str) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let pool = PgPool::connect(database_url).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to run database migrations: {:?}", e);
            sqlx::Error::Migrate(Box::new(e))
        })?;

    tracing::info!("Database ready");
    Ok(pool)
}
