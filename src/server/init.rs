/**
 * Server Initialization
 *
 * This module handles initialization of the Axum HTTP server: database
 * connection, feed broadcaster creation, state assembly and route
 * configuration.
 *
 * # Initialization Steps
 *
 * 1. Connect to the database and run migrations (fail fast if unreachable)
 * 2. Create the feed broadcast channel
 * 3. Assemble `AppState` and the router
 */

use axum::Router;

use crate::feed::FeedBroadcaster;
use crate::routes::create_router;
use crate::server::config::{load_database, ServerConfig};
use crate::server::state::AppState;

/// Feed broadcast channel capacity; plenty for a community feed
const FEED_CHANNEL_CAPACITY: usize = 1000;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the database is unreachable or migrations cannot run.
pub async fn create_app(config: ServerConfig) -> Result<Router, sqlx::Error> {
    tracing::info!("Initializing bandspace backend server");

    let pool = load_database(&config.database_url).await?;

    let feed = FeedBroadcaster::new(FEED_CHANNEL_CAPACITY);
    tracing::info!("Feed broadcast channel initialized");

    let app_state = AppState::new(pool, feed, config);
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}
