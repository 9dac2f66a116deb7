/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the composition root: it owns the database pool, the feed
 * broadcaster and the server configuration, and is cloned into every
 * handler. The `FromRef` implementations let handlers extract just the
 * part of the state they need.
 *
 * # Thread Safety
 *
 * All fields are cheaply cloneable handles designed for concurrent use:
 * `PgPool` is internally pooled, `FeedBroadcaster` shares one broadcast
 * channel across clones, and the config is behind an `Arc`.
 */

use axum::extract::FromRef;
use sqlx::PgPool;
use std::sync::Arc;

use crate::feed::FeedBroadcaster;
use crate::server::config::ServerConfig;

/// Application state shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool; the sole mutable shared resource
    pub pool: PgPool,

    /// Feed broadcaster, injected into the post handlers and the
    /// subscription endpoint
    pub feed: FeedBroadcaster,

    /// Server configuration (upload directory, port)
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(pool: PgPool, feed: FeedBroadcaster, config: ServerConfig) -> Self {
        Self {
            pool,
            feed,
            config: Arc::new(config),
        }
    }
}

/// Allow handlers to extract `State<PgPool>` directly
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}

/// Allow handlers to extract `State<FeedBroadcaster>` directly
impl FromRef<AppState> for FeedBroadcaster {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.feed.clone()
    }
}

/// Allow handlers to extract `State<Arc<ServerConfig>>` directly
impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
