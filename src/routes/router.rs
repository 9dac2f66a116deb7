/**
 * Router Assembly
 *
 * This module combines the route groups into the final Axum router:
 *
 * 1. Public routes (no token required)
 * 2. Protected routes, layered with the auth middleware
 * 3. Static serving of uploaded images under `/uploads`
 * 4. A JSON 404 fallback
 *
 * Tracing and permissive CORS layers wrap the whole router.
 */

use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::middleware::auth::auth_middleware;
use crate::routes::api_routes::{protected_routes, public_routes};
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    let protected = protected_routes().route_layer(middleware::from_fn_with_state(
        app_state.clone(),
        auth_middleware,
    ));

    Router::new()
        .merge(public_routes())
        .merge(protected)
        // Uploaded images, retrievable by generated filename
        .nest_service(
            "/uploads",
            ServeDir::new(&app_state.config.upload_dir),
        )
        .fallback(|| async { ApiError::not_found("Route not found") })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
