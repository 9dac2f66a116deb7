/**
 * API Route Configuration
 *
 * This module groups the HTTP routes into a public set and a protected
 * set. The protected set is layered with the bearer-token authentication
 * middleware by the router assembly.
 *
 * # Public Routes
 *
 * - `POST /register`, `POST /login`
 * - `GET /eventsdata`, `GET /eventsdata/{id}`, `GET /event/{id}/booked-users`
 * - `GET /posts`
 * - `GET /instruments`, `GET /instruments/{id}`
 * - `GET /feed` (SSE subscription)
 *
 * # Protected Routes
 *
 * - `GET /user`, `PUT /user`, `GET /usernames`
 * - `POST /addevent`, `POST /eventsdata/{id}/rsvp`
 * - `POST /posts`, `PUT /posts/like/{id}`, `DELETE /posts/{id}`
 * - `POST /addnewinstrument`, `PUT /instruments/rent/{id}`,
 *   `PUT /instruments/return/{id}`
 */

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::auth;
use crate::events;
use crate::feed;
use crate::instruments;
use crate::posts;
use crate::server::state::AppState;

/// Routes that require no authentication
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/eventsdata", get(events::list_events))
        .route("/eventsdata/{id}", get(events::get_event))
        .route("/event/{id}/booked-users", get(events::booked_users))
        .route("/posts", get(posts::list_posts))
        .route("/instruments", get(instruments::list_instruments))
        .route("/instruments/{id}", get(instruments::get_instrument))
        .route("/feed", get(feed::handle_feed_subscription))
}

/// Routes that require a valid bearer token
///
/// The caller layers these with `auth_middleware`.
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/user", get(auth::get_profile).put(auth::put_profile))
        .route("/usernames", get(auth::get_usernames))
        .route("/addevent", post(events::create_event))
        .route("/eventsdata/{id}/rsvp", post(events::rsvp))
        .route("/posts", post(posts::create_post))
        .route("/posts/like/{id}", put(posts::toggle_like))
        .route("/posts/{id}", delete(posts::delete_post))
        .route("/addnewinstrument", post(instruments::create_instrument))
        .route("/instruments/rent/{id}", put(instruments::rent_instrument))
        .route(
            "/instruments/return/{id}",
            put(instruments::return_instrument),
        )
}
