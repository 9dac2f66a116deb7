//! BandSpace Backend
//!
//! HTTP backend for a musicians' community platform: accounts and JWT
//! sessions, bookable events, a real-time social post feed, and
//! peer-to-peer instrument rental.
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── lib.rs         - Crate exports
//! ├── main.rs        - Server entry point (bin bandspace-server)
//! ├── server/        - Configuration, state, initialization
//! ├── routes/        - Route groups and router assembly
//! ├── auth/          - Users, registration, login, JWT sessions
//! ├── middleware/    - Bearer-token authentication
//! ├── events/        - Bookable events and RSVP
//! ├── posts/         - Social post feed
//! ├── instruments/   - Peer-to-peer instrument rental
//! ├── feed/          - Broadcast channel and SSE subscription
//! ├── uploads/       - Multipart form collection and image storage
//! └── error/         - API error taxonomy
//! ```

pub mod auth;
pub mod error;
pub mod events;
pub mod feed;
pub mod instruments;
pub mod middleware;
pub mod posts;
pub mod routes;
pub mod server;
pub mod uploads;

pub use error::ApiError;
pub use server::{create_app, AppState, ServerConfig};
