//! Event Booking Module
//!
//! Bookable community events: creation with an optional image upload,
//! listing, RSVP with a duplicate guard, and a contact projection of an
//! event's attendees.
//!
//! # Module Structure
//!
//! ```text
//! events/
//! ├── mod.rs      - Module exports
//! ├── db.rs       - Event model and database operations
//! └── handlers.rs - HTTP handlers (create/list/get/rsvp/booked-users)
//! ```

/// Event model and database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use db::{Event, NewEvent};
pub use handlers::{booked_users, create_event, get_event, list_events, rsvp};
