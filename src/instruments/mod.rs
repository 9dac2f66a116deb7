//! Instrument Rental Module
//!
//! Peer-to-peer instrument rental: listings with an optional image upload,
//! rent/return state transitions, and the invariant that the three rental
//! fields are set exactly when a listing is not available.
//!
//! # Module Structure
//!
//! ```text
//! instruments/
//! ├── mod.rs      - Module exports
//! ├── db.rs       - Instrument model, status enum, database operations
//! └── handlers.rs - HTTP handlers (create/list/get/rent/return)
//! ```

/// Instrument model and database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use db::{Instrument, NewInstrument, Status};
pub use handlers::{
    create_instrument, get_instrument, list_instruments, rent_instrument, return_instrument,
};
