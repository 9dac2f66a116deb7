//! Authentication HTTP Handlers
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Handler exports
//! ├── types.rs    - Request/response types
//! ├── register.rs - User registration handler
//! ├── login.rs    - User authentication handler
//! └── profile.rs  - Profile read/update and usernames listing
//! ```

/// Request/response types
pub mod types;

/// User registration handler
pub mod register;

/// User authentication handler
pub mod login;

/// Profile handlers
pub mod profile;

pub use login::login;
pub use profile::{get_profile, get_usernames, put_profile};
pub use register::register;
