//! Server Setup Module
//!
//! Server configuration, shared application state and initialization.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── config.rs - Environment configuration and database setup
//! ├── state.rs  - AppState and FromRef implementations
//! └── init.rs   - Application assembly
//! ```

/// Environment configuration and database setup
pub mod config;

/// Application state
pub mod state;

/// Application assembly
pub mod init;

pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
