//! Route Configuration
//!
//! HTTP route groups and the final router assembly.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports
//! ├── api_routes.rs - Public and protected route groups
//! └── router.rs     - Router assembly (middleware, static files, fallback)
//! ```

/// Public and protected route groups
pub mod api_routes;

/// Router assembly
pub mod router;

pub use router::create_router;
