//! Common test utilities and helpers
//!
//! Shared fixtures for the integration tests:
//! - Database fixture (pool, migrations, cleanup)
//! - Authentication helpers (test users and tokens)

#![allow(dead_code)]

pub mod auth_helpers;
pub mod database;

pub use auth_helpers::*;
pub use database::*;
