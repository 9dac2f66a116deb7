//! Post Feed Module
//!
//! The social post feed: creation, listing, like-toggling and author-only
//! deletion, with every mutation fanned out to connected clients through
//! the feed broadcaster.
//!
//! # Module Structure
//!
//! ```text
//! posts/
//! ├── mod.rs      - Module exports
//! ├── db.rs       - Post model and database operations
//! └── handlers.rs - HTTP handlers (create/list/like/delete)
//! ```
//!
//! # Post Lifecycle
//!
//! Created → (Liked ⇄ Unliked)* → Deleted (terminal). Likes are a set
//! toggle, not a counter with history.

/// Post model and database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use db::Post;
pub use handlers::{create_post, delete_post, list_posts, toggle_like};
