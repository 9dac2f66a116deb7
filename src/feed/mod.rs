//! Real-time Feed Module
//!
//! In-process publish/subscribe fan-out for post feed changes, pushed to
//! connected clients over Server-Sent Events.
//!
//! # Module Structure
//!
//! ```text
//! feed/
//! ├── mod.rs          - Module exports and documentation
//! ├── broadcast.rs    - FeedEvent type and FeedBroadcaster service
//! └── subscription.rs - SSE subscription handler
//! ```
//!
//! # Events
//!
//! - `newPost` - a post was created (payload: full post)
//! - `updatePost` - a post's liked-set changed (payload: full post)
//! - `deletePost` - a post was deleted (payload: post id)
//!
//! The broadcaster is an injected service owned by `AppState`, not a
//! process-wide global; handlers that mutate the feed call `broadcast` and
//! the subscription endpoint calls `subscribe`.

/// FeedEvent type and broadcaster service
pub mod broadcast;

/// SSE subscription handler
pub mod subscription;

pub use broadcast::{FeedBroadcaster, FeedEvent};
pub use subscription::handle_feed_subscription;
