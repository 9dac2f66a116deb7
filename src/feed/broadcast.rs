/**
 * Feed Event Broadcasting
 *
 * This module defines the feed event type and the broadcaster service that
 * fans feed changes out to every connected subscriber.
 *
 * # Broadcasting
 *
 * Events are broadcast using `tokio::sync::broadcast`, a multi-producer,
 * multi-consumer channel: each subscriber holds its own receiver and gets a
 * copy of every event sent while it is connected. Delivery is best-effort
 * and at-most-once; subscribers joining after an event never see it.
 */

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::posts::db::Post;

/// A feed change pushed to connected clients
///
/// Serialized with the wire names clients listen for: `newPost`,
/// `updatePost`, `deletePost`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "payload")]
pub enum FeedEvent {
    /// A post was created; carries the full post
    #[serde(rename = "newPost")]
    NewPost(Post),
    /// A post's liked-set changed; carries the full updated post
    #[serde(rename = "updatePost")]
    UpdatePost(Post),
    /// A post was deleted; carries only the identifier
    #[serde(rename = "deletePost")]
    DeletePost { id: Uuid },
}

impl FeedEvent {
    /// Wire name of the event, used as the SSE event name
    pub fn name(&self) -> &'static str {
        match self {
            Self::NewPost(_) => "newPost",
            Self::UpdatePost(_) => "updatePost",
            Self::DeletePost { .. } => "deletePost",
        }
    }
}

/// In-process publish/subscribe fan-out service for feed events
///
/// Owned by the application state (composition root) and handed to the
/// post handlers and the subscription endpoint. Cloning is cheap; all
/// clones share one underlying channel.
#[derive(Clone)]
pub struct FeedBroadcaster {
    tx: broadcast::Sender<FeedEvent>,
}

impl FeedBroadcaster {
    /// Create a broadcaster with the given channel capacity
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Register a new subscriber session
    ///
    /// The receiver sees only events sent after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<FeedEvent> {
        self.tx.subscribe()
    }

    /// Broadcast an event to all currently connected subscribers
    ///
    /// # Returns
    ///
    /// Number of subscribers that received the event (0 if none — not an
    /// error, the feed simply had no listeners).
    pub fn broadcast(&self, event: FeedEvent) -> usize {
        match self.tx.send(event) {
            Ok(subscriber_count) => {
                tracing::info!("[Feed] Event broadcast to {} subscribers", subscriber_count);
                subscriber_count
            }
            Err(e) => {
                tracing::debug!("[Feed] No subscribers to receive event: {:?}", e);
                0
            }
        }
    }

    /// Current number of connected subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for FeedBroadcaster {
    fn default() -> Self {
        Self::new(1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_post() -> Post {
        Post {
            id: Uuid::new_v4(),
            author: Uuid::new_v4(),
            author_name: "Ada".to_string(),
            message: "Hello".to_string(),
            created_at: Utc::now(),
            liked_by: vec![],
        }
    }

    #[tokio::test]
    async fn test_broadcast_with_subscriber() {
        let feed = FeedBroadcaster::new(100);
        let mut rx = feed.subscribe();

        let post = sample_post();
        let count = feed.broadcast(FeedEvent::NewPost(post.clone()));
        assert_eq!(count, 1);

        let received = rx.recv().await.unwrap();
        assert_eq!(received, FeedEvent::NewPost(post));
    }

    #[tokio::test]
    async fn test_broadcast_no_subscribers() {
        let feed = FeedBroadcaster::new(100);
        let count = feed.broadcast(FeedEvent::DeletePost { id: Uuid::new_v4() });
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_broadcast_multiple_subscribers() {
        let feed = FeedBroadcaster::new(100);
        let mut rx1 = feed.subscribe();
        let mut rx2 = feed.subscribe();
        let mut rx3 = feed.subscribe();

        let count = feed.broadcast(FeedEvent::UpdatePost(sample_post()));
        assert_eq!(count, 3);

        assert!(rx1.recv().await.is_ok());
        assert!(rx2.recv().await.is_ok());
        assert!(rx3.recv().await.is_ok());
    }

    #[tokio::test]
    async fn test_late_subscriber_misses_earlier_events() {
        let feed = FeedBroadcaster::new(100);
        let mut early = feed.subscribe();
        feed.broadcast(FeedEvent::DeletePost { id: Uuid::new_v4() });

        // A subscriber connecting after the event never receives it
        let mut late = feed.subscribe();
        assert!(early.recv().await.is_ok());
        assert!(matches!(
            late.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));
    }

    #[tokio::test]
    async fn test_disconnected_subscriber_does_not_affect_others() {
        let feed = FeedBroadcaster::new(100);
        let gone = feed.subscribe();
        let mut alive = feed.subscribe();
        drop(gone);

        let count = feed.broadcast(FeedEvent::DeletePost { id: Uuid::new_v4() });
        assert_eq!(count, 1);
        assert!(alive.recv().await.is_ok());
    }

    #[test]
    fn test_event_wire_names() {
        let post = sample_post();
        let json = serde_json::to_value(FeedEvent::NewPost(post.clone())).unwrap();
        assert_eq!(json["type"], "newPost");
        assert_eq!(json["payload"]["message"], "Hello");

        let json = serde_json::to_value(FeedEvent::UpdatePost(post.clone())).unwrap();
        assert_eq!(json["type"], "updatePost");

        let json = serde_json::to_value(FeedEvent::DeletePost { id: post.id }).unwrap();
        assert_eq!(json["type"], "deletePost");
        assert_eq!(json["payload"]["id"], post.id.to_string());
    }
}
