/**
 * Feed Subscription Handler
 *
 * This module implements the Server-Sent Events (SSE) subscription handler
 * for the `GET /feed` endpoint. Each connected client holds one receiver on
 * the feed broadcast channel and gets a copy of every feed change while
 * connected.
 *
 * # Delivery Semantics
 *
 * - Best-effort, at-most-once per currently connected subscriber
 * - No replay: clients connecting after an event never receive it
 * - Lagged receivers skip missed events and keep listening
 * - Connections are kept alive with the SSE keep-alive mechanism
 */

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::stream;
use futures_util::Stream;
use std::convert::Infallible;

use crate::feed::broadcast::FeedBroadcaster;

/// Handle a feed subscription (GET /feed)
///
/// Emits `newPost`, `updatePost` and `deletePost` events; the data payload
/// is the JSON-serialized feed event.
pub async fn handle_feed_subscription(
    State(feed): State<FeedBroadcaster>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    tracing::info!(
        "[Feed] Subscriber connected ({} active)",
        feed.subscriber_count()
    );

    let rx = feed.subscribe();

    // Loop until there is a meaningful event to yield; keep-alive comments
    // are injected by axum, so nothing needs to be sent while idle.
    let stream = stream::unfold(rx, move |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    let data = match serde_json::to_string(&event) {
                        Ok(data) => data,
                        Err(e) => {
                            tracing::error!("[Feed] Failed to serialize event: {:?}", e);
                            continue;
                        }
                    };

                    tracing::debug!("[Feed] Delivering {} to subscriber", event.name());

                    let sse_event = Event::default().event(event.name()).data(data);
                    return Some((Ok(sse_event), rx));
                }
                Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                    // Best-effort delivery: skip what was missed, keep listening
                    tracing::warn!("[Feed] Subscriber lagged, skipped {} events", skipped);
                    continue;
                }
                Err(tokio::sync::broadcast::error::RecvError::Closed) => {
                    tracing::warn!("[Feed] Broadcast channel closed, ending stream");
                    return None;
                }
            }
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
