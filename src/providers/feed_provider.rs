// In src/providers/feed_provider.rs

use anyhow::Context;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, error, info};

use crate::models::feed::{NewTokenMessage, SubscribeRequest};
use crate::models::token::TokenRecord;
use crate::notifications::EventQueue;

/// Live subscription to the token launch feed
///
/// Holds exactly one channel for its lifetime: connect, send the single
/// subscribe request, then forward decoded announcements to the event
/// queue until the channel ends or the handle is closed. There is no
/// retry and no reconnect.
pub struct WebSocketFeedProvider {
    ws_url: String,
    events: EventQueue,
}

impl WebSocketFeedProvider {
    pub fn new(ws_url: impl Into<String>, events: EventQueue) -> Self {
        Self { ws_url: ws_url.into(), events }
    }

    /// Open the channel, subscribe, and start the read task
    pub async fn subscribe(&self) -> anyhow::Result<FeedHandle> {
        let (stream, _) = connect_async(&self.ws_url)
            .await
            .with_context(|| format!("Failed to connect to feed {}", self.ws_url))?;
        info!("Feed channel connected: {}", self.ws_url);

        let (mut write, mut read) = stream.split();

        // One subscribe request, sent as soon as the channel is ready
        let payload = serde_json::to_string(&SubscribeRequest::new_tokens())?;
        write
            .send(Message::Text(payload.into()))
            .await
            .context("Failed to send subscribe request")?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();
        let events = self.events.clone();

        let task = tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        let _ = write.send(Message::Close(None)).await;
                        events.closed();
                        break;
                    }
                    frame = read.next() => match frame {
                        Some(Ok(Message::Text(text))) => {
                            match serde_json::from_str::<NewTokenMessage>(text.as_str()) {
                                Ok(message) => {
                                    debug!("Feed announcement: {:?}", message);
                                    events.token_listed(TokenRecord::from_feed(message));
                                }
                                Err(e) => {
                                    // Undecodable frames are unrecovered faults
                                    error!("Failed to parse feed message: {}", e);
                                    events.channel_error(format!("feed message parse failure: {}", e));
                                    break;
                                }
                            }
                        }
                        Some(Ok(Message::Close(_))) | None => {
                            info!("Feed channel closed by remote");
                            events.closed();
                            break;
                        }
                        // Ping/pong and binary frames carry no announcements
                        Some(Ok(_)) => {}
                        Some(Err(e)) => {
                            error!("Feed channel error: {}", e);
                            events.channel_error(e.to_string());
                            break;
                        }
                    }
                }
            }
        });

        Ok(FeedHandle { shutdown: Some(shutdown_tx), task: Some(task) })
    }
}

/// Scoped handle to a live subscription
///
/// Closing the handle sends a close frame and joins the read task;
/// dropping it fires the same shutdown signal, so every teardown path
/// releases the channel.
pub struct FeedHandle {
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl FeedHandle {
    /// Close the channel and wait for the read task to finish
    pub async fn close(mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                error!("Feed task ended abnormally: {}", e);
            }
        }
    }
}

impl Drop for FeedHandle {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}
