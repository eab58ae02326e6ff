// src/notifications/mod.rs
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::error;

use crate::models::token::TokenRecord;

/// Events emitted by the feed subscription task
#[derive(Debug)]
pub enum FeedEvent {
    /// A decoded launch announcement
    TokenListed(TokenRecord),
    /// Channel-level fault; the subscription is over
    ChannelError(String),
    /// The channel closed, remotely or through local teardown
    Closed,
}

/// Non-blocking sender half feeding the event loop
///
/// The feed task must never stall on a slow consumer; sends go through an
/// unbounded channel and failures only hit the diagnostic log.
pub struct EventQueue {
    sender: UnboundedSender<FeedEvent>,
}

impl EventQueue {
    /// Create a queue together with its receiving end
    pub fn new() -> (Self, UnboundedReceiver<FeedEvent>) {
        let (sender, receiver) = unbounded_channel();
        (Self { sender }, receiver)
    }

    /// Queue a decoded token (non-blocking)
    pub fn token_listed(&self, record: TokenRecord) {
        if self.sender.send(FeedEvent::TokenListed(record)).is_err() {
            error!("Failed to queue token event: receiver dropped");
        }
    }

    /// Queue a channel error (non-blocking)
    pub fn channel_error(&self, message: impl Into<String>) {
        if self.sender.send(FeedEvent::ChannelError(message.into())).is_err() {
            error!("Failed to queue channel error: receiver dropped");
        }
    }

    /// Queue a channel-closed notice
    pub fn closed(&self) {
        let _ = self.sender.send(FeedEvent::Closed);
    }
}

impl Clone for EventQueue {
    fn clone(&self) -> Self {
        Self { sender: self.sender.clone() }
    }
}
