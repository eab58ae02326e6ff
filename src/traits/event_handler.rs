use async_trait::async_trait;

use crate::models::token::TokenRecord;

/// Handler for launch feed events
#[async_trait]
pub trait TokenEventHandler: Send + Sync {
    /// Called for every token announced on the feed
    async fn on_token_listed(&self, record: &TokenRecord);

    /// Called on channel-level feed errors
    async fn on_feed_error(&self, error: &anyhow::Error);
}
