use async_trait::async_trait;
use tracing::{error, info};

use crate::models::token::TokenRecord;
use crate::traits::event_handler::TokenEventHandler;
use crate::utils::helper::truncate_string;

/// Console logging event handler
pub struct ConsoleEventHandler;

impl ConsoleEventHandler {
    /// Create a new console event handler
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenEventHandler for ConsoleEventHandler {
    async fn on_token_listed(&self, record: &TokenRecord) {
        let symbol = if record.symbol.is_empty() { "-" } else { record.symbol.as_str() };

        info!("  + {} ({})", record.name, symbol);
        if !record.id.is_empty() {
            info!("     Mint: {}", record.id);
        }
        info!("     {}", truncate_string(&record.description, 60));
        info!("     Value: ${:.2} ({}%)", record.value, record.change);
        info!(
            "     Created: {}",
            record.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }

    async fn on_feed_error(&self, error: &anyhow::Error) {
        error!("Feed channel error: {}", error);
    }
}
