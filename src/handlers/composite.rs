use std::sync::Arc;

use async_trait::async_trait;

use crate::models::token::TokenRecord;
use crate::traits::event_handler::TokenEventHandler;

/// Composite event handler that fans out to multiple handlers
pub struct CompositeEventHandler {
    handlers: Vec<Arc<dyn TokenEventHandler>>,
}

impl CompositeEventHandler {
    /// Create a new composite event handler
    pub fn new() -> Self {
        Self { handlers: Vec::new() }
    }

    /// Add a handler to the composite
    pub fn add_handler(&mut self, handler: Arc<dyn TokenEventHandler>) {
        self.handlers.push(handler);
    }

    /// Check if there are any handlers
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Number of handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for CompositeEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenEventHandler for CompositeEventHandler {
    async fn on_token_listed(&self, record: &TokenRecord) {
        for handler in &self.handlers {
            handler.on_token_listed(record).await;
        }
    }

    async fn on_feed_error(&self, error: &anyhow::Error) {
        for handler in &self.handlers {
            handler.on_feed_error(error).await;
        }
    }
}
