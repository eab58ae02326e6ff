//! Data models for the launch tracker

pub mod feed;
pub mod token;

// Re-export for convenience
pub use feed::{NewTokenMessage, SubscribeRequest};
pub use token::{SortOrder, TokenRecord};
