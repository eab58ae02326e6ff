//! Providers backing the feed, ledger and wallet seams

pub mod feed_provider;
pub mod rpc_provider;
pub mod wallet_provider;

// Re-export for convenience
pub use feed_provider::{FeedHandle, WebSocketFeedProvider};
pub use rpc_provider::RpcLedgerProvider;
pub use wallet_provider::KeypairWalletProvider;
