//! Launch Tracker Library
//!
//! A modular client for a token-launch surface on Solana: a live feed of
//! newly created tokens, a wallet session, a devnet mint-creation flow,
//! and a pure filtered/sorted view over the token list.

// Public modules - these are the API surface
pub mod config;
pub mod creation;
pub mod handlers;
pub mod models;
pub mod notifications;
pub mod providers;
pub mod store;
pub mod traits;
pub mod utils;
pub mod wallet;

// Re-export commonly used items for easier access
pub use config::Config;
pub use creation::{CreateTokenError, CreateTokenRequest, TokenCreator};
pub use handlers::{CompositeEventHandler, ConsoleEventHandler};
pub use models::{
    feed::{NewTokenMessage, SubscribeRequest},
    token::{SortOrder, TokenRecord},
};
pub use notifications::{EventQueue, FeedEvent};
pub use providers::{
    feed_provider::{FeedHandle, WebSocketFeedProvider},
    rpc_provider::RpcLedgerProvider,
    wallet_provider::KeypairWalletProvider,
};
pub use store::{ListQuery, StoreEvent, TokenStore};
pub use traits::{LedgerProvider, TokenEventHandler, WalletProvider};
pub use wallet::WalletSession;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type alias for library functions
pub type Result<T> = std::result::Result<T, anyhow::Error>;
