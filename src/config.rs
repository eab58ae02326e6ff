use crate::store::token_store::DEFAULT_CAPACITY;

/// Default push feed endpoint
pub const DEFAULT_FEED_URL: &str = "wss://pumpportal.fun/api/data";

/// Default ledger RPC endpoint (test network)
pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";

/// Runtime configuration, read from the environment
///
/// The wallet keypair path is read separately by the wallet provider; its
/// presence doubles as the wallet capability flag.
#[derive(Debug, Clone)]
pub struct Config {
    pub feed_url: String,
    pub rpc_url: String,
    pub feed_capacity: usize,
}

impl Config {
    /// Read configuration with defaults for anything unset
    pub fn from_env() -> Self {
        let feed_url =
            std::env::var("FEED_URL").unwrap_or_else(|_| DEFAULT_FEED_URL.to_string());
        let rpc_url =
            std::env::var("SOLANA_RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.to_string());
        let feed_capacity = std::env::var("FEED_CAPACITY")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_CAPACITY);

        Self { feed_url, rpc_url, feed_capacity }
    }
}
