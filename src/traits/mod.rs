//! Core traits for the launch tracker

pub mod event_handler;
pub mod ledger_provider;
pub mod wallet_provider;

// Re-export for convenience
pub use event_handler::TokenEventHandler;
pub use ledger_provider::LedgerProvider;
pub use wallet_provider::WalletProvider;
