//! Wallet-gated token creation flow

pub mod token_creator;

pub use token_creator::{CreateTokenError, CreateTokenRequest, TokenCreator};
