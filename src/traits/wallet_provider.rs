use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::transaction::Transaction;

/// Capability exposed by an external wallet
///
/// Mirrors the injected-provider surface of a browser wallet: a connect
/// request, a disconnect request, a signing request, and the public key
/// once connected. Key custody stays behind this trait.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Request a connection; returns the wallet's public address
    async fn connect(&self) -> anyhow::Result<Pubkey>;

    /// Request disconnection from the provider
    async fn disconnect(&self) -> anyhow::Result<()>;

    /// Ask the wallet to sign `transaction` with its own key
    ///
    /// The provider may refuse; a refusal is an error, not a panic.
    async fn sign_transaction(&self, transaction: Transaction) -> anyhow::Result<Transaction>;

    /// Public key, if the provider has one available
    fn public_key(&self) -> Option<Pubkey>;
}
