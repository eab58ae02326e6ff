use std::sync::Arc;

use solana_sdk::pubkey::Pubkey;
use tracing::{info, warn};

use crate::traits::wallet_provider::WalletProvider;

/// Connection state bridged to an external wallet capability
///
/// The state is exactly binary: disconnected, or connected with the
/// address the provider returned. No in-flight state is modeled.
pub struct WalletSession {
    provider: Option<Arc<dyn WalletProvider>>,
    address: Option<Pubkey>,
}

impl WalletSession {
    /// Create a session over an optional provider (absent when no wallet
    /// capability was detected)
    pub fn new(provider: Option<Arc<dyn WalletProvider>>) -> Self {
        Self { provider, address: None }
    }

    /// Request a connection from the provider
    ///
    /// Fails with a user-facing notice when no compatible provider exists.
    pub async fn connect(&mut self) -> anyhow::Result<Pubkey> {
        let provider = self.provider.as_ref().ok_or_else(|| {
            anyhow::anyhow!("No wallet provider available; set WALLET_KEYPAIR to enable one")
        })?;

        let address = provider.connect().await?;
        self.address = Some(address);
        info!("Wallet session connected: {}", address);
        Ok(address)
    }

    /// Disconnect and reset local state unconditionally
    pub async fn disconnect(&mut self) {
        if let Some(provider) = &self.provider {
            if let Err(e) = provider.disconnect().await {
                warn!("Wallet provider disconnect failed: {}", e);
            }
        }
        self.address = None;
        info!("Wallet session disconnected");
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    /// Connected address, if any
    pub fn address(&self) -> Option<Pubkey> {
        self.address
    }

    /// Provider behind the session, if one was detected
    pub fn provider(&self) -> Option<&Arc<dyn WalletProvider>> {
        self.provider.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use solana_sdk::transaction::Transaction;

    struct StubWallet {
        address: Pubkey,
    }

    #[async_trait]
    impl WalletProvider for StubWallet {
        async fn connect(&self) -> anyhow::Result<Pubkey> {
            Ok(self.address)
        }

        async fn disconnect(&self) -> anyhow::Result<()> {
            Ok(())
        }

        async fn sign_transaction(&self, transaction: Transaction) -> anyhow::Result<Transaction> {
            Ok(transaction)
        }

        fn public_key(&self) -> Option<Pubkey> {
            Some(self.address)
        }
    }

    fn stub_session(address: Pubkey) -> WalletSession {
        let provider: Arc<dyn WalletProvider> = Arc::new(StubWallet { address });
        WalletSession::new(Some(provider))
    }

    #[tokio::test]
    async fn connect_without_provider_fails_visibly() {
        let mut session = WalletSession::new(None);
        assert!(session.connect().await.is_err());
        assert!(!session.is_connected());
    }

    #[tokio::test]
    async fn connect_records_the_provider_address() {
        let address = Pubkey::new_unique();
        let mut session = stub_session(address);

        assert_eq!(session.connect().await.unwrap(), address);
        assert!(session.is_connected());
        assert_eq!(session.address(), Some(address));
    }

    #[tokio::test]
    async fn disconnect_resets_state_unconditionally() {
        let mut session = stub_session(Pubkey::new_unique());
        session.connect().await.unwrap();

        session.disconnect().await;
        assert!(!session.is_connected());
        assert_eq!(session.address(), None);

        // Disconnecting while already disconnected is a no-op
        let mut bare = WalletSession::new(None);
        bare.disconnect().await;
        assert!(!bare.is_connected());
    }
}
