use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{read_keypair_file, Keypair};
use solana_sdk::signer::Signer;
use solana_sdk::transaction::Transaction;
use tracing::info;

use crate::traits::wallet_provider::WalletProvider;

/// Environment variable naming the keypair file; its presence is the
/// capability flag for wallet support
pub const WALLET_KEYPAIR_ENV: &str = "WALLET_KEYPAIR";

/// Keypair-file wallet
///
/// Local stand-in for an injected wallet extension: key custody is a
/// CLI-format keypair file named by `WALLET_KEYPAIR`.
pub struct KeypairWalletProvider {
    keypair: Keypair,
}

impl KeypairWalletProvider {
    /// Detect the wallet capability from the environment
    ///
    /// `None` when `WALLET_KEYPAIR` is unset; a set-but-unreadable path is
    /// an error rather than a missing provider.
    pub fn from_env() -> anyhow::Result<Option<Self>> {
        match std::env::var(WALLET_KEYPAIR_ENV) {
            Ok(path) => Ok(Some(Self::from_file(&path)?)),
            Err(_) => Ok(None),
        }
    }

    /// Load a wallet from a CLI-format keypair file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let keypair = read_keypair_file(path)
            .map_err(|e| anyhow::anyhow!("Failed to read keypair file {}: {}", path, e))?;
        Ok(Self { keypair })
    }

    /// Wrap an existing keypair
    pub fn from_keypair(keypair: Keypair) -> Self {
        Self { keypair }
    }
}

#[async_trait]
impl WalletProvider for KeypairWalletProvider {
    async fn connect(&self) -> anyhow::Result<Pubkey> {
        let address = self.keypair.pubkey();
        info!("Wallet connected: {}", address);
        Ok(address)
    }

    async fn disconnect(&self) -> anyhow::Result<()> {
        info!("Wallet disconnected");
        Ok(())
    }

    async fn sign_transaction(&self, mut transaction: Transaction) -> anyhow::Result<Transaction> {
        let blockhash = transaction.message.recent_blockhash;
        transaction.try_partial_sign(&[&self.keypair], blockhash)?;
        Ok(transaction)
    }

    fn public_key(&self) -> Option<Pubkey> {
        Some(self.keypair.pubkey())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use solana_sdk::system_instruction;

    #[tokio::test]
    async fn loads_cli_format_keypair_files() {
        let keypair = Keypair::new();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&keypair.to_bytes().to_vec()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let wallet = KeypairWalletProvider::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(wallet.public_key(), Some(keypair.pubkey()));
        assert_eq!(wallet.connect().await.unwrap(), keypair.pubkey());
    }

    #[tokio::test]
    async fn signing_completes_a_single_signer_transaction() {
        let wallet = KeypairWalletProvider::from_keypair(Keypair::new());
        let payer = wallet.public_key().unwrap();

        let transfer = system_instruction::transfer(&payer, &Pubkey::new_unique(), 1);
        let mut transaction = Transaction::new_with_payer(&[transfer], Some(&payer));
        transaction.message.recent_blockhash = solana_sdk::hash::Hash::new_unique();

        let signed = wallet.sign_transaction(transaction).await.unwrap();
        assert!(signed.is_signed());
        signed.verify().unwrap();
    }

    #[test]
    fn unreadable_path_is_an_error_not_a_missing_provider() {
        assert!(KeypairWalletProvider::from_file("/nonexistent/keypair.json").is_err());
    }
}
