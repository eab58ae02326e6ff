use std::sync::Arc;

use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;

use crate::traits::ledger_provider::LedgerProvider;
use crate::utils::helper::lamports_to_sol;

/// RPC-backed ledger provider
pub struct RpcLedgerProvider {
    rpc_client: Arc<RpcClient>,
}

impl RpcLedgerProvider {
    /// Create a provider against `rpc_url` at confirmed commitment
    pub fn new(rpc_url: String) -> Self {
        let client = RpcClient::new_with_commitment(rpc_url, CommitmentConfig::confirmed());
        Self { rpc_client: Arc::new(client) }
    }
}

#[async_trait]
impl LedgerProvider for RpcLedgerProvider {
    async fn minimum_balance_for_rent_exemption(&self, data_len: usize) -> anyhow::Result<u64> {
        Ok(self
            .rpc_client
            .get_minimum_balance_for_rent_exemption(data_len)
            .await?)
    }

    async fn latest_blockhash(&self) -> anyhow::Result<Hash> {
        Ok(self.rpc_client.get_latest_blockhash().await?)
    }

    async fn send_and_confirm(&self, transaction: &Transaction) -> anyhow::Result<Signature> {
        Ok(self.rpc_client.send_and_confirm_transaction(transaction).await?)
    }

    async fn fetch_sol_balance(&self, wallet: &Pubkey) -> anyhow::Result<f64> {
        let lamports = self.rpc_client.get_balance(wallet).await?;
        Ok(lamports_to_sol(lamports))
    }
}
