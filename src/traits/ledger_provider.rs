use async_trait::async_trait;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;

/// Core trait for talking to the ledger network
#[async_trait]
pub trait LedgerProvider: Send + Sync {
    /// Minimum lamports an account of `data_len` bytes needs to stay rent exempt
    async fn minimum_balance_for_rent_exemption(&self, data_len: usize) -> anyhow::Result<u64>;

    /// Latest network blockhash to stamp a transaction with
    async fn latest_blockhash(&self) -> anyhow::Result<Hash>;

    /// Submit a fully signed transaction and wait for confirmation
    async fn send_and_confirm(&self, transaction: &Transaction) -> anyhow::Result<Signature>;

    /// SOL balance for a wallet
    async fn fetch_sol_balance(&self, wallet: &Pubkey) -> anyhow::Result<f64>;
}
