use std::sync::Arc;

use chrono::Utc;
use solana_program::program_pack::Pack;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use solana_sdk::system_instruction;
use solana_sdk::transaction::Transaction;
use spl_token::state::Mint;
use thiserror::Error;
use tracing::info;

use crate::models::token::TokenRecord;
use crate::traits::ledger_provider::LedgerProvider;
use crate::wallet::session::WalletSession;

/// Decimal precision every created mint is initialized with
pub const TOKEN_DECIMALS: u8 = 9;

/// User-facing failures of a creation attempt; each is terminal
#[derive(Debug, Error)]
pub enum CreateTokenError {
    #[error("Wallet is not connected")]
    WalletNotConnected,
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Transaction was rejected or could not be signed: {0}")]
    SignatureRejected(#[source] anyhow::Error),
    #[error("Token submission failed: {0}")]
    SubmissionFailed(#[source] anyhow::Error),
}

/// Form fields collected for a new token
#[derive(Debug, Clone, Default)]
pub struct CreateTokenRequest {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub image_path: String,
}

impl CreateTokenRequest {
    /// First blank required field, if any
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            return Some("name");
        }
        if self.symbol.trim().is_empty() {
            return Some("symbol");
        }
        if self.description.trim().is_empty() {
            return Some("description");
        }
        if self.image_path.trim().is_empty() {
            return Some("image");
        }
        None
    }

    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }
}

/// Builds and submits mint-creation transactions
pub struct TokenCreator {
    ledger: Arc<dyn LedgerProvider>,
}

impl TokenCreator {
    pub fn new(ledger: Arc<dyn LedgerProvider>) -> Self {
        Self { ledger }
    }

    /// Create a new SPL mint owned by the connected wallet
    ///
    /// Aborts before any ledger traffic unless the session is connected
    /// and every form field is filled. The wallet signs as fee payer; the
    /// fresh mint keypair co-signs as the new account's own authority.
    /// Nothing is mutated locally until confirmation succeeds.
    pub async fn create_token(
        &self,
        session: &WalletSession,
        request: &CreateTokenRequest,
    ) -> Result<TokenRecord, CreateTokenError> {
        let (payer, wallet) = match (session.address(), session.provider()) {
            (Some(address), Some(provider)) => (address, provider.clone()),
            _ => return Err(CreateTokenError::WalletNotConnected),
        };
        if let Some(field) = request.missing_field() {
            return Err(CreateTokenError::MissingField(field));
        }

        // The fresh keypair is the new asset's identity
        let mint_keypair = Keypair::new();
        let mint_address = mint_keypair.pubkey();

        let transaction = self
            .build_transaction(&payer, &mint_address)
            .await
            .map_err(CreateTokenError::SubmissionFailed)?;

        // Wallet signs first, then the mint keypair adds the signature the
        // new account itself requires
        let mut signed = wallet
            .sign_transaction(transaction)
            .await
            .map_err(CreateTokenError::SignatureRejected)?;
        let blockhash = signed.message.recent_blockhash;
        signed
            .try_partial_sign(&[&mint_keypair], blockhash)
            .map_err(|e| CreateTokenError::SignatureRejected(e.into()))?;

        let signature = self
            .ledger
            .send_and_confirm(&signed)
            .await
            .map_err(CreateTokenError::SubmissionFailed)?;

        info!("Token mint created: {} (signature {})", mint_address, signature);

        Ok(TokenRecord {
            id: mint_address.to_string(),
            name: request.name.clone(),
            symbol: request.symbol.clone(),
            description: request.description.clone(),
            image_url: format!("file://{}", request.image_path),
            value: 0.0,
            change: "0".to_string(),
            created_at: Utc::now(),
        })
    }

    /// Account creation plus mint initialization in one transaction,
    /// stamped with the latest blockhash and the wallet as fee payer
    async fn build_transaction(
        &self,
        payer: &Pubkey,
        mint_address: &Pubkey,
    ) -> anyhow::Result<Transaction> {
        let rent = self
            .ledger
            .minimum_balance_for_rent_exemption(Mint::LEN)
            .await?;

        let create_account_ix = system_instruction::create_account(
            payer,
            mint_address,
            rent,
            Mint::LEN as u64,
            &spl_token::id(),
        );
        let initialize_mint_ix = spl_token::instruction::initialize_mint(
            &spl_token::id(),
            mint_address,
            payer,
            Some(payer),
            TOKEN_DECIMALS,
        )?;

        let mut transaction =
            Transaction::new_with_payer(&[create_account_ix, initialize_mint_ix], Some(payer));
        transaction.message.recent_blockhash = self.ledger.latest_blockhash().await?;
        Ok(transaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, symbol: &str, description: &str, image: &str) -> CreateTokenRequest {
        CreateTokenRequest {
            name: name.to_string(),
            symbol: symbol.to_string(),
            description: description.to_string(),
            image_path: image.to_string(),
        }
    }

    #[test]
    fn missing_field_reports_the_first_blank() {
        assert_eq!(request("", "T", "d", "i").missing_field(), Some("name"));
        assert_eq!(request("N", " ", "d", "i").missing_field(), Some("symbol"));
        assert_eq!(request("N", "T", "", "i").missing_field(), Some("description"));
        assert_eq!(request("N", "T", "d", "").missing_field(), Some("image"));
        assert_eq!(request("N", "T", "d", "i").missing_field(), None);
        assert!(request("N", "T", "d", "i").is_complete());
    }

    #[test]
    fn errors_render_user_facing_notices() {
        assert_eq!(
            CreateTokenError::WalletNotConnected.to_string(),
            "Wallet is not connected"
        );
        assert_eq!(
            CreateTokenError::MissingField("symbol").to_string(),
            "Missing required field: symbol"
        );
        let rejected = CreateTokenError::SignatureRejected(anyhow::anyhow!("user refused"));
        assert!(rejected.to_string().starts_with("Transaction was rejected"));
        let failed = CreateTokenError::SubmissionFailed(anyhow::anyhow!("node unavailable"));
        assert!(failed.to_string().starts_with("Token submission failed"));
    }
}
