// ============================================================================
// CRYSTALPAY - Gateway Client
// ============================================================================
// High-level client, one method per gateway operation.
//
// Each call:
// 1. Starts from the shared `s` (SECRET1) / `n` (name) / `o` parameters
// 2. Adds operation fields, dropping falsy ones
// 3. Signs with SECRET2 where the gateway requires it
// 4. Sends one GET and interprets the JSON answer
// ============================================================================

use crate::config::{Credentials, GatewayConfig};
use crate::operation::Operation;
use crate::params::RequestParams;
use crate::requests::{CreateReceipt, CreateVoucher, CreateWithdraw, P2pTransfer};
use crate::response::interpret;
use crate::signature::create_secret_hash;
use crate::transport::{HttpTransport, Transport};
use crate::Result;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Client for the CrystalPay merchant API
#[derive(Clone)]
pub struct GatewayClient {
    credentials: Credentials,
    config: GatewayConfig,
    transport: Arc<dyn Transport>,
}

impl GatewayClient {
    /// Create a client against the production gateway
    pub fn new(
        name: impl Into<String>,
        secret1: impl Into<String>,
        secret2: impl Into<String>,
    ) -> Result<Self> {
        Self::with_config(
            Credentials::new(name, secret1, secret2),
            GatewayConfig::default(),
        )
    }

    /// Create a client with custom endpoint settings
    pub fn with_config(credentials: Credentials, config: GatewayConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(credentials, config, transport))
    }

    /// Create a client over any transport (custom reqwest client, test double)
    pub fn with_transport<T>(credentials: Credentials, config: GatewayConfig, transport: T) -> Self
    where
        T: Transport + 'static,
    {
        Self {
            credentials,
            config,
            transport: Arc::new(transport),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    // ==================== Receipts ====================

    /// Create a payment receipt.
    ///
    /// With a currency set, the returned `url` is extended with `&m=<currency>`
    /// so the payment page opens on that method.
    pub async fn create_receipt(&self, receipt: &CreateReceipt) -> Result<Value> {
        let mut params = self.params(Operation::ReceiptCreate);
        params
            .insert("amount", &receipt.amount)
            .insert("lifetime", receipt.lifetime)
            .insert_opt("extra", receipt.extra.as_deref())
            .insert_opt("callback", receipt.callback.as_deref())
            .insert_opt("redirect", receipt.redirect.as_deref());

        let mut body = self.request(Operation::ReceiptCreate, params).await?;

        if let Some(currency) = receipt.currency.as_deref().filter(|c| !c.is_empty()) {
            if let Some(url) = body.get_mut("url") {
                if let Some(base) = url.as_str() {
                    let with_method = format!("{}&m={}", base, currency);
                    *url = Value::String(with_method);
                }
            }
        }

        Ok(body)
    }

    /// Check receipt status
    pub async fn check_receipt(&self, receipt_id: &str) -> Result<Value> {
        let mut params = self.params(Operation::ReceiptCheck);
        params.insert("i", receipt_id);
        self.request(Operation::ReceiptCheck, params).await
    }

    // ==================== Balance ====================

    /// Get merchant balances
    pub async fn get_balance(&self) -> Result<Value> {
        let params = self.params(Operation::Balance);
        self.request(Operation::Balance, params).await
    }

    // ==================== Withdrawals ====================

    /// Create a withdrawal, signed over `wallet@amount@secret2`
    pub async fn create_withdraw(&self, withdraw: &CreateWithdraw) -> Result<Value> {
        let secret = create_secret_hash(&[
            &withdraw.wallet,
            &withdraw.amount,
            &self.credentials.secret2(),
        ]);

        let mut params = self.params(Operation::Withdraw);
        params
            .insert("secret", secret)
            .insert("amount", &withdraw.amount)
            .insert("wallet", withdraw.wallet.as_str())
            .insert("currency", withdraw.currency.as_str())
            .insert_opt("callback", withdraw.callback.as_deref());

        self.request(Operation::Withdraw, params).await
    }

    /// Check withdrawal status
    pub async fn check_withdraw(&self, withdraw_id: &str) -> Result<Value> {
        let mut params = self.params(Operation::WithdrawStatus);
        params.insert("i", withdraw_id);
        self.request(Operation::WithdrawStatus, params).await
    }

    // ==================== P2P ====================

    /// Transfer to another account, signed over `currency@amount@login@secret2`
    pub async fn p2p_transfer(&self, transfer: &P2pTransfer) -> Result<Value> {
        let secret = create_secret_hash(&[
            &transfer.currency,
            &transfer.amount,
            &transfer.login,
            &self.credentials.secret2(),
        ]);

        let mut params = self.params(Operation::P2pTransfer);
        params
            .insert("secret", secret)
            .insert("login", transfer.login.as_str())
            .insert("amount", &transfer.amount)
            .insert("currency", transfer.currency.as_str());

        self.request(Operation::P2pTransfer, params).await
    }

    // ==================== Vouchers ====================

    /// Issue a voucher, signed over `currency@amount@secret2`
    pub async fn create_voucher(&self, voucher: &CreateVoucher) -> Result<Value> {
        let secret = create_secret_hash(&[
            &voucher.currency,
            &voucher.amount,
            &self.credentials.secret2(),
        ]);

        let mut params = self.params(Operation::VoucherCreate);
        params
            .insert("secret", secret)
            .insert_opt("comment", voucher.comment.as_deref());

        self.request(Operation::VoucherCreate, params).await
    }

    /// Look up a voucher
    pub async fn voucher_info(&self, voucher_code: &str) -> Result<Value> {
        let mut params = self.params(Operation::VoucherInfo);
        params.insert("code", voucher_code);
        self.request(Operation::VoucherInfo, params).await
    }

    /// Redeem a voucher onto the merchant balance
    pub async fn activate_voucher(&self, voucher_code: &str) -> Result<Value> {
        let mut params = self.params(Operation::VoucherActivate);
        params.insert("code", voucher_code);
        self.request(Operation::VoucherActivate, params).await
    }

    // ==================== Internals ====================

    fn params(&self, operation: Operation) -> RequestParams {
        let mut params = RequestParams::new();
        params
            .push("s", self.credentials.secret1())
            .push("n", self.credentials.name())
            .push("o", operation.as_str());
        params
    }

    async fn request(&self, operation: Operation, params: RequestParams) -> Result<Value> {
        debug_assert_eq!(operation.is_signed(), params.contains("secret"));
        debug!("Gateway request: {}", operation);

        let raw = self
            .transport
            .get(&self.config.base_url, params.as_slice())
            .await?;

        interpret(raw)
    }
}
