// ============================================================================
// CRYSTALPAY - Payment Gateway Client
// ============================================================================
// Client bindings for the CrystalPay merchant API.
//
// Every operation is one GET against the gateway base URL, authenticated with
// the merchant name and SECRET1. Sensitive operations additionally carry an
// MD5 signature keyed with SECRET2.
//
// Features:
// - Create and check payment receipts
// - Query the merchant balance
// - Create and check withdrawals
// - P2P transfers between gateway accounts
// - Create, inspect and activate vouchers
// ============================================================================

pub mod config;
pub mod error;
pub mod params;
pub mod signature;
pub mod operation;
pub mod transport;
pub mod response;
pub mod requests;
pub mod client;

pub use config::{Credentials, GatewayConfig, DEFAULT_BASE_URL};
pub use error::GatewayError;
pub use params::{Amount, Falsy, RequestParams};
pub use signature::create_secret_hash;
pub use operation::Operation;
pub use transport::{HttpTransport, RawResponse, Transport};
pub use requests::{CreateReceipt, CreateVoucher, CreateWithdraw, P2pTransfer};
pub use client::GatewayClient;

/// Re-export for convenience
pub type Result<T> = std::result::Result<T, GatewayError>;
