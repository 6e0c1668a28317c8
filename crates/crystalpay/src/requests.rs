// ============================================================================
// CRYSTALPAY - Operation Requests
// ============================================================================
// Inputs for the operations that take more than one argument. Optional
// fields follow the same "omit if falsy" rule as everything else, so
// `Some(String::new())` behaves exactly like `None`.
// ============================================================================

use crate::params::Amount;
use serde::{Deserialize, Serialize};

/// `receipt-create`: payment page for the customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateReceipt {
    pub amount: Amount,

    /// Receipt lifetime in minutes
    pub lifetime: u64,

    /// Arbitrary merchant payload echoed back in callbacks
    #[serde(default)]
    pub extra: Option<String>,

    /// Server-to-server notification URL
    #[serde(default)]
    pub callback: Option<String>,

    /// Where the customer lands after paying
    #[serde(default)]
    pub redirect: Option<String>,

    /// Preselected payment method, appended to the returned `url`
    #[serde(default)]
    pub currency: Option<String>,
}

impl CreateReceipt {
    pub fn new(amount: impl Into<Amount>, lifetime: u64) -> Self {
        Self {
            amount: amount.into(),
            lifetime,
            extra: None,
            callback: None,
            redirect: None,
            currency: None,
        }
    }

    pub fn extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = Some(extra.into());
        self
    }

    pub fn callback(mut self, callback: impl Into<String>) -> Self {
        self.callback = Some(callback.into());
        self
    }

    pub fn redirect(mut self, redirect: impl Into<String>) -> Self {
        self.redirect = Some(redirect.into());
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }
}

/// `withdraw`: payout to an external wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateWithdraw {
    pub amount: Amount,
    pub currency: String,
    pub wallet: String,
    #[serde(default)]
    pub callback: Option<String>,
}

impl CreateWithdraw {
    pub fn new(
        amount: impl Into<Amount>,
        currency: impl Into<String>,
        wallet: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            currency: currency.into(),
            wallet: wallet.into(),
            callback: None,
        }
    }

    pub fn callback(mut self, callback: impl Into<String>) -> Self {
        self.callback = Some(callback.into());
        self
    }
}

/// `p2p-transfer`: move funds to another gateway account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct P2pTransfer {
    /// Recipient account login
    pub login: String,
    pub amount: Amount,
    pub currency: String,
}

impl P2pTransfer {
    pub fn new(
        login: impl Into<String>,
        amount: impl Into<Amount>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            login: login.into(),
            amount: amount.into(),
            currency: currency.into(),
        }
    }
}

/// `voucher-create`: issue a prepaid code.
///
/// Amount and currency are only covered by the signature; the gateway does
/// not receive them as separate parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateVoucher {
    pub amount: Amount,
    pub currency: String,
    #[serde(default)]
    pub comment: Option<String>,
}

impl CreateVoucher {
    pub fn new(amount: impl Into<Amount>, currency: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            currency: currency.into(),
            comment: None,
        }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}
