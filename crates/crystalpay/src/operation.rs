// ============================================================================
// CRYSTALPAY - Operation Codes
// ============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gateway operation, sent as the `o` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    ReceiptCreate,
    ReceiptCheck,
    Balance,
    Withdraw,
    WithdrawStatus,
    P2pTransfer,
    VoucherCreate,
    VoucherInfo,
    VoucherActivate,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::ReceiptCreate => "receipt-create",
            Operation::ReceiptCheck => "receipt-check",
            Operation::Balance => "balance",
            Operation::Withdraw => "withdraw",
            Operation::WithdrawStatus => "withdraw-status",
            Operation::P2pTransfer => "p2p-transfer",
            Operation::VoucherCreate => "voucher-create",
            Operation::VoucherInfo => "voucher-info",
            Operation::VoucherActivate => "voucher-activate",
        }
    }

    /// Whether the request carries a SECRET2 signature
    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            Operation::Withdraw | Operation::P2pTransfer | Operation::VoucherCreate
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
