// ============================================================================
// CRYSTALPAY - Configuration
// ============================================================================
// Gateway endpoint settings and merchant credentials.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Production gateway endpoint. Operations are selected via the `o` parameter.
pub const DEFAULT_BASE_URL: &str = "https://api.crystalpay.ru/v1/";

/// HTTP-level gateway configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Gateway base URL
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GatewayConfig {
    /// Override the base URL (staging, local proxies)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Merchant credentials issued by the gateway.
///
/// `secret1` authenticates every request, `secret2` only keys signatures and
/// is never sent as-is.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    name: String,
    secret1: String,
    secret2: String,
}

impl Credentials {
    pub fn new(
        name: impl Into<String>,
        secret1: impl Into<String>,
        secret2: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            secret1: secret1.into(),
            secret2: secret2.into(),
        }
    }

    /// Registered cash register name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn secret1(&self) -> &str {
        &self.secret1
    }

    pub fn secret2(&self) -> &str {
        &self.secret2
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("name", &self.name)
            .field("secret1", &"<redacted>")
            .field("secret2", &"<redacted>")
            .finish()
    }
}
