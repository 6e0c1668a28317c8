// ============================================================================
// CRYSTALPAY - HTTP Transport
// ============================================================================
// The seam between the client and the network. `HttpTransport` wraps a
// reqwest client; tests and host apps can plug in their own `Transport`.
// ============================================================================

use crate::config::GatewayConfig;
use crate::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Status code and raw body of a gateway response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Issues one GET request per call
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str, params: &[(String, String)]) -> Result<RawResponse>;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    /// Build a reqwest client with the configured timeout
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { http })
    }

    /// Use a caller-configured reqwest client as-is
    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, params: &[(String, String)]) -> Result<RawResponse> {
        let response = self.http.get(url).query(params).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }
}
