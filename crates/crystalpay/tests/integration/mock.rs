//! Recording transport used by the integration tests.

use async_trait::async_trait;
use crystalpay::{Credentials, GatewayClient, GatewayConfig, RawResponse, Result, Transport};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One captured GET
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub params: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> Vec<&str> {
        self.params.iter().map(|(k, _)| k.as_str()).collect()
    }
}

#[derive(Default)]
struct State {
    requests: Vec<RecordedRequest>,
    responses: VecDeque<RawResponse>,
}

/// Returns queued responses in order and records every request.
/// With an empty queue it answers `{"auth":"ok","error":false}`.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<State>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) -> &Self {
        self.state
            .lock()
            .unwrap()
            .responses
            .push_back(RawResponse::new(status, body));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &str, params: &[(String, String)]) -> Result<RawResponse> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(RecordedRequest {
            url: url.to_string(),
            params: params.to_vec(),
        });
        Ok(state
            .responses
            .pop_front()
            .unwrap_or_else(|| RawResponse::new(200, r#"{"auth":"ok","error":false}"#)))
    }
}

pub const NAME: &str = "shop";
pub const SECRET1: &str = "S1";
pub const SECRET2: &str = "K";

/// Client wired to a fresh mock transport
pub fn mock_client() -> (GatewayClient, MockTransport) {
    let transport = MockTransport::new();
    let client = GatewayClient::with_transport(
        Credentials::new(NAME, SECRET1, SECRET2),
        GatewayConfig::default(),
        transport.clone(),
    );
    (client, transport)
}
