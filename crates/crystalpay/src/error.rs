// ============================================================================
// CRYSTALPAY - Error Types
// ============================================================================

use thiserror::Error;

/// Message returned when the gateway rejects the merchant credentials.
pub const AUTH_ERROR_MESSAGE: &str = "Check SECRET1, SECRET2 and name cash register";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// HTTP layer failure: non-200 status or the request never completed
    #[error("Request failed: {0}")]
    Transport(String),

    /// Gateway answered `auth: "error"`
    #[error("Authorization failed: {0}")]
    Authorization(String),

    /// Credentials accepted, operation rejected (`auth: "ok"`, `error: true`)
    #[error("Operation failed: {0}")]
    Operation(String),

    /// Response body was not valid JSON
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl GatewayError {
    /// Stable tag for the failure kind.
    pub fn code(&self) -> &'static str {
        match self {
            GatewayError::Transport(_) => "transport_error",
            GatewayError::Authorization(_) => "auth_error",
            GatewayError::Operation(_) => "operation_error",
            GatewayError::Serialization(_) => "serialization_error",
        }
    }

    /// Detail carried by the error.
    pub fn message(&self) -> &str {
        match self {
            GatewayError::Transport(m)
            | GatewayError::Authorization(m)
            | GatewayError::Operation(m)
            | GatewayError::Serialization(m) => m,
        }
    }

    pub(crate) fn authorization() -> Self {
        GatewayError::Authorization(AUTH_ERROR_MESSAGE.to_string())
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Serialization(err.to_string())
    }
}
