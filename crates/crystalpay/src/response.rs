// ============================================================================
// CRYSTALPAY - Response Interpretation
// ============================================================================
// Every gateway answer goes through the same decision tree:
//
//   status != 200                  -> Transport
//   auth == "ok",  error == true   -> Operation(error_message)
//   auth == "ok"                   -> body
//   auth == "error"                -> Authorization
//   anything else                  -> body, unmodified
// ============================================================================

use crate::error::GatewayError;
use crate::transport::RawResponse;
use crate::Result;
use serde_json::Value;
use tracing::warn;

pub const AUTH_OK: &str = "ok";
pub const AUTH_ERROR: &str = "error";

/// Turn a raw gateway response into the parsed body or a typed failure
pub fn interpret(raw: RawResponse) -> Result<Value> {
    if raw.status != 200 {
        warn!("Gateway returned HTTP {}", raw.status);
        return Err(GatewayError::Transport(format!("HTTP {}", raw.status)));
    }

    let body: Value = serde_json::from_str(&raw.body)?;

    let auth = body.get("auth").and_then(Value::as_str).map(str::to_owned);

    match auth.as_deref() {
        Some(AUTH_OK) => {
            if body.get("error").and_then(Value::as_bool) == Some(true) {
                let message = body
                    .get("error_message")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                warn!("Gateway rejected operation: {}", message);
                return Err(GatewayError::Operation(message));
            }
            Ok(body)
        }
        Some(AUTH_ERROR) => {
            warn!("Gateway rejected credentials");
            Err(GatewayError::authorization())
        }
        _ => Ok(body),
    }
}
