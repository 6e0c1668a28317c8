//! Integration Tests: Failure kinds
//!
//! Transport, authorization and operation failures reach the caller as
//! distinct `GatewayError` variants.

use super::mock::mock_client;
use crystalpay::error::AUTH_ERROR_MESSAGE;
use crystalpay::{CreateReceipt, CreateWithdraw, GatewayError};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_operation_error() {
    let (client, transport) = mock_client();
    transport.respond(
        200,
        r#"{"auth":"ok","error":true,"error_message":"insufficient funds"}"#,
    );

    let err = client
        .create_withdraw(&CreateWithdraw::new(100, "USD", "W1"))
        .await
        .unwrap_err();

    assert_eq!(err, GatewayError::Operation("insufficient funds".to_string()));
    assert_eq!(err.code(), "operation_error");
}

#[tokio::test]
async fn test_authorization_error() {
    let (client, transport) = mock_client();
    transport.respond(200, r#"{"auth":"error"}"#);

    let err = client.get_balance().await.unwrap_err();

    assert_eq!(err, GatewayError::Authorization(AUTH_ERROR_MESSAGE.to_string()));
    assert_eq!(err.code(), "auth_error");
}

#[tokio::test]
async fn test_http_500_is_transport_error() {
    let (client, transport) = mock_client();
    transport.respond(500, r#"{"auth":"ok","error":false}"#);

    let err = client.check_receipt("r1").await.unwrap_err();

    assert!(matches!(err, GatewayError::Transport(_)));
}

#[tokio::test]
async fn test_currency_rewrite_skipped_on_error() {
    let (client, transport) = mock_client();
    transport.respond(200, r#"{"auth":"ok","error":true,"error_message":"bad amount"}"#);

    let err = client
        .create_receipt(&CreateReceipt::new(10, 60).currency("USD"))
        .await
        .unwrap_err();

    assert_eq!(err.message(), "bad amount");
}

#[tokio::test]
async fn test_unknown_auth_value_is_passed_through() {
    let (client, transport) = mock_client();
    transport.respond(200, r#"{"auth":"maintenance","error":true}"#);

    let body = client.get_balance().await.unwrap();

    assert_eq!(body["auth"], "maintenance");
}

#[tokio::test]
async fn test_failure_does_not_poison_client() {
    let (client, transport) = mock_client();
    transport
        .respond(503, "")
        .respond(200, r#"{"auth":"ok","error":false,"balance":{}}"#);

    assert!(client.get_balance().await.is_err());
    assert!(client.get_balance().await.is_ok());
}
