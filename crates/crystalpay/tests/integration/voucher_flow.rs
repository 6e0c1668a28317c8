//! Integration Tests: Vouchers

use super::mock::mock_client;
use crystalpay::CreateVoucher;
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn test_create_voucher_signs_currency_and_amount() {
    let (client, transport) = mock_client();

    client
        .create_voucher(&CreateVoucher::new(25, "USD"))
        .await
        .unwrap();

    let request = transport.last_request();
    assert_eq!(request.keys(), vec!["s", "n", "o", "secret"]);
    assert_eq!(request.param("o"), Some("voucher-create"));
    // md5("USD@25@K")
    assert_eq!(request.param("secret"), Some("243a0f4d5ad750ebd0e9ab959ec8c222"));
}

#[tokio::test]
async fn test_create_voucher_comment_only_when_truthy() {
    let (client, transport) = mock_client();

    client
        .create_voucher(&CreateVoucher::new(25, "USD").comment("gift"))
        .await
        .unwrap();
    assert_eq!(transport.last_request().param("comment"), Some("gift"));

    client
        .create_voucher(&CreateVoucher::new(25, "USD").comment(""))
        .await
        .unwrap();
    assert!(transport.last_request().param("comment").is_none());
}

#[tokio::test]
async fn test_voucher_info_and_activation() {
    let (client, transport) = mock_client();
    transport
        .respond(200, r#"{"auth":"ok","error":false,"code":"ABC","amount":25}"#)
        .respond(200, r#"{"auth":"ok","error":false,"activated":true}"#);

    let info = client.voucher_info("ABC").await.unwrap();
    assert_eq!(info, json!({"auth": "ok", "error": false, "code": "ABC", "amount": 25}));

    let activated = client.activate_voucher("ABC").await.unwrap();
    assert_eq!(activated["activated"], true);

    let requests = transport.requests();
    assert_eq!(requests[0].param("o"), Some("voucher-info"));
    assert_eq!(requests[0].param("code"), Some("ABC"));
    assert_eq!(requests[1].param("o"), Some("voucher-activate"));
    assert_eq!(requests[1].param("code"), Some("ABC"));
}
