//! Square adapter behavior against a mocked vendor.

use drinkhub_core::{
    PosClientSettings, PosConfig, PosCredentials, PosOrder, PosOrderLineItem,
};
use drinkhub_pos::{PosAdapter, SquareAdapter};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn adapter(base_url: &str) -> SquareAdapter {
    SquareAdapter::with_base_url(
        PosCredentials {
            access_token: Some("EAA-sandbox-token".to_string()),
            ..PosCredentials::default()
        },
        PosConfig {
            location_id: Some("loc-1".to_string()),
            ..PosConfig::default()
        },
        PosClientSettings::default(),
        base_url,
    )
}

fn order() -> PosOrder {
    PosOrder {
        location_id: "loc-1".to_string(),
        line_items: vec![PosOrderLineItem {
            catalog_item_id: "item-1".to_string(),
            quantity: 1,
            variation_id: None,
            modifiers: None,
            note: None,
        }],
        external_id: Some("ext-1".to_string()),
    }
}

#[tokio::test]
async fn vendor_rejection_is_a_failed_result_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/orders"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "errors": [{ "category": "INVALID_REQUEST_ERROR", "code": "BAD_REQUEST" }]
        })))
        .mount(&server)
        .await;

    let result = adapter(&server.uri())
        .submit_order(&order())
        .await
        .expect("rejection must surface in the result, not as an error");

    assert!(!result.success);
    assert!(result.order_id.is_none());
    assert!(
        result.error.as_deref().is_some_and(|e| e.contains("400")),
        "error: {:?}",
        result.error
    );
}

#[tokio::test]
async fn confirmed_order_is_a_successful_result() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "order": { "id": "sq-order-1", "state": "OPEN" }
        })))
        .mount(&server)
        .await;

    let result = adapter(&server.uri())
        .submit_order(&order())
        .await
        .expect("confirmed order should succeed");

    assert!(result.success);
    assert_eq!(result.order_id.as_deref(), Some("sq-order-1"));
    assert!(result.error.is_none());
}
