//! Integration tests for the Storefront client's public construction API
//! and the one-request-per-check contract.

use serde_json::json;
use storefront_check::{
    check_connectivity, CheckConfig, HostUrl, ShopDomain, StorefrontClient, StorefrontToken,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// StorefrontToken Tests
// ============================================================================

#[test]
fn test_storefront_token_header_name_and_value() {
    let token = StorefrontToken::new("my-public-token").unwrap();
    assert_eq!(token.header_name(), "X-Shopify-Storefront-Access-Token");
    assert_eq!(token.header_value(), "my-public-token");
}

#[test]
fn test_storefront_token_debug_masks_value() {
    let token = StorefrontToken::new("secret-token").unwrap();
    let debug = format!("{token:?}");
    assert_eq!(debug, "StorefrontToken(*****)");
    assert!(!debug.contains("secret-token"));
}

// ============================================================================
// StorefrontClient Construction Tests
// ============================================================================

#[test]
fn test_storefront_client_targets_default_version() {
    let config = CheckConfig::builder()
        .shop(ShopDomain::new("test-shop.myshopify.com").unwrap())
        .token(StorefrontToken::new("token").unwrap())
        .build()
        .unwrap();
    let client = StorefrontClient::new(&config).unwrap();

    assert_eq!(
        client.endpoint(),
        "https://test-shop.myshopify.com/api/2024-10/graphql.json"
    );
}

#[test]
fn test_storefront_client_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontClient>();
    assert_send_sync::<CheckConfig>();
}

// ============================================================================
// One-shot Check Tests
// ============================================================================

#[tokio::test]
async fn test_each_check_sends_exactly_one_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/2024-10/graphql.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(2)
        .mount(&mock_server)
        .await;

    let config = CheckConfig::builder()
        .shop(ShopDomain::new("test-shop.myshopify.com").unwrap())
        .token(StorefrontToken::new("token").unwrap())
        .api_host(HostUrl::new(mock_server.uri()).unwrap())
        .build()
        .unwrap();

    let body = check_connectivity(&config).await.unwrap();
    assert_eq!(body, json!({"data": {}}));
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 1);

    // A second run builds its own client and adds exactly one more request.
    check_connectivity(&config).await.unwrap();
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_failed_check_does_not_send_again() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = CheckConfig::builder()
        .shop(ShopDomain::new("test-shop.myshopify.com").unwrap())
        .token(StorefrontToken::new("token").unwrap())
        .api_host(HostUrl::new(mock_server.uri()).unwrap())
        .build()
        .unwrap();

    let error = check_connectivity(&config).await.unwrap_err();
    assert_eq!(error.status(), Some(503));
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 1);
}
