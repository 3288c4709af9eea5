//! Tests for the `storefront-check` binary's exit-code contract.

use std::process::Command;

fn storefront_check() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_storefront-check"));
    // Run outside the repository so no .env file is picked up
    cmd.env_clear().current_dir(std::env::temp_dir());
    cmd
}

#[test]
fn test_missing_configuration_exits_with_status_one() {
    let output = storefront_check().output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("SHOPIFY_SHOP_DOMAIN"));
}

#[test]
fn test_empty_values_count_as_missing() {
    let output = storefront_check()
        .env("SHOPIFY_SHOP_DOMAIN", "")
        .env("SHOPIFY_STOREFRONT_TOKEN", "")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_token_is_named_in_diagnostic() {
    let output = storefront_check()
        .env("SHOPIFY_SHOP_DOMAIN", "test-shop.myshopify.com")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("SHOPIFY_STOREFRONT_TOKEN"));
}

#[test]
fn test_invalid_domain_exits_with_status_one() {
    let output = storefront_check()
        .env("SHOPIFY_SHOP_DOMAIN", "https://test-shop.myshopify.com")
        .env("SHOPIFY_STOREFRONT_TOKEN", "token")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid shop domain"));
}
