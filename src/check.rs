//! The connectivity check itself.
//!
//! One POST of [`SHOP_NAME_QUERY`] to the configured storefront. The HTTP
//! client lives only for the duration of [`check_connectivity`] and is
//! dropped on every exit path, success or failure.

use crate::clients::{HttpError, StorefrontClient};
use crate::config::CheckConfig;
use crate::error::CheckError;

/// The GraphQL document sent by the check.
pub const SHOP_NAME_QUERY: &str = "{ shop { name } }";

/// Sends the shop name query and returns the decoded response body.
///
/// The body is returned untouched, including any GraphQL `errors` the
/// storefront reported alongside a 200 status.
///
/// # Errors
///
/// Returns [`HttpError`] on timeout, connection failure, non-2xx status or
/// a body that is not JSON.
pub async fn check_connectivity(config: &CheckConfig) -> Result<serde_json::Value, HttpError> {
    tracing::info!(
        shop = %config.shop(),
        api_version = %config.api_version(),
        timeout = ?config.timeout(),
        "Checking storefront connectivity"
    );

    let client = StorefrontClient::new(config)?;
    let response = client.post_graphql(SHOP_NAME_QUERY).await?;
    Ok(response.body)
}

/// Loads configuration from the environment and runs the check.
///
/// Configuration is validated before any client is created, so a missing
/// variable never results in a network call.
///
/// # Errors
///
/// Returns [`CheckError::Config`] for missing or invalid configuration and
/// [`CheckError::Http`] for request failures.
pub async fn run_from_env() -> Result<serde_json::Value, CheckError> {
    let config = CheckConfig::from_env()?;
    Ok(check_connectivity(&config).await?)
}

/// Formats a response body for standard output.
///
/// # Example
///
/// ```rust
/// use storefront_check::render_body;
///
/// let body = serde_json::json!({"data": {"shop": {"name": "Test Shop"}}});
/// let printed = render_body(&body);
/// assert_eq!(serde_json::from_str::<serde_json::Value>(&printed).unwrap(), body);
/// ```
#[must_use]
pub fn render_body(body: &serde_json::Value) -> String {
    format!("{body:#}")
}
