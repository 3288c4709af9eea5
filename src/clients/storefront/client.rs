//! HTTP client for the Storefront GraphQL endpoint.
//!
//! The client is built from a [`CheckConfig`] and owns its own
//! `reqwest::Client`, so dropping it releases the connection pool.

use std::collections::HashMap;
use std::time::Duration;

use serde::Serialize;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_response::HttpResponse;
use crate::config::CheckConfig;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// JSON body of a GraphQL POST.
#[derive(Debug, Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
}

/// Client for POSTing GraphQL documents to one storefront.
///
/// # Example
///
/// ```rust,ignore
/// use storefront_check::{CheckConfig, StorefrontClient};
///
/// let config = CheckConfig::from_env()?;
/// let client = StorefrontClient::new(&config)?;
/// let response = client.post_graphql("{ shop { name } }").await?;
/// println!("{}", response.body);
/// ```
#[derive(Debug)]
pub struct StorefrontClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Full URL of the GraphQL endpoint.
    endpoint: String,
    /// Headers sent with every request.
    default_headers: HashMap<String, String>,
    /// Upper bound on a whole request, body included.
    timeout: Duration,
}

// Verify StorefrontClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontClient>();
};

impl StorefrontClient {
    /// Creates a client for the storefront described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the TLS backend cannot be initialized.
    pub fn new(config: &CheckConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Storefront Check v{SDK_VERSION} | Rust {rust_version}");

        let token = config.token();
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert(
            token.header_name().to_string(),
            token.header_value().to_string(),
        );

        // Through a proxy the shop still has to be addressed by name
        if config.api_host().is_some() {
            default_headers.insert("Host".to_string(), config.shop().to_string());
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint(),
            default_headers,
            timeout: config.timeout(),
        })
    }

    /// Returns the GraphQL endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends one GraphQL document and returns the decoded response.
    ///
    /// No retries are attempted.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - no response arrives within the timeout (`Timeout`)
    /// - the connection fails (`Network`)
    /// - the status is not 2xx (`Response`)
    /// - a 2xx body is not valid JSON (`Decode`)
    pub async fn post_graphql(&self, query: &str) -> Result<HttpResponse, HttpError> {
        let mut req_builder = self.client.post(&self.endpoint);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        req_builder = req_builder.json(&GraphqlRequest { query });

        tracing::debug!(endpoint = %self.endpoint, "Sending storefront GraphQL request");

        let res = req_builder
            .send()
            .await
            .map_err(|e| HttpError::from_transport(e, self.timeout))?;

        let status = res.status();
        let code = status.as_u16();
        let headers = HttpResponse::parse_headers(res.headers());
        let body_text = res
            .text()
            .await
            .map_err(|e| HttpError::from_transport(e, self.timeout))?;

        if !status.is_success() {
            let body = HttpResponse::error_body(&body_text);
            let response = HttpResponse::new(code, headers, body);
            tracing::debug!(status = code, "Storefront request failed");
            return Err(HttpError::Response(HttpResponseError {
                code,
                message: response.serialize_error(),
                error_reference: response.request_id().map(String::from),
            }));
        }

        let body = serde_json::from_str(&body_text)?;
        let response = HttpResponse::new(code, headers, body);

        if let Some(reason) = response.deprecation_reason() {
            tracing::warn!(
                "Deprecated request to Storefront API at {}, received reason: {}",
                self.endpoint,
                reason
            );
        }
        if let Some(errors) = response.graphql_errors() {
            tracing::warn!(count = errors.len(), "Storefront API returned GraphQL errors");
        }

        tracing::info!(status = code, "Storefront request completed");
        Ok(response)
    }
}
