//! Configuration for the storefront connectivity check.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`CheckConfig`]: Everything a single check run needs
//! - [`CheckConfigBuilder`]: A builder for constructing [`CheckConfig`] instances
//! - [`ShopDomain`]: A validated storefront host name
//! - [`HostUrl`]: A validated base URL override
//! - [`ApiVersion`]: The Storefront API version to use
//!
//! Only the shop domain and the storefront token are read from the
//! environment. Everything else has a fixed default and can only be changed
//! through the builder.
//!
//! # Example
//!
//! ```rust
//! use storefront_check::{CheckConfig, ShopDomain, StorefrontToken};
//!
//! let config = CheckConfig::builder()
//!     .shop(ShopDomain::new("my-store.myshopify.com").unwrap())
//!     .token(StorefrontToken::new("public-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     config.endpoint(),
//!     "https://my-store.myshopify.com/api/2024-10/graphql.json"
//! );
//! ```

mod newtypes;
mod version;

pub use newtypes::{HostUrl, ShopDomain};
pub use version::ApiVersion;

use std::time::Duration;

use crate::clients::StorefrontToken;
use crate::error::ConfigError;

/// Environment variable holding the shop domain.
pub const SHOP_DOMAIN_VAR: &str = "SHOPIFY_SHOP_DOMAIN";

/// Environment variable holding the public storefront access token.
pub const STOREFRONT_TOKEN_VAR: &str = "SHOPIFY_STOREFRONT_TOKEN";

/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Configuration for one connectivity check.
///
/// # Thread Safety
///
/// `CheckConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct CheckConfig {
    shop: ShopDomain,
    token: StorefrontToken,
    api_version: ApiVersion,
    timeout: Duration,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

// Verify CheckConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CheckConfig>();
};

impl CheckConfig {
    /// Creates a new builder for constructing a `CheckConfig`.
    #[must_use]
    pub fn builder() -> CheckConfigBuilder {
        CheckConfigBuilder::new()
    }

    /// Loads the configuration from the process environment.
    ///
    /// Reads [`SHOP_DOMAIN_VAR`] and [`STOREFRONT_TOKEN_VAR`]; see
    /// [`from_lookup`](Self::from_lookup) for the validation rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if either variable is missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads the configuration through an arbitrary variable lookup.
    ///
    /// Both variables are checked for presence before either is validated.
    /// A variable that is unset, or empty after trimming, counts as missing.
    /// The domain is trimmed and otherwise used verbatim; the token is sent
    /// exactly as provided.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] naming the first missing
    /// variable, or a validation error for a malformed domain.
    ///
    /// # Example
    ///
    /// ```rust
    /// use storefront_check::{CheckConfig, ConfigError};
    ///
    /// let result = CheckConfig::from_lookup(|_| None);
    /// assert!(matches!(
    ///     result,
    ///     Err(ConfigError::MissingEnvVar { name: "SHOPIFY_SHOP_DOMAIN" })
    /// ));
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::MissingEnvVar { name })
        };

        let domain = read(SHOP_DOMAIN_VAR)?;
        let token = read(STOREFRONT_TOKEN_VAR)?;

        Self::builder()
            .shop(ShopDomain::new(domain)?)
            .token(StorefrontToken::new(token)?)
            .build()
    }

    /// Returns the shop domain.
    #[must_use]
    pub const fn shop(&self) -> &ShopDomain {
        &self.shop
    }

    /// Returns the storefront access token.
    #[must_use]
    pub const fn token(&self) -> &StorefrontToken {
        &self.token
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the base URL override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the origin requests are sent to.
    ///
    /// This is `https://{shop}` unless an API host override is configured.
    #[must_use]
    pub fn base_uri(&self) -> String {
        self.api_host.as_ref().map_or_else(
            || format!("https://{}", self.shop),
            |host| host.origin().to_string(),
        )
    }

    /// Returns the full GraphQL endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/api/{}/graphql.json", self.base_uri(), self.api_version)
    }
}

/// Builder for constructing [`CheckConfig`] instances.
///
/// # Defaults
///
/// - `api_version`: `2024-10`
/// - `timeout`: 20 seconds
/// - `api_host`: `None`
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use storefront_check::{ApiVersion, CheckConfig, HostUrl, ShopDomain, StorefrontToken};
///
/// let config = CheckConfig::builder()
///     .shop(ShopDomain::new("my-store.myshopify.com").unwrap())
///     .token(StorefrontToken::new("token").unwrap())
///     .api_version(ApiVersion::unstable())
///     .timeout(Duration::from_secs(5))
///     .api_host(HostUrl::new("http://127.0.0.1:8080").unwrap())
///     .user_agent_prefix("Diagnostics/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.endpoint(), "http://127.0.0.1:8080/api/unstable/graphql.json");
/// ```
#[derive(Debug, Default)]
pub struct CheckConfigBuilder {
    shop: Option<ShopDomain>,
    token: Option<StorefrontToken>,
    api_version: Option<ApiVersion>,
    timeout: Option<Duration>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl CheckConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shop domain (required).
    #[must_use]
    pub fn shop(mut self, shop: ShopDomain) -> Self {
        self.shop = Some(shop);
        self
    }

    /// Sets the storefront access token (required).
    #[must_use]
    pub fn token(mut self, token: StorefrontToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Routes requests to this origin instead of `https://{shop}`.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`CheckConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `shop` or `token`
    /// are not set.
    pub fn build(self) -> Result<CheckConfig, ConfigError> {
        let shop = self
            .shop
            .ok_or(ConfigError::MissingRequiredField { field: "shop" })?;
        let token = self
            .token
            .ok_or(ConfigError::MissingRequiredField { field: "token" })?;

        Ok(CheckConfig {
            shop,
            token,
            api_version: self.api_version.unwrap_or_default(),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            api_host: self.api_host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
