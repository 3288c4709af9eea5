//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A storefront host, interpolated verbatim into `https://{domain}/...`.
///
/// Surrounding whitespace is trimmed; the value is otherwise kept as given,
/// including case, ports and underscores. Only values that would change the
/// shape of the URL are rejected: an embedded scheme, a path, a query, a
/// fragment, userinfo or inner whitespace.
///
/// # Example
///
/// ```rust
/// use storefront_check::ShopDomain;
///
/// let domain = ShopDomain::new(" my-store.myshopify.com ").unwrap();
/// assert_eq!(domain.as_ref(), "my-store.myshopify.com");
///
/// let domain = ShopDomain::new("localhost:8443").unwrap();
/// assert_eq!(domain.as_ref(), "localhost:8443");
///
/// assert!(ShopDomain::new("https://my-store.myshopify.com").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopDomain(String);

impl ShopDomain {
    /// Creates a new shop domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopDomain`] if the domain is empty or
    /// would not form the authority part of a URL on its own.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let domain: String = domain.into();
        let domain = domain.trim().to_string();

        let breaks_authority = |c: char| matches!(c, '/' | '?' | '#' | '@') || c.is_whitespace();
        if domain.is_empty() || domain.starts_with(':') || domain.contains(breaks_authority) {
            return Err(ConfigError::InvalidShopDomain { domain });
        }

        Ok(Self(domain))
    }
}

impl AsRef<str> for ShopDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShopDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated base URL that overrides where requests are sent.
///
/// Used when the storefront is reached through a proxy, and by tests that
/// point the check at a local mock server. Only the origin
/// (`scheme://host[:port]`) is used; any path is ignored.
///
/// # Example
///
/// ```rust
/// use storefront_check::HostUrl;
///
/// let url = HostUrl::new("http://127.0.0.1:8080/ignored").unwrap();
/// assert_eq!(url.origin(), "http://127.0.0.1:8080");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    authority_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL is invalid.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().to_string();

        let Some(scheme_end) = url.find("://") else {
            return Err(ConfigError::InvalidHostUrl { url });
        };

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidHostUrl { url });
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_len = remainder
            .find([':', '/', '?', '#'])
            .unwrap_or(remainder.len());
        let authority_end = remainder
            .find(['/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_len == 0 {
            return Err(ConfigError::InvalidHostUrl { url });
        }

        Ok(Self { url, authority_end })
    }

    /// Returns `scheme://host[:port]` without any path.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.url[..self.authority_end]
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
