//! Storefront API access token.
//!
//! # Security
//!
//! [`StorefrontToken`] implements a custom [`Debug`] that masks the token
//! value, so configuration can be logged without leaking the credential.
//!
//! # Example
//!
//! ```rust
//! use storefront_check::StorefrontToken;
//!
//! let token = StorefrontToken::new("public-access-token").unwrap();
//! assert_eq!(token.header_name(), "X-Shopify-Storefront-Access-Token");
//!
//! let debug_output = format!("{:?}", token);
//! assert!(debug_output.contains("*****"));
//! assert!(!debug_output.contains("public-access-token"));
//! ```

use std::fmt;

use crate::error::ConfigError;

/// HTTP header name carrying the storefront access token.
pub const TOKEN_HEADER_NAME: &str = "X-Shopify-Storefront-Access-Token";

/// A validated Shopify Storefront API access token.
#[derive(Clone, PartialEq, Eq)]
pub struct StorefrontToken(String);

impl StorefrontToken {
    /// Creates a new validated token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty or
    /// only whitespace. A non-blank token is kept exactly as given.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }

    /// Returns the HTTP header name the token is sent in.
    #[must_use]
    pub const fn header_name(&self) -> &'static str {
        TOKEN_HEADER_NAME
    }

    /// Returns the token value as a string slice.
    #[must_use]
    pub fn header_value(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StorefrontToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StorefrontToken(*****)")
    }
}
