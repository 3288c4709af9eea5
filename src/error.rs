//! Error types for the storefront connectivity check.
//!
//! Configuration problems are reported through [`ConfigError`]; anything that
//! goes wrong once the request is on the wire is an
//! [`HttpError`](crate::clients::HttpError). [`CheckError`] unifies the two
//! and maps each onto a process exit code.
//!
//! # Example
//!
//! ```rust
//! use storefront_check::{ConfigError, StorefrontToken};
//!
//! let result = StorefrontToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use std::process::ExitCode;

use thiserror::Error;

use crate::clients::HttpError;

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("Missing environment variable: {name}. Set it in the environment or in a .env file.")]
    MissingEnvVar {
        /// The name of the missing variable.
        name: &'static str,
    },

    /// Storefront access token cannot be empty.
    #[error("Storefront access token cannot be empty. Please provide a valid Storefront API access token.")]
    EmptyAccessToken,

    /// Shop domain is invalid.
    #[error("Invalid shop domain '{domain}'. Expected a bare host such as 'shop-name.myshopify.com', without scheme or path.")]
    InvalidShopDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' (e.g., '2024-10') or 'unstable'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://proxy.example.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}

/// Top-level error for a connectivity check run.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Configuration could not be loaded. No request was sent.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The request was sent but did not produce a usable response.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl CheckError {
    /// Exit status for a configuration failure.
    pub const CONFIG_EXIT_CODE: u8 = 1;

    /// Exit status for a transport, status or decoding failure.
    pub const REQUEST_EXIT_CODE: u8 = 2;

    /// Returns the raw exit status for this error.
    #[must_use]
    pub const fn exit_status(&self) -> u8 {
        match self {
            Self::Config(_) => Self::CONFIG_EXIT_CODE,
            Self::Http(_) => Self::REQUEST_EXIT_CODE,
        }
    }

    /// Returns the process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_missing_env_var_error_message() {
        let error = ConfigError::MissingEnvVar {
            name: "SHOPIFY_SHOP_DOMAIN",
        };
        let message = error.to_string();
        assert!(message.contains("SHOPIFY_SHOP_DOMAIN"));
        assert!(message.contains(".env"));
    }

    #[test]
    fn test_invalid_shop_domain_error_message() {
        let error = ConfigError::InvalidShopDomain {
            domain: "bad domain!".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("bad domain!"));
        assert!(message.contains("Expected"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "shop" };
        let message = error.to_string();
        assert!(message.contains("shop"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_config_error_maps_to_exit_status_one() {
        let error = CheckError::from(ConfigError::EmptyAccessToken);
        assert_eq!(error.exit_status(), 1);
    }

    #[test]
    fn test_http_error_maps_to_exit_status_two() {
        let error = CheckError::from(HttpError::Response(HttpResponseError {
            code: 401,
            message: "{}".to_string(),
            error_reference: None,
        }));
        assert_eq!(error.exit_status(), 2);
    }

    #[test]
    fn test_check_error_is_transparent() {
        let error = CheckError::from(ConfigError::EmptyAccessToken);
        assert_eq!(error.to_string(), ConfigError::EmptyAccessToken.to_string());
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyAccessToken;
        let _: &dyn std::error::Error = &error;
    }
}
