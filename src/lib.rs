//! # Storefront Connectivity Check
//!
//! Verifies that a Shopify Storefront GraphQL API is reachable with a given
//! access token by sending `{ shop { name } }` once and returning the
//! response body.
//!
//! ## Overview
//!
//! - Configuration via [`CheckConfig`], loaded from `SHOPIFY_SHOP_DOMAIN` and
//!   `SHOPIFY_STOREFRONT_TOKEN` or assembled with [`CheckConfigBuilder`]
//! - Validated newtypes for the shop domain, token and API version
//! - A single-request [`StorefrontClient`] with a fixed timeout and no retries
//! - [`CheckError`] mapping configuration and request failures onto exit codes
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use storefront_check::{check_connectivity, render_body, CheckConfig};
//!
//! let config = CheckConfig::from_env()?;
//! let body = check_connectivity(&config).await?;
//! println!("{}", render_body(&body));
//! ```
//!
//! ## Exit Codes
//!
//! The `storefront-check` binary exits with `0` after printing the body,
//! `1` when configuration is missing or invalid, and `2` when the request
//! fails for any reason.

pub mod check;
pub mod clients;
pub mod config;
pub mod error;

pub use check::{check_connectivity, render_body, run_from_env, SHOP_NAME_QUERY};
pub use clients::{HttpError, HttpResponse, HttpResponseError, StorefrontClient, StorefrontToken};
pub use config::{
    ApiVersion, CheckConfig, CheckConfigBuilder, HostUrl, ShopDomain, DEFAULT_TIMEOUT,
    SHOP_DOMAIN_VAR, STOREFRONT_TOKEN_VAR,
};
pub use error::{CheckError, ConfigError};
