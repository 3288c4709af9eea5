//! Storefront API client.
//!
//! The Storefront API differs from the Admin API in two ways that matter
//! here:
//!
//! - **Endpoint**: `/api/{version}/graphql.json` (no `/admin` prefix)
//! - **Authentication**: the `X-Shopify-Storefront-Access-Token` header
//!   rather than `X-Shopify-Access-Token`

mod client;
mod token;

pub use client::{StorefrontClient, SDK_VERSION};
pub use token::{StorefrontToken, TOKEN_HEADER_NAME};
