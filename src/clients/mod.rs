//! HTTP client types for Storefront API communication.
//!
//! # Overview
//!
//! - [`StorefrontClient`]: Sends GraphQL documents to one storefront
//! - [`StorefrontToken`]: The access token and the header it travels in
//! - [`HttpResponse`]: A parsed response
//! - [`HttpError`]: Everything that can go wrong on the wire

mod errors;
mod http_response;
pub mod storefront;

pub use errors::{HttpError, HttpResponseError};
pub use http_response::HttpResponse;
pub use storefront::{StorefrontClient, StorefrontToken, SDK_VERSION};
