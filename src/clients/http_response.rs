//! HTTP response type for Storefront API calls.

use std::collections::HashMap;

/// Characters of a non-JSON error body kept in the error message.
const RAW_BODY_LIMIT: usize = 512;

/// An HTTP response from the Storefront API.
///
/// Header names are stored lowercased; a header may carry several values.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Collects a reqwest header map into lowercased multi-value form.
    pub(crate) fn parse_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Parses an error body, keeping a truncated copy of it when it is not JSON.
    ///
    /// Proxies and load balancers often answer with HTML or plain text.
    pub(crate) fn error_body(text: &str) -> serde_json::Value {
        serde_json::from_str(text).unwrap_or_else(|_| {
            let mut raw: String = text.chars().take(RAW_BODY_LIMIT).collect();
            if raw.len() < text.len() {
                raw.push_str("...");
            }
            serde_json::json!({ "raw_body": raw })
        })
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the `X-Shopify-API-Deprecated-Reason` header value, if present.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.header("x-shopify-api-deprecated-reason")
    }

    /// Returns the GraphQL `errors` array when the body carries one.
    ///
    /// The Storefront API reports query errors with a 200 status.
    #[must_use]
    pub fn graphql_errors(&self) -> Option<&Vec<serde_json::Value>> {
        self.body.get("errors").and_then(serde_json::Value::as_array)
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Serializes the error fields of the body into a compact JSON string.
    #[must_use]
    pub fn serialize_error(&self) -> String {
        let mut error_body = serde_json::Map::new();

        if let Some(errors) = self.body.get("errors") {
            error_body.insert("errors".to_string(), errors.clone());
        }
        if let Some(error) = self.body.get("error") {
            error_body.insert("error".to_string(), error.clone());
            if let Some(desc) = self.body.get("error_description") {
                error_body.insert("error_description".to_string(), desc.clone());
            }
        }
        if let Some(raw) = self.body.get("raw_body") {
            error_body.insert("raw_body".to_string(), raw.clone());
        }

        if let Some(request_id) = self.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::Value::Object(error_body).to_string()
    }
}
