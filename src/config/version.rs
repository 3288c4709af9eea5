//! Storefront API version handling.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A Storefront API version, either `YYYY-MM` or `unstable`.
///
/// Shopify releases versions quarterly, but older and future versions are
/// both reachable, so any well-formed `YYYY-MM` is accepted rather than a
/// fixed list.
///
/// # Example
///
/// ```rust
/// use storefront_check::ApiVersion;
///
/// let version = ApiVersion::default();
/// assert_eq!(version.to_string(), "2024-10");
///
/// let version: ApiVersion = "2025-01".parse().unwrap();
/// assert_eq!(version.as_ref(), "2025-01");
///
/// assert!("2025-13".parse::<ApiVersion>().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiVersion(String);

impl ApiVersion {
    /// The version the connectivity check targets unless overridden.
    pub const DEFAULT: &'static str = "2024-10";

    const UNSTABLE: &'static str = "unstable";

    /// Creates a new validated API version.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if the string is neither
    /// `unstable` nor a `YYYY-MM` date with a month between 01 and 12.
    pub fn new(version: impl Into<String>) -> Result<Self, ConfigError> {
        let version: String = version.into();
        let version = version.trim().to_lowercase();
        if version == Self::UNSTABLE || Self::is_dated(&version) {
            Ok(Self(version))
        } else {
            Err(ConfigError::InvalidApiVersion { version })
        }
    }

    /// Returns the unstable API version.
    #[must_use]
    pub fn unstable() -> Self {
        Self(Self::UNSTABLE.to_string())
    }

    fn is_dated(version: &str) -> bool {
        let Some((year, month)) = version.split_once('-') else {
            return false;
        };
        if year.len() != 4 || month.len() != 2 {
            return false;
        }
        if !year.chars().chain(month.chars()).all(|c| c.is_ascii_digit()) {
            return false;
        }
        matches!(month.parse::<u8>(), Ok(1..=12))
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl AsRef<str> for ApiVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
