//! Type-safe product identifier.
//!
//! The store assigns document ids as 24-character hex strings. Parsing the
//! id at the request boundary means a malformed id is rejected as a bad
//! request instead of surfacing later as a store error.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a string is not a valid [`ProductId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("product id must be a 24-character hex string")]
pub struct ProductIdError;

/// A product identifier: the hex form of a store-assigned document id.
///
/// ```
/// use smartshop_core::ProductId;
///
/// assert!(ProductId::parse("64f0a1b2c3d4e5f601234567").is_ok());
/// assert!(ProductId::parse("not-an-id").is_err());
/// assert!(ProductId::parse("").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Exact length of a document id in hex form.
    pub const HEX_LENGTH: usize = 24;

    /// Parse a `ProductId` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`ProductIdError`] unless the input is exactly 24 hex digits.
    pub fn parse(s: &str) -> Result<Self, ProductIdError> {
        if s.len() == Self::HEX_LENGTH && s.bytes().all(|b| b.is_ascii_hexdigit()) {
            Ok(Self(s.to_ascii_lowercase()))
        } else {
            Err(ProductIdError)
        }
    }

    /// Returns the id as a hex string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = ProductIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
