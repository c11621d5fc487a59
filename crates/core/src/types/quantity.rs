//! Cart line quantity.

use core::fmt;
use core::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// A cart line quantity, always at least 1.
///
/// Backed by [`NonZeroU32`], so zero and negative values fail at
/// deserialization and no handler has to guard against them. An omitted
/// quantity defaults to 1 via [`Default`].
///
/// ```
/// use smartshop_core::Quantity;
///
/// assert_eq!(Quantity::default().get(), 1);
/// assert!(serde_json::from_str::<Quantity>("3").is_ok());
/// assert!(serde_json::from_str::<Quantity>("0").is_err());
/// assert!(serde_json::from_str::<Quantity>("-2").is_err());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// Create a quantity from a non-zero count.
    #[must_use]
    pub const fn new(n: NonZeroU32) -> Self {
        Self(n)
    }

    /// Returns the quantity as a plain integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self(NonZeroU32::MIN)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = core::num::TryFromIntError;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        NonZeroU32::try_from(n).map(Self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_one() {
        assert_eq!(Quantity::default().get(), 1);
    }

    #[test]
    fn test_deserialize_rejects_zero() {
        assert!(serde_json::from_str::<Quantity>("0").is_err());
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        assert!(serde_json::from_str::<Quantity>("-1").is_err());
    }

    #[test]
    fn test_roundtrip() {
        let q: Quantity = serde_json::from_str("5").unwrap();
        assert_eq!(q.get(), 5);
        assert_eq!(serde_json::to_string(&q).unwrap(), "5");
    }

    #[test]
    fn test_try_from() {
        assert!(Quantity::try_from(0).is_err());
        assert_eq!(Quantity::try_from(4).unwrap().get(), 4);
    }
}
