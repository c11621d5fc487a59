//! Product domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use smartshop_core::{Email, ProductId};

/// A stored product.
///
/// Immutable once created except via full replace; the cart snapshots its
/// name/price/image at add time rather than referencing it live.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price, serialized as a decimal string.
    pub price: Decimal,
    /// Image URL reference.
    pub image: String,
    /// Listing owner, when the product belongs to a seller account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    /// When the product was created (server-stamped).
    pub created_at: DateTime<Utc>,
}

/// Fields for a product about to be inserted.
///
/// The store assigns the id and the server stamps `created_at`.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub email: Option<Email>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_json_shape() {
        let product = Product {
            id: ProductId::parse("64f0a1b2c3d4e5f601234567").unwrap(),
            name: "Mug".to_string(),
            price: Decimal::new(1299, 2),
            image: "https://img.example.com/mug.png".to_string(),
            email: None,
            created_at: "2026-01-15T10:00:00Z".parse().unwrap(),
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], "64f0a1b2c3d4e5f601234567");
        assert_eq!(json["price"], "12.99");
        assert_eq!(json["createdAt"], "2026-01-15T10:00:00Z");
        // Absent owner is omitted, not null
        assert!(json.get("email").is_none());
    }
}
