//! Cart domain types.
//!
//! Carts are keyed by owner email and hold one line per product. The API
//! never reads carts back; the interesting type here is the write outcome
//! reported by the merge operation.

use rust_decimal::Decimal;
use serde::Serialize;

use smartshop_core::{ProductId, Quantity};

use super::Product;

/// One product-quantity pairing within a cart.
///
/// Name, price, and image are copied from the product at add time and never
/// re-synced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub quantity: Quantity,
}

impl CartLine {
    /// Build the snapshot line for adding `quantity` of `product` to a cart.
    #[must_use]
    pub fn snapshot(product: Product, quantity: Quantity) -> Self {
        Self {
            product_id: product.id,
            name: product.name,
            price: product.price,
            image: product.image,
            quantity,
        }
    }
}

/// Which write path the cart merge took.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CartWrite {
    /// An existing line for the product had its quantity incremented.
    Incremented,
    /// A new line was appended to an existing cart.
    Appended,
    /// No cart existed for the email; one was created with this line.
    Created,
}

/// Result of merging a product into a cart.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartOutcome {
    pub outcome: CartWrite,
    /// Identifier of the newly created cart, present only on `created`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_id: Option<String>,
}
