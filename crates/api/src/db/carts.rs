//! Cart repository: the merge write path.
//!
//! The cart invariant is one document per owner email with at most one line
//! per product. Instead of reading the cart, editing the items array in
//! process, and writing it back (which loses one of two concurrent
//! increments), the merge runs as two atomic steps:
//!
//! 1. Increment the matching line in place, filtering on both the email and
//!    the line's product id so the positional operator targets the line.
//! 2. If nothing matched, push the snapshot line with `upsert: true`, which
//!    appends to an existing cart or creates the cart in the same operation.

use bson::oid::ObjectId;
use bson::{Document, doc};
use mongodb::{Collection, Database};
use rust_decimal::Decimal;
use serde::Serialize;

use smartshop_core::Email;

use super::{RepositoryError, to_object_id};
use crate::models::{AddToCartOutcome, CartLine, CartWrite};

const COLLECTION: &str = "carts";

/// A cart line as stored inside the `items` array.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CartLineDocument {
    product_id: ObjectId,
    name: String,
    price: Decimal,
    image: String,
    quantity: i64,
}

impl CartLineDocument {
    fn from_line(line: &CartLine, product_id: ObjectId) -> Self {
        Self {
            product_id,
            name: line.name.clone(),
            price: line.price,
            image: line.image.clone(),
            quantity: i64::from(line.quantity.get()),
        }
    }
}

/// Filter and update for incrementing an existing line in place.
fn increment_line(
    email: &Email,
    product_id: ObjectId,
    quantity: u32,
    now: bson::DateTime,
) -> (Document, Document) {
    (
        doc! { "email": email.as_str(), "items.productId": product_id },
        doc! {
            "$inc": { "items.$.quantity": i64::from(quantity) },
            "$set": { "updatedAt": now },
        },
    )
}

/// Filter and update for appending a line, creating the cart if absent.
fn append_line(email: &Email, line: Document, now: bson::DateTime) -> (Document, Document) {
    (
        doc! { "email": email.as_str() },
        doc! {
            "$push": { "items": line },
            "$set": { "updatedAt": now },
            "$setOnInsert": { "createdAt": now },
        },
    )
}

/// Repository for cart operations.
pub struct CartRepository<'a> {
    db: &'a Database,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Document> {
        self.db.collection(COLLECTION)
    }

    /// Merge a snapshot line into the owner's cart.
    ///
    /// Reports which write path ran: `incremented` when the cart already had
    /// a line for the product, `appended` when the cart existed without one,
    /// `created` when no cart existed for the email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if either write fails.
    pub async fn add_line(
        &self,
        email: &Email,
        line: &CartLine,
    ) -> Result<AddToCartOutcome, RepositoryError> {
        let now = bson::DateTime::now();
        let product_id = to_object_id(&line.product_id)?;

        let (filter, update) = increment_line(email, product_id, line.quantity.get(), now);
        let result = self.collection().update_one(filter, update).await?;
        if result.matched_count > 0 {
            return Ok(AddToCartOutcome {
                outcome: CartWrite::Incremented,
                cart_id: None,
            });
        }

        let line_document = bson::to_document(&CartLineDocument::from_line(line, product_id))
            .map_err(|e| {
                RepositoryError::DataCorruption(format!("failed to serialize cart line: {e}"))
            })?;
        let (filter, update) = append_line(email, line_document, now);
        let result = self
            .collection()
            .update_one(filter, update)
            .upsert(true)
            .await?;

        match result.upserted_id {
            Some(id) => Ok(AddToCartOutcome {
                outcome: CartWrite::Created,
                cart_id: id.as_object_id().map(|oid| oid.to_hex()),
            }),
            None => Ok(AddToCartOutcome {
                outcome: CartWrite::Appended,
                cart_id: None,
            }),
        }
    }
}
