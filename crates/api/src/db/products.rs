//! Product repository.

use bson::oid::ObjectId;
use bson::{Document, doc};
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{Collection, Database};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use smartshop_core::{Email, ProductId};

use super::{RepositoryError, to_object_id};
use crate::models::{NewProduct, Product};

const COLLECTION: &str = "products";

/// A product as stored in the `products` collection.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    price: Decimal,
    image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
}

impl ProductDocument {
    /// Map a stored document into the domain type.
    fn into_product(self) -> Result<Product, RepositoryError> {
        let id = self
            .id
            .ok_or_else(|| RepositoryError::DataCorruption("product without _id".to_owned()))?;
        let id = ProductId::parse(&id.to_hex()).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid product id in database: {e}"))
        })?;
        let email = self
            .email
            .map(|e| Email::parse(&e))
            .transpose()
            .map_err(|e| {
                RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
            })?;

        Ok(Product {
            id,
            name: self.name,
            price: self.price,
            image: self.image,
            email,
            created_at: self.created_at,
        })
    }
}

/// Repository for product operations.
pub struct ProductRepository<'a> {
    db: &'a Database,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<ProductDocument> {
        self.db.collection(COLLECTION)
    }

    /// List products, optionally filtered to one owner email.
    ///
    /// Returns documents in stored (insertion) order; no pagination.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, owner: Option<&Email>) -> Result<Vec<Product>, RepositoryError> {
        let filter = owner.map_or_else(Document::new, |email| doc! { "email": email.as_str() });
        let documents: Vec<ProductDocument> =
            self.collection().find(filter).await?.try_collect().await?;

        documents
            .into_iter()
            .map(ProductDocument::into_product)
            .collect()
    }

    /// The `limit` most recently created products, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn latest(&self, limit: i64) -> Result<Vec<Product>, RepositoryError> {
        let documents: Vec<ProductDocument> = self
            .collection()
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .limit(limit)
            .await?
            .try_collect()
            .await?;

        documents
            .into_iter()
            .map(ProductDocument::into_product)
            .collect()
    }

    /// Get a product by its identifier.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: &ProductId) -> Result<Option<Product>, RepositoryError> {
        let document = self
            .collection()
            .find_one(doc! { "_id": to_object_id(id)? })
            .await?;

        document.map(ProductDocument::into_product).transpose()
    }

    /// Insert a new product, stamping `created_at` with the current time.
    ///
    /// No uniqueness constraint is enforced.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, new: NewProduct) -> Result<Product, RepositoryError> {
        let document = ProductDocument {
            id: None,
            name: new.name,
            price: new.price,
            image: new.image,
            email: new.email.map(Email::into_inner),
            created_at: Utc::now(),
        };

        let result = self.collection().insert_one(&document).await?;
        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            RepositoryError::DataCorruption("insert did not return an object id".to_owned())
        })?;

        ProductDocument {
            id: Some(id),
            ..document
        }
        .into_product()
    }

    /// Delete a product by its identifier, whether or not it exists.
    ///
    /// Returns the number of documents removed (0 or 1).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: &ProductId) -> Result<u64, RepositoryError> {
        let result = self
            .collection()
            .delete_one(doc! { "_id": to_object_id(id)? })
            .await?;

        Ok(result.deleted_count)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn document(id: Option<ObjectId>, email: Option<&str>) -> ProductDocument {
        ProductDocument {
            id,
            name: "Mug".to_string(),
            price: Decimal::new(1299, 2),
            image: "https://img.example.com/mug.png".to_string(),
            email: email.map(str::to_owned),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_into_product_maps_fields() {
        let oid = ObjectId::parse_str("64f0a1b2c3d4e5f601234567").unwrap();
        let product = document(Some(oid), Some("seller@example.com"))
            .into_product()
            .unwrap();

        assert_eq!(product.id.as_str(), "64f0a1b2c3d4e5f601234567");
        assert_eq!(product.email.unwrap().as_str(), "seller@example.com");
    }

    #[test]
    fn test_into_product_requires_id() {
        let result = document(None, None).into_product();
        assert!(matches!(result, Err(RepositoryError::DataCorruption(_))));
    }

    #[test]
    fn test_into_product_rejects_bad_email() {
        let oid = ObjectId::new();
        let result = document(Some(oid), Some("not-an-email")).into_product();
        assert!(matches!(result, Err(RepositoryError::DataCorruption(_))));
    }

    #[test]
    fn test_document_bson_shape() {
        let oid = ObjectId::new();
        let doc = bson::to_document(&document(Some(oid), None)).unwrap();

        assert!(doc.contains_key("_id"));
        assert!(doc.contains_key("createdAt"));
        // Price is stored as a decimal string
        assert_eq!(doc.get_str("price").unwrap(), "12.99");
        // Absent owner is omitted entirely
        assert!(!doc.contains_key("email"));
    }
}
