//! User repository.

use bson::doc;
use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use smartshop_core::Email;

use super::{RepositoryError, is_duplicate_key};

const COLLECTION: &str = "users";

/// A user as stored in the `users` collection.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
}

/// Repository for user operations.
pub struct UserRepository<'a> {
    db: &'a Database,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<UserDocument> {
        self.db.collection(COLLECTION)
    }

    /// Whether a user with this email already exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn exists(&self, email: &Email) -> Result<bool, RepositoryError> {
        let document = self
            .collection()
            .find_one(doc! { "email": email.as_str() })
            .await?;

        Ok(document.is_some())
    }

    /// Insert a new user, returning the assigned id in hex form.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists (a
    /// concurrent create can land between the caller's existence check and
    /// this insert when the collection carries a unique email index).
    /// Returns `RepositoryError::Database` for other failures.
    pub async fn create(
        &self,
        email: &Email,
        name: Option<&str>,
    ) -> Result<String, RepositoryError> {
        let document = UserDocument {
            id: None,
            email: email.as_str().to_owned(),
            name: name.map(str::to_owned),
            created_at: Utc::now(),
        };

        let result = self.collection().insert_one(&document).await.map_err(|e| {
            if is_duplicate_key(&e) {
                return RepositoryError::Conflict("email already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .ok_or_else(|| {
                RepositoryError::DataCorruption("insert did not return an object id".to_owned())
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_document_bson_shape() {
        let document = UserDocument {
            id: None,
            email: "buyer@example.com".to_string(),
            name: Some("Buyer".to_string()),
            created_at: Utc::now(),
        };
        let doc = bson::to_document(&document).unwrap();

        assert_eq!(doc.get_str("email").unwrap(), "buyer@example.com");
        assert_eq!(doc.get_str("name").unwrap(), "Buyer");
        assert!(doc.contains_key("createdAt"));
        // Unset _id is omitted so the store assigns one
        assert!(!doc.contains_key("_id"));
    }
}
