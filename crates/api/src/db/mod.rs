//! Database operations against MongoDB.
//!
//! # Collections (database: `smartshop` by default)
//!
//! - `products` - Catalog entries, server-stamped `createdAt`
//! - `carts` - One document per owner email, `items` array of line snapshots
//! - `users` - One document per email
//!
//! One repository per collection; repositories borrow the shared [`Database`]
//! handle and map stored documents into domain types at the boundary.

pub mod carts;
pub mod products;
pub mod users;

use bson::doc;
use bson::oid::ObjectId;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::{Client, Database};
use secrecy::ExposeSecret;
use thiserror::Error;

pub use carts::CartRepository;
pub use products::ProductRepository;
pub use users::UserRepository;

use smartshop_core::ProductId;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from the MongoDB driver.
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Connect to MongoDB and select the application database.
///
/// # Errors
///
/// Returns `mongodb::error::Error` if the connection string is rejected.
pub async fn connect(
    mongo_uri: &secrecy::SecretString,
    database: &str,
) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(mongo_uri.expose_secret()).await?;
    Ok(client.database(database))
}

/// Round-trip a ping command to verify the store is reachable.
///
/// # Errors
///
/// Returns `mongodb::error::Error` if the server does not answer.
pub async fn ping(db: &Database) -> Result<(), mongodb::error::Error> {
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}

/// Convert a validated [`ProductId`] into the store's native id type.
///
/// A `ProductId` is always 24 hex characters, so failure here means the type
/// invariant was broken, which is reported as corruption rather than panicked
/// on.
pub(crate) fn to_object_id(id: &ProductId) -> Result<ObjectId, RepositoryError> {
    ObjectId::parse_str(id.as_str())
        .map_err(|e| RepositoryError::DataCorruption(format!("invalid product id {id}: {e}")))
}

/// Whether a driver error is a duplicate-key write conflict (code 11000).
pub(crate) fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        *error.kind,
        ErrorKind::Write(WriteFailure::WriteError(ref write_error)) if write_error.code == 11000
    )
}
