//! Domain types.
//!
//! These types represent validated domain objects separate from the document
//! structs the database layer serializes. Handlers and responses speak these
//! types; the `db` module maps them to and from stored documents.

pub mod cart;
pub mod product;

pub use cart::{AddToCartOutcome, CartLine, CartWrite};
pub use product::{NewProduct, Product};
