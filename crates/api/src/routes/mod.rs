//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                 - Liveness text (in main)
//! GET    /health           - Store-backed health check (in main)
//!
//! # Products
//! GET    /products         - Product listing, optional ?email= filter
//! POST   /products         - Create product (server stamps createdAt)
//! GET    /latest-products  - Up to 8 newest products
//! GET    /products/{id}    - Product detail
//! DELETE /products/{id}    - Unconditional delete
//! GET    /myProducts       - Alias of GET /products
//!
//! # Users
//! POST   /users            - Idempotent create by email
//!
//! # Carts
//! POST   /carts            - Merge a product into the owner's cart
//! ```

pub mod carts;
pub mod products;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::index).post(products::create))
        .route("/latest-products", get(products::latest))
        .route(
            "/products/{id}",
            get(products::show).delete(products::destroy),
        )
        // The original client calls this path for "my listings"; it is the
        // same query as /products?email=
        .route("/myProducts", get(products::index))
}

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users", post(users::create))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new().route("/carts", post(carts::add))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(product_routes())
        .merge(user_routes())
        .merge(cart_routes())
}
