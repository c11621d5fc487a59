//! Product route handlers: passthroughs to the product repository.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use smartshop_core::{Email, ProductId};

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::models::{NewProduct, Product};
use crate::state::AppState;

/// How many products `/latest-products` returns.
const LATEST_LIMIT: i64 = 8;

/// Query parameters for the product listing.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub email: Option<String>,
}

/// Request body for creating a product.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub email: Option<String>,
}

/// Response for deleting a product.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProductResponse {
    pub deleted_count: u64,
}

/// List products, optionally filtered by owner email.
///
/// Also serves `/myProducts`.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Product>>> {
    // An absent or empty filter lists everything
    let owner = query
        .email
        .as_deref()
        .filter(|email| !email.is_empty())
        .map(Email::parse)
        .transpose()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let products = ProductRepository::new(state.db())
        .list(owner.as_ref())
        .await?;
    Ok(Json(products))
}

/// The newest products, most recent first.
pub async fn latest(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.db()).latest(LATEST_LIMIT).await?;
    Ok(Json(products))
}

/// Get a single product by id.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    let id = parse_product_id(&id)?;

    let product = ProductRepository::new(state.db())
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(product))
}

/// Create a product. The server stamps the creation timestamp.
#[instrument(skip(state, body), fields(name = %body.name))]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateProductRequest>,
) -> Result<Json<Product>> {
    let email = body
        .email
        .as_deref()
        .map(Email::parse)
        .transpose()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let product = ProductRepository::new(state.db())
        .create(NewProduct {
            name: body.name,
            price: body.price,
            image: body.image,
            email,
        })
        .await?;

    Ok(Json(product))
}

/// Delete a product by id. Responds with the deleted count whether or not
/// the product existed.
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteProductResponse>> {
    let id = parse_product_id(&id)?;

    let deleted_count = ProductRepository::new(state.db()).delete(&id).await?;
    Ok(Json(DeleteProductResponse { deleted_count }))
}

/// Parse a path segment into a [`ProductId`], mapping failure to a 400.
fn parse_product_id(id: &str) -> Result<ProductId> {
    ProductId::parse(id).map_err(|e| AppError::BadRequest(e.to_string()))
}
