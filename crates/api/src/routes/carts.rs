//! Cart route handler: the merge operation.

use axum::{Json, extract::State};
use serde::Deserialize;
use tracing::instrument;

use smartshop_core::{Email, ProductId, Quantity};

use crate::db::{CartRepository, ProductRepository};
use crate::error::{AppError, Result};
use crate::models::{AddToCartOutcome, CartLine};
use crate::state::AppState;

/// Request body for adding a product to a cart.
///
/// Fields are optional at the serde level so a missing field answers with a
/// 400 message instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub email: Option<String>,
    pub product_id: Option<String>,
    pub quantity: Option<i64>,
}

/// Merge a product into the owner's cart.
///
/// Resolves the product, snapshots its name/price/image onto a line, and
/// hands the line to the repository's atomic merge. Quantity defaults to 1.
#[instrument(skip(state, body))]
pub async fn add(
    State(state): State<AppState>,
    Json(body): Json<AddToCartRequest>,
) -> Result<Json<AddToCartOutcome>> {
    let (Some(email), Some(product_id)) = (body.email.as_deref(), body.product_id.as_deref())
    else {
        return Err(AppError::BadRequest(
            "Email and productId are required.".to_string(),
        ));
    };
    let email = Email::parse(email).map_err(|e| AppError::BadRequest(e.to_string()))?;
    let product_id =
        ProductId::parse(product_id).map_err(|e| AppError::BadRequest(e.to_string()))?;
    let quantity = parse_quantity(body.quantity)?;

    let product = ProductRepository::new(state.db())
        .get(&product_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found.".to_string()))?;

    let line = CartLine::snapshot(product, quantity);
    let outcome = CartRepository::new(state.db()).add_line(&email, &line).await?;

    Ok(Json(outcome))
}

/// Default an omitted quantity to 1; reject zero and negative values.
fn parse_quantity(quantity: Option<i64>) -> Result<Quantity> {
    match quantity {
        None => Ok(Quantity::default()),
        Some(n) => u32::try_from(n)
            .ok()
            .and_then(|n| Quantity::try_from(n).ok())
            .ok_or_else(|| AppError::BadRequest("quantity must be a positive integer".to_string())),
    }
}
