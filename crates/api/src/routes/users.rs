//! User route handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use smartshop_core::Email;

use crate::db::{RepositoryError, UserRepository};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Request body for creating a user.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: Option<String>,
    pub name: Option<String>,
}

/// Response for the idempotent user create.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CreateUserResponse {
    #[serde(rename_all = "camelCase")]
    Created { inserted_id: String },
    AlreadyExists { message: String },
}

fn already_exists() -> CreateUserResponse {
    CreateUserResponse::AlreadyExists {
        message: "user already exists".to_string(),
    }
}

/// Create a user, keyed by email.
///
/// Idempotent: a duplicate request answers with a benign "already exists"
/// message instead of an error. A concurrent duplicate insert that races
/// past the existence check is folded into the same response.
#[instrument(skip(state, body))]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<Json<CreateUserResponse>> {
    let email = body
        .email
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("Email required".to_string()))?;
    let email = Email::parse(email).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let repository = UserRepository::new(state.db());
    if repository.exists(&email).await? {
        return Ok(Json(already_exists()));
    }

    match repository.create(&email, body.name.as_deref()).await {
        Ok(inserted_id) => Ok(Json(CreateUserResponse::Created { inserted_id })),
        Err(RepositoryError::Conflict(_)) => Ok(Json(already_exists())),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_created_response_shape() {
        let response = CreateUserResponse::Created {
            inserted_id: "64f0a1b2c3d4e5f601234567".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["insertedId"], "64f0a1b2c3d4e5f601234567");
    }

    #[test]
    fn test_already_exists_response_shape() {
        let json = serde_json::to_value(already_exists()).unwrap();
        assert_eq!(json["message"], "user already exists");
    }
}
