//! Narrating companion handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use validator::Validate;

use super::{not_blank, validation_error, ApiJson};
use crate::AppState;
use hadith_quiz_common::{db::models::Companion, errors::Result, metrics};

/// Request to create a new companion
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCompanionRequest {
    #[validate(length(min = 1, max = 255), custom(function = "not_blank"))]
    pub name: String,
}

/// List every companion, ordered by id
pub async fn list_companions(State(state): State<AppState>) -> Result<Json<Vec<Companion>>> {
    let companions = state.store.list_companions().await?;
    Ok(Json(companions))
}

/// Create a companion; names are unique
pub async fn create_companion(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateCompanionRequest>,
) -> Result<(StatusCode, Json<Companion>)> {
    request.validate().map_err(validation_error)?;

    let companion = state
        .store
        .create_companion(request.name.trim().to_string())
        .await?;

    metrics::record_created("companion");
    tracing::info!(companion_id = companion.id, name = %companion.name, "Companion created");

    Ok((StatusCode::CREATED, Json(companion)))
}
