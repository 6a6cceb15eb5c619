//! Source vocabulary handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use validator::Validate;

use super::{not_blank, validation_error, ApiJson};
use crate::AppState;
use hadith_quiz_common::{db::models::Source, errors::Result, metrics};

/// Request to create a new source
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSourceRequest {
    #[validate(length(min = 1, max = 255), custom(function = "not_blank"))]
    pub name: String,
}

/// List every source, ordered by id
pub async fn list_sources(State(state): State<AppState>) -> Result<Json<Vec<Source>>> {
    let sources = state.store.list_sources().await?;
    Ok(Json(sources))
}

/// Create a source; names are unique
pub async fn create_source(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateSourceRequest>,
) -> Result<(StatusCode, Json<Source>)> {
    request.validate().map_err(validation_error)?;

    let source = state
        .store
        .create_source(request.name.trim().to_string())
        .await?;

    metrics::record_created("source");
    tracing::info!(source_id = source.id, name = %source.name, "Source created");

    Ok((StatusCode::CREATED, Json(source)))
}
