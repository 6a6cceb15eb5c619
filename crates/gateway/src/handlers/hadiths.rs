//! Hadith management handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use validator::Validate;

use super::{not_blank, parse_id, validation_error, ApiJson};
use crate::AppState;
use hadith_quiz_common::{
    errors::{AppError, Result},
    metrics, NewHadith, ResolvedHadith,
};

/// Request to create a new hadith
#[derive(Debug, Deserialize, Validate)]
pub struct CreateHadithRequest {
    #[validate(length(min = 1, max = 20000), custom(function = "not_blank"))]
    pub text: String,

    /// Companion ids to link; unknown ids are ignored
    #[serde(default)]
    pub companion_ids: Vec<i32>,

    /// Source ids to link; unknown ids are ignored
    #[serde(default)]
    pub source_ids: Vec<i32>,
}

/// List every hadith with its companions and sources
pub async fn list_hadiths(State(state): State<AppState>) -> Result<Json<Vec<ResolvedHadith>>> {
    let hadiths = state.store.list_hadiths().await?;
    Ok(Json(hadiths))
}

/// Fetch one hadith by id
pub async fn get_hadith(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResolvedHadith>> {
    let id = parse_id(&id)?;

    let hadith = state
        .store
        .find_hadith(id)
        .await?
        .ok_or(AppError::HadithNotFound { id })?;

    Ok(Json(hadith))
}

/// Create a hadith linked to existing companions and sources
pub async fn create_hadith(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateHadithRequest>,
) -> Result<(StatusCode, Json<ResolvedHadith>)> {
    request.validate().map_err(validation_error)?;

    let hadith = state
        .store
        .create_hadith(NewHadith {
            text: request.text.trim().to_string(),
            companion_ids: request.companion_ids,
            source_ids: request.source_ids,
        })
        .await?;

    metrics::record_created("hadith");
    tracing::info!(
        hadith_id = hadith.id,
        companions = hadith.companions.len(),
        sources = hadith.sources.len(),
        "Hadith created"
    );

    Ok((StatusCode::CREATED, Json(hadith)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_defaults_links() {
        let request: CreateHadithRequest =
            serde_json::from_str(r#"{"text": "Actions are by intentions"}"#).unwrap();
        assert!(request.companion_ids.is_empty());
        assert!(request.source_ids.is_empty());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_blank_text_fails_validation() {
        let request = CreateHadithRequest {
            text: "   ".to_string(),
            companion_ids: vec![],
            source_ids: vec![],
        };
        let err = validation_error(request.validate().unwrap_err());
        match err {
            AppError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("text")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
