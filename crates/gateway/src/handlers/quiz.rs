//! Quiz handlers
//!
//! The server keeps no per-question state. A client echoes the hadith id
//! and, for fill-in-the-blank, the blank positions it was shown.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::{parse_id, ApiJson};
use crate::AppState;
use hadith_quiz_common::{
    errors::Result,
    quiz::{parse_positions, Answer, CorrectAnswer},
    QuestionKind, QuizQuestion,
};

#[derive(Debug, Default, Deserialize)]
pub struct RandomQuizQuery {
    /// Comma-separated question kinds; unknown kinds are ignored
    pub types: Option<String>,
}

/// A submitted answer
#[derive(Debug, Deserialize)]
pub struct CheckAnswerRequest {
    pub hadith_id: i32,
    pub question_type: String,
    #[serde(default)]
    pub companion_ids: Vec<i32>,
    #[serde(default)]
    pub source_ids: Vec<i32>,
    #[serde(default)]
    pub filled_words: Vec<String>,
    #[serde(default)]
    pub blank_indices: Vec<usize>,
}

impl CheckAnswerRequest {
    fn into_answer(self) -> Result<(i32, Answer)> {
        let answer = match self.question_type.parse::<QuestionKind>()? {
            QuestionKind::MultipleChoice => Answer::MultipleChoice {
                companion_ids: self.companion_ids,
                source_ids: self.source_ids,
            },
            QuestionKind::FillBlanks => Answer::FillBlanks {
                filled_words: self.filled_words,
                blank_indices: self.blank_indices,
            },
        };
        Ok((self.hadith_id, answer))
    }
}

#[derive(Debug, Serialize)]
pub struct CheckAnswerResponse {
    pub is_correct: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct CorrectAnswerQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Comma-separated positions, as issued with the question
    pub blank_indices: Option<String>,
}

/// Issue a random question
pub async fn random_quiz(
    State(state): State<AppState>,
    Query(query): Query<RandomQuizQuery>,
) -> Result<Json<QuizQuestion>> {
    let allowed = QuestionKind::parse_list(query.types.as_deref());
    let question = state.quiz.random_question(&allowed).await?;
    Ok(Json(question))
}

/// Judge a submitted answer
pub async fn check_answer(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CheckAnswerRequest>,
) -> Result<Json<CheckAnswerResponse>> {
    let (hadith_id, answer) = request.into_answer()?;
    let is_correct = state.quiz.check_answer(hadith_id, &answer).await?;
    Ok(Json(CheckAnswerResponse { is_correct }))
}

/// Reveal the stored answer for a hadith
pub async fn correct_answer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<CorrectAnswerQuery>,
) -> Result<Json<CorrectAnswer>> {
    let id = parse_id(&id)?;

    let kind = match query.kind.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(raw.parse::<QuestionKind>()?),
    };
    let positions = query
        .blank_indices
        .as_deref()
        .map(parse_positions)
        .unwrap_or_default();

    let answer = state.quiz.reveal_answer(id, kind, &positions).await?;
    Ok(Json(answer))
}
