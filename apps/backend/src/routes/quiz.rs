//! Quiz session endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use lingolens_core::{build_quiz, QuizStep};
use rand::rngs::StdRng;
use rand::SeedableRng;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

fn session_not_found(id: Uuid) -> ApiError {
    ApiError::NotFound(format!("Quiz session {}", id))
}

/// POST /api/quiz
/// Builds a quiz from the given items, drawing extra distractors from the
/// stored vocabulary of the same language.
pub async fn start(
    State(state): State<AppState>,
    Json(payload): Json<StartQuizRequest>,
) -> Result<Json<QuizStateResponse>> {
    if payload.items.is_empty() {
        return Err(ApiError::BadRequest("No items to quiz on".to_string()));
    }

    let language = match payload.language {
        Some(language) => language,
        None => state.settings.read().await.language,
    };
    let historical = state.vocabulary.read().await.translations_for(language);

    let mut rng = match payload.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let questions = build_quiz(&payload.items, &historical, &mut rng);

    let session = QuizSession::start(questions)
        .ok_or_else(|| ApiError::BadRequest("No items to quiz on".to_string()))?;
    let response_session = session.clone();
    let id = state.sessions.insert(session).await;

    Ok(Json(QuizStateResponse::from_session(id, &response_session)))
}

/// GET /api/quiz/:id
pub async fn current(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuizStateResponse>> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| session_not_found(id))?;
    Ok(Json(QuizStateResponse::from_session(id, &session)))
}

/// POST /api/quiz/:id/answer
/// Only the first answer to a question counts.
pub async fn answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AnswerRequest>,
) -> Result<Json<QuizStateResponse>> {
    let session = state
        .sessions
        .answer(id, &payload.choice)
        .await
        .ok_or_else(|| session_not_found(id))?;
    Ok(Json(QuizStateResponse::from_session(id, &session)))
}

/// POST /api/quiz/:id/advance
pub async fn advance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AdvanceResponse>> {
    let step = state
        .sessions
        .advance(id)
        .await
        .ok_or_else(|| session_not_found(id))?;

    let response = match step {
        QuizStep::InProgress(session) => {
            AdvanceResponse::InProgress(QuizStateResponse::from_session(id, &session))
        }
        QuizStep::Finished(outcome) => AdvanceResponse::Finished(outcome.into()),
    };
    Ok(Json(response))
}

/// DELETE /api/quiz/:id
pub async fn abandon(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode> {
    if state.sessions.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(session_not_found(id))
    }
}
