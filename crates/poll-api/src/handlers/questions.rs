//! Question handlers
//!
//! Public JSON endpoints for browsing questions and voting.

use axum::{
    extract::{Path, State},
    Json,
};
use poll_service::{
    QuestionDetailResponse, QuestionResponse, QuestionService, ResultsResponse, VoteRequest,
    VoteService,
};

use crate::extractors::QuestionIdPath;
use crate::response::ApiResult;
use crate::state::AppState;

/// List the latest published questions
///
/// GET /questions
pub async fn list_questions(State(state): State<AppState>) -> ApiResult<Json<Vec<QuestionResponse>>> {
    let service = QuestionService::new(state.service_context());
    let response = service.latest_published(state.index_limit()).await?;
    Ok(Json(response))
}

/// Get a question with its choices
///
/// GET /questions/{question_id}
pub async fn get_question(
    State(state): State<AppState>,
    Path(path): Path<QuestionIdPath>,
) -> ApiResult<Json<QuestionDetailResponse>> {
    let service = QuestionService::new(state.service_context());
    let response = service.get_question_with_choices(path.question_id()?).await?;
    Ok(Json(response))
}

/// Get the vote tallies of a question
///
/// GET /questions/{question_id}/results
pub async fn get_results(
    State(state): State<AppState>,
    Path(path): Path<QuestionIdPath>,
) -> ApiResult<Json<ResultsResponse>> {
    let service = QuestionService::new(state.service_context());
    let response = service.get_results(path.question_id()?).await?;
    Ok(Json(response))
}

/// Vote for a choice and return the updated tallies
///
/// POST /questions/{question_id}/vote
///
/// A missing or unreadable body counts as no choice selected.
pub async fn vote(
    State(state): State<AppState>,
    Path(path): Path<QuestionIdPath>,
    request: Option<Json<VoteRequest>>,
) -> ApiResult<Json<ResultsResponse>> {
    let question_id = path.question_id()?;
    let choice = request.and_then(|Json(request)| request.into_choice());

    VoteService::new(state.service_context())
        .record_vote(question_id, choice)
        .await?;

    let response = QuestionService::new(state.service_context())
        .get_results(question_id)
        .await?;
    Ok(Json(response))
}
