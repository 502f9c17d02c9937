//! Admin handlers
//!
//! Question and choice management behind HTTP Basic auth.

use axum::{
    extract::{Path, State},
    Json,
};
use poll_service::{
    ChoiceResponse, CreateChoiceRequest, CreateQuestionRequest, QuestionDetailResponse,
    QuestionResponse, QuestionService,
};
use tracing::info;

use crate::extractors::{AdminUser, QuestionIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List every question, unpublished ones included
///
/// GET /admin/questions
pub async fn list_questions(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<Vec<QuestionResponse>>> {
    let service = QuestionService::new(state.service_context());
    let response = service.list_all().await?;
    Ok(Json(response))
}

/// Create a question with optional initial choices
///
/// POST /admin/questions
pub async fn create_question(
    State(state): State<AppState>,
    admin: AdminUser,
    ValidatedJson(request): ValidatedJson<CreateQuestionRequest>,
) -> ApiResult<Created<Json<QuestionDetailResponse>>> {
    let service = QuestionService::new(state.service_context());
    let response = service.create_question(request).await?;
    info!(admin = %admin.account.username, question_id = response.question.id, "Admin created question");
    Ok(Created(Json(response)))
}

/// Add a choice to a question
///
/// POST /admin/questions/{question_id}/choices
pub async fn add_choice(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(path): Path<QuestionIdPath>,
    ValidatedJson(request): ValidatedJson<CreateChoiceRequest>,
) -> ApiResult<Created<Json<ChoiceResponse>>> {
    let service = QuestionService::new(state.service_context());
    let response = service.add_choice(path.question_id()?, request).await?;
    Ok(Created(Json(response)))
}

/// Delete a question and its choices
///
/// DELETE /admin/questions/{question_id}
pub async fn delete_question(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(path): Path<QuestionIdPath>,
) -> ApiResult<NoContent> {
    let question_id = path.question_id()?;
    let service = QuestionService::new(state.service_context());
    service.delete_question(question_id).await?;
    info!(admin = %admin.account.username, question_id = %question_id, "Admin deleted question");
    Ok(NoContent)
}
