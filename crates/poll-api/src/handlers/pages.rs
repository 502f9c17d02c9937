//! Poll page handlers
//!
//! Server-rendered HTML for listing, voting, and results.

use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use poll_core::QuestionId;
use poll_service::{QuestionService, VoteForm, VoteService};

use crate::state::AppState;
use crate::views::{PageError, PageResult};

/// Redirect to the poll index
///
/// GET / and GET /polls
pub async fn to_index() -> Redirect {
    Redirect::permanent("/polls/")
}

/// Latest published questions
///
/// GET /polls/
pub async fn index(State(state): State<AppState>) -> PageResult<Html<String>> {
    let questions = QuestionService::new(state.service_context())
        .latest_published(state.index_limit())
        .await
        .map_err(|e| state.views().service_error(&e))?;

    state.views().index(&questions)
}

/// Voting form for one question
///
/// GET /polls/{question_id}/
pub async fn detail(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> PageResult<Html<String>> {
    let question_id = parse_question_id(&state, &raw_id)?;
    render_detail(&state, question_id, None).await
}

/// Vote tallies for one question
///
/// GET /polls/{question_id}/results/
pub async fn results(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> PageResult<Html<String>> {
    let question_id = parse_question_id(&state, &raw_id)?;
    let results = QuestionService::new(state.service_context())
        .get_results(question_id)
        .await
        .map_err(|e| state.views().service_error(&e))?;

    state.views().results(&results)
}

/// Record a vote from the detail form
///
/// POST /polls/{question_id}/vote/
///
/// Redirects to the results page on success. A missing or unknown choice
/// re-renders the form with an error message.
pub async fn vote(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    form: Result<Form<VoteForm>, FormRejection>,
) -> PageResult<Response> {
    let question_id = parse_question_id(&state, &raw_id)?;
    // An unreadable body is treated like an empty form
    let choice = form.ok().and_then(|Form(form)| form.choice);

    match VoteService::new(state.service_context())
        .record_vote(question_id, choice)
        .await
    {
        Ok(question_id) => Ok(found(&format!("/polls/{question_id}/results/"))),
        Err(err) => match err.as_choice_error() {
            Some(choice_error) => {
                let message = choice_error.to_string();
                let page = render_detail(&state, question_id, Some(&message)).await?;
                Ok(page.into_response())
            }
            None => Err(state.views().service_error(&err)),
        },
    }
}

/// Fallback for unknown routes
pub async fn not_found(State(state): State<AppState>) -> PageError {
    state.views().not_found()
}

async fn render_detail(
    state: &AppState,
    question_id: QuestionId,
    error_message: Option<&str>,
) -> PageResult<Html<String>> {
    let question = QuestionService::new(state.service_context())
        .get_question_with_choices(question_id)
        .await
        .map_err(|e| state.views().service_error(&e))?;

    state.views().detail(&question, error_message)
}

fn parse_question_id(state: &AppState, raw: &str) -> PageResult<QuestionId> {
    QuestionId::parse(raw).map_err(|_| state.views().not_found())
}

/// `302 Found` to `location`
fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
