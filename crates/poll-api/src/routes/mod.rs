//! Route definitions
//!
//! HTML poll pages at the root, the JSON API under /api/v1.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{admin, health, pages, questions};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(page_routes())
        .merge(health_routes())
        .nest("/api/v1", api_v1_routes())
        .fallback(pages::not_found)
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Server-rendered poll pages
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::to_index))
        .route("/polls", get(pages::to_index))
        .route("/polls/", get(pages::index))
        .route("/polls/:question_id/", get(pages::detail))
        .route("/polls/:question_id/results/", get(pages::results))
        .route("/polls/:question_id/vote/", post(pages::vote))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(question_routes())
        .merge(admin_routes())
}

/// Public question routes
fn question_routes() -> Router<AppState> {
    Router::new()
        .route("/questions", get(questions::list_questions))
        .route("/questions/:question_id", get(questions::get_question))
        .route("/questions/:question_id/results", get(questions::get_results))
        .route("/questions/:question_id/vote", post(questions::vote))
}

/// Admin routes (HTTP Basic auth)
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/questions", get(admin::list_questions))
        .route("/admin/questions", post(admin::create_question))
        .route("/admin/questions/:question_id", delete(admin::delete_question))
        .route("/admin/questions/:question_id/choices", post(admin::add_choice))
}
