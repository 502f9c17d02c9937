//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize`; the same structs feed both the
//! JSON API and the HTML templates.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Poll Responses
// ============================================================================

/// Question summary
#[derive(Debug, Clone, Serialize)]
pub struct QuestionResponse {
    pub id: i64,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
    pub was_published_recently: bool,
}

/// Choice with its current tally
#[derive(Debug, Clone, Serialize)]
pub struct ChoiceResponse {
    pub id: i64,
    pub choice_text: String,
    pub votes: i32,
}

/// Question with its choices, ordered by id
#[derive(Debug, Clone, Serialize)]
pub struct QuestionDetailResponse {
    #[serde(flatten)]
    pub question: QuestionResponse,
    pub choices: Vec<ChoiceResponse>,
}

/// Vote tallies of a question
#[derive(Debug, Clone, Serialize)]
pub struct ResultsResponse {
    #[serde(flatten)]
    pub question: QuestionResponse,
    pub choices: Vec<ChoiceResponse>,
    pub total_votes: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
