//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use chrono::{DateTime, Utc};
use poll_core::{Choice, Question};

use super::responses::{ChoiceResponse, QuestionDetailResponse, QuestionResponse, ResultsResponse};

// ============================================================================
// Question Mappers
// ============================================================================

impl QuestionResponse {
    /// Map a question, judging recency against `now`
    pub fn at(question: &Question, now: DateTime<Utc>) -> Self {
        Self {
            id: question.id.into_inner(),
            question_text: question.question_text.clone(),
            pub_date: question.pub_date,
            was_published_recently: question.was_published_recently_at(now),
        }
    }
}

impl From<&Question> for QuestionResponse {
    fn from(question: &Question) -> Self {
        Self::at(question, Utc::now())
    }
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        Self::from(&question)
    }
}

// ============================================================================
// Choice Mappers
// ============================================================================

impl From<&Choice> for ChoiceResponse {
    fn from(choice: &Choice) -> Self {
        Self {
            id: choice.id.into_inner(),
            choice_text: choice.choice_text.clone(),
            votes: choice.votes,
        }
    }
}

impl From<Choice> for ChoiceResponse {
    fn from(choice: Choice) -> Self {
        Self::from(&choice)
    }
}

// ============================================================================
// Composite Mappers
// ============================================================================

impl QuestionDetailResponse {
    pub fn new(question: &Question, choices: &[Choice]) -> Self {
        Self {
            question: QuestionResponse::from(question),
            choices: choices.iter().map(ChoiceResponse::from).collect(),
        }
    }
}

impl ResultsResponse {
    pub fn new(question: &Question, choices: &[Choice]) -> Self {
        Self {
            question: QuestionResponse::from(question),
            choices: choices.iter().map(ChoiceResponse::from).collect(),
            total_votes: choices.iter().map(|c| i64::from(c.votes)).sum(),
        }
    }
}
