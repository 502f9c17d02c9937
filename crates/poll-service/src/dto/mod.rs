//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs serialized to JSON and handed to the HTML templates
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{ChoiceField, CreateChoiceRequest, CreateQuestionRequest, VoteForm, VoteRequest};

pub use responses::{
    ChoiceResponse, HealthChecks, HealthResponse, QuestionDetailResponse,
    QuestionResponse, ReadinessResponse, ResultsResponse,
};
