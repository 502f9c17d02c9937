//! # poll-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    ChoiceField, ChoiceResponse, CreateChoiceRequest, CreateQuestionRequest,
    HealthChecks, HealthResponse, QuestionDetailResponse, QuestionResponse, ReadinessResponse,
    ResultsResponse, VoteForm, VoteRequest,
};
pub use services::{
    AdminBootstrap, AdminService, QuestionService, SeedReport, SeedService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, VoteService,
};
