//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::QuestionId;

/// Message shown to voters when the submitted choice is missing or unknown
pub const CHOICE_NOT_SELECTED_MESSAGE: &str = "You didn't select a choice.";

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Question not found: {0}")]
    QuestionNotFound(QuestionId),

    // =========================================================================
    // Vote Errors
    // =========================================================================
    #[error("{}", CHOICE_NOT_SELECTED_MESSAGE)]
    ChoiceNotSelected,

    #[error("{}", CHOICE_NOT_SELECTED_MESSAGE)]
    ChoiceInvalid,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Text too long: max {max} characters")]
    TextTooLong { max: usize },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Admin account already exists: {0}")]
    AdminAlreadyExists(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::QuestionNotFound(_) => "UNKNOWN_QUESTION",

            // Vote
            Self::ChoiceNotSelected => "CHOICE_NOT_SELECTED",
            Self::ChoiceInvalid => "CHOICE_INVALID",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::TextTooLong { .. } => "TEXT_TOO_LONG",

            // Conflict
            Self::AdminAlreadyExists(_) => "ADMIN_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::QuestionNotFound(_))
    }

    /// Check if this is a rejected vote submission
    pub fn is_choice_error(&self) -> bool {
        matches!(self, Self::ChoiceNotSelected | Self::ChoiceInvalid)
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::TextTooLong { .. }
                | Self::ChoiceNotSelected
                | Self::ChoiceInvalid
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::AdminAlreadyExists(_))
    }
}
