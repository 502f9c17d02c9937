//! Error handling utilities for repositories

use poll_core::{DomainError, QuestionId};
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Map a foreign key violation on `choices.question_id` to a missing question
pub fn map_missing_question(e: SqlxError, question_id: QuestionId) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return question_not_found(question_id);
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "question not found" error
pub fn question_not_found(id: QuestionId) -> DomainError {
    DomainError::QuestionNotFound(id)
}
