//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{AdminAccount, Choice, NewAdminAccount, NewChoice, NewQuestion, Question};
use crate::error::DomainError;
use crate::value_objects::{ChoiceId, QuestionId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Question Repository
// ============================================================================

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Find question by ID, regardless of publication date
    async fn find_by_id(&self, id: QuestionId) -> RepoResult<Option<Question>>;

    /// Questions published at or before `now`, newest first
    async fn find_published(&self, now: DateTime<Utc>, limit: i64) -> RepoResult<Vec<Question>>;

    /// Every question, newest first
    async fn find_all(&self) -> RepoResult<Vec<Question>>;

    /// Count all questions
    async fn count(&self) -> RepoResult<i64>;

    /// Create a new question and return it with its assigned id
    async fn create(&self, question: &NewQuestion) -> RepoResult<Question>;

    /// Delete a question together with its choices
    async fn delete(&self, id: QuestionId) -> RepoResult<()>;

    /// Delete every question (and so every choice); returns rows removed
    async fn delete_all(&self) -> RepoResult<u64>;

    /// Check that the backing store is reachable
    async fn ping(&self) -> RepoResult<()>;
}

// ============================================================================
// Choice Repository
// ============================================================================

#[async_trait]
pub trait ChoiceRepository: Send + Sync {
    /// Find choice by ID
    async fn find_by_id(&self, id: ChoiceId) -> RepoResult<Option<Choice>>;

    /// List the choices of a question, ordered by id
    async fn find_by_question(&self, question_id: QuestionId) -> RepoResult<Vec<Choice>>;

    /// Create a new choice and return it with its assigned id
    async fn create(&self, choice: &NewChoice) -> RepoResult<Choice>;

    /// Add one vote to `choice_id` if it belongs to `question_id`
    ///
    /// Returns `false` (and changes nothing) when no such choice exists.
    async fn increment_votes(&self, question_id: QuestionId, choice_id: ChoiceId) -> RepoResult<bool>;
}

// ============================================================================
// Admin Repository
// ============================================================================

#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// Find admin account by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<AdminAccount>>;

    /// Create a new admin account
    async fn create(&self, account: &NewAdminAccount) -> RepoResult<AdminAccount>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, username: &str) -> RepoResult<Option<String>>;
}
