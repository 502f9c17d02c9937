//! Service context - dependency container for services
//!
//! Holds the repositories every service reads from and writes to.

use std::sync::Arc;

use poll_core::{AdminRepository, ChoiceRepository, QuestionRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Repositories are trait objects so the same services run against
/// PostgreSQL in production and in-memory stores in tests.
#[derive(Clone)]
pub struct ServiceContext {
    question_repo: Arc<dyn QuestionRepository>,
    choice_repo: Arc<dyn ChoiceRepository>,
    admin_repo: Arc<dyn AdminRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        question_repo: Arc<dyn QuestionRepository>,
        choice_repo: Arc<dyn ChoiceRepository>,
        admin_repo: Arc<dyn AdminRepository>,
    ) -> Self {
        Self {
            question_repo,
            choice_repo,
            admin_repo,
        }
    }

    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    /// Get the question repository
    pub fn question_repo(&self) -> &dyn QuestionRepository {
        self.question_repo.as_ref()
    }

    /// Get the choice repository
    pub fn choice_repo(&self) -> &dyn ChoiceRepository {
        self.choice_repo.as_ref()
    }

    /// Get the admin account repository
    pub fn admin_repo(&self) -> &dyn AdminRepository {
        self.admin_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    question_repo: Option<Arc<dyn QuestionRepository>>,
    choice_repo: Option<Arc<dyn ChoiceRepository>>,
    admin_repo: Option<Arc<dyn AdminRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn question_repo(mut self, repo: Arc<dyn QuestionRepository>) -> Self {
        self.question_repo = Some(repo);
        self
    }

    pub fn choice_repo(mut self, repo: Arc<dyn ChoiceRepository>) -> Self {
        self.choice_repo = Some(repo);
        self
    }

    pub fn admin_repo(mut self, repo: Arc<dyn AdminRepository>) -> Self {
        self.admin_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.question_repo
                .ok_or_else(|| ServiceError::validation("question_repo is required"))?,
            self.choice_repo
                .ok_or_else(|| ServiceError::validation("choice_repo is required"))?,
            self.admin_repo
                .ok_or_else(|| ServiceError::validation("admin_repo is required"))?,
        ))
    }
}
