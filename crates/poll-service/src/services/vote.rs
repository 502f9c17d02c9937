//! Vote service
//!
//! Records one vote for a choice of a question.

use tracing::{debug, info, instrument};

use poll_core::{ChoiceId, DomainError, QuestionId};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Vote service
pub struct VoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VoteService<'a> {
    /// Create a new VoteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add one vote to the submitted choice of `question_id`
    ///
    /// `choice` is the raw submitted value. Returns the question id so the
    /// caller can redirect to the results page.
    ///
    /// # Errors
    /// - `QuestionNotFound` when the question does not exist
    /// - `ChoiceNotSelected` when no choice was submitted
    /// - `ChoiceInvalid` when the value is not a choice of this question
    ///
    /// Nothing is written on error.
    #[instrument(skip(self))]
    pub async fn record_vote(
        &self,
        question_id: QuestionId,
        choice: Option<String>,
    ) -> ServiceResult<QuestionId> {
        self.ctx
            .question_repo()
            .find_by_id(question_id)
            .await?
            .ok_or(DomainError::QuestionNotFound(question_id))?;

        let raw = match choice.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => raw,
            _ => {
                debug!(question_id = %question_id, "Vote without a choice");
                return Err(DomainError::ChoiceNotSelected.into());
            }
        };

        let choice_id = ChoiceId::parse(raw).map_err(|_| DomainError::ChoiceInvalid)?;

        let counted = self
            .ctx
            .choice_repo()
            .increment_votes(question_id, choice_id)
            .await?;
        if !counted {
            debug!(question_id = %question_id, choice_id = %choice_id, "Vote for unknown choice");
            return Err(DomainError::ChoiceInvalid.into());
        }

        info!(question_id = %question_id, choice_id = %choice_id, "Vote recorded");

        Ok(question_id)
    }
}
