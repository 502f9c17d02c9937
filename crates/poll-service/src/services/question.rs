//! Question service
//!
//! Read paths for the poll pages and the admin CRUD over questions and choices.

use chrono::Utc;
use tracing::{info, instrument};

use poll_core::entities::MAX_TEXT_LENGTH;
use poll_core::{Choice, DomainError, NewChoice, NewQuestion, Question, QuestionId};

use crate::dto::{
    ChoiceResponse, CreateChoiceRequest, CreateQuestionRequest, QuestionDetailResponse,
    QuestionResponse, ResultsResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Question service
pub struct QuestionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> QuestionService<'a> {
    /// Create a new QuestionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Latest published questions, newest first
    ///
    /// Questions dated in the future stay hidden until their publication time.
    #[instrument(skip(self))]
    pub async fn latest_published(&self, limit: i64) -> ServiceResult<Vec<QuestionResponse>> {
        let now = Utc::now();
        let questions = self.ctx.question_repo().find_published(now, limit).await?;

        Ok(questions
            .iter()
            .map(|q| QuestionResponse::at(q, now))
            .collect())
    }

    /// Every question including unpublished ones, newest first
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ServiceResult<Vec<QuestionResponse>> {
        let questions = self.ctx.question_repo().find_all().await?;
        Ok(questions.iter().map(QuestionResponse::from).collect())
    }

    /// Get a question by id, whatever its publication date
    #[instrument(skip(self))]
    pub async fn get_question(&self, question_id: QuestionId) -> ServiceResult<QuestionResponse> {
        let question = self.get_question_entity(question_id).await?;
        Ok(QuestionResponse::from(&question))
    }

    /// Get a question together with its choices
    #[instrument(skip(self))]
    pub async fn get_question_with_choices(
        &self,
        question_id: QuestionId,
    ) -> ServiceResult<QuestionDetailResponse> {
        let (question, choices) = self.load(question_id).await?;
        Ok(QuestionDetailResponse::new(&question, &choices))
    }

    /// Get the vote tallies of a question
    #[instrument(skip(self))]
    pub async fn get_results(&self, question_id: QuestionId) -> ServiceResult<ResultsResponse> {
        let (question, choices) = self.load(question_id).await?;
        Ok(ResultsResponse::new(&question, &choices))
    }

    /// Get question entity by ID
    #[instrument(skip(self))]
    pub async fn get_question_entity(&self, question_id: QuestionId) -> ServiceResult<Question> {
        Ok(self
            .ctx
            .question_repo()
            .find_by_id(question_id)
            .await?
            .ok_or(DomainError::QuestionNotFound(question_id))?)
    }

    /// Create a question, optionally with its initial choices
    #[instrument(skip(self, request))]
    pub async fn create_question(
        &self,
        request: CreateQuestionRequest,
    ) -> ServiceResult<QuestionDetailResponse> {
        let question_text = checked_text(request.question_text)?;
        let choice_texts = request
            .choices
            .into_iter()
            .map(checked_text)
            .collect::<Result<Vec<_>, _>>()?;

        let pub_date = request.pub_date.unwrap_or_else(Utc::now);
        let question = self
            .ctx
            .question_repo()
            .create(&NewQuestion::new(question_text, pub_date))
            .await?;

        let mut choices = Vec::with_capacity(choice_texts.len());
        for text in choice_texts {
            let choice = self
                .ctx
                .choice_repo()
                .create(&NewChoice::new(question.id, text))
                .await?;
            choices.push(choice);
        }

        info!(question_id = %question.id, choices = choices.len(), "Question created");

        Ok(QuestionDetailResponse::new(&question, &choices))
    }

    /// Add a choice to an existing question
    #[instrument(skip(self, request))]
    pub async fn add_choice(
        &self,
        question_id: QuestionId,
        request: CreateChoiceRequest,
    ) -> ServiceResult<ChoiceResponse> {
        // Surface a missing question as 404 before touching choices
        self.get_question_entity(question_id).await?;

        let choice_text = checked_text(request.choice_text)?;
        let new_choice =
            NewChoice::new(question_id, choice_text).with_votes(request.votes.unwrap_or(0));
        let choice = self.ctx.choice_repo().create(&new_choice).await?;

        info!(question_id = %question_id, choice_id = %choice.id, "Choice added");

        Ok(ChoiceResponse::from(&choice))
    }

    /// Delete a question and all of its choices
    #[instrument(skip(self))]
    pub async fn delete_question(&self, question_id: QuestionId) -> ServiceResult<()> {
        self.ctx.question_repo().delete(question_id).await?;

        info!(question_id = %question_id, "Question deleted");

        Ok(())
    }

    async fn load(&self, question_id: QuestionId) -> ServiceResult<(Question, Vec<Choice>)> {
        let question = self.get_question_entity(question_id).await?;
        let choices = self.ctx.choice_repo().find_by_question(question_id).await?;
        Ok((question, choices))
    }
}

/// Trim `text` and enforce the non-empty / 200 character limit
fn checked_text(text: String) -> Result<String, DomainError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DomainError::ValidationError("text must not be blank".to_string()));
    }
    if trimmed.chars().count() > MAX_TEXT_LENGTH {
        return Err(DomainError::TextTooLong {
            max: MAX_TEXT_LENGTH,
        });
    }
    Ok(trimmed.to_string())
}
