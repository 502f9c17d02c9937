//! PostgreSQL implementation of ChoiceRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use poll_core::{Choice, ChoiceId, ChoiceRepository, NewChoice, QuestionId, RepoResult};

use crate::models::ChoiceModel;

use super::error::{map_db_error, map_missing_question};

/// PostgreSQL implementation of ChoiceRepository
#[derive(Clone)]
pub struct PgChoiceRepository {
    pool: PgPool,
}

impl PgChoiceRepository {
    /// Create a new PgChoiceRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChoiceRepository for PgChoiceRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ChoiceId) -> RepoResult<Option<Choice>> {
        let result = sqlx::query_as::<_, ChoiceModel>(
            r"
            SELECT id, question_id, choice_text, votes
            FROM choices
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Choice::from))
    }

    #[instrument(skip(self))]
    async fn find_by_question(&self, question_id: QuestionId) -> RepoResult<Vec<Choice>> {
        let results = sqlx::query_as::<_, ChoiceModel>(
            r"
            SELECT id, question_id, choice_text, votes
            FROM choices
            WHERE question_id = $1
            ORDER BY id ASC
            ",
        )
        .bind(question_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Choice::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, choice: &NewChoice) -> RepoResult<Choice> {
        let model = sqlx::query_as::<_, ChoiceModel>(
            r"
            INSERT INTO choices (question_id, choice_text, votes)
            VALUES ($1, $2, $3)
            RETURNING id, question_id, choice_text, votes
            ",
        )
        .bind(choice.question_id.into_inner())
        .bind(&choice.choice_text)
        .bind(choice.votes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_missing_question(e, choice.question_id))?;

        Ok(Choice::from(model))
    }

    #[instrument(skip(self))]
    async fn increment_votes(&self, question_id: QuestionId, choice_id: ChoiceId) -> RepoResult<bool> {
        // Single statement so concurrent votes never lose an increment
        let result = sqlx::query(
            r"
            UPDATE choices
            SET votes = votes + 1
            WHERE id = $1 AND question_id = $2
            ",
        )
        .bind(choice_id.into_inner())
        .bind(question_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() == 1)
    }
}
