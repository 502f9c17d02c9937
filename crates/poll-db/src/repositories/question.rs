//! PostgreSQL implementation of QuestionRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use poll_core::{NewQuestion, Question, QuestionId, QuestionRepository, RepoResult};

use crate::models::QuestionModel;

use super::error::{map_db_error, question_not_found};

/// PostgreSQL implementation of QuestionRepository
#[derive(Clone)]
pub struct PgQuestionRepository {
    pool: PgPool,
}

impl PgQuestionRepository {
    /// Create a new PgQuestionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionRepository for PgQuestionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: QuestionId) -> RepoResult<Option<Question>> {
        let result = sqlx::query_as::<_, QuestionModel>(
            r"
            SELECT id, question_text, pub_date
            FROM questions
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Question::from))
    }

    #[instrument(skip(self))]
    async fn find_published(&self, now: DateTime<Utc>, limit: i64) -> RepoResult<Vec<Question>> {
        let results = sqlx::query_as::<_, QuestionModel>(
            r"
            SELECT id, question_text, pub_date
            FROM questions
            WHERE pub_date <= $1
            ORDER BY pub_date DESC, id DESC
            LIMIT $2
            ",
        )
        .bind(now)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Question::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Question>> {
        let results = sqlx::query_as::<_, QuestionModel>(
            r"
            SELECT id, question_text, pub_date
            FROM questions
            ORDER BY pub_date DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Question::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn create(&self, question: &NewQuestion) -> RepoResult<Question> {
        let model = sqlx::query_as::<_, QuestionModel>(
            r"
            INSERT INTO questions (question_text, pub_date)
            VALUES ($1, $2)
            RETURNING id, question_text, pub_date
            ",
        )
        .bind(&question.question_text)
        .bind(question.pub_date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Question::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: QuestionId) -> RepoResult<()> {
        // choices go with it through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(question_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_all(&self) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM questions")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
