//! PostgreSQL implementation of AdminRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use poll_core::{AdminAccount, AdminRepository, DomainError, NewAdminAccount, RepoResult};

use crate::models::{AdminAccountModel, AdminCredentialModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of AdminRepository
#[derive(Clone)]
pub struct PgAdminRepository {
    pool: PgPool,
}

impl PgAdminRepository {
    /// Create a new PgAdminRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminRepository for PgAdminRepository {
    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<AdminAccount>> {
        let result = sqlx::query_as::<_, AdminAccountModel>(
            r"
            SELECT id, username, email, created_at
            FROM admin_accounts
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(AdminAccount::from))
    }

    #[instrument(skip(self, account), fields(username = %account.username))]
    async fn create(&self, account: &NewAdminAccount) -> RepoResult<AdminAccount> {
        let model = sqlx::query_as::<_, AdminAccountModel>(
            r"
            INSERT INTO admin_accounts (username, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, username, email, created_at
            ",
        )
        .bind(&account.username)
        .bind(&account.email)
        .bind(&account.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::AdminAlreadyExists(account.username.clone()))
        })?;

        Ok(AdminAccount::from(model))
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, username: &str) -> RepoResult<Option<String>> {
        let result = sqlx::query_as::<_, AdminCredentialModel>(
            r"
            SELECT password_hash
            FROM admin_accounts
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(|row| row.password_hash))
    }
}
