//! Admin account database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for admin_accounts table, without the password hash
#[derive(Debug, Clone, FromRow)]
pub struct AdminAccountModel {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Password hash lookup row
#[derive(Debug, Clone, FromRow)]
pub struct AdminCredentialModel {
    pub password_hash: String,
}
