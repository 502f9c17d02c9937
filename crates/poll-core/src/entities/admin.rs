//! Admin account entity - operator login for the management endpoints

use chrono::{DateTime, Utc};

use crate::value_objects::AdminId;

/// Admin account entity
///
/// The password hash stays in the repository and never lives on the entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminAccount {
    pub id: AdminId,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Values for inserting a new admin account
#[derive(Debug, Clone)]
pub struct NewAdminAccount {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

impl NewAdminAccount {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }
}
