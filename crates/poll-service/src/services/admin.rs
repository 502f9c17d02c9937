//! Admin service
//!
//! Bootstraps operator accounts and checks their credentials.

use std::sync::OnceLock;

use tracing::{info, instrument, warn};

use poll_common::{generate_password, hash_password, validate_password_strength, verify_password, AppError};
use poll_core::{AdminAccount, NewAdminAccount};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Result of [`AdminService::ensure_admin`]
#[derive(Debug, Clone)]
pub enum AdminBootstrap {
    /// A new account was created
    ///
    /// `generated_password` is set when no password was supplied; it is not
    /// stored anywhere and must be shown to the operator now.
    Created {
        account: AdminAccount,
        generated_password: Option<String>,
    },
    /// An account with that username already existed and was left untouched
    Existing(AdminAccount),
}

impl AdminBootstrap {
    pub fn account(&self) -> &AdminAccount {
        match self {
            Self::Created { account, .. } | Self::Existing(account) => account,
        }
    }
}

/// Stand-in hash verified for unknown usernames
static UNKNOWN_USER_HASH: OnceLock<String> = OnceLock::new();

fn unknown_user_hash() -> ServiceResult<&'static str> {
    if let Some(hash) = UNKNOWN_USER_HASH.get() {
        return Ok(hash.as_str());
    }
    let hash = hash_password(&generate_password())?;
    Ok(UNKNOWN_USER_HASH.get_or_init(|| hash).as_str())
}

/// Admin service
pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    /// Create a new AdminService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create the admin account unless it already exists
    ///
    /// Uses `password` when given, otherwise generates one.
    #[instrument(skip(self, password))]
    pub async fn ensure_admin(
        &self,
        username: &str,
        email: &str,
        password: Option<String>,
    ) -> ServiceResult<AdminBootstrap> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ServiceError::validation("username must not be blank"));
        }

        if let Some(existing) = self.ctx.admin_repo().find_by_username(username).await? {
            info!(username = %username, "Admin account already exists");
            return Ok(AdminBootstrap::Existing(existing));
        }

        let (password, generated_password) = match password {
            Some(password) => {
                validate_password_strength(&password)?;
                (password, None)
            }
            None => {
                let generated = generate_password();
                (generated.clone(), Some(generated))
            }
        };

        let password_hash = hash_password(&password)?;
        let account = self
            .ctx
            .admin_repo()
            .create(&NewAdminAccount::new(username, email, password_hash))
            .await?;

        info!(
            username = %account.username,
            generated = generated_password.is_some(),
            "Admin account created"
        );

        Ok(AdminBootstrap::Created {
            account,
            generated_password,
        })
    }

    /// Check a username and password pair
    ///
    /// # Errors
    /// Returns `InvalidCredentials` for an unknown user or a wrong password
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, username: &str, password: &str) -> ServiceResult<AdminAccount> {
        let Some(hash) = self.ctx.admin_repo().get_password_hash(username).await? else {
            verify_password(password, unknown_user_hash()?)?;
            warn!(username = %username, "Login attempt for unknown admin");
            return Err(AppError::InvalidCredentials.into());
        };

        if !verify_password(password, &hash)? {
            warn!(username = %username, "Admin password mismatch");
            return Err(AppError::InvalidCredentials.into());
        }

        self.ctx
            .admin_repo()
            .find_by_username(username)
            .await?
            .ok_or_else(|| ServiceError::not_found("Admin", username))
    }
}
