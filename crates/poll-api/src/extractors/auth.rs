//! Admin authentication extractor
//!
//! Checks HTTP Basic credentials against the admin accounts.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Basic, Authorization},
    TypedHeader,
};
use poll_core::AdminAccount;
use poll_service::AdminService;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated admin
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub account: AdminAccount,
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(basic)) =
            TypedHeader::<Authorization<Basic>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);
        let account = AdminService::new(app_state.service_context())
            .authenticate(basic.username(), basic.password())
            .await?;

        Ok(AdminUser { account })
    }
}
