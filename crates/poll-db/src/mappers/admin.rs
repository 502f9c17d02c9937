//! Admin account entity <-> model mapper

use poll_core::{AdminAccount, AdminId};

use crate::models::AdminAccountModel;

/// Convert AdminAccountModel to AdminAccount entity
impl From<AdminAccountModel> for AdminAccount {
    fn from(model: AdminAccountModel) -> Self {
        AdminAccount {
            id: AdminId::new(model.id),
            username: model.username,
            email: model.email,
            created_at: model.created_at,
        }
    }
}
