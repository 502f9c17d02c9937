//! Database models - SQLx-compatible structs for PostgreSQL tables

mod admin;
mod choice;
mod question;

pub use admin::{AdminAccountModel, AdminCredentialModel};
pub use choice::ChoiceModel;
pub use question::QuestionModel;
