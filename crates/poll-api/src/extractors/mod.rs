//! Axum extractors for request handling
//!
//! Custom extractors for admin authentication, validation, and path ids.

mod auth;
mod path;
mod validated;

pub use auth::AdminUser;
pub use path::QuestionIdPath;
pub use validated::ValidatedJson;
