//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in poll-core.

mod admin;
mod choice;
mod error;
mod question;

pub use admin::PgAdminRepository;
pub use choice::PgChoiceRepository;
pub use question::PgQuestionRepository;
