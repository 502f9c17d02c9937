//! # poll-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{AdminAccount, Choice, NewAdminAccount, NewChoice, NewQuestion, Question};
pub use error::{DomainError, CHOICE_NOT_SELECTED_MESSAGE};
pub use traits::{AdminRepository, ChoiceRepository, QuestionRepository, RepoResult};
pub use value_objects::{AdminId, ChoiceId, IdParseError, QuestionId};
