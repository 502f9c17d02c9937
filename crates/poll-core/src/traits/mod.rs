//! Domain traits (ports)

mod repositories;

pub use repositories::{AdminRepository, ChoiceRepository, QuestionRepository, RepoResult};
