//! Domain entities - core business objects

mod admin;
mod choice;
mod question;

pub use admin::{AdminAccount, NewAdminAccount};
pub use choice::{Choice, NewChoice};
pub use question::{NewQuestion, Question};

/// Maximum length of question and choice text
pub const MAX_TEXT_LENGTH: usize = 200;
