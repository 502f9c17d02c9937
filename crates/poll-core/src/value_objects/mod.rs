//! Value objects - immutable domain primitives

mod ids;

pub use ids::{AdminId, ChoiceId, IdParseError, QuestionId};
