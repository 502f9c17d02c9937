//! Choice entity <-> model mapper

use poll_core::{Choice, ChoiceId, QuestionId};

use crate::models::ChoiceModel;

/// Convert ChoiceModel to Choice entity
impl From<ChoiceModel> for Choice {
    fn from(model: ChoiceModel) -> Self {
        Choice {
            id: ChoiceId::new(model.id),
            question_id: QuestionId::new(model.question_id),
            choice_text: model.choice_text,
            votes: model.votes,
        }
    }
}
