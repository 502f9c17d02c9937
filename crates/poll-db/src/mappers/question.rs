//! Question entity <-> model mapper

use poll_core::{Question, QuestionId};

use crate::models::QuestionModel;

/// Convert QuestionModel to Question entity
impl From<QuestionModel> for Question {
    fn from(model: QuestionModel) -> Self {
        Question {
            id: QuestionId::new(model.id),
            question_text: model.question_text,
            pub_date: model.pub_date,
        }
    }
}
