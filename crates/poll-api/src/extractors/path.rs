//! Path parameter extractors

use poll_core::QuestionId;

use crate::response::ApiError;

/// Path parameters with question_id
#[derive(Debug, serde::Deserialize)]
pub struct QuestionIdPath {
    pub question_id: String,
}

impl QuestionIdPath {
    /// Parse question_id as a QuestionId
    pub fn question_id(&self) -> Result<QuestionId, ApiError> {
        QuestionId::parse(&self.question_id)
            .map_err(|_| ApiError::invalid_path("Invalid question_id format"))
    }
}
