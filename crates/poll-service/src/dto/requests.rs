//! Request DTOs for API endpoints
//!
//! Admin payloads implement `Validate`; vote payloads are checked by the
//! vote service so that a missing choice gets the voter-facing message.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use poll_core::entities::MAX_TEXT_LENGTH;

// ============================================================================
// Admin Requests
// ============================================================================

/// Create question request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 200, message = "Question text must be 1-200 characters"))]
    pub question_text: String,

    /// Publication time; now when omitted. May lie in the future.
    #[serde(default)]
    pub pub_date: Option<DateTime<Utc>>,

    /// Initial choices, created with zero votes
    #[serde(default)]
    #[validate(custom(function = "validate_choice_texts"))]
    pub choices: Vec<String>,
}

/// Add choice request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateChoiceRequest {
    #[validate(length(min = 1, max = 200, message = "Choice text must be 1-200 characters"))]
    pub choice_text: String,

    #[serde(default)]
    #[validate(range(min = 0, message = "Votes cannot be negative"))]
    pub votes: Option<i32>,
}

fn validate_choice_texts(choices: &[String]) -> Result<(), ValidationError> {
    let valid = choices
        .iter()
        .all(|text| !text.trim().is_empty() && text.chars().count() <= MAX_TEXT_LENGTH);

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("choice_text")
            .with_message("Choice text must be 1-200 characters".into()))
    }
}

// ============================================================================
// Vote Requests
// ============================================================================

/// Choice id as sent by a client, either `"3"` or `3`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ChoiceField {
    Id(i64),
    Text(String),
}

/// JSON vote request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VoteRequest {
    #[serde(default)]
    pub choice: Option<ChoiceField>,
}

impl VoteRequest {
    /// The submitted choice as raw text, if any
    pub fn into_choice(self) -> Option<String> {
        self.choice.map(|field| match field {
            ChoiceField::Id(id) => id.to_string(),
            ChoiceField::Text(text) => text,
        })
    }
}

/// HTML vote form (`application/x-www-form-urlencoded`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VoteForm {
    #[serde(default)]
    pub choice: Option<String>,
}
