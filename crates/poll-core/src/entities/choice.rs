//! Choice entity - one selectable answer to a question

use crate::value_objects::{ChoiceId, QuestionId};

/// Choice entity
///
/// Owned by exactly one question; removed together with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub id: ChoiceId,
    pub question_id: QuestionId,
    pub choice_text: String,
    pub votes: i32,
}

impl Choice {
    /// Increment the vote count
    pub fn vote(&mut self) {
        self.votes = self.votes.saturating_add(1);
    }

    /// Check if the choice belongs to the given question
    #[inline]
    pub fn belongs_to(&self, question_id: QuestionId) -> bool {
        self.question_id == question_id
    }
}

/// Values for inserting a new choice; the id is assigned by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChoice {
    pub question_id: QuestionId,
    pub choice_text: String,
    pub votes: i32,
}

impl NewChoice {
    /// Create a choice with zero votes
    pub fn new(question_id: QuestionId, choice_text: impl Into<String>) -> Self {
        Self {
            question_id,
            choice_text: choice_text.into(),
            votes: 0,
        }
    }

    /// Start from an existing vote count (sample data)
    pub fn with_votes(mut self, votes: i32) -> Self {
        self.votes = votes.max(0);
        self
    }

    /// Attach a store-assigned id
    pub fn into_choice(self, id: ChoiceId) -> Choice {
        Choice {
            id,
            question_id: self.question_id,
            choice_text: self.choice_text,
            votes: self.votes,
        }
    }
}
