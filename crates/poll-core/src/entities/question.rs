//! Question entity - a poll prompt with a publication timestamp

use chrono::{DateTime, Duration, Utc};

use crate::value_objects::QuestionId;

/// Question entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl Question {
    /// Check whether the question was published within the last day
    ///
    /// Future publication dates never count as recent.
    pub fn was_published_recently(&self) -> bool {
        self.was_published_recently_at(Utc::now())
    }

    /// Same as [`Question::was_published_recently`] against an explicit clock
    pub fn was_published_recently_at(&self, now: DateTime<Utc>) -> bool {
        now - Duration::days(1) <= self.pub_date && self.pub_date <= now
    }

    /// Check if the question is visible on the index at `now`
    #[inline]
    pub fn is_published_at(&self, now: DateTime<Utc>) -> bool {
        self.pub_date <= now
    }
}

/// Values for inserting a new question; the id is assigned by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

impl NewQuestion {
    /// Create a new question payload
    pub fn new(question_text: impl Into<String>, pub_date: DateTime<Utc>) -> Self {
        Self {
            question_text: question_text.into(),
            pub_date,
        }
    }

    /// Attach a store-assigned id
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            question_text: self.question_text,
            pub_date: self.pub_date,
        }
    }
}
