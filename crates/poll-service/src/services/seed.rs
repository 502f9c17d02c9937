//! Sample data service
//!
//! Replaces the store contents with a fixed set of demo questions.

use chrono::{Duration, Utc};
use tracing::{info, instrument};

use poll_core::{NewChoice, NewQuestion};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// One demo question: text, age in hours at seeding time, and choices with vote counts
struct SampleQuestion {
    text: &'static str,
    age_hours: i64,
    choices: &'static [(&'static str, i32)],
}

const SAMPLE_QUESTIONS: &[SampleQuestion] = &[
    SampleQuestion {
        text: "What is the most challenging part of Software Engineering assignments?",
        age_hours: 48,
        choices: &[
            ("Django Web Development", 5),
            ("CI/CD Pipeline Setup", 8),
            ("AWS Deployment", 3),
            ("Writing Tests", 4),
        ],
    },
    SampleQuestion {
        text: "What is your favorite programming language?",
        age_hours: 24,
        choices: &[
            ("Python", 12),
            ("JavaScript", 8),
            ("Java", 6),
            ("C++", 4),
            ("Go", 2),
        ],
    },
    SampleQuestion {
        text: "What is the most useful development tool?",
        age_hours: 6,
        choices: &[
            ("Git", 15),
            ("Docker", 10),
            ("VS Code", 12),
            ("Travis CI", 7),
        ],
    },
];

/// Outcome of a seeding run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    /// Questions removed before seeding
    pub cleared: u64,
    pub questions_created: usize,
    pub choices_created: usize,
}

/// Sample data service
pub struct SeedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SeedService<'a> {
    /// Create a new SeedService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Delete every question and create the demo questions
    ///
    /// Publication dates are relative to the time of the call.
    #[instrument(skip(self))]
    pub async fn seed(&self) -> ServiceResult<SeedReport> {
        let cleared = self.ctx.question_repo().delete_all().await?;
        let now = Utc::now();

        let mut report = SeedReport {
            cleared,
            questions_created: 0,
            choices_created: 0,
        };

        for sample in SAMPLE_QUESTIONS {
            let pub_date = now - Duration::hours(sample.age_hours);
            let question = self
                .ctx
                .question_repo()
                .create(&NewQuestion::new(sample.text, pub_date))
                .await?;
            report.questions_created += 1;

            for (text, votes) in sample.choices {
                self.ctx
                    .choice_repo()
                    .create(&NewChoice::new(question.id, *text).with_votes(*votes))
                    .await?;
                report.choices_created += 1;
            }
        }

        info!(
            cleared = report.cleared,
            questions = report.questions_created,
            choices = report.choices_created,
            "Sample data seeded"
        );

        Ok(report)
    }

    /// Seed only when the store holds no questions
    ///
    /// Returns `None` when existing data was left alone.
    #[instrument(skip(self))]
    pub async fn seed_if_empty(&self) -> ServiceResult<Option<SeedReport>> {
        if self.ctx.question_repo().count().await? > 0 {
            info!("Questions already present, skipping sample data");
            return Ok(None);
        }

        self.seed().await.map(Some)
    }
}
