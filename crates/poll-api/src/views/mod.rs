//! HTML views for the poll pages
//!
//! Templates are compiled into the binary and rendered with Tera, which
//! escapes every `.html` template.

mod page;

pub use page::{PageError, PageResult};

use axum::{http::StatusCode, response::Html};
use poll_service::{QuestionDetailResponse, QuestionResponse, ResultsResponse, ServiceError};
use tera::{Context, Tera};
use tracing::error;

const TEMPLATES: &[(&str, &str)] = &[
    ("polls/base.html", include_str!("../../templates/polls/base.html")),
    ("polls/index.html", include_str!("../../templates/polls/index.html")),
    ("polls/detail.html", include_str!("../../templates/polls/detail.html")),
    ("polls/results.html", include_str!("../../templates/polls/results.html")),
    ("polls/error.html", include_str!("../../templates/polls/error.html")),
];

/// Compiled template set
#[derive(Debug, Clone)]
pub struct Views {
    tera: Tera,
}

impl Views {
    /// Compile the built-in templates
    ///
    /// # Errors
    /// Returns the Tera error when a template fails to parse
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.iter().copied())?;
        Ok(Self { tera })
    }

    /// Question list page
    pub fn index(&self, questions: &[QuestionResponse]) -> PageResult<Html<String>> {
        let mut context = Context::new();
        context.insert("latest_question_list", questions);
        self.render("polls/index.html", &context)
    }

    /// Voting form, optionally with the message of a rejected vote
    pub fn detail(
        &self,
        question: &QuestionDetailResponse,
        error_message: Option<&str>,
    ) -> PageResult<Html<String>> {
        let mut context = Context::new();
        context.insert("question", question);
        if let Some(message) = error_message {
            context.insert("error_message", message);
        }
        self.render("polls/detail.html", &context)
    }

    /// Vote tallies page
    pub fn results(&self, results: &ResultsResponse) -> PageResult<Html<String>> {
        let mut context = Context::new();
        context.insert("question", results);
        self.render("polls/results.html", &context)
    }

    /// 404 page
    pub fn not_found(&self) -> PageError {
        self.error_page(
            StatusCode::NOT_FOUND,
            "Page not found",
            "The poll you are looking for does not exist.",
        )
    }

    /// Turn a service failure into an error page
    pub fn service_error(&self, err: &ServiceError) -> PageError {
        if err.is_not_found() {
            return self.not_found();
        }

        error!(error = %err, "Failed to serve poll page");
        self.error_page(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server error",
            "Something went wrong. Please try again later.",
        )
    }

    fn error_page(&self, status: StatusCode, title: &str, message: &str) -> PageError {
        let mut context = Context::new();
        context.insert("status", &status.as_u16());
        context.insert("title", title);
        context.insert("message", message);

        match self.tera.render("polls/error.html", &context) {
            Ok(body) => PageError::new(status, body),
            Err(e) => {
                error!(error = ?e, "Failed to render error page");
                PageError::plain(status)
            }
        }
    }

    fn render(&self, name: &str, context: &Context) -> PageResult<Html<String>> {
        self.tera.render(name, context).map(Html).map_err(|e| {
            error!(template = name, error = ?e, "Template rendering failed");
            PageError::plain(StatusCode::INTERNAL_SERVER_ERROR)
        })
    }
}
