//! HTML error responses

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// A rendered HTML error page
#[derive(Debug, Clone)]
pub struct PageError {
    status: StatusCode,
    body: String,
}

impl PageError {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Minimal page used when the error template itself cannot be rendered
    pub fn plain(status: StatusCode) -> Self {
        let reason = status.canonical_reason().unwrap_or("Error");
        Self::new(
            status,
            format!("<!DOCTYPE html><html><body><h1>{reason}</h1></body></html>"),
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        (self.status, Html(self.body)).into_response()
    }
}

/// Result type for HTML handlers
pub type PageResult<T> = Result<T, PageError>;
