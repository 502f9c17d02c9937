//! JSON API tests
//!
//! Cover the public question endpoints, the Basic-auth admin endpoints,
//! and the health checks.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, days_from_now, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/health").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/health/ready").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["database"], "healthy");
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/health").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Public Question Tests
// ============================================================================

#[tokio::test]
async fn test_list_questions_only_published() {
    let server = TestServer::start().await.unwrap();
    server.store.add_question("Past question.", days_from_now(-30)).await;
    server.store.add_question("Yesterday question.", days_from_now(-1)).await;
    server.store.add_question("Future question.", days_from_now(30)).await;

    let response = server.get("/api/v1/questions").await.unwrap();
    let questions: Vec<QuestionJson> = assert_json(response, StatusCode::OK).await.unwrap();

    let texts: Vec<&str> = questions.iter().map(|q| q.question_text.as_str()).collect();
    assert_eq!(texts, vec!["Yesterday question.", "Past question."]);
    assert!(!questions[1].was_published_recently);
}

#[tokio::test]
async fn test_was_published_recently() {
    let server = TestServer::start().await.unwrap();
    let recent = server
        .store
        .add_question("Recent question.", chrono::Utc::now() - chrono::Duration::hours(23))
        .await;
    let old = server
        .store
        .add_question("Old question.", chrono::Utc::now() - chrono::Duration::hours(25))
        .await;
    let future = server.store.add_question("Future question.", days_from_now(30)).await;

    for (question, expected) in [(recent, true), (old, false), (future, false)] {
        let response = server
            .get(&format!("/api/v1/questions/{}", question.id))
            .await
            .unwrap();
        let detail: QuestionDetailJson = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(
            detail.question.was_published_recently, expected,
            "{}",
            detail.question.question_text
        );
    }
}

#[tokio::test]
async fn test_get_question_with_choices() {
    let server = TestServer::start().await.unwrap();
    let question = server.store.add_question("Tea or coffee?", days_from_now(-1)).await;
    server.store.add_choice(question.id, "Tea").await;
    server.store.add_choice(question.id, "Coffee").await;

    let response = server
        .get(&format!("/api/v1/questions/{}", question.id))
        .await
        .unwrap();
    let detail: QuestionDetailJson = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(detail.question.id, question.id.into_inner());
    let choices: Vec<&str> = detail.choices.iter().map(|c| c.choice_text.as_str()).collect();
    assert_eq!(choices, vec!["Tea", "Coffee"]);
    assert!(detail.choices.iter().all(|c| c.votes == 0));
}

#[tokio::test]
async fn test_get_question_errors() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/v1/questions/999").await.unwrap();
    let body: ErrorJson = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_QUESTION");

    let response = server.get("/api/v1/questions/abc").await.unwrap();
    let body: ErrorJson = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_PATH_PARAMETER");
}

// ============================================================================
// JSON Vote Tests
// ============================================================================

#[tokio::test]
async fn test_vote_returns_results() {
    let server = TestServer::start().await.unwrap();
    let question = server.store.add_question("Tea or coffee?", days_from_now(-1)).await;
    let tea = server.store.add_choice(question.id, "Tea").await;
    let coffee = server.store.add_choice(question.id, "Coffee").await;
    let path = format!("/api/v1/questions/{}/vote", question.id);

    let response = server
        .post(&path, &json!({ "choice": tea.id.into_inner() }))
        .await
        .unwrap();
    let results: ResultsJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(results.votes_for(tea.id.into_inner()), Some(1));
    assert_eq!(results.total_votes, 1);

    // Form-style string ids are accepted too
    let response = server
        .post(&path, &json!({ "choice": coffee.id.to_string() }))
        .await
        .unwrap();
    let results: ResultsJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(results.votes_for(coffee.id.into_inner()), Some(1));
    assert_eq!(results.total_votes, 2);

    let response = server
        .get(&format!("/api/v1/questions/{}/results", question.id))
        .await
        .unwrap();
    let results: ResultsJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(results.total_votes, 2);
}

#[tokio::test]
async fn test_vote_rejections() {
    let server = TestServer::start().await.unwrap();
    let question = server.store.add_question("Tea or coffee?", days_from_now(-1)).await;
    let tea = server.store.add_choice(question.id, "Tea").await;
    let path = format!("/api/v1/questions/{}/vote", question.id);

    let response = server.post_empty(&path).await.unwrap();
    let body: ErrorJson = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "CHOICE_NOT_SELECTED");
    assert_eq!(body.error.message, poll_core::CHOICE_NOT_SELECTED_MESSAGE);

    let response = server.post(&path, &json!({ "choice": 999 })).await.unwrap();
    let body: ErrorJson = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "CHOICE_INVALID");

    let response = server
        .post("/api/v1/questions/999/vote", &json!({ "choice": tea.id.into_inner() }))
        .await
        .unwrap();
    let body: ErrorJson = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_QUESTION");

    assert_eq!(server.store.votes(tea.id).await, Some(0));
}

// ============================================================================
// Admin Tests
// ============================================================================

#[tokio::test]
async fn test_admin_requires_credentials() {
    let server = TestServer::start().await.unwrap();
    let password = server.create_admin().await.unwrap();

    let response = server.get("/api/v1/admin/questions").await.unwrap();
    assert_eq!(
        response
            .headers()
            .get("www-authenticate")
            .and_then(|v| v.to_str().ok()),
        Some("Basic realm=\"polls admin\"")
    );
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .get_auth("/api/v1/admin/questions", "wrong-password")
        .await
        .unwrap();
    let body: ErrorJson = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "INVALID_CREDENTIALS");

    let response = server
        .get_auth("/api/v1/admin/questions", &password)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_unknown_admin_rejected_like_wrong_password() {
    let server = TestServer::start().await.unwrap();
    let password = server.create_admin().await.unwrap();

    let response = server
        .client
        .get(format!("{}/api/v1/admin/questions", server.base_url()))
        .basic_auth("nobody", Some(&password))
        .send()
        .await
        .unwrap();
    assert!(response.headers().contains_key("www-authenticate"));
    let unknown: ErrorJson = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .get_auth("/api/v1/admin/questions", "wrong-password")
        .await
        .unwrap();
    let mismatch: ErrorJson = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();

    assert_eq!(unknown.error.code, "INVALID_CREDENTIALS");
    assert_eq!(unknown.error.code, mismatch.error.code);
    assert_eq!(unknown.error.message, mismatch.error.message);
}

#[tokio::test]
async fn test_admin_bootstrap_is_idempotent() {
    let server = TestServer::start().await.unwrap();
    server.create_admin().await.unwrap();

    // A second bootstrap finds the existing account and generates nothing
    assert!(server.create_admin().await.is_err());
}

#[tokio::test]
async fn test_admin_create_question() {
    let server = TestServer::start().await.unwrap();
    let password = server.create_admin().await.unwrap();

    let request = CreateQuestionRequest::new("What's new?", &["Not much", "The sky"]);
    let response = server
        .post_auth("/api/v1/admin/questions", &password, &request)
        .await
        .unwrap();
    let created: QuestionDetailJson = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.question.question_text, "What's new?");
    assert!(created.question.was_published_recently);
    assert_eq!(created.choices.len(), 2);

    // Published immediately, so it shows on the public list
    let response = server.get("/api/v1/questions").await.unwrap();
    let questions: Vec<QuestionJson> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].id, created.question.id);
}

#[tokio::test]
async fn test_admin_sees_unpublished_questions() {
    let server = TestServer::start().await.unwrap();
    let password = server.create_admin().await.unwrap();

    let request = CreateQuestionRequest::new("Future question.", &[]).published_at(days_from_now(30));
    let response = server
        .post_auth("/api/v1/admin/questions", &password, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth("/api/v1/admin/questions", &password)
        .await
        .unwrap();
    let questions: Vec<QuestionJson> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(questions.len(), 1);
    assert!(!questions[0].was_published_recently);

    let response = server.get("/api/v1/questions").await.unwrap();
    let questions: Vec<QuestionJson> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(questions.is_empty());
}

#[tokio::test]
async fn test_admin_create_question_validation() {
    let server = TestServer::start().await.unwrap();
    let password = server.create_admin().await.unwrap();

    let too_long = "x".repeat(201);
    for text in ["", "   ", too_long.as_str()] {
        let request = CreateQuestionRequest::new(text, &[]);
        let response = server
            .post_auth("/api/v1/admin/questions", &password, &request)
            .await
            .unwrap();
        let body: ErrorJson = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(body.error.code, "VALIDATION_ERROR", "text {text:?}");
    }

    assert_eq!(server.store.question_count().await, 0);
}

#[tokio::test]
async fn test_admin_add_choice() {
    let server = TestServer::start().await.unwrap();
    let password = server.create_admin().await.unwrap();
    let question = server.store.add_question("Tea or coffee?", days_from_now(-1)).await;

    let response = server
        .post_auth(
            &format!("/api/v1/admin/questions/{}/choices", question.id),
            &password,
            &CreateChoiceRequest::new("Water"),
        )
        .await
        .unwrap();
    let choice: ChoiceJson = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(choice.choice_text, "Water");
    assert_eq!(choice.votes, 0);

    let response = server
        .post_auth(
            "/api/v1/admin/questions/999/choices",
            &password,
            &CreateChoiceRequest::new("Water"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_admin_delete_question_cascades() {
    let server = TestServer::start().await.unwrap();
    let password = server.create_admin().await.unwrap();
    let question = server.store.add_question("Tea or coffee?", days_from_now(-1)).await;
    server.store.add_choice(question.id, "Tea").await;
    server.store.add_choice(question.id, "Coffee").await;

    let path = format!("/api/v1/admin/questions/{}", question.id);
    let response = server.delete_auth(&path, &password).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    assert_eq!(server.store.question_count().await, 0);
    assert_eq!(server.store.choice_count().await, 0);

    let response = server.delete_auth(&path, &password).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
