//! Poll page tests
//!
//! Drive the server-rendered pages the way a browser would.
//!
//! Run with: cargo test -p integration-tests --test page_tests

use integration_tests::{
    assert_html, assert_redirect, assert_status, days_from_now, test_config, TestServer,
};
use poll_core::CHOICE_NOT_SELECTED_MESSAGE;
use reqwest::StatusCode;
use tokio::task::JoinSet;

/// The vote error message as Tera's HTML escaping renders it
fn escaped_choice_message() -> String {
    CHOICE_NOT_SELECTED_MESSAGE.replace('\'', "&#x27;")
}

// ============================================================================
// Index
// ============================================================================

#[tokio::test]
async fn test_root_redirects_to_index() {
    let server = TestServer::start().await.unwrap();

    for path in ["/", "/polls"] {
        let response = server.get(path).await.unwrap();
        let location = assert_redirect(&response, StatusCode::PERMANENT_REDIRECT).unwrap();
        assert_eq!(location, "/polls/");
    }
}

#[tokio::test]
async fn test_index_without_questions() {
    let server = TestServer::start().await.unwrap();

    let body = assert_html(server.get("/polls/").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(body.contains("No polls are available."));
}

#[tokio::test]
async fn test_index_lists_past_question() {
    let server = TestServer::start().await.unwrap();
    let question = server.store.add_question("Past question.", days_from_now(-30)).await;

    let body = assert_html(server.get("/polls/").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(body.contains("Past question."));
    assert!(body.contains(&format!("/polls/{}/", question.id)));
    assert!(!body.contains("No polls are available."));
}

#[tokio::test]
async fn test_index_hides_future_question() {
    let server = TestServer::start().await.unwrap();
    server.store.add_question("Future question.", days_from_now(30)).await;

    let body = assert_html(server.get("/polls/").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(!body.contains("Future question."));
    assert!(body.contains("No polls are available."));
}

#[tokio::test]
async fn test_index_past_and_future_questions() {
    let server = TestServer::start().await.unwrap();
    server.store.add_question("Past question.", days_from_now(-30)).await;
    server.store.add_question("Future question.", days_from_now(30)).await;

    let body = assert_html(server.get("/polls/").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(body.contains("Past question."));
    assert!(!body.contains("Future question."));
}

#[tokio::test]
async fn test_index_orders_newest_first() {
    let server = TestServer::start().await.unwrap();
    server.store.add_question("Past question 1.", days_from_now(-30)).await;
    server.store.add_question("Past question 2.", days_from_now(-5)).await;

    let body = assert_html(server.get("/polls/").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    let newer = body.find("Past question 2.").unwrap();
    let older = body.find("Past question 1.").unwrap();
    assert!(newer < older);
}

#[tokio::test]
async fn test_index_limit() {
    let server = TestServer::start_with_config(test_config(&[("POLLS_INDEX_LIMIT", "2")]).unwrap())
        .await
        .unwrap();
    for (i, days) in [-4, -3, -2, -1].into_iter().enumerate() {
        server
            .store
            .add_question(&format!("Question number {i}."), days_from_now(days))
            .await;
    }

    let body = assert_html(server.get("/polls/").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(body.contains("Question number 3."));
    assert!(body.contains("Question number 2."));
    assert!(!body.contains("Question number 1."));
    assert!(!body.contains("Question number 0."));
}

#[tokio::test]
async fn test_index_escapes_question_text() {
    let server = TestServer::start().await.unwrap();
    server
        .store
        .add_question("<script>alert(1)</script>", days_from_now(-1))
        .await;

    let body = assert_html(server.get("/polls/").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(!body.contains("<script>"));
    assert!(body.contains("&lt;script&gt;"));
}

// ============================================================================
// Detail and results
// ============================================================================

#[tokio::test]
async fn test_detail_shows_choices() {
    let server = TestServer::start().await.unwrap();
    let question = server.store.add_question("Tea or coffee?", days_from_now(-1)).await;
    let tea = server.store.add_choice(question.id, "Tea").await;
    let coffee = server.store.add_choice(question.id, "Coffee").await;

    let body = assert_html(
        server.get(&format!("/polls/{}/", question.id)).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    assert!(body.contains("Tea or coffee?"));
    assert!(body.contains(&format!("action=\"/polls/{}/vote/\"", question.id)));
    assert!(body.contains(&format!("value=\"{}\"", tea.id)));
    assert!(body.contains(&format!("value=\"{}\"", coffee.id)));
    assert!(body.contains("id=\"choice1\""));
    assert!(body.contains("id=\"choice2\""));
    assert!(body.find(">Tea</label>").unwrap() < body.find(">Coffee</label>").unwrap());
}

#[tokio::test]
async fn test_future_question_still_reachable() {
    let server = TestServer::start().await.unwrap();
    let question = server.store.add_question("Future question.", days_from_now(30)).await;

    let detail = server.get(&format!("/polls/{}/", question.id)).await.unwrap();
    assert_status(detail, StatusCode::OK).await.unwrap();

    let results = server
        .get(&format!("/polls/{}/results/", question.id))
        .await
        .unwrap();
    assert_status(results, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_unknown_question_is_not_found() {
    let server = TestServer::start().await.unwrap();

    for path in ["/polls/999/", "/polls/999/results/", "/polls/abc/", "/no/such/page"] {
        let response = server.get(path).await.unwrap();
        assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
    }
}

#[tokio::test]
async fn test_results_pluralize_votes() {
    let server = TestServer::start().await.unwrap();
    let question = server.store.add_question("Tea or coffee?", days_from_now(-1)).await;
    let tea = server.store.add_choice(question.id, "Tea").await;
    server.store.add_choice(question.id, "Coffee").await;

    server
        .post_form(
            &format!("/polls/{}/vote/", question.id),
            &[("choice", tea.id.to_string().as_str())],
        )
        .await
        .unwrap();

    let body = assert_html(
        server
            .get(&format!("/polls/{}/results/", question.id))
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    assert!(body.contains("Tea -- 1 vote<"));
    assert!(body.contains("Coffee -- 0 votes"));
    assert!(body.contains("Vote again?"));
}

// ============================================================================
// Voting
// ============================================================================

#[tokio::test]
async fn test_vote_redirects_to_results() {
    let server = TestServer::start().await.unwrap();
    let question = server.store.add_question("Tea or coffee?", days_from_now(-1)).await;
    let tea = server.store.add_choice(question.id, "Tea").await;
    let coffee = server.store.add_choice(question.id, "Coffee").await;

    let response = server
        .post_form(
            &format!("/polls/{}/vote/", question.id),
            &[("choice", coffee.id.to_string().as_str())],
        )
        .await
        .unwrap();

    let location = assert_redirect(&response, StatusCode::FOUND).unwrap();
    assert_eq!(location, format!("/polls/{}/results/", question.id));
    assert_eq!(server.store.votes(coffee.id).await, Some(1));
    assert_eq!(server.store.votes(tea.id).await, Some(0));
}

#[tokio::test]
async fn test_vote_without_choice_rerenders_form() {
    let server = TestServer::start().await.unwrap();
    let question = server.store.add_question("Tea or coffee?", days_from_now(-1)).await;
    let tea = server.store.add_choice(question.id, "Tea").await;

    let response = server
        .post_form(&format!("/polls/{}/vote/", question.id), &[])
        .await
        .unwrap();
    let body = assert_html(response, StatusCode::OK).await.unwrap();

    assert!(body.contains(&escaped_choice_message()));
    assert!(body.contains("Tea or coffee?"));
    assert_eq!(server.store.votes(tea.id).await, Some(0));
}

#[tokio::test]
async fn test_vote_with_invalid_choice_rerenders_form() {
    let server = TestServer::start().await.unwrap();
    let question = server.store.add_question("Tea or coffee?", days_from_now(-1)).await;
    let tea = server.store.add_choice(question.id, "Tea").await;

    let other = server.store.add_question("Other question?", days_from_now(-1)).await;
    let foreign = server.store.add_choice(other.id, "Elsewhere").await;

    let path = format!("/polls/{}/vote/", question.id);
    let foreign_id = foreign.id.to_string();
    for value in ["999", "not-a-number", "", foreign_id.as_str()] {
        let response = server.post_form(&path, &[("choice", value)]).await.unwrap();
        let body = assert_html(response, StatusCode::OK).await.unwrap();
        assert!(body.contains(&escaped_choice_message()), "choice {value:?}");
    }

    assert_eq!(server.store.votes(tea.id).await, Some(0));
    assert_eq!(server.store.votes(foreign.id).await, Some(0));
}

#[tokio::test]
async fn test_vote_on_unknown_question_is_not_found() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_form("/polls/999/vote/", &[("choice", "1")])
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_concurrent_votes_are_all_counted() {
    let server = TestServer::start().await.unwrap();
    let question = server.store.add_question("Tea or coffee?", days_from_now(-1)).await;
    let tea = server.store.add_choice(question.id, "Tea").await;

    let url = format!("{}/polls/{}/vote/", server.base_url(), question.id);
    let mut votes = JoinSet::new();
    for _ in 0..10 {
        let client = server.client.clone();
        let url = url.clone();
        let choice = tea.id.to_string();
        votes.spawn(async move { client.post(url).form(&[("choice", choice)]).send().await });
    }
    while let Some(response) = votes.join_next().await {
        assert_eq!(response.unwrap().unwrap().status(), StatusCode::FOUND);
    }

    assert_eq!(server.store.votes(tea.id).await, Some(10));
}

// ============================================================================
// Sample data
// ============================================================================

#[tokio::test]
async fn test_seeded_polls_are_listed() {
    let server = TestServer::start().await.unwrap();
    server.store.add_question("Leftover question.", days_from_now(-1)).await;

    let report = server.seed().await.unwrap();
    assert_eq!(report.cleared, 1);
    assert_eq!(report.questions_created, 3);
    assert_eq!(server.store.question_count().await, 3);
    assert_eq!(server.store.choice_count().await, report.choices_created);

    let body = assert_html(server.get("/polls/").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(!body.contains("Leftover question."));
    assert!(body.contains("What is your favorite programming language?"));
}

#[tokio::test]
async fn test_seed_if_empty_fills_empty_store_once() {
    let server = TestServer::start().await.unwrap();

    let report = server.seed_if_empty().await.unwrap().unwrap();
    assert_eq!(report.cleared, 0);
    assert_eq!(report.questions_created, 3);
    let choices = server.store.choice_count().await;

    assert!(server.seed_if_empty().await.unwrap().is_none());
    assert_eq!(server.store.question_count().await, 3);
    assert_eq!(server.store.choice_count().await, choices);
}

#[tokio::test]
async fn test_seed_if_empty_keeps_existing_questions() {
    let server = TestServer::start().await.unwrap();
    server.store.add_question("Operator question.", days_from_now(-1)).await;

    assert!(server.seed_if_empty().await.unwrap().is_none());
    assert_eq!(server.store.question_count().await, 1);

    let body = assert_html(server.get("/polls/").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(body.contains("Operator question."));
}

#[tokio::test]
async fn test_reseeding_replaces_sample_data() {
    let server = TestServer::start().await.unwrap();

    let first = server.seed().await.unwrap();
    let second = server.seed().await.unwrap();

    assert_eq!(second.cleared, 3);
    assert_eq!(second.questions_created, 3);
    assert_eq!(second.choices_created, first.choices_created);
    assert_eq!(server.store.question_count().await, 3);
    assert_eq!(server.store.choice_count().await, first.choices_created);
}

#[tokio::test]
async fn test_startup_seeding_failure_is_not_fatal() {
    let server = TestServer::start().await.unwrap();

    server.store.set_unavailable(true);
    assert!(server.seed_if_empty().await.is_err());
    // Logs the failure and returns
    poll_api::seed_on_startup(server.service_context()).await;
    server.store.set_unavailable(false);

    assert_eq!(server.store.question_count().await, 0);
    let body = assert_html(server.get("/polls/").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(body.contains("No polls are available."));
}
