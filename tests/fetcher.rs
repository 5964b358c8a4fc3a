mod common;

use char_exp_bot::prelude::*;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_fetch_sends_expected_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/character"))
        .and(query_param("nick", "Gandalf the Grey"))
        .and(query_param("tab", "9"))
        .and(header("user-agent", common::TEST_USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::create_test_client(&server.uri(), Duration::from_secs(5));

    let page = client.fetch_page("Gandalf the Grey").await.unwrap();

    assert_eq!(page.body, "<html>ok</html>");
    assert_eq!(
        page.url,
        format!("{}/character?nick=Gandalf%20the%20Grey&tab=9", server.uri())
    );
}

#[tokio::test]
async fn test_fetch_non_success_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/character"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::create_test_client(&server.uri(), Duration::from_secs(5));

    let err = client.fetch_page("Gandalf").await.unwrap_err();

    match err {
        AppError::Fetch { message, url } => {
            assert!(message.contains("503"), "unexpected message: {message}");
            assert!(url.unwrap().ends_with("/character?nick=Gandalf&tab=9"));
        }
        other => panic!("expected fetch error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/character"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("late")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = common::create_test_client(&server.uri(), Duration::from_millis(300));

    let err = client.fetch_page("Gandalf").await.unwrap_err();

    assert!(matches!(err, AppError::Fetch { .. }));
}

#[tokio::test]
async fn test_fetch_connection_refused() {
    // Port 1 is reserved and nothing listens there in the test environment
    let client = common::create_test_client("http://127.0.0.1:1", Duration::from_secs(2));

    let err = client.fetch_page("Gandalf").await.unwrap_err();

    assert!(matches!(err, AppError::Fetch { .. }));
    assert_eq!(
        err.source_url(),
        Some("http://127.0.0.1:1/character?nick=Gandalf&tab=9")
    );
}

#[tokio::test]
async fn test_fetch_invalid_base_url() {
    let client = common::create_test_client("not a url", Duration::from_secs(2));

    let err = client.fetch_page("Gandalf").await.unwrap_err();

    assert!(matches!(err, AppError::Fetch { url: None, .. }));
}
