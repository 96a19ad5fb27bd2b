//! Transport behavior tests against a local mock server
use newswire_core::{FetchConfig, NewswireError, fetch_articles, fetch_url};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("../../tests/fixtures/{}", name)).unwrap()
}

#[tokio::test]
async fn test_fetch_returns_body_on_200() {
    let server = MockServer::start().await;
    let body = read_fixture("search_response.json");

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let fetched = fetch_url(&format!("{}/search", server.uri()), &FetchConfig::default())
        .await
        .unwrap();

    assert_eq!(fetched, body);
}

#[tokio::test]
async fn test_fetch_sends_query_parameters_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("api-key", "test"))
        .and(query_param("order-by", "newest"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/search?order-by=newest&api-key=test", server.uri());
    let fetched = fetch_url(&url, &FetchConfig::default()).await.unwrap();
    assert_eq!(fetched, "{}");
}

#[tokio::test]
async fn test_fetch_rejects_non_200_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .expect(1)
        .mount(&server)
        .await;

    let result = fetch_url(&server.uri(), &FetchConfig::default()).await;
    assert!(matches!(result, Err(NewswireError::UnexpectedStatus(404))));
}

#[tokio::test]
async fn test_fetch_rejects_redirect_status() {
    // 3xx counts as "not exactly 200" like every other status.
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(301))
        .mount(&server)
        .await;

    let result = fetch_url(&server.uri(), &FetchConfig::default()).await;
    assert!(matches!(result, Err(NewswireError::UnexpectedStatus(301))));
}

#[tokio::test]
async fn test_pipeline_decodes_successful_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(read_fixture("search_response.json")))
        .expect(1)
        .mount(&server)
        .await;

    let articles = fetch_articles(&format!("{}/search", server.uri()), &FetchConfig::default())
        .await
        .expect("successful fetch produces a result");

    assert_eq!(articles.len(), 3);
    assert_eq!(articles[0].author, "Alex Hern");
}

#[tokio::test]
async fn test_pipeline_degrades_server_error_to_no_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let result = fetch_articles(&server.uri(), &FetchConfig::default()).await;
    assert_eq!(result, None);
}

#[tokio::test]
async fn test_pipeline_degrades_unreachable_host_to_no_result() {
    // Reserved TEST-NET address, nothing listens there.
    let config = FetchConfig { connect_timeout: 1, ..FetchConfig::default() };
    let result = fetch_articles("http://192.0.2.1:9/search", &config).await;
    assert_eq!(result, None);
}

#[tokio::test]
async fn test_invalid_url_issues_no_request() {
    let result = fetch_url("not-a-url", &FetchConfig::default()).await;
    assert!(matches!(result, Err(NewswireError::InvalidUrl(_))));
}
