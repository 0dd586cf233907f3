//! Integration tests for page fetching and target-vs-competitor analysis.

use serprank_analyzer::{analyze_target_vs_top, PageFetcher, PageOutcome};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const UA: &str = "serprank-test/1.0";

fn page(title: &str, body: &str) -> String {
    format!("<html><head><title>{title}</title></head><body><h1>{title}</h1><p>{body}</p></body></html>")
}

async fn mount_page(server: &MockServer, route: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(server)
        .await;
}

fn fetcher() -> PageFetcher {
    PageFetcher::new(5, UA).expect("fetcher construction should not fail")
}

#[tokio::test]
async fn fetch_sends_configured_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ua"))
        .and(header("user-agent", UA))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>ok</p>"))
        .expect(1)
        .mount(&server)
        .await;

    let html = fetcher().fetch_html(&format!("{}/ua", server.uri())).await;
    assert_eq!(html.as_deref(), Some("<p>ok</p>"));
}

#[tokio::test]
async fn fetch_returns_none_on_error_status_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let html = fetcher().fetch_html(&format!("{}/gone", server.uri())).await;
    assert!(html.is_none());
}

#[tokio::test]
async fn fetch_returns_none_for_unparseable_url() {
    assert!(fetcher().fetch_html("not a url").await.is_none());
}

#[tokio::test]
async fn analyzes_target_and_competitors_in_order() {
    let server = MockServer::start().await;
    mount_page(&server, "/mine", page("Running shoes for you", "running shoes")).await;
    mount_page(&server, "/a", page("Alpha", "nothing relevant")).await;
    mount_page(&server, "/b", page("Best running shoes", "text")).await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let base = server.uri();
    let top = vec![
        format!("{base}/a"),
        format!("{base}/broken"),
        format!("{base}/b"),
    ];
    let target = format!("{base}/mine");

    let result = analyze_target_vs_top(&fetcher(), "running shoes", Some(&target), &top).await;

    let target = result.target.expect("target should be analyzed");
    assert!(matches!(target, PageOutcome::Analyzed(_)));
    assert!(target.metrics().keyword_in_title);
    assert!(target.metrics().keyword_in_h1);

    assert_eq!(result.competitors.len(), 3);
    let urls: Vec<&str> = result
        .competitors
        .iter()
        .map(|o| o.metrics().url.as_str())
        .collect();
    assert_eq!(urls, top.iter().map(String::as_str).collect::<Vec<_>>());

    assert!(!result.competitors[0].metrics().keyword_in_title);
    assert!(result.competitors[1].is_fetch_failed());
    assert_eq!(result.competitors[1].metrics().score, 0);
    assert!(result.competitors[2].metrics().keyword_in_title);
}

#[tokio::test]
async fn missing_or_empty_target_is_not_analyzed() {
    let server = MockServer::start().await;
    mount_page(&server, "/a", page("Alpha", "words")).await;
    let top = vec![format!("{}/a", server.uri())];

    let none = analyze_target_vs_top(&fetcher(), "alpha", None, &top).await;
    assert!(none.target.is_none());
    assert_eq!(none.competitors.len(), 1);

    let empty = analyze_target_vs_top(&fetcher(), "alpha", Some(""), &top).await;
    assert!(empty.target.is_none());
}

#[tokio::test]
async fn no_urls_gives_empty_result() {
    let result = analyze_target_vs_top(&fetcher(), "anything", None, &[]).await;
    assert!(result.target.is_none());
    assert!(result.competitors.is_empty());
}
