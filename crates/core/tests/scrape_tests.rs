//! End-to-end scrape tests against a loopback HTTP server
use std::time::Duration;

use axum::Router;
use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect};
use axum::routing::get;
use newscan_core::{DEFAULT_USER_AGENT, FetchConfig, ScrapeError, Scraper};

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("../../tests/fixtures/{}", name)).expect("fixture should exist")
}

fn html_route(body: String) -> axum::routing::MethodRouter {
    get(move || {
        let body = body.clone();
        async move { Html(body) }
    })
}

/// `/hop/{n}` redirects `n` times before landing on the front page.
async fn hop(Path(n): Path<u32>) -> axum::response::Response {
    if n == 0 {
        Html(read_fixture("front_page.html")).into_response()
    } else {
        Redirect::temporary(&format!("/hop/{}", n - 1)).into_response()
    }
}

/// Serves one article whose headline is the caller's User-Agent.
async fn echo_user_agent(headers: HeaderMap) -> Html<String> {
    let agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("missing");
    Html(format!(r#"<article><h2>{}</h2><a href="/agent">x</a></article>"#, agent))
}

async fn spawn_site() -> String {
    let app = Router::new()
        .route("/hop/{n}", get(hop))
        .route("/agent", get(echo_user_agent))
        .route("/news", html_route(read_fixture("front_page.html")))
        .route("/about", html_route(read_fixture("no_articles.html")))
        .route("/moved", get(|| async { Redirect::permanent("/news") }))
        .route("/loop", get(|| async { Redirect::temporary("/loop") }))
        .route("/missing", get(|| async { StatusCode::NOT_FOUND }))
        .route("/broken", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                Html("<article><h2>Too late</h2></article>")
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn scraper() -> Scraper {
    Scraper::new(FetchConfig::default()).unwrap()
}

#[tokio::test]
async fn test_scrape_fixture_end_to_end() {
    let base = spawn_site().await;
    let articles = scraper().scrape_url(&format!("{}/news", base)).await.unwrap();

    assert_eq!(articles.len(), 3);
    assert_eq!(articles[0].headline, "City council approves new transit budget");
    assert_eq!(articles[0].link, format!("{}/news/transit-budget", base));
    assert_eq!(articles[1].link, "https://example.com/news/harbor-bridge");
    assert!(articles.iter().all(|a| a.source == "127.0.0.1"));
}

#[tokio::test]
async fn test_redirects_are_followed() {
    let base = spawn_site().await;
    let articles = scraper().scrape_url(&format!("{}/moved", base)).await.unwrap();
    assert_eq!(articles.len(), 3);
}

#[tokio::test]
async fn test_five_redirects_are_allowed() {
    let base = spawn_site().await;
    let articles = scraper().scrape_url(&format!("{}/hop/5", base)).await.unwrap();
    assert_eq!(articles.len(), 3);
}

#[tokio::test]
async fn test_sixth_redirect_is_fetch_error() {
    let base = spawn_site().await;
    let result = scraper().scrape_url(&format!("{}/hop/6", base)).await;
    assert!(matches!(result, Err(ScrapeError::Fetch(_))), "got {:?}", result);
}

#[tokio::test]
async fn test_browser_user_agent_is_sent() {
    let base = spawn_site().await;
    let articles = scraper().scrape_url(&format!("{}/agent", base)).await.unwrap();
    assert_eq!(articles[0].headline, DEFAULT_USER_AGENT);
    assert!(articles[0].headline.contains("Mozilla/5.0"));
}

#[tokio::test]
async fn test_custom_user_agent_is_sent() {
    let base = spawn_site().await;
    let config = FetchConfig { user_agent: "newscan-test/1.0".to_string(), ..Default::default() };
    let articles = Scraper::new(config).unwrap().scrape_url(&format!("{}/agent", base)).await.unwrap();
    assert_eq!(articles[0].headline, "newscan-test/1.0");
}

#[tokio::test]
async fn test_redirect_loop_is_fetch_error() {
    let base = spawn_site().await;
    let result = scraper().scrape_url(&format!("{}/loop", base)).await;
    assert!(matches!(result, Err(ScrapeError::Fetch(_))), "got {:?}", result);
}

#[tokio::test]
async fn test_error_status_is_fetch_error() {
    let base = spawn_site().await;

    for path in ["/missing", "/broken"] {
        let err = scraper().scrape_url(&format!("{}{}", base, path)).await.unwrap_err();
        assert_eq!(err.status_code(), 500);
        assert!(err.to_string().contains("status code"), "got {}", err);
    }
}

#[tokio::test]
async fn test_page_without_blocks_is_not_found() {
    let base = spawn_site().await;
    let err = scraper().scrape_url(&format!("{}/about", base)).await.unwrap_err();
    assert!(matches!(err, ScrapeError::NotFound { .. }));
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_timeout() {
    let base = spawn_site().await;
    let scraper = Scraper::new(FetchConfig { timeout: 1, ..Default::default() }).unwrap();
    let err = scraper.scrape_url(&format!("{}/slow", base)).await.unwrap_err();
    assert!(matches!(err, ScrapeError::Timeout { timeout: 1 }), "got {:?}", err);
}

#[tokio::test]
async fn test_validation_happens_before_fetch() {
    let scraper = scraper();

    let err = scraper.scrape_url("").await.unwrap_err();
    assert_eq!(err.to_string(), "URL is required");

    let err = scraper.scrape_url("definitely not a url").await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid URL format");
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn test_connection_refused_is_fetch_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = scraper().scrape_url(&format!("http://{}/news", addr)).await.unwrap_err();
    assert!(matches!(err, ScrapeError::Fetch(_)), "got {:?}", err);
}
