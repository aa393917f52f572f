//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end over real HTTP.

use mailrake::config::Config;
use mailrake::{crawl, FetchError, Harvester};
use std::collections::HashSet;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with the given depth and a short timeout
fn create_test_config(max_depth: u32) -> Config {
    let mut config = Config::default();
    config.crawler.max_depth = max_depth;
    config.crawler.request_timeout = 1;
    config.user_agent.crawler_name = "TestBot".to_string();
    config
}

/// Mounts an HTML page at the given path
async fn mount_page(server: &MockServer, page_path: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

fn set_of(list: &[&str]) -> HashSet<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_full_crawl_single_domain() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        format!(
            r#"<html><head><title>Home</title></head><body>
            <p>General: info@example.com</p>
            <a href="{}/team">Team</a>
            <a href="/contact">Contact</a>
            </body></html>"#,
            base_url
        ),
    )
    .await;
    mount_page(
        &mock_server,
        "/team",
        r#"<html><body><p>Jane: jane.doe@example.com</p></body></html>"#.to_string(),
    )
    .await;
    mount_page(
        &mock_server,
        "/contact",
        r#"<html><body><p>Sales: sales@example.com, info@example.com</p></body></html>"#
            .to_string(),
    )
    .await;

    let harvester = Harvester::new(&create_test_config(1)).expect("Failed to build harvester");
    let report = harvester
        .harvest(&format!("{}/", base_url))
        .await
        .expect("Crawl failed");

    assert_eq!(
        report.emails,
        set_of(&["info@example.com", "jane.doe@example.com", "sales@example.com"])
    );
    assert_eq!(report.visited.len(), 3);
    assert_eq!(report.pages_fetched, 3);
    assert!(report.failures.is_empty());
}

#[tokio::test]
async fn test_depth_zero_fetches_only_seed() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        r#"<html><body>root@example.com <a href="/next">Next</a></body></html>"#.to_string(),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/next"))
        .respond_with(ResponseTemplate::new(200).set_body_string("next@example.com"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let harvester = Harvester::new(&create_test_config(0)).unwrap();
    let report = harvester
        .harvest(&format!("{}/", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(report.emails, set_of(&["root@example.com"]));
    assert_eq!(report.visited.len(), 1);
}

#[tokio::test]
async fn test_cycle_visits_each_page_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"<a href="/b">B</a> a@example.com"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"<a href="/a">A</a> b@example.com"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let harvester = Harvester::new(&create_test_config(5)).unwrap();
    let report = harvester
        .harvest(&format!("{}/a", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(report.visited.len(), 2);
    assert_eq!(report.emails, set_of(&["a@example.com", "b@example.com"]));
}

#[tokio::test]
async fn test_other_domain_not_fetched() {
    let seed_server = MockServer::start().await;
    let other_server = MockServer::start().await;

    mount_page(
        &seed_server,
        "/",
        format!(
            r#"<a href="/page2">Page 2</a><a href="{}/page">Elsewhere</a>"#,
            other_server.uri()
        ),
    )
    .await;
    mount_page(&seed_server, "/page2", "owner@seed.example".to_string()).await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("leak@other.example"))
        .expect(0)
        .mount(&other_server)
        .await;

    let harvester = Harvester::new(&create_test_config(2)).unwrap();
    let report = harvester
        .harvest(&format!("{}/", seed_server.uri()))
        .await
        .unwrap();

    assert_eq!(report.emails, set_of(&["owner@seed.example"]));
    assert_eq!(report.external_links, 1);
}

#[tokio::test]
async fn test_failure_isolation() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/first">1</a><a href="/second">2</a><a href="/third">3</a>"#.to_string(),
    )
    .await;
    mount_page(&mock_server, "/first", "first@example.com".to_string()).await;

    Mock::given(method("GET"))
        .and(path("/second"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    mount_page(&mock_server, "/third", "third@example.com".to_string()).await;

    let harvester = Harvester::new(&create_test_config(1)).unwrap();
    let report = harvester
        .harvest(&format!("{}/", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(
        report.emails,
        set_of(&["first@example.com", "third@example.com"])
    );
    assert_eq!(report.failures.len(), 1);
    assert!(matches!(
        &report.failures[0],
        FetchError::Status { status: 500, .. }
    ));
}

#[tokio::test]
async fn test_timeout_is_not_fatal() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        r#"home@example.com <a href="/slow">Slow</a>"#.to_string(),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("slow@example.com")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let harvester = Harvester::new(&create_test_config(1)).unwrap();
    let report = harvester
        .harvest(&format!("{}/", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(report.emails, set_of(&["home@example.com"]));
    assert!(matches!(&report.failures[..], [FetchError::Timeout { .. }]));
}

#[tokio::test]
async fn test_script_content_not_scanned() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        r#"<html><head><script>var a = "hidden@example.com";</script></head>
        <body><p>shown@example.com</p></body></html>"#
            .to_string(),
    )
    .await;

    let emails = crawl(&format!("{}/", mock_server.uri()), 0).await;

    assert_eq!(emails, set_of(&["shown@example.com"]));
}

#[tokio::test]
async fn test_crawl_returns_empty_set_on_failed_seed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let emails = crawl(&format!("{}/", mock_server.uri()), 1).await;

    assert!(emails.is_empty());
}

#[tokio::test]
async fn test_crawl_returns_empty_set_on_invalid_seed() {
    let emails = crawl("definitely not a url", 1).await;
    assert!(emails.is_empty());
}
