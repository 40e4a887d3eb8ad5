use stash_engine::{
    collect_links, map_links, scan_links, FetchSettings, LinkFilter, MapLinksResult,
    ReqwestFetcher,
};

use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn default_filter_rejects_excluded_domains_regardless_of_scheme() {
    let filter = LinkFilter::default();
    assert!(!filter.is_eligible("https://www.youtube.com/watch?v=abc"));
    assert!(!filter.is_eligible("http://youtu.be/abc"));
    assert!(!filter.is_eligible("https://example.com/embed?src=youtube.com"));
}

#[test]
fn default_filter_rejects_relative_hrefs() {
    let filter = LinkFilter::default();
    assert!(!filter.is_eligible("/about"));
    assert!(!filter.is_eligible("about.html"));
    assert!(!filter.is_eligible("#section"));
    assert!(!filter.is_eligible("mailto:someone@example.com"));
}

#[test]
fn default_filter_accepts_absolute_http_links() {
    let filter = LinkFilter::default();
    assert!(filter.is_eligible("http://example.com/a"));
    assert!(filter.is_eligible("https://example.com/a"));
}

#[test]
fn custom_exclusion_list_replaces_default() {
    let filter = LinkFilter::new(vec!["ads.example".to_string()]);
    assert!(!filter.is_eligible("https://ads.example/banner"));
    // The default entries are no longer excluded.
    assert!(filter.is_eligible("https://www.youtube.com/watch?v=abc"));
}

#[test]
fn later_anchor_text_wins_for_duplicate_hrefs() {
    let html = r#"
        <html><body>
            <a href="https://example.com/page">First</a>
            <a href="https://example.com/page">Second</a>
        </body></html>
    "#;
    let links = collect_links(html, &LinkFilter::default());
    assert_eq!(links.len(), 1);
    assert_eq!(
        links.get("https://example.com/page").map(String::as_str),
        Some("Second")
    );
}

#[test]
fn empty_anchor_text_falls_back_to_href() {
    let html = r#"<a href="https://example.com/bare">   </a>"#;
    let links = collect_links(html, &LinkFilter::default());
    assert_eq!(
        links.get("https://example.com/bare").map(String::as_str),
        Some("https://example.com/bare")
    );
}

#[test]
fn ineligible_hrefs_are_dropped_silently() {
    let html = r#"
        <a href="/relative">Relative</a>
        <a href="https://youtu.be/xyz">Video</a>
        <a href="https://example.com/keep">Keep</a>
    "#;
    let links = collect_links(html, &LinkFilter::default());
    assert_eq!(links.len(), 1);
    assert!(links.contains_key("https://example.com/keep"));
}

#[tokio::test]
async fn scan_links_fetches_and_collects() {
    let server = MockServer::start().await;
    let page = r#"<html><body>
        <a href="https://example.com/about">About Us</a>
        <a href="https://example.com/blog"></a>
        <a href="/local">Local</a>
    </body></html>"#;
    Mock::given(method("GET"))
        .and(path("/seed"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(page, "text/html; charset=utf-8"))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default()).unwrap();
    let url = format!("{}/seed", server.uri());
    let links = scan_links(&fetcher, &LinkFilter::default(), &url)
        .await
        .expect("scan ok");

    assert_eq!(links.len(), 2);
    assert_eq!(
        links.get("https://example.com/about").map(String::as_str),
        Some("About Us")
    );
    // Anchor without text maps to its own href.
    assert_eq!(
        links.get("https://example.com/blog").map(String::as_str),
        Some("https://example.com/blog")
    );
}

#[tokio::test]
async fn map_links_reports_fetch_failure_as_tagged_error() {
    let server = MockServer::start().await;
    // No mock mounted: the server answers 404.

    let fetcher = ReqwestFetcher::new(FetchSettings::default()).unwrap();
    let url = format!("{}/nowhere", server.uri());
    let result = map_links(&fetcher, &LinkFilter::default(), &url).await;

    match result {
        MapLinksResult::Error { error } => assert!(error.contains("http status 404")),
        MapLinksResult::Success { .. } => panic!("expected an error result"),
    }
}
