use std::path::Path;

use stash_engine::{build_index, SaveOutcome};

use pretty_assertions::assert_eq;

fn saved(url: &str, path: &str, title: &str) -> SaveOutcome {
    SaveOutcome::saved(url.to_string(), path.to_string(), title.to_string())
}

#[test]
fn groups_by_domain_in_first_seen_order() {
    let outcomes = vec![
        saved("https://a.com/one", "/out/a.com/one.md", "One"),
        saved("https://b.com/x", "/out/b.com/x.md", "X"),
        saved("https://a.com/two", "/out/a.com/two.md", "Two"),
    ];

    let index = build_index(&outcomes, Path::new("/out"));

    assert_eq!(
        index,
        "# Crawled Content Index\n\n\
         \n## a.com\n\n\
         - [One](a.com/one.md)\n\
         - [Two](a.com/two.md)\n\
         \n## b.com\n\n\
         - [X](b.com/x.md)\n"
    );
}

#[test]
fn error_outcomes_are_excluded() {
    let outcomes = vec![
        SaveOutcome::error("https://a.com/broken".to_string(), "timeout"),
        saved("https://a.com/ok", "/out/a.com/ok.md", "Ok"),
    ];

    let index = build_index(&outcomes, Path::new("/out"));

    assert!(!index.contains("broken"));
    assert!(index.contains("- [Ok](a.com/ok.md)"));
}

#[test]
fn empty_batch_renders_header_only() {
    let index = build_index(&[], Path::new("/out"));
    assert_eq!(index, "# Crawled Content Index\n\n");
}

#[test]
fn port_bearing_domains_keep_their_own_heading() {
    let outcomes = vec![
        saved(
            "https://example.com:8080/a",
            "/out/example.com_8080/a.md",
            "A",
        ),
        saved("https://example.com/b", "/out/example.com/b.md", "B"),
    ];

    let index = build_index(&outcomes, Path::new("/out"));

    assert!(index.contains("\n## example.com:8080\n"));
    assert!(index.contains("\n## example.com\n"));
}
