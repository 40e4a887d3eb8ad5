use scraper::{Html, Selector};

/// Metadata pulled from a page's head.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSummary {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Extracts `<title>` text and the `description` meta tag content.
///
/// Both fields are optional; the caller applies defaults (filename stem for
/// the title, empty string for the description).
pub fn page_summary(html: &str) -> PageSummary {
    let document = Html::parse_document(html);

    let title = Selector::parse("title")
        .ok()
        .and_then(|sel| document.select(&sel).next())
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty());

    let description = Selector::parse(r#"meta[name="description"]"#)
        .ok()
        .and_then(|sel| document.select(&sel).next())
        .and_then(|el| el.value().attr("content"))
        .map(|c| c.trim().to_string())
        .filter(|d| !d.is_empty());

    PageSummary { title, description }
}
