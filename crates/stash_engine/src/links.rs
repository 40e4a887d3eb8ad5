use std::collections::BTreeMap;

use scraper::{Html, Selector};

use crate::classify::LinkFilter;
use crate::decode::decode_page;
use crate::fetch::Fetcher;
use crate::types::{MapLinksResult, PageError};

/// Collects eligible anchors from parsed HTML into an href -> text mapping.
///
/// Anchor text is trimmed; an anchor with no visible text falls back to the
/// href itself. When several anchors share an href, the later one's text
/// wins.
pub fn collect_links(html: &str, filter: &LinkFilter) -> BTreeMap<String, String> {
    let mut links = BTreeMap::new();
    let Ok(anchor) = Selector::parse("a[href]") else {
        return links;
    };

    let document = Html::parse_document(html);
    for element in document.select(&anchor) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let href = href.trim();
        if !filter.is_eligible(href) {
            continue;
        }
        let text = element.text().collect::<String>();
        let text = text.trim();
        let label = if text.is_empty() { href } else { text };
        links.insert(href.to_string(), label.to_string());
    }
    links
}

/// Fetches a page and returns its eligible outbound links.
pub async fn scan_links(
    fetcher: &dyn Fetcher,
    filter: &LinkFilter,
    url: &str,
) -> Result<BTreeMap<String, String>, PageError> {
    let output = fetcher.fetch(url).await?;
    let decoded = decode_page(&output.bytes, output.metadata.content_type.as_deref())?;
    Ok(collect_links(&decoded.html, filter))
}

/// The map-links operation exposed to the calling layer: always a tagged
/// result, never an error crossing the boundary.
pub async fn map_links(fetcher: &dyn Fetcher, filter: &LinkFilter, url: &str) -> MapLinksResult {
    match scan_links(fetcher, filter, url).await {
        Ok(links) => MapLinksResult::Success { links },
        Err(err) => MapLinksResult::Error {
            error: err.to_string(),
        },
    }
}
