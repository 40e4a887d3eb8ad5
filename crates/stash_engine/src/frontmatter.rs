/// Fields recorded in the metadata preamble of every saved document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMeta {
    pub title: String,
    pub url: String,
    pub domain: String,
    pub description: String,
    /// ISO-8601 timestamp of processing time.
    pub date_saved: String,
}

/// Assembles the final document: fixed metadata preamble, blank line, body.
///
/// The field order and byte layout of the preamble are load-bearing;
/// downstream tooling parses this block.
pub fn build_document(meta: &DocumentMeta, body: &str) -> String {
    format!(
        "---\ntitle: {title}\nurl: {url}\ndomain: {domain}\ndescription: {description}\ndate_saved: {date_saved}\n---\n\n{body}",
        title = meta.title,
        url = meta.url,
        domain = meta.domain,
        description = meta.description,
        date_saved = meta.date_saved,
    )
}
