/// Converts page HTML into a markdown body.
pub trait Converter: Send + Sync {
    fn to_markdown(&self, html: &str) -> String;
}

/// `html2md`-backed converter with a whitespace tidy pass. Headings,
/// emphasis, and links survive as readable markup.
#[derive(Debug, Default, Clone, Copy)]
pub struct Html2MdConverter;

impl Converter for Html2MdConverter {
    fn to_markdown(&self, html: &str) -> String {
        tidy(&html2md::parse_html(html))
    }
}

/// Trims trailing space and collapses blank-line runs left behind by the
/// converter.
fn tidy(markdown: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    let mut blank_run = 0usize;
    for line in markdown.lines() {
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
            lines.push("");
        } else {
            blank_run = 0;
            lines.push(trimmed);
        }
    }
    while lines.last() == Some(&"") {
        lines.pop();
    }
    while lines.first() == Some(&"") {
        lines.remove(0);
    }

    let mut body = lines.join("\n");
    body.push('\n');
    body
}
