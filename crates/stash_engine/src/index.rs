use std::collections::HashMap;
use std::path::Path;

use url::Url;

use crate::paths::authority;
use crate::types::SaveOutcome;

const INDEX_HEADER: &str = "# Crawled Content Index\n\n";

/// Renders the per-domain index for one batch of outcomes.
///
/// Only saved outcomes appear. Domains keep first-seen order; entries keep
/// their relative order within a domain. Each entry links to its document
/// path relative to `root`. Pure and deterministic.
pub fn build_index(outcomes: &[SaveOutcome], root: &Path) -> String {
    let mut domain_order: Vec<String> = Vec::new();
    let mut by_domain: HashMap<String, Vec<&SaveOutcome>> = HashMap::new();

    for outcome in outcomes.iter().filter(|o| o.is_saved()) {
        let domain = domain_of(&outcome.url);
        if !by_domain.contains_key(&domain) {
            domain_order.push(domain.clone());
        }
        by_domain.entry(domain).or_default().push(outcome);
    }

    let mut content = String::from(INDEX_HEADER);
    for domain in &domain_order {
        content.push_str(&format!("\n## {domain}\n\n"));
        for entry in &by_domain[domain] {
            let title = entry.title.as_deref().unwrap_or(&entry.url);
            let path = entry.path.as_deref().unwrap_or_default();
            let relative = Path::new(path)
                .strip_prefix(root)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| path.to_string());
            content.push_str(&format!("- [{title}]({relative})\n"));
        }
    }
    content
}

fn domain_of(url: &str) -> String {
    Url::parse(url)
        .map(|u| authority(&u))
        .unwrap_or_else(|_| "unknown".to_string())
}
