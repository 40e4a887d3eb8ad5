/// Domain fragments excluded from link discovery unless overridden.
const DEFAULT_EXCLUDED: &[&str] = &["youtube.com", "youtu.be"];

/// Decides whether a discovered href is eligible for further processing.
///
/// Eligible means: an absolute HTTP(S) reference that contains none of the
/// excluded substrings. Pure; no IO.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkFilter {
    excluded: Vec<String>,
}

impl LinkFilter {
    /// A filter with a caller-supplied exclusion list.
    pub fn new(excluded: Vec<String>) -> Self {
        Self { excluded }
    }

    pub fn is_eligible(&self, href: &str) -> bool {
        href.starts_with("http") && !self.excluded.iter().any(|needle| href.contains(needle))
    }
}

impl Default for LinkFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED.iter().map(|s| s.to_string()).collect())
    }
}
