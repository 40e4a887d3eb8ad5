use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::DecodeError;

/// Classified failure from a single fetch attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    UnsupportedContentType { content_type: String },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type}")
            }
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Raw response body plus the request's observable metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub bytes: Vec<u8>,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    pub original_url: String,
    pub final_url: String,
    pub content_type: Option<String>,
    pub byte_len: u64,
}

/// Failure while turning one fetched page into usable HTML.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("{0}")]
    Fetch(#[from] FetchError),
    #[error("{0}")]
    Decode(#[from] DecodeError),
}

/// Per-URL result of a batch save. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveOutcome {
    pub url: String,
    pub status: SaveStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SaveOutcome {
    pub fn saved(url: String, path: String, title: String) -> Self {
        Self {
            url,
            status: SaveStatus::Saved,
            path: Some(path),
            title: Some(title),
            error: None,
        }
    }

    pub fn error(url: String, message: impl Into<String>) -> Self {
        Self {
            url,
            status: SaveStatus::Error,
            path: None,
            title: None,
            error: Some(message.into()),
        }
    }

    pub fn is_saved(&self) -> bool {
        self.status == SaveStatus::Saved
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveStatus {
    Saved,
    Error,
}

/// Overall batch summary.
///
/// `status` only says the batch ran to completion; the per-URL entries in
/// `processed` are the authority on individual outcomes.
#[derive(Debug, Clone, Serialize)]
pub struct BatchResult {
    pub status: &'static str,
    pub processed: Vec<SaveOutcome>,
    pub base_path: String,
    pub total_saved: usize,
    pub total_errors: usize,
}

/// The two accepted shapes for the batch-save `urls` argument.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BatchInput {
    /// A plain sequence of URLs.
    Urls(Vec<String>),
    /// The map-links result shape; only the keys of `links` are used, in
    /// the order the mapping supplied them.
    LinkMap {
        links: serde_json::Map<String, serde_json::Value>,
    },
}

impl BatchInput {
    /// Validates a loosely typed JSON value into one of the accepted shapes.
    pub fn from_value(value: serde_json::Value) -> Result<Self, InputError> {
        serde_json::from_value(value).map_err(|_| InputError)
    }

    /// Normalizes either shape into the URL sequence to process.
    pub fn into_urls(self) -> Vec<String> {
        match self {
            BatchInput::Urls(urls) => urls,
            BatchInput::LinkMap { links } => links.into_iter().map(|(url, _)| url).collect(),
        }
    }
}

/// The batch argument was neither a URL list nor a links mapping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("urls must be either a list of URLs or a links mapping")]
pub struct InputError;

/// Tagged result of the map-links operation; failures are data, not panics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum MapLinksResult {
    Success { links: BTreeMap<String, String> },
    Error { error: String },
}
