use std::path::Path;
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use log::{debug, warn};
use thiserror::Error;
use tokio::sync::Semaphore;
use url::Url;

use crate::convert::{Converter, Html2MdConverter};
use crate::decode::decode_page;
use crate::extract::page_summary;
use crate::fetch::Fetcher;
use crate::frontmatter::{build_document, DocumentMeta};
use crate::index::build_index;
use crate::paths::{authority, derive_path};
use crate::persist::{ensure_output_dir, write_document, PersistError, ReplacingFileWriter};
use crate::types::{BatchInput, BatchResult, PageError, SaveOutcome};

/// Default number of in-flight page saves.
pub const DEFAULT_CONCURRENCY: usize = 8;

const INDEX_FILENAME: &str = "index.md";

/// Anything that can fail while saving one URL. Every variant becomes an
/// error outcome for that URL alone.
#[derive(Debug, Error)]
enum SaveError {
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    #[error("{0}")]
    Page(#[from] PageError),
    #[error("{0}")]
    Persist(#[from] PersistError),
}

/// Saves a batch of URLs under `root`, then rebuilds the index.
///
/// URLs are processed by a bounded worker pool, but the returned outcome
/// sequence always matches input order. A failure in any stage for one URL
/// never aborts its siblings. An index-build failure is logged and does not
/// change the batch result; document saving and index building are
/// independent failure domains.
///
/// Returns `Err` only when the output root itself cannot be created.
pub async fn batch_save(
    fetcher: Arc<dyn Fetcher>,
    input: BatchInput,
    root: &Path,
    concurrency: usize,
) -> Result<BatchResult, PersistError> {
    let urls = input.into_urls();
    ensure_output_dir(root)?;

    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut tasks = Vec::with_capacity(urls.len());
    for url in urls {
        let fetcher = fetcher.clone();
        let semaphore = semaphore.clone();
        let root = root.to_path_buf();
        let task_url = url.clone();
        let handle = tokio::spawn(async move {
            let _permit = match semaphore.acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => return SaveOutcome::error(task_url, "worker pool closed"),
            };
            match save_one(fetcher.as_ref(), &task_url, &root).await {
                Ok(outcome) => outcome,
                Err(err) => SaveOutcome::error(task_url, err.to_string()),
            }
        });
        tasks.push((url, handle));
    }

    // Handles are awaited in spawn order, so completion order never leaks
    // into the reported sequence.
    let mut processed = Vec::with_capacity(tasks.len());
    for (url, handle) in tasks {
        let outcome = match handle.await {
            Ok(outcome) => outcome,
            Err(err) => SaveOutcome::error(url, format!("worker task failed: {err}")),
        };
        processed.push(outcome);
    }

    let total_saved = processed.iter().filter(|o| o.is_saved()).count();
    let total_errors = processed.len() - total_saved;

    // Best effort: the index never fails the batch.
    let index = build_index(&processed, root);
    if let Err(err) = ReplacingFileWriter::new(root.to_path_buf()).write(INDEX_FILENAME, &index) {
        warn!("failed to write {INDEX_FILENAME}: {err}");
    }

    Ok(BatchResult {
        status: "success",
        processed,
        base_path: root.display().to_string(),
        total_saved,
        total_errors,
    })
}

/// Fetch, decode, convert, and persist a single URL.
async fn save_one(fetcher: &dyn Fetcher, url: &str, root: &Path) -> Result<SaveOutcome, SaveError> {
    debug!("saving {url}");
    let parsed = Url::parse(url)?;
    let derived = derive_path(&parsed);

    let output = fetcher.fetch(url).await.map_err(PageError::from)?;
    let decoded = decode_page(&output.bytes, output.metadata.content_type.as_deref())
        .map_err(PageError::from)?;

    let summary = page_summary(&decoded.html);
    let body = Html2MdConverter.to_markdown(&decoded.html);

    let title = summary.title.unwrap_or_else(|| derived.stem.clone());
    let meta = DocumentMeta {
        title: title.clone(),
        url: url.to_string(),
        domain: authority(&parsed),
        description: summary.description.unwrap_or_default(),
        date_saved: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    };

    let document = build_document(&meta, &body);
    let path = write_document(root, &derived, &document)?;
    debug!("saved {url} -> {}", path.display());

    Ok(SaveOutcome::saved(
        url.to_string(),
        path.display().to_string(),
        title,
    ))
}
