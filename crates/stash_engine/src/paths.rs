use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use url::Url;

/// Relative location derived from a URL: a domain directory with nested path
/// segments, plus a filename stem. The `.md` extension and any collision
/// suffix are applied at write time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedPath {
    pub dir: PathBuf,
    pub stem: String,
}

/// The URL's authority in `host:port` form (port only when explicit).
pub fn authority(url: &Url) -> String {
    let host = url.host_str().unwrap_or("unknown-host");
    match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}

/// Maps a URL deterministically to its location under an output root.
///
/// The authority becomes a single directory with `:` replaced by `_`, so a
/// port never splits the name. Path segments nest below it; the last segment,
/// stripped of a literal `.html`/`.php` suffix, is the stem. A bare domain or
/// an empty stem falls back to `index`.
pub fn derive_path(url: &Url) -> DerivedPath {
    let mut dir = PathBuf::from(authority(url).replace(':', "_"));

    let mut segments: Vec<&str> = url.path().split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        segments.push("index");
    }

    let (last, parents) = segments.split_last().unwrap_or((&"index", &[]));
    for parent in parents {
        dir.push(parent);
    }

    let stem = trim_page_suffix(last);
    let stem = if stem.is_empty() { "index" } else { stem };

    DerivedPath {
        dir,
        stem: stem.to_string(),
    }
}

fn trim_page_suffix(segment: &str) -> &str {
    segment
        .strip_suffix(".html")
        .or_else(|| segment.strip_suffix(".php"))
        .unwrap_or(segment)
}

/// Claims the first free name `stem.md`, `stem_1.md`, `stem_2.md`, ... in
/// `dir` and returns the opened file.
///
/// Each probe is an exclusive create, so concurrent writers deriving the
/// same stem can never claim the same path, and a pre-existing file is never
/// overwritten.
pub fn create_unique(dir: &Path, stem: &str) -> io::Result<(PathBuf, File)> {
    let mut counter = 0u32;
    loop {
        let name = if counter == 0 {
            format!("{stem}.md")
        } else {
            format!("{stem}_{counter}.md")
        };
        let candidate = dir.join(name);
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&candidate)
        {
            Ok(file) => return Ok((candidate, file)),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => counter += 1,
            Err(err) => return Err(err),
        }
    }
}
