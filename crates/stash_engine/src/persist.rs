use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::paths::{create_unique, DerivedPath};

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure the output directory exists; create it if missing.
///
/// Re-running against an existing directory is not an error, but a plain
/// file at the path is, and so is an unwritable directory.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => return Err(PersistError::OutputDir("path is not a directory".into())),
        Err(_) => {
            fs::create_dir_all(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
        }
    }
    // Writability probe: try creating a temp file.
    NamedTempFile::new_in(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    Ok(())
}

/// Writes one converted document under `root`, creating its per-URL
/// directories and resolving filename collisions with numbered suffixes.
pub fn write_document(
    root: &Path,
    derived: &DerivedPath,
    content: &str,
) -> Result<PathBuf, PersistError> {
    let dir = root.join(&derived.dir);
    fs::create_dir_all(&dir)?;

    let (path, mut file) = create_unique(&dir, &derived.stem)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;
    Ok(path)
}

/// Writes a file via a temp file and rename, replacing any previous version.
/// Used for `index.md`, which is rebuilt from scratch on every batch.
pub struct ReplacingFileWriter {
    dir: PathBuf,
}

impl ReplacingFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn write(&self, filename: &str, content: &str) -> Result<PathBuf, PersistError> {
        ensure_output_dir(&self.dir)?;

        let target = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        if target.exists() {
            fs::remove_file(&target)?;
        }
        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        Ok(target)
    }
}
