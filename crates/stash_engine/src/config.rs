use std::env;
use std::path::{Path, PathBuf};

use crate::persist::{ensure_output_dir, PersistError};

/// Environment variable overriding the output root.
pub const OUTPUT_PATH_VAR: &str = "OUTPUT_PATH";

const FALLBACK_OUTPUT: &str = "./output";

/// Resolves the batch output root once at startup.
///
/// Precedence: the override (usually from `OUTPUT_PATH`), then the
/// configured default, then `./output`. Resolution is centralized here so
/// the environment is consulted exactly once, not re-read per operation.
#[derive(Debug, Clone)]
pub struct OutputPathResolver {
    override_path: Option<PathBuf>,
    default_path: PathBuf,
}

impl OutputPathResolver {
    pub fn new(override_path: Option<PathBuf>, default_path: impl Into<PathBuf>) -> Self {
        Self {
            override_path,
            default_path: default_path.into(),
        }
    }

    /// Reads the `OUTPUT_PATH` override from the environment. An empty value
    /// counts as unset.
    pub fn from_env() -> Self {
        let override_path = env::var(OUTPUT_PATH_VAR)
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self::new(override_path, FALLBACK_OUTPUT)
    }

    /// Ensures the resolved directory exists (idempotent) and returns its
    /// absolute form.
    pub fn resolve(&self) -> Result<PathBuf, PersistError> {
        let path: &Path = self
            .override_path
            .as_deref()
            .unwrap_or(&self.default_path);
        ensure_output_dir(path)?;
        Ok(path.canonicalize()?)
    }
}
