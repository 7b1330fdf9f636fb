// File: crates/plot-core/src/tempfiles.rs
// Summary: Scoped registry of temp files written for scripts and materialized series data.
// Notes:
// - Every path handed out by `write` is recorded exactly once and removed when the
//   registry is drained or dropped. Nothing is global; each render owns (or borrows)
//   one `TempFiles`.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{PlotError, Result};
use crate::types::TEMP_PREFIX;

#[derive(Debug, Default)]
pub struct TempFiles {
    paths: Vec<PathBuf>,
    keep: bool,
}

impl TempFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leave files on disk when the registry is dropped (handy for inspecting scripts).
    pub fn keep_files(mut self, keep: bool) -> Self {
        self.keep = keep;
        self
    }

    /// Create a uniquely named file in the OS temp dir, write `content`, record the path.
    pub fn write(&mut self, content: &str, suffix: &str) -> Result<PathBuf> {
        let mut file = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .suffix(suffix)
            .tempfile()
            .map_err(|source| PlotError::TempFile { source })?;
        file.write_all(content.as_bytes())
            .map_err(|source| PlotError::TempFile { source })?;
        let path = file
            .into_temp_path()
            .keep()
            .map_err(|e| PlotError::TempFile { source: e.error })?;

        debug!(path = %path.display(), bytes = content.len(), "wrote temp file");
        self.paths.push(path.clone());
        Ok(path)
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.paths.iter().any(|p| p == path.as_ref())
    }

    /// Delete every recorded file. Failures are logged, never returned; the registry is
    /// emptied afterwards so a second call is a no-op.
    pub fn remove_all(&mut self) {
        for path in self.paths.drain(..) {
            match std::fs::remove_file(&path) {
                Ok(()) => debug!(path = %path.display(), "removed temp file"),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => warn!(path = %path.display(), error = %e, "failed to remove temp file"),
            }
        }
    }
}

impl Drop for TempFiles {
    fn drop(&mut self) {
        if !self.keep {
            self.remove_all();
        }
    }
}
