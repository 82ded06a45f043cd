//! Line-by-line access to a score file on disk.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ReportError, Result};

/// Buffered line iterator over a score file.
///
/// The file handle lives inside the iterator and is closed when it is
/// dropped, whether iteration finished, failed or was abandoned early.
pub struct RecordSource {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
}

impl RecordSource {
    /// Opens `path` for reading.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Io`] if the file is missing or unreadable.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| ReportError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "Opened record source");

        Ok(Self {
            path,
            lines: BufReader::new(file).lines(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Iterator for RecordSource {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        Some(line.map_err(|source| ReportError::Io {
            path: self.path.clone(),
            source,
        }))
    }
}
