//! Writer for the persisted domain sequence.

use std::path::{Path, PathBuf};

use tokio::fs::{self, File};
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::config::DOMAIN_LIST_DELIMITER;
use crate::error_handling::StorageError;

/// Buffered writer producing one delimiter-joined list of labels.
///
/// `finish` consumes the writer, so the output is closed at most once; the
/// import calls it on every exit path so it is also closed at least once.
pub struct DomainListWriter {
    path: PathBuf,
    inner: BufWriter<File>,
    written: usize,
}

impl DomainListWriter {
    /// Creates the output file, discarding any previous list at `path`.
    pub async fn create(path: &Path) -> Result<Self, StorageError> {
        let write_err = |source: std::io::Error| StorageError::Write {
            path: path.to_path_buf(),
            source,
        };

        match fs::remove_file(path).await {
            Ok(()) => log::debug!("Removed previous domain list {:?}", path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(write_err(e)),
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(write_err)?;
        }
        let file = File::create(path).await.map_err(write_err)?;

        Ok(Self {
            path: path.to_path_buf(),
            inner: BufWriter::new(file),
            written: 0,
        })
    }

    pub async fn push(&mut self, label: &str) -> Result<(), StorageError> {
        if self.written > 0 {
            self.inner
                .write_all(DOMAIN_LIST_DELIMITER.as_bytes())
                .await
                .map_err(|source| self.write_error(source))?;
        }
        self.inner
            .write_all(label.as_bytes())
            .await
            .map_err(|source| self.write_error(source))?;
        self.written += 1;
        Ok(())
    }

    /// Number of labels written so far.
    pub fn len(&self) -> usize {
        self.written
    }

    pub fn is_empty(&self) -> bool {
        self.written == 0
    }

    /// Flushes and closes the file, returning the number of labels written.
    pub async fn finish(mut self) -> Result<usize, StorageError> {
        self.inner
            .flush()
            .await
            .map_err(|source| self.write_error(source))?;
        self.inner
            .shutdown()
            .await
            .map_err(|source| self.write_error(source))?;
        log::info!("Output file: {:?} ({} domains)", self.path, self.written);
        Ok(self.written)
    }

    fn write_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

/// Reads a persisted domain sequence back into memory.
///
/// # Errors
///
/// Returns `StorageError::Read` if the file cannot be read.
pub async fn load_domain_list(path: &Path) -> Result<Vec<String>, StorageError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| StorageError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(content
        .trim()
        .split(DOMAIN_LIST_DELIMITER)
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(String::from)
        .collect())
}
