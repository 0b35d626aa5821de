//! Resumable enrichment result store.
//!
//! A single JSON object mapping `domain -> [rank, title]`. The whole mapping
//! is held in memory and rewritten after every `put`, through a temporary
//! sibling file and a rename, so an interrupted run keeps a complete prefix.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::{debug, info};
use tokio::fs;

use crate::error_handling::StorageError;

/// One persisted record: rank and title.
pub type Entry = (u32, String);

#[derive(Debug)]
pub struct ResultStore {
    path: PathBuf,
    entries: BTreeMap<String, Entry>,
}

impl ResultStore {
    /// Opens the store at `path`, creating `{}` if it does not exist.
    ///
    /// With `reset`, any existing content is discarded first.
    pub async fn open(path: &Path, reset: bool) -> Result<Self, StorageError> {
        let mut store = Self {
            path: path.to_path_buf(),
            entries: BTreeMap::new(),
        };
        if reset {
            store.reset().await?;
        } else {
            store.load().await?;
        }
        Ok(store)
    }

    /// Re-reads the mapping from disk. A missing file is an empty store and
    /// is created.
    pub async fn load(&mut self) -> Result<&BTreeMap<String, Entry>, StorageError> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => {
                self.entries =
                    serde_json::from_str(&content).map_err(|source| StorageError::Parse {
                        path: self.path.clone(),
                        source,
                    })?;
                info!(
                    "Loaded {} existing results from {:?}",
                    self.entries.len(),
                    self.path
                );
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                self.entries.clear();
                self.persist().await?;
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        }
        Ok(&self.entries)
    }

    /// Truncates the store to `{}` on disk and in memory.
    pub async fn reset(&mut self) -> Result<(), StorageError> {
        self.entries.clear();
        self.persist().await?;
        info!("Reset result store {:?}", self.path);
        Ok(())
    }

    /// Inserts or replaces one record and rewrites the file before returning.
    pub async fn put(&mut self, domain: &str, rank: u32, title: &str) -> Result<(), StorageError> {
        self.entries
            .insert(domain.to_string(), (rank, title.to_string()));
        self.persist().await
    }

    pub fn get(&self, domain: &str) -> Option<&Entry> {
        self.entries.get(domain)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The rank the next ranked domain receives: one past the number of
    /// records already present.
    pub fn next_rank(&self) -> u32 {
        u32::try_from(self.entries.len())
            .unwrap_or(u32::MAX)
            .saturating_add(1)
    }

    pub fn entries(&self) -> &BTreeMap<String, Entry> {
        &self.entries
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self) -> Result<(), StorageError> {
        let write_err = |source: std::io::Error| StorageError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(write_err)?;
        }

        let json = serde_json::to_string(&self.entries).map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })?;

        let tmp = temp_path(&self.path);
        fs::write(&tmp, json).await.map_err(write_err)?;
        fs::rename(&tmp, &self.path).await.map_err(write_err)?;
        debug!("Wrote {} results to {:?}", self.entries.len(), self.path);
        Ok(())
    }
}

/// Reads a result store without creating or modifying it.
pub async fn read_results(path: &Path) -> Result<BTreeMap<String, Entry>, StorageError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| StorageError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_str(&content).map_err(|source| StorageError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
