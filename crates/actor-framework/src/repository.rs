//! # Repositories
//!
//! Where an actor's rows live between restarts. The actor keeps its working set in
//! memory and hands the repository a full snapshot after every successful mutation;
//! a failed commit makes the actor roll the mutation back.

use crate::error::StorageError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// State loaded when an actor starts.
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    /// Next id the actor will hand out.
    pub next_id: u32,
    pub rows: Vec<T>,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: Vec::new(),
        }
    }
}

/// Backing store for a single actor.
pub trait Repository<T>: Send + 'static {
    /// Reads the persisted state. A store that has never been written yields
    /// an empty snapshot.
    fn load(&mut self) -> Result<Snapshot<T>, StorageError>;

    /// Persists the complete row set together with the id counter.
    fn commit(&mut self, next_id: u32, rows: &[&T]) -> Result<(), StorageError>;
}

/// Keeps nothing. State lives only as long as the actor.
#[derive(Debug, Clone, Copy, Default)]
pub struct InMemoryRepository;

impl<T: Send + 'static> Repository<T> for InMemoryRepository {
    fn load(&mut self) -> Result<Snapshot<T>, StorageError> {
        Ok(Snapshot::default())
    }

    fn commit(&mut self, _next_id: u32, _rows: &[&T]) -> Result<(), StorageError> {
        Ok(())
    }
}

/// One JSON document per actor, replaced atomically on every commit
/// (written to a sibling temp file, then renamed over the original).
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

#[derive(Serialize)]
struct StoredSnapshot<'a, T> {
    next_id: u32,
    rows: &'a [&'a T],
}

#[derive(Deserialize)]
struct LoadedSnapshot<T> {
    next_id: u32,
    rows: Vec<T>,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T> Repository<T> for JsonFileRepository
where
    T: Serialize + DeserializeOwned + Send + 'static,
{
    fn load(&mut self) -> Result<Snapshot<T>, StorageError> {
        match fs::read(&self.path) {
            Ok(bytes) => {
                let loaded: LoadedSnapshot<T> = serde_json::from_slice(&bytes)?;
                Ok(Snapshot {
                    next_id: loaded.next_id.max(1),
                    rows: loaded.rows,
                })
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Snapshot::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn commit(&mut self, next_id: u32, rows: &[&T]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let bytes = serde_json::to_vec_pretty(&StoredSnapshot { next_id, rows })?;
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, bytes)?;
        fs::rename(&staging, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Row {
        id: u32,
        label: String,
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut repo = JsonFileRepository::new(dir.path().join("rows.json"));
        let snapshot: Snapshot<Row> = repo.load().unwrap();
        assert_eq!(snapshot.next_id, 1);
        assert!(snapshot.rows.is_empty());
    }

    #[test]
    fn commit_survives_a_fresh_repository() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("rows.json");
        let a = Row { id: 1, label: "lathe".into() };
        let b = Row { id: 4, label: "press".into() };

        JsonFileRepository::new(&path).commit(5, &[&a, &b]).unwrap();

        let mut reopened = JsonFileRepository::new(&path);
        let snapshot: Snapshot<Row> = reopened.load().unwrap();
        assert_eq!(snapshot.next_id, 5);
        assert_eq!(snapshot.rows, vec![a, b]);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn corrupt_file_is_a_codec_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.json");
        fs::write(&path, b"{ not json").unwrap();

        let result: Result<Snapshot<Row>, _> = JsonFileRepository::new(&path).load();
        assert!(matches!(result, Err(StorageError::Codec(_))));
    }
}
