//! High-score persistence
//!
//! The only thing the game keeps between runs is one integer. It lives in a
//! small JSON object under a fixed key, so other values can share the file
//! later without breaking old saves.

use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Key the high score is stored under
pub const HIGH_SCORE_KEY: &str = "snakeHighScore";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access score file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode score file")]
    Encode(#[from] serde_json::Error),
}

/// Durable storage for the high score
pub trait ScoreStore {
    /// Stored high score, 0 when nothing has been stored yet
    fn get(&self) -> u32;

    fn set(&mut self, score: u32) -> Result<(), StoreError>;
}

/// Keeps the high score in memory only
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryScoreStore {
    pub value: Option<u32>,
    /// Number of successful `set` calls
    pub writes: usize,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(score: u32) -> Self {
        Self {
            value: Some(score),
            writes: 0,
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn get(&self) -> u32 {
        self.value.unwrap_or(0)
    }

    fn set(&mut self, score: u32) -> Result<(), StoreError> {
        self.value = Some(score);
        self.writes += 1;
        Ok(())
    }
}

/// Keeps the high score in a JSON file
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/grid_snake/high_score.json`, or the working directory when
    /// the platform has no data directory
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join("grid_snake"))
            .unwrap_or_default()
            .join("high_score.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_object(&self) -> Option<Map<String, Value>> {
        let text = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => Some(map),
            Ok(_) | Err(_) => {
                tracing::warn!(path = ?self.path, "ignoring unreadable score file");
                None
            }
        }
    }
}

impl ScoreStore for FileScoreStore {
    fn get(&self) -> u32 {
        self.read_object()
            .and_then(|map| map.get(HIGH_SCORE_KEY).and_then(Value::as_u64))
            .and_then(|score| u32::try_from(score).ok())
            .unwrap_or(0)
    }

    fn set(&mut self, score: u32) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let mut map = self.read_object().unwrap_or_default();
        map.insert(HIGH_SCORE_KEY.to_string(), Value::from(score));
        let json = serde_json::to_string_pretty(&Value::Object(map))?;

        std::fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_defaults_to_zero() {
        let mut store = MemoryScoreStore::new();
        assert_eq!(store.get(), 0);

        store.set(7).unwrap();
        assert_eq!(store.get(), 7);
        assert_eq!(store.writes, 1);
    }

    #[test]
    fn test_missing_file_reads_zero() {
        let dir = TempDir::new().unwrap();
        let store = FileScoreStore::new(dir.path().join("none.json"));
        assert_eq!(store.get(), 0);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("high_score.json");

        let mut store = FileScoreStore::new(&path);
        store.set(12).unwrap();

        let reopened = FileScoreStore::new(&path);
        assert_eq!(reopened.get(), 12);

        let raw: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw[HIGH_SCORE_KEY], Value::from(12));
    }

    #[test]
    fn test_file_store_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores.json");
        std::fs::write(&path, r#"{"theme": "dark", "snakeHighScore": 3}"#).unwrap();

        let mut store = FileScoreStore::new(&path);
        assert_eq!(store.get(), 3);
        store.set(4).unwrap();

        let raw: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["theme"], Value::from("dark"));
        assert_eq!(raw[HIGH_SCORE_KEY], Value::from(4));
    }

    #[test]
    fn test_corrupt_file_reads_zero_and_is_overwritten() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores.json");
        std::fs::write(&path, "not json").unwrap();

        let mut store = FileScoreStore::new(&path);
        assert_eq!(store.get(), 0);
        store.set(1).unwrap();
        assert_eq!(store.get(), 1);
    }
}
