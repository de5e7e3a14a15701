//! Persistent high score.
//!
//! The save file is a flat JSON object; only [`HIGH_SCORE_KEY`] is ours and
//! any other keys found in it are written back untouched.

use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const HIGH_SCORE_KEY: &str = "snakeHighScore";
pub const DEFAULT_SAVE_FILE: &str = "snake_save.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("save file i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("save file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Durable home of the high score
pub trait HighScoreStore {
    /// `Ok(None)` when nothing has been saved yet
    fn load(&self) -> Result<Option<u32>, StoreError>;

    fn save(&mut self, high_score: u32) -> Result<(), StoreError>;
}

/// JSON key-value file on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<Option<Map<String, Value>>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&text)?))
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&self) -> Result<Option<u32>, StoreError> {
        let Some(map) = self.read_map()? else {
            return Ok(None);
        };
        Ok(map
            .get(HIGH_SCORE_KEY)
            .and_then(Value::as_u64)
            .map(|v| v.min(u32::MAX as u64) as u32))
    }

    fn save(&mut self, high_score: u32) -> Result<(), StoreError> {
        // a corrupt file is replaced rather than blocking the save
        let mut map = self.read_map().unwrap_or_default().unwrap_or_default();
        map.insert(HIGH_SCORE_KEY.to_string(), Value::from(high_score));
        fs::write(&self.path, serde_json::to_string_pretty(&map)?)?;
        Ok(())
    }
}

/// In-memory store for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub value: Option<u32>,
    pub writes: usize,
}

impl MemoryStore {
    pub fn with_value(value: u32) -> Self {
        Self {
            value: Some(value),
            writes: 0,
        }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<Option<u32>, StoreError> {
        Ok(self.value)
    }

    fn save(&mut self, high_score: u32) -> Result<(), StoreError> {
        self.value = Some(high_score);
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("none.json"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("save.json"));
        store.save(120).unwrap();
        assert_eq!(store.load().unwrap(), Some(120));

        let text = fs::read_to_string(store.path()).unwrap();
        assert!(text.contains(HIGH_SCORE_KEY));
    }

    #[test]
    fn test_save_preserves_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("save.json");
        fs::write(&path, r#"{"volume": 0.5, "snakeHighScore": 40}"#).unwrap();

        let mut store = JsonFileStore::new(&path);
        assert_eq!(store.load().unwrap(), Some(40));
        store.save(90).unwrap();

        let map: Map<String, Value> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(map["volume"], Value::from(0.5));
        assert_eq!(map[HIGH_SCORE_KEY], Value::from(90));
    }

    #[test]
    fn test_corrupt_file_errors_on_load_but_save_recovers() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("save.json");
        fs::write(&path, "{{{").unwrap();

        let mut store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(StoreError::Json(_))));
        store.save(10).unwrap();
        assert_eq!(store.load().unwrap(), Some(10));
    }

    #[test]
    fn test_non_numeric_value_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("save.json");
        fs::write(&path, r#"{"snakeHighScore": "lots"}"#).unwrap();
        assert_eq!(JsonFileStore::new(&path).load().unwrap(), None);
    }
}
