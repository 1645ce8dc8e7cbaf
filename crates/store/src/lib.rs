//! Persisted high score.
//!
//! The score lives in a small JSON object under the platform data directory:
//!
//! ```text
//! <data dir>/Geometric Rain/GeometricRain.json   {"high_score": 12345}
//! ```
//!
//! A missing file is created as `{}` and a missing key reads as zero. Keys
//! this crate does not know about are carried through every save untouched.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Display name of the game; also the app-data folder name.
pub const GAME_NAME: &str = "Geometric Rain";

const HIGH_SCORE_KEY: &str = "high_score";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no platform data directory available")]
    NoDataDir,

    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed score file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Somewhere the all-time high score can be read from and written to.
pub trait HighScoreStore {
    fn load_high_score(&mut self) -> Result<u32, StoreError>;

    /// Persist `score` if it beats the stored value.
    ///
    /// Returns whether anything was written.
    fn save_high_score(&mut self, score: u32) -> Result<bool, StoreError>;
}

/// File name for a game name: spaces dropped, `.json` appended.
pub fn score_file_name(game_name: &str) -> String {
    let mut name: String = game_name.chars().filter(|c| *c != ' ').collect();
    name.push_str(".json");
    name
}

/// On-disk contents. Unknown keys survive a load/save cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct ScoreDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    high_score: Option<u32>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// High score kept in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonScoreFile {
    path: PathBuf,
}

impl JsonScoreFile {
    /// Open (creating if needed) the score file inside the platform data directory.
    pub fn open_default() -> Result<Self, StoreError> {
        let dir = default_data_dir().ok_or(StoreError::NoDataDir)?;
        Self::open_in(dir)
    }

    /// Open (creating if needed) the score file inside `dir`.
    pub fn open_in(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|source| StoreError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = dir.join(score_file_name(GAME_NAME));
        if !path.exists() {
            info!("creating score file {}", path.display());
            write_text(&path, "{}")?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<ScoreDocument, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            // Deleted while the game was running: start over empty.
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!("score file {} disappeared", self.path.display());
                return Ok(ScoreDocument::default());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_str(&text).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })
    }
}

impl HighScoreStore for JsonScoreFile {
    fn load_high_score(&mut self) -> Result<u32, StoreError> {
        let score = self.read_document()?.high_score.unwrap_or(0);
        info!("loaded {HIGH_SCORE_KEY} {score} from {}", self.path.display());
        Ok(score)
    }

    fn save_high_score(&mut self, score: u32) -> Result<bool, StoreError> {
        let mut doc = self.read_document()?;
        if score <= doc.high_score.unwrap_or(0) {
            return Ok(false);
        }

        doc.high_score = Some(score);
        let text = serde_json::to_string_pretty(&doc).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        write_text(&self.path, &text)?;
        info!("saved {HIGH_SCORE_KEY} {score} to {}", self.path.display());
        Ok(true)
    }
}

/// In-memory store, for tests and for running without a writable data dir.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryScoreStore {
    pub high_score: u32,
}

impl HighScoreStore for MemoryScoreStore {
    fn load_high_score(&mut self) -> Result<u32, StoreError> {
        Ok(self.high_score)
    }

    fn save_high_score(&mut self, score: u32) -> Result<bool, StoreError> {
        if score > self.high_score {
            self.high_score = score;
            return Ok(true);
        }
        Ok(false)
    }
}

/// `<platform data dir>/Geometric Rain`
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(GAME_NAME))
}

fn write_text(path: &Path, text: &str) -> Result<(), StoreError> {
    fs::write(path, text).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "geometric-rain-store-{tag}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn file_name_drops_spaces() {
        assert_eq!(score_file_name(GAME_NAME), "GeometricRain.json");
        assert_eq!(score_file_name("a b c"), "abc.json");
    }

    #[test]
    fn missing_file_is_created_empty() {
        let dir = temp_dir("create");
        let mut store = JsonScoreFile::open_in(&dir).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "{}");
        assert_eq!(store.load_high_score().unwrap(), 0);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn saves_only_improvements() {
        let dir = temp_dir("improve");
        let mut store = JsonScoreFile::open_in(&dir).unwrap();

        assert!(store.save_high_score(500).unwrap());
        assert_eq!(store.load_high_score().unwrap(), 500);

        assert!(!store.save_high_score(500).unwrap());
        assert!(!store.save_high_score(120).unwrap());
        assert_eq!(store.load_high_score().unwrap(), 500);

        assert!(store.save_high_score(501).unwrap());
        assert_eq!(store.load_high_score().unwrap(), 501);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn zero_is_never_written() {
        let dir = temp_dir("zero");
        let mut store = JsonScoreFile::open_in(&dir).unwrap();
        assert!(!store.save_high_score(0).unwrap());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "{}");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn unknown_keys_survive_a_save() {
        let dir = temp_dir("extra");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("GeometricRain.json");
        fs::write(&path, r#"{"volume": 7, "high_score": 10}"#).unwrap();

        let mut store = JsonScoreFile::open_in(&dir).unwrap();
        assert_eq!(store.load_high_score().unwrap(), 10);
        assert!(store.save_high_score(99).unwrap());

        let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["high_score"], 99);
        assert_eq!(value["volume"], 7);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = temp_dir("malformed");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("GeometricRain.json"), "not json").unwrap();

        let mut store = JsonScoreFile::open_in(&dir).unwrap();
        assert!(matches!(
            store.load_high_score(),
            Err(StoreError::Json { .. })
        ));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn memory_store_keeps_the_best() {
        let mut store = MemoryScoreStore::default();
        assert!(store.save_high_score(3).unwrap());
        assert!(!store.save_high_score(2).unwrap());
        assert_eq!(store.load_high_score().unwrap(), 3);
    }
}
