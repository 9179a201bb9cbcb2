//! Persisted answer state.
//!
//! Answers live in a small key-value store under two fixed keys. The store
//! is loaded once when opened and written after every mutation. Storage
//! failures never reach the classifiers: an unreadable store loads as empty
//! and a failed write is logged and otherwise ignored.

use crate::answer::{Motive, Stance, Tri};
use crate::errors::{Error, Result, ResultExt};
use crate::history::{classify_historical, HistoricalAnswers, HistoricalField, HistoricalResult};
use crate::woke::{score_woke, WokeAnswers, WokeField, WokeResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const HISTORICAL_KEY: &str = "colonizer-app-answers-v3";
pub const WOKE_KEY: &str = "colonizer-app-woke-v1";

/// Minimal string key-value storage.
pub trait KeyValueStore {
    /// Returns `None` if the key doesn't exist.
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error if the value cannot be made durable.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory store, lost when dropped.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    data: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.data.remove(key);
        Ok(())
    }
}

/// A JSON object on disk mapping keys to serialized values.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    data: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`. A missing file is an empty store; an
    /// unreadable or malformed one is logged and treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                log::warn!("Ignoring malformed answer store {}: {}", path.display(), e);
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No answer store at {}", path.display());
                BTreeMap::new()
            }
            Err(e) => {
                log::warn!("Failed to read answer store {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };
        Self { path, data }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::io_at(e, parent))?;
        }
        let contents = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, contents).map_err(|e| Error::io_at(e, &self.path))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.data.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.data.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.data.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

/// Result of recomputing after a single answer changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Historical(HistoricalResult),
    Woke(WokeResult),
}

/// Which stored answer set to clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetScope {
    Historical,
    Woke,
    All,
}

/// Both answer records plus the store they persist to.
pub struct AnswerStore<S: KeyValueStore> {
    backend: S,
    historical: HistoricalAnswers,
    woke: WokeAnswers,
}

impl AnswerStore<FileStore> {
    pub fn open_file(path: impl Into<PathBuf>) -> Self {
        Self::load(FileStore::open(path))
    }
}

impl<S: KeyValueStore> AnswerStore<S> {
    /// Loads both records; anything missing or unreadable starts empty.
    pub fn load(backend: S) -> Self {
        let historical = load_entry(&backend, HISTORICAL_KEY);
        let woke = load_entry(&backend, WOKE_KEY);
        Self {
            backend,
            historical,
            woke,
        }
    }

    pub fn historical(&self) -> &HistoricalAnswers {
        &self.historical
    }

    pub fn woke(&self) -> &WokeAnswers {
        &self.woke
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn historical_result(&self) -> HistoricalResult {
        classify_historical(&self.historical)
    }

    pub fn woke_result(&self) -> WokeResult {
        score_woke(&self.woke)
    }

    /// Applies `f`, persists the record and returns the new classification.
    pub fn update_historical(&mut self, f: impl FnOnce(&mut HistoricalAnswers)) -> HistoricalResult {
        f(&mut self.historical);
        save_entry(&mut self.backend, HISTORICAL_KEY, &self.historical);
        self.historical_result()
    }

    /// Applies `f`, persists the record and returns the new score.
    pub fn update_woke(&mut self, f: impl FnOnce(&mut WokeAnswers)) -> WokeResult {
        f(&mut self.woke);
        save_entry(&mut self.backend, WOKE_KEY, &self.woke);
        self.woke_result()
    }

    /// Sets one answer addressed by question id. Values are normalized:
    /// unrecognized tri-state or motive text becomes unknown, a stance is
    /// clamped to `0..=4` and a non-numeric stance clears the answer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownQuestion`] if no question has that id.
    pub fn set_answer(&mut self, id: &str, value: &str) -> Result<Classification> {
        if let Some(field) = HistoricalField::parse(id) {
            let tri = Tri::parse(value);
            return Ok(Classification::Historical(
                self.update_historical(|a| a.set(field, tri)),
            ));
        }
        if let Some(field) = WokeField::parse(id) {
            let tri = Tri::parse(value);
            return Ok(Classification::Woke(self.update_woke(|a| a.set(field, tri))));
        }
        match id {
            "migration_motive" => {
                let motive = Motive::parse(value);
                Ok(Classification::Woke(
                    self.update_woke(|a| a.migration_motive = Some(motive)),
                ))
            }
            "infra2" => {
                let stance = Stance::parse(value);
                if stance.is_none() {
                    log::warn!("Non-numeric infra2 value {:?}; clearing answer", value);
                }
                Ok(Classification::Woke(self.update_woke(|a| a.infra2 = stance)))
            }
            other => Err(Error::UnknownQuestion(other.to_string())),
        }
    }

    pub fn reset(&mut self, scope: ResetScope) {
        if matches!(scope, ResetScope::Historical | ResetScope::All) {
            self.historical = HistoricalAnswers::default();
            remove_entry(&mut self.backend, HISTORICAL_KEY);
        }
        if matches!(scope, ResetScope::Woke | ResetScope::All) {
            self.woke = WokeAnswers::default();
            remove_entry(&mut self.backend, WOKE_KEY);
        }
    }
}

fn load_entry<S: KeyValueStore, T: DeserializeOwned + Default>(backend: &S, key: &str) -> T {
    let Some(raw) = backend.get(key) else {
        return T::default();
    };
    serde_json::from_str(&raw).unwrap_or_else(|e| {
        log::warn!("Ignoring unreadable stored answers under {}: {}", key, e);
        T::default()
    })
}

fn save_entry<S: KeyValueStore, T: Serialize>(backend: &mut S, key: &str, value: &T) {
    let outcome = serde_json::to_string(value)
        .map_err(Error::from)
        .and_then(|json| backend.set(key, &json))
        .context(format!("saving {key}"));
    if let Err(e) = outcome {
        log::warn!("{}", e);
    }
}

fn remove_entry<S: KeyValueStore>(backend: &mut S, key: &str) {
    if let Err(e) = backend.remove(key) {
        log::warn!("Failed to clear answers under {}: {}", key, e);
    }
}
