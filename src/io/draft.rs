// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Draft persistence.
//!
//! The whole play collection is stored as one serialized document in a
//! named key-value slot. [`DraftStore::save_draft`] is the only writer of
//! that slot. When no usable draft exists the collection is seeded from a
//! [`PlaySource`] and persisted straight away, so later sessions start from
//! the same snapshot.

use crate::error::{PlaybookError, Result};
use crate::io::serialization::{parse_plays, to_json, Format};
use crate::io::source::PlaySource;
use crate::models::play::Play;
use std::io::{self, Write};
use std::path::PathBuf;

/// Minimal persistent key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> io::Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
    fn remove(&mut self, key: &str) -> io::Result<()>;
}

/// Key-value slots stored as files in one directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        match std::fs::read_to_string(self.slot_path(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Write through a temporary file in the same directory, then rename,
    /// so a failed write never leaves a truncated slot behind.
    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.flush()?;
        tmp.persist(self.slot_path(key)).map_err(|e| e.error)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        match std::fs::remove_file(self.slot_path(key)) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

/// Where a bootstrapped collection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Draft,
    Fallback,
    Empty,
}

/// Outcome of bootstrapping the session's collection.
#[derive(Debug)]
pub struct Bootstrap {
    pub plays: Vec<Play>,
    pub origin: Origin,
    /// Failure the user should hear about, if any.
    pub notice: Option<PlaybookError>,
}

/// The draft slot of a key-value store.
#[derive(Debug, Clone)]
pub struct DraftStore<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> DraftStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Read the draft. Missing, unreadable or malformed slots all read as
    /// "no draft".
    pub fn load_draft(&self) -> Option<Vec<Play>> {
        let text = match self.store.get(&self.key) {
            Ok(Some(text)) => text,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("Could not read draft {:?}: {}", self.key, e);
                return None;
            }
        };

        match parse_plays(&text, Format::Json) {
            Ok(plays) => {
                log::info!("Loaded draft {:?} with {} plays", self.key, plays.len());
                Some(plays)
            }
            Err(e) => {
                log::warn!("Ignoring malformed draft {:?}: {}", self.key, e);
                None
            }
        }
    }

    /// Overwrite the draft with the full collection.
    pub fn save_draft(&mut self, plays: &[Play]) -> Result<()> {
        let json = to_json(plays)
            .map_err(|e| PlaybookError::StorageWriteFailure(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        self.store.set(&self.key, &json).map_err(|e| {
            log::error!("Failed to save draft {:?}: {}", self.key, e);
            PlaybookError::StorageWriteFailure(e)
        })?;
        log::debug!("Saved draft {:?} ({} plays)", self.key, plays.len());
        Ok(())
    }

    /// Clear the draft slot. The caller re-bootstraps afterwards.
    pub fn reset_draft(&mut self) -> Result<()> {
        self.store
            .remove(&self.key)
            .map_err(PlaybookError::StorageWriteFailure)?;
        log::info!("Cleared draft {:?}", self.key);
        Ok(())
    }

    /// Load the read-only baseline collection.
    pub fn load_fallback(&self, source: &dyn PlaySource) -> Result<Vec<Play>> {
        source.load()
    }

    /// Turn a fallback load into the session's collection, persisting it as
    /// the new draft baseline on success.
    pub fn adopt_fallback(&mut self, loaded: Result<Vec<Play>>) -> Bootstrap {
        match loaded {
            Ok(plays) => {
                let notice = self.save_draft(&plays).err();
                Bootstrap {
                    plays,
                    origin: Origin::Fallback,
                    notice,
                }
            }
            Err(e) => {
                log::warn!("Falling back to an empty collection: {}", e);
                Bootstrap {
                    plays: Vec::new(),
                    origin: Origin::Empty,
                    notice: Some(e),
                }
            }
        }
    }
}

/// Prefer a non-empty draft; otherwise seed from the fallback source.
pub fn bootstrap<S: KeyValueStore>(drafts: &mut DraftStore<S>, source: &dyn PlaySource) -> Bootstrap {
    if let Some(plays) = drafts.load_draft().filter(|p| !p.is_empty()) {
        return Bootstrap {
            plays,
            origin: Origin::Draft,
            notice: None,
        };
    }
    log::info!("No draft found, loading {}", source.describe());
    let loaded = drafts.load_fallback(source);
    drafts.adopt_fallback(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::source::FileSource;
    use std::cell::Cell;
    use std::collections::HashMap;

    const KEY: &str = "bf_playbook_plays_v1";

    /// In-memory slots for tests.
    #[derive(Debug, Clone, Default)]
    pub struct MemoryStore {
        slots: HashMap<String, String>,
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> io::Result<Option<String>> {
            Ok(self.slots.get(key).cloned())
        }

        fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
            self.slots.insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&mut self, key: &str) -> io::Result<()> {
            self.slots.remove(key);
            Ok(())
        }
    }

    /// Fixed collection that counts how often it is read.
    struct CountingSource {
        plays: Vec<Play>,
        loads: Cell<usize>,
    }

    impl CountingSource {
        fn new(plays: Vec<Play>) -> Self {
            Self {
                plays,
                loads: Cell::new(0),
            }
        }
    }

    impl PlaySource for CountingSource {
        fn load(&self) -> Result<Vec<Play>> {
            self.loads.set(self.loads.get() + 1);
            Ok(self.plays.clone())
        }

        fn describe(&self) -> String {
            "counting source".to_string()
        }
    }

    /// Store whose writes always fail, as if over quota.
    struct FullStore;

    impl KeyValueStore for FullStore {
        fn get(&self, _key: &str) -> io::Result<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "quota exceeded"))
        }

        fn remove(&mut self, _key: &str) -> io::Result<()> {
            Ok(())
        }
    }

    fn plays() -> Vec<Play> {
        vec![
            Play {
                id: "1".to_string(),
                name: "0 Bal".to_string(),
                defense: "6:0".to_string(),
                ..Default::default()
            },
            Play {
                id: "2".to_string(),
                name: "Lerohanás jobb".to_string(),
                situation: "Lerohanás".to_string(),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_missing_slot_is_no_draft() {
        let drafts = DraftStore::new(MemoryStore::default(), KEY);
        assert!(drafts.load_draft().is_none());
    }

    #[test]
    fn test_malformed_slot_is_no_draft() {
        let mut store = MemoryStore::default();
        store.set(KEY, "{not json").unwrap();
        assert!(DraftStore::new(store.clone(), KEY).load_draft().is_none());

        store.set(KEY, r#"{"id": 1}"#).unwrap();
        assert!(DraftStore::new(store, KEY).load_draft().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let mut drafts = DraftStore::new(MemoryStore::default(), KEY);
        drafts.save_draft(&plays()).unwrap();
        assert_eq!(drafts.load_draft(), Some(plays()));
    }

    #[test]
    fn test_reset_clears_slot() {
        let mut drafts = DraftStore::new(MemoryStore::default(), KEY);
        drafts.save_draft(&plays()).unwrap();
        drafts.reset_draft().unwrap();
        assert!(drafts.load_draft().is_none());
    }

    #[test]
    fn test_write_failure_is_reported() {
        let mut drafts = DraftStore::new(FullStore, KEY);
        let collection = plays();
        let err = drafts.save_draft(&collection).unwrap_err();
        assert!(matches!(err, PlaybookError::StorageWriteFailure(_)));
        assert_eq!(collection, plays());
    }

    #[test]
    fn test_bootstrap_persists_fallback() {
        let mut drafts = DraftStore::new(MemoryStore::default(), KEY);
        let source = CountingSource::new(plays());

        let first = bootstrap(&mut drafts, &source);
        assert_eq!(first.origin, Origin::Fallback);
        assert!(first.notice.is_none());
        assert_eq!(source.loads.get(), 1);

        let second = bootstrap(&mut drafts, &source);
        assert_eq!(second.origin, Origin::Draft);
        assert_eq!(second.plays, first.plays);
        assert_eq!(source.loads.get(), 1);
    }

    #[test]
    fn test_bootstrap_prefers_existing_draft() {
        let mut drafts = DraftStore::new(MemoryStore::default(), KEY);
        drafts.save_draft(&plays()[..1]).unwrap();
        let source = CountingSource::new(plays());

        let result = bootstrap(&mut drafts, &source);
        assert_eq!(result.origin, Origin::Draft);
        assert_eq!(result.plays.len(), 1);
        assert_eq!(source.loads.get(), 0);
    }

    #[test]
    fn test_bootstrap_empty_draft_reseeds() {
        let mut drafts = DraftStore::new(MemoryStore::default(), KEY);
        drafts.save_draft(&[]).unwrap();
        let source = CountingSource::new(plays());

        let result = bootstrap(&mut drafts, &source);
        assert_eq!(result.origin, Origin::Fallback);
        assert_eq!(result.plays, plays());
    }

    #[test]
    fn test_bootstrap_unavailable_source_is_empty() {
        let mut drafts = DraftStore::new(MemoryStore::default(), KEY);
        let source = FileSource::new("/nonexistent/plays.json");

        let result = bootstrap(&mut drafts, &source);
        assert_eq!(result.origin, Origin::Empty);
        assert!(result.plays.is_empty());
        assert!(matches!(
            result.notice,
            Some(PlaybookError::SourceUnavailable { .. })
        ));
        assert!(drafts.load_draft().is_none());
    }

    #[test]
    fn test_bootstrap_keeps_plays_when_save_fails() {
        let mut drafts = DraftStore::new(FullStore, KEY);
        let source = CountingSource::new(plays());

        let result = bootstrap(&mut drafts, &source);
        assert_eq!(result.plays, plays());
        assert!(matches!(
            result.notice,
            Some(PlaybookError::StorageWriteFailure(_))
        ));
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("drafts"));

        assert_eq!(store.get(KEY).unwrap(), None);
        store.set(KEY, "[]").unwrap();
        store.set(KEY, "[1]").unwrap();
        assert_eq!(store.get(KEY).unwrap().as_deref(), Some("[1]"));

        store.remove(KEY).unwrap();
        store.remove(KEY).unwrap();
        assert_eq!(store.get(KEY).unwrap(), None);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let mut drafts = DraftStore::new(FileStore::new(dir.path()), KEY);
        drafts.save_draft(&plays()).unwrap();

        let reopened = DraftStore::new(FileStore::new(dir.path()), KEY);
        assert_eq!(reopened.load_draft(), Some(plays()));
    }
}
