//! Document stores keyed by model id.
//!
//! Any store with read-by-key and whole-document overwrite-by-key satisfies
//! the contract. Futures are not `Send`: everything runs on the UI thread.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fnv::FnvHashMap;
use serde_json::Value;

use crate::constants::MODELS_COLLECTION;
use crate::error::StoreError;
use crate::record::{PersistedRecord, StoredDocument};

#[async_trait(?Send)]
pub trait ModelStore {
    /// `Ok(None)` when no document exists for `id`.
    async fn get(&self, id: &str) -> Result<Option<StoredDocument>, StoreError>;
    /// Replace the whole document for `id`.
    async fn put(&self, id: &str, record: &PersistedRecord) -> Result<(), StoreError>;
}

/// Document keys end up in paths and URLs, so keep them to a safe alphabet.
pub fn validate_key(id: &str) -> Result<(), StoreError> {
    let ok = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        && id != "."
        && id != "..";
    if ok {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(id.to_string()))
    }
}

/// In-process store. Holds raw JSON so tests can seed partial or broken documents.
#[derive(Default)]
pub struct MemoryStore {
    docs: RefCell<FnvHashMap<String, Value>>,
    writes: RefCell<Vec<(String, PersistedRecord)>>,
    fail_loads: Cell<bool>,
    fail_saves: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, id: &str, record: &PersistedRecord) -> Result<(), StoreError> {
        let value = serde_json::to_value(record)?;
        self.insert_raw(id, value);
        Ok(())
    }

    pub fn insert_raw(&self, id: &str, value: Value) {
        self.docs.borrow_mut().insert(id.to_string(), value);
    }

    pub fn raw(&self, id: &str) -> Option<Value> {
        self.docs.borrow().get(id).cloned()
    }

    pub fn record(&self, id: &str) -> Option<PersistedRecord> {
        self.raw(id).and_then(|v| serde_json::from_value(v).ok())
    }

    /// Every successful `put`, in completion order.
    pub fn writes(&self) -> Vec<(String, PersistedRecord)> {
        self.writes.borrow().clone()
    }

    pub fn set_fail_loads(&self, fail: bool) {
        self.fail_loads.set(fail);
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }
}

#[async_trait(?Send)]
impl ModelStore for MemoryStore {
    async fn get(&self, id: &str) -> Result<Option<StoredDocument>, StoreError> {
        if self.fail_loads.get() {
            return Err(StoreError::Transport("store unavailable".into()));
        }
        let Some(value) = self.raw(id) else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_value(value)?))
    }

    async fn put(&self, id: &str, record: &PersistedRecord) -> Result<(), StoreError> {
        if self.fail_saves.get() {
            return Err(StoreError::Transport("store unavailable".into()));
        }
        let value = serde_json::to_value(record)?;
        self.docs.borrow_mut().insert(id.to_string(), value);
        self.writes
            .borrow_mut()
            .push((id.to_string(), record.clone()));
        Ok(())
    }
}

/// One JSON file per model under `<root>/models/<id>.json`.
///
/// `get`/`put` use blocking `std::fs` calls, so they stall the executor
/// thread for the duration of the (small) read or write.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn document_path(&self, id: &str) -> Result<PathBuf, StoreError> {
        validate_key(id)?;
        Ok(self
            .root
            .join(MODELS_COLLECTION)
            .join(format!("{id}.json")))
    }
}

#[async_trait(?Send)]
impl ModelStore for FileStore {
    async fn get(&self, id: &str) -> Result<Option<StoredDocument>, StoreError> {
        let path = self.document_path(id)?;
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&text)?))
    }

    async fn put(&self, id: &str, record: &PersistedRecord) -> Result<(), StoreError> {
        let path = self.document_path(id)?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let body = serde_json::to_vec_pretty(record)?;
        // write-then-rename so a reader never sees half a document
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, body)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }
}
