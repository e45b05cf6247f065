//! Insertion-ordered record store.
//!
//! Identifiers are assigned by the store, starting at 1. Enumeration
//! yields records in insertion order; deleting a record preserves the
//! relative order of the others. Oracle invocations never touch the
//! store directly, they operate on cloned snapshots.

use indexmap::IndexMap;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use tracing::{debug, info, warn};

use crate::error::StoreError;
use vectord_types::Record;

const DATA_FILE_EXT: &str = "json";

/// Thread-safe record collection with optional file persistence.
#[derive(Debug)]
pub struct RecordStore {
    records: RwLock<IndexMap<u64, Record>>,
    next_id: AtomicU64,
    /// Directory holding one `<id>.json` per record; `None` disables
    /// persistence.
    data_dir: Option<PathBuf>,
}

impl RecordStore {
    /// Create a store with no backing files.
    pub fn in_memory() -> Self {
        Self {
            records: RwLock::new(IndexMap::new()),
            next_id: AtomicU64::new(1),
            data_dir: None,
        }
    }

    /// Open a persistent store rooted at `data_dir`, creating the
    /// record directory if needed and loading every data file in it.
    ///
    /// Files are loaded in ascending identifier order so enumeration
    /// order is stable across reopen. The identifier counter is seeded
    /// past the highest identifier seen.
    pub fn open(data_dir: &Path) -> Result<Self, StoreError> {
        let records_dir = data_dir.join("records");
        fs::create_dir_all(&records_dir)?;

        let mut loaded: Vec<(u64, Record, PathBuf)> = Vec::new();
        for entry in fs::read_dir(&records_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(DATA_FILE_EXT) {
                continue;
            }
            let stem_id: u64 = match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => stem.parse().map_err(|_| StoreError::CorruptFile {
                    path: path.clone(),
                    reason: "file stem is not a numeric identifier".to_string(),
                })?,
                None => continue,
            };

            let bytes = fs::read(&path)?;
            let record = Record::from_bytes(&bytes).map_err(|e| StoreError::CorruptFile {
                path: path.clone(),
                reason: e.to_string(),
            })?;

            if record.id != stem_id {
                return Err(StoreError::IdMismatch {
                    path,
                    expected: stem_id,
                    actual: record.id,
                });
            }
            loaded.push((stem_id, record, path));
        }

        if !loaded.is_empty() {
            info!("loading {} data files from {:?}", loaded.len(), records_dir);
        }
        loaded.sort_by_key(|(id, _, _)| *id);

        let mut records = IndexMap::with_capacity(loaded.len());
        let mut highest = 0;
        for (id, record, _) in loaded {
            records.insert(id, record);
            highest = highest.max(id);
        }

        Ok(Self {
            records: RwLock::new(records),
            next_id: AtomicU64::new(highest + 1),
            data_dir: Some(records_dir),
        })
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    /// True if no records are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Store a new record, assigning it the next identifier.
    ///
    /// The identifier on the input record is ignored. Returns the
    /// assigned identifier.
    pub fn create(&self, mut record: Record) -> Result<u64, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        record.id = id;

        let mut records = self.records.write().unwrap();
        if records.contains_key(&id) {
            return Err(StoreError::DuplicateId(id));
        }
        self.flush(&record)?;
        records.insert(id, record);
        debug!("created record {}", id);
        Ok(id)
    }

    /// Update an existing record. Only the provided fields are
    /// replaced; passing `None` keeps the stored value.
    pub fn update(
        &self,
        id: u64,
        data: Option<Vec<f32>>,
        meta: Option<HashMap<String, String>>,
    ) -> Result<Record, StoreError> {
        let mut records = self.records.write().unwrap();
        let stored = records.get_mut(&id).ok_or(StoreError::NotFound(id))?;

        if let Some(data) = data {
            stored.data = data;
        }
        if let Some(meta) = meta {
            stored.meta = meta;
        }

        let updated = stored.clone();
        self.flush(&updated)?;
        Ok(updated)
    }

    /// Look up a record by identifier.
    pub fn find(&self, id: u64) -> Option<Record> {
        self.records.read().unwrap().get(&id).cloned()
    }

    /// Remove a record, returning it if it existed.
    pub fn delete(&self, id: u64) -> Option<Record> {
        let mut records = self.records.write().unwrap();
        let removed = records.shift_remove(&id)?;

        if let Some(dir) = &self.data_dir {
            let path = Self::path_for(dir, id);
            if let Err(e) = fs::remove_file(&path) {
                warn!("could not remove data file {:?}: {}", path, e);
            }
        }
        Some(removed)
    }

    /// Snapshot of every record, in insertion order.
    pub fn records(&self) -> Vec<Record> {
        self.records.read().unwrap().values().cloned().collect()
    }

    fn path_for(dir: &Path, id: u64) -> PathBuf {
        dir.join(format!("{}.{}", id, DATA_FILE_EXT))
    }

    fn flush(&self, record: &Record) -> Result<(), StoreError> {
        if let Some(dir) = &self.data_dir {
            let bytes = record.to_bytes()?;
            fs::write(Self::path_for(dir, record.id), bytes)?;
        }
        Ok(())
    }
}
