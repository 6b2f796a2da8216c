use crate::domain::{AppliedJobSet, StorageError, StorageResult};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Slot holding the applied-jobs list.
pub const APPLIED_JOBS_KEY: &str = "hireconnect:appliedJobs";

/// A local key-value store of string slots that survives across sessions.
pub trait SlotStorage {
    /// Reads a slot. `Ok(None)` means the slot has never been written.
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replaces the content of a slot.
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<T: SlotStorage + ?Sized> SlotStorage for &T {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).write(key, value)
    }
}

/// Stores each slot as a file under one directory.
#[derive(Debug, Clone)]
pub struct FileSlotStorage {
    dir: PathBuf,
}

impl FileSlotStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`. Characters that are not safe in file names become `_`.
    pub fn slot_path(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') { c } else { '_' })
            .collect();
        self.dir.join(format!("{name}.json"))
    }
}

impl SlotStorage for FileSlotStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => Err(StorageError::Corrupt(e.to_string())),
            Err(e) => Err(StorageError::Unavailable(e.to_string())),
        }
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| StorageError::Unavailable(e.to_string()))?;
        fs::write(self.slot_path(key), value).map_err(|e| StorageError::Unavailable(e.to_string()))
    }
}

/// In-process slots. Clones share the same underlying map, so a store
/// rebuilt from a clone sees everything written through the original.
#[derive(Debug, Clone, Default)]
pub struct MemorySlotStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySlotStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage with `key` already holding `value`.
    pub fn with_slot(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.slots.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }
}

impl SlotStorage for MemorySlotStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub fn encode_applied_jobs(set: &AppliedJobSet) -> StorageResult<String> {
    serde_json::to_string(set).map_err(|e| StorageError::Corrupt(format!("Serialization failed: {}", e)))
}

/// Parses a slot value. Anything other than a JSON array of integers is corrupt.
pub fn decode_applied_jobs(raw: &str) -> StorageResult<AppliedJobSet> {
    serde_json::from_str::<AppliedJobSet>(raw).map_err(|e| StorageError::Corrupt(format!("Invalid format - {}", e)))
}
