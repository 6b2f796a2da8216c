//! The applied-jobs store.
//!
//! Single source of truth for which postings the user has applied to.
//! Views get the store by reference and either query it directly or poll
//! [`AppliedJobsStore::revision`] to learn when membership has changed.
//!
//! Persistence is best-effort: read and write failures are logged and
//! otherwise ignored, and the in-memory set always wins.

use crate::domain::{AppliedJobSet, JobId};
use crate::infrastructure::{decode_applied_jobs, encode_applied_jobs, SlotStorage, APPLIED_JOBS_KEY};
use tracing::{debug, warn};

/// Reads the persisted applied-jobs slot.
///
/// Missing, unreadable or malformed content all yield an empty set.
pub fn load_applied_jobs<S: SlotStorage>(storage: &S) -> AppliedJobSet {
    let raw = match storage.read(APPLIED_JOBS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key = APPLIED_JOBS_KEY, "no applied jobs persisted yet");
            return AppliedJobSet::new();
        }
        Err(e) => {
            warn!(key = APPLIED_JOBS_KEY, error = %e, "could not read applied jobs, starting empty");
            return AppliedJobSet::new();
        }
    };

    match decode_applied_jobs(&raw) {
        Ok(set) => {
            debug!(count = set.len(), "loaded applied jobs");
            set
        }
        Err(e) => {
            warn!(key = APPLIED_JOBS_KEY, error = %e, "discarding unreadable applied jobs");
            AppliedJobSet::new()
        }
    }
}

#[derive(Debug)]
pub struct AppliedJobsStore<S: SlotStorage> {
    storage: S,
    applied: AppliedJobSet,
    revision: u64,
}

impl<S: SlotStorage> AppliedJobsStore<S> {
    /// Builds a store from whatever `storage` holds. Never fails.
    pub fn initialize(storage: S) -> Self {
        let applied = load_applied_jobs(&storage);
        Self {
            storage,
            applied,
            revision: 0,
        }
    }

    /// Marks `id` as applied and returns the resulting set.
    ///
    /// Applying an id that is already a member changes nothing and writes
    /// nothing. Otherwise the full set is written to the slot once.
    pub fn apply(&mut self, id: JobId) -> &AppliedJobSet {
        if self.applied.insert(id) {
            self.revision += 1;
            debug!(job_id = %id, count = self.applied.len(), "applied to job");
            self.persist();
        }
        &self.applied
    }

    pub fn is_applied(&self, id: JobId) -> bool {
        self.applied.contains(id)
    }

    pub fn applied_jobs(&self) -> &AppliedJobSet {
        &self.applied
    }

    pub fn applied_count(&self) -> usize {
        self.applied.len()
    }

    /// Counter bumped every time membership grows.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&self) {
        let result = encode_applied_jobs(&self.applied)
            .and_then(|encoded| self.storage.write(APPLIED_JOBS_KEY, &encoded));
        if let Err(e) = result {
            warn!(key = APPLIED_JOBS_KEY, error = %e, "failed to persist applied jobs");
        }
    }
}
