//! The job store: single source of truth for submitted jobs.
//!
//! Every job lives in one JSON array under a single storage key, newest
//! first. Reads always go back to the storage medium and return an owned
//! copy, so a read right after a write observes that write and callers can
//! never mutate stored state through a returned list.
//!
//! Every successful write raises [`CHANGE_EVENT`] through the store's
//! [`ChangeNotifier`]. Views subscribe when they attach and re-read the whole
//! collection on each signal; see [`JobFeed`].
//!
//! There is no locking above the medium. Two processes doing
//! read-modify-write on the same key race, and the later write wins, even
//! if the two touched different fields of the same job.

use log::{debug, info, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::{DispatchError, Result},
    models::{Job, JobPatch},
    storage::Storage,
};

pub mod feed;
pub mod notify;

pub use feed::JobFeed;
pub use notify::{ChangeNotifier, Subscription, CHANGE_EVENT};

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "groundwork_jobs_v1";

/// Repository of job records over a key/value medium.
///
/// Writes work on the stored records as raw JSON: a record is only
/// re-encoded when it is the one being written, and records this build
/// cannot read are carried through untouched.
pub struct JobStore {
    storage: Box<dyn Storage>,
    key: String,
    notifier: ChangeNotifier,
}

impl JobStore {
    /// Creates a store keeping its collection under `key` in `storage`.
    pub fn new(storage: impl Storage + 'static, key: impl Into<String>) -> Self {
        Self {
            storage: Box::new(storage),
            key: key.into(),
            notifier: ChangeNotifier::new(),
        }
    }

    /// The storage key holding the collection.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Every job, newest first.
    ///
    /// Missing or malformed data reads as an empty collection; records that
    /// fail to decode are left out of the result but stay in storage.
    ///
    /// # Errors
    ///
    /// Returns an error only if the medium itself cannot be read.
    pub fn list_all(&self) -> Result<Vec<Job>> {
        let records = self.read_records()?;
        Ok(decode_jobs(&self.key, &records))
    }

    /// The job with `id`, if stored.
    pub fn get(&self, id: &str) -> Result<Option<Job>> {
        Ok(self.list_all()?.into_iter().find(|job| job.id == id))
    }

    /// Insert `job` at the front of the collection.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::StorageWrite` if the job does not survive
    /// encoding or the medium rejects the write; nothing is stored and no
    /// signal is raised.
    pub fn create(&self, job: Job) -> Result<()> {
        let record = self.encode(&job)?;
        let mut records = self.read_records()?;
        records.insert(0, record);
        self.write_records(&records)?;
        info!("Created job {} ({} total)", job.id, records.len());
        Ok(())
    }

    /// Merge `patch` into the record with `id`, leaving every other field
    /// and every other record exactly as stored.
    ///
    /// Returns `false` without writing if no record has that id.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::StorageWrite` if the medium rejects the write.
    pub fn update(&self, id: &str, patch: &JobPatch) -> Result<bool> {
        let mut records = self.read_records()?;
        let Some(record) = records
            .iter_mut()
            .filter_map(Value::as_object_mut)
            .find(|record| record.get("id").and_then(Value::as_str) == Some(id))
        else {
            debug!("Update ignored: no job {id}");
            return Ok(false);
        };

        patch.apply_to_record(record);
        self.write_records(&records)?;
        Ok(true)
    }

    /// Replace the whole collection and raise the change signal.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::StorageWrite` if any job does not survive
    /// encoding or the medium rejects the write.
    pub fn save(&self, jobs: &[Job]) -> Result<()> {
        let records = jobs
            .iter()
            .map(|job| self.encode(job))
            .collect::<Result<Vec<_>>>()?;
        self.write_records(&records)
    }

    /// Remove every job and raise the change signal.
    pub fn clear(&self) -> Result<()> {
        self.storage.remove_item(&self.key)?;
        info!("Cleared all jobs under '{}'", self.key);
        self.notifier.notify();
        Ok(())
    }

    /// Register a listener for the change signal.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        self.notifier.subscribe(listener)
    }

    pub fn listener_count(&self) -> usize {
        self.notifier.listener_count()
    }

    fn read_records(&self) -> Result<Vec<Value>> {
        let Some(blob) = self.storage.get_item(&self.key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Value>(&blob) {
            Ok(Value::Array(records)) => Ok(records),
            Ok(_) => {
                warn!("Stored value under '{}' is not an array; treating as empty", self.key);
                Ok(Vec::new())
            }
            Err(e) => {
                warn!(
                    "Stored value under '{}' is not valid JSON ({e}); treating as empty",
                    self.key
                );
                Ok(Vec::new())
            }
        }
    }

    fn write_records(&self, records: &[Value]) -> Result<()> {
        let blob = serde_json::to_string(records)
            .map_err(|e| DispatchError::storage_write(&self.key).with_reason(e.to_string()))?;
        self.storage.set_item(&self.key, &blob)?;
        debug!("Wrote {} job record(s) under '{}'", records.len(), self.key);
        self.notifier.notify();
        Ok(())
    }

    /// Encode `job` as a stored record, refusing anything that would not
    /// read back as the same kind of record.
    ///
    /// JSON has no non-finite numbers, so a NaN coordinate anywhere in the
    /// drawing encodes as `null` and the record becomes unreadable.
    fn encode(&self, job: &Job) -> Result<Value> {
        let record = serde_json::to_value(job)
            .map_err(|e| DispatchError::storage_write(&self.key).with_reason(e.to_string()))?;

        if let Err(e) = Job::deserialize(&record) {
            return Err(DispatchError::storage_write(&self.key)
                .with_reason(format!("job {} does not encode as plain data: {e}", job.id)));
        }
        Ok(record)
    }
}

fn decode_jobs(key: &str, records: &[Value]) -> Vec<Job> {
    let jobs: Vec<Job> = records
        .iter()
        .filter_map(|record| match Job::deserialize(record) {
            Ok(job) => Some(job),
            Err(e) => {
                warn!("Skipping unreadable job record under '{key}': {e}");
                None
            }
        })
        .collect();

    debug!("Loaded {} of {} job record(s)", jobs.len(), records.len());
    jobs
}
