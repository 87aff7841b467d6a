//! Core traits that define the host persistence seam

use crate::error::Result;
use crate::value::PrefValue;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// One flat, named key-value namespace owned by the host.
///
/// The facade holds a handle to exactly one namespace for its lifetime and
/// forwards every operation to it. Implementations must be safe to share
/// across tasks; per-operation atomicity is the only concurrency guarantee
/// required (no cross-key transactional isolation).
#[async_trait]
pub trait PreferenceBackend: Send + Sync {
    /// Get the value stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<PrefValue>>;

    /// Store `value` under `key`, overwriting any prior value of any type
    async fn put(&self, key: &str, value: PrefValue) -> Result<()>;

    /// Delete the entry under `key`; no-op if absent
    async fn remove(&self, key: &str) -> Result<()>;

    /// Delete every entry in the namespace
    async fn clear(&self) -> Result<()>;

    /// An owned snapshot of every entry at call time
    async fn snapshot(&self) -> Result<HashMap<String, PrefValue>>;
}

/// The execution environment the store is constructed against.
///
/// The only external collaborator: it opens (or creates) named persistent
/// namespaces and reports the external storage volume's mount state.
#[async_trait]
pub trait StorageHost: Send + Sync {
    /// Open the namespace called `name`, creating it if it does not exist.
    ///
    /// Opening the same name twice yields handles onto the same entries.
    async fn open_namespace(&self, name: &str) -> Result<Arc<dyn PreferenceBackend>>;

    /// The external storage volume's mount state, sampled at call time
    fn external_storage_state(&self) -> MountState;
}

/// Host-reported state of the removable/external storage volume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountState {
    /// Mounted with read/write access
    Mounted,
    /// Mounted read-only
    MountedReadOnly,
    /// Not present or not mounted
    Unmounted,
}

impl MountState {
    /// Whether the volume can be written to
    pub fn is_writable(self) -> bool {
        self == MountState::Mounted
    }

    /// Whether the volume can be read from
    pub fn is_readable(self) -> bool {
        matches!(self, MountState::Mounted | MountState::MountedReadOnly)
    }
}
