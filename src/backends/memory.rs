//! In-memory storage host for testing and development

use crate::config::MemoryConfig;
use crate::error::Result;
use crate::traits::{MountState, PreferenceBackend, StorageHost};
use crate::value::PrefValue;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// In-memory namespace implementation
#[derive(Clone, Debug)]
pub struct MemoryBackend {
    data: Arc<RwLock<HashMap<String, PrefValue>>>,
}

impl MemoryBackend {
    /// Create a new empty namespace with the given initial capacity
    pub fn new(config: &MemoryConfig) -> Self {
        Self {
            data: Arc::new(RwLock::new(HashMap::with_capacity(config.initial_capacity))),
        }
    }

    /// Number of entries currently stored
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Whether the namespace holds no entries
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new(&MemoryConfig::default())
    }
}

#[async_trait]
impl PreferenceBackend for MemoryBackend {
    async fn get(&self, key: &str) -> Result<Option<PrefValue>> {
        Ok(self.data.read().get(key).cloned())
    }

    async fn put(&self, key: &str, value: PrefValue) -> Result<()> {
        self.data.write().insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.data.write().remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.data.write().clear();
        Ok(())
    }

    async fn snapshot(&self) -> Result<HashMap<String, PrefValue>> {
        Ok(self.data.read().clone())
    }
}

/// In-memory storage host.
///
/// Namespaces live for the host's lifetime; opening the same name twice
/// returns handles onto the same entries. The external storage mount state
/// is programmable so tests can drive the availability predicates.
pub struct MemoryHost {
    config: MemoryConfig,
    namespaces: RwLock<HashMap<String, Arc<MemoryBackend>>>,
    mount_state: RwLock<MountState>,
}

impl MemoryHost {
    /// Create a host with the given namespace configuration
    pub fn new(config: MemoryConfig) -> Self {
        Self {
            config,
            namespaces: RwLock::new(HashMap::new()),
            mount_state: RwLock::new(MountState::Mounted),
        }
    }

    /// Set the mount state reported for the external storage volume
    pub fn set_external_storage_state(&self, state: MountState) {
        *self.mount_state.write() = state;
    }
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new(MemoryConfig::default())
    }
}

#[async_trait]
impl StorageHost for MemoryHost {
    async fn open_namespace(&self, name: &str) -> Result<Arc<dyn PreferenceBackend>> {
        let mut namespaces = self.namespaces.write();
        let backend = namespaces
            .entry(name.to_string())
            .or_insert_with(|| {
                tracing::debug!(namespace = name, "creating in-memory namespace");
                Arc::new(MemoryBackend::new(&self.config))
            })
            .clone();
        Ok(backend)
    }

    fn external_storage_state(&self) -> MountState {
        *self.mount_state.read()
    }
}
