//! Prefstore - typed preference storage over pluggable key-value hosts
//!
//! This crate provides a thin facade over a host-owned key-value namespace:
//! typed get/put accessors with fixed defaults on miss, bulk retrieval, key
//! removal, full clear, and advisory external-storage availability checks.
//! The namespace itself is opened from an injected [`StorageHost`]; an
//! in-memory host ships for tests and development, a file-backed host for
//! durable storage.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod backends;
pub mod config;
pub mod error;
pub mod store;
pub mod traits;
pub mod value;

// Re-export commonly used types
pub use config::{FileConfig, MemoryConfig, StoreConfig};
pub use error::{Result, StoreError};
pub use store::{PreferenceStore, DEFAULT_NAMESPACE, DEFAULT_STRING};
pub use traits::{MountState, PreferenceBackend, StorageHost};
pub use value::PrefValue;

use std::sync::Arc;

/// Builder for constructing a [`PreferenceStore`] from a [`StoreConfig`]
pub struct PreferenceStoreBuilder {
    config: StoreConfig,
    namespace: String,
}

impl PreferenceStoreBuilder {
    /// Create a new builder with the given host configuration
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }

    /// Override the namespace to open (defaults to `"sharedData"`)
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Build the host and open the store
    pub async fn build(self) -> Result<PreferenceStore> {
        let host: Arc<dyn StorageHost> = match self.config {
            StoreConfig::Memory(cfg) => Arc::new(backends::memory::MemoryHost::new(cfg)),
            StoreConfig::File(cfg) => Arc::new(backends::file::FileHost::new(cfg)),
        };

        PreferenceStore::open_namespace(host, &self.namespace).await
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        config::{FileConfig, MemoryConfig, StoreConfig},
        error::{Result, StoreError},
        store::PreferenceStore,
        traits::{MountState, PreferenceBackend, StorageHost},
        value::PrefValue,
        PreferenceStoreBuilder,
    };
}
