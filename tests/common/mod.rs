//! Common test utilities and fixtures for prefstore

use prefstore::{FileConfig, MemoryConfig, PreferenceStore, PreferenceStoreBuilder, Result, StoreConfig};
use tempfile::TempDir;

/// Test fixture holding a store opened against one of the shipped hosts
pub struct StoreTestFixture {
    _temp_dir: Option<TempDir>,
    pub store: PreferenceStore,
}

impl StoreTestFixture {
    /// Create a store over the in-memory host
    pub async fn new_memory() -> Result<Self> {
        let store = PreferenceStoreBuilder::new(StoreConfig::Memory(MemoryConfig::default()))
            .build()
            .await?;

        Ok(Self {
            _temp_dir: None,
            store,
        })
    }

    /// Create a store over the file host in a temporary directory
    pub async fn new_file() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let store = PreferenceStoreBuilder::new(StoreConfig::File(FileConfig::new(
            temp_dir.path().join("prefs"),
        )))
        .build()
        .await?;

        Ok(Self {
            _temp_dir: Some(temp_dir),
            store,
        })
    }
}

/// Macro for running one test body against every shipped host
#[macro_export]
macro_rules! test_all_hosts {
    ($test_name:ident, $test_fn:expr) => {
        mod $test_name {
            use super::*;

            #[tokio::test]
            async fn memory() {
                let fixture = $crate::common::StoreTestFixture::new_memory()
                    .await
                    .expect("Failed to create memory-backed store");
                $test_fn(fixture).await;
            }

            #[tokio::test]
            async fn file() {
                let fixture = $crate::common::StoreTestFixture::new_file()
                    .await
                    .expect("Failed to create file-backed store");
                $test_fn(fixture).await;
            }
        }
    };
}
