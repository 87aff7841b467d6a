//! File-backed storage host persisting each namespace as a JSON document

use crate::config::FileConfig;
use crate::error::{Result, StoreError};
use crate::traits::{MountState, PreferenceBackend, StorageHost};
use crate::value::PrefValue;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::RwLock;

/// One namespace backed by a single JSON file.
///
/// The whole document is loaded at open and rewritten on every mutation;
/// reads are served from the in-memory cache. Writes are durable once the
/// mutating call returns.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    pretty: bool,
    cache: RwLock<HashMap<String, PrefValue>>,
}

impl FileBackend {
    /// Open the namespace document at `path`, creating parent directories
    /// as needed. An absent file opens as an empty namespace.
    pub async fn open(path: impl AsRef<Path>, pretty: bool) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let cache = match fs::read_to_string(&path).await {
            Ok(data) if !data.is_empty() => serde_json::from_str(&data)
                .map_err(|e| StoreError::Serialization(format!("{}: {e}", path.display())))?,
            Ok(_) => HashMap::new(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(path = %path.display(), entries = cache.len(), "opened namespace document");

        Ok(Self {
            path,
            pretty,
            cache: RwLock::new(cache),
        })
    }

    /// Serialize the given entries and rewrite the namespace document.
    ///
    /// Called with the cache's write lock held so saves cannot interleave.
    async fn save(&self, entries: &HashMap<String, PrefValue>) -> Result<()> {
        let json = if self.pretty {
            serde_json::to_string_pretty(entries)?
        } else {
            serde_json::to_string(entries)?
        };

        fs::write(&self.path, json).await?;
        tracing::trace!(path = %self.path.display(), entries = entries.len(), "saved namespace document");
        Ok(())
    }
}

#[async_trait]
impl PreferenceBackend for FileBackend {
    async fn get(&self, key: &str) -> Result<Option<PrefValue>> {
        let cache = self.cache.read().await;
        Ok(cache.get(key).cloned())
    }

    async fn put(&self, key: &str, value: PrefValue) -> Result<()> {
        let mut cache = self.cache.write().await;
        cache.insert(key.to_string(), value);
        self.save(&cache).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut cache = self.cache.write().await;
        if cache.remove(key).is_none() {
            return Ok(());
        }
        self.save(&cache).await
    }

    async fn clear(&self) -> Result<()> {
        let mut cache = self.cache.write().await;
        cache.clear();
        self.save(&cache).await
    }

    async fn snapshot(&self) -> Result<HashMap<String, PrefValue>> {
        let cache = self.cache.read().await;
        Ok(cache.clone())
    }
}

/// File-backed storage host.
///
/// Each namespace lives at `<data_dir>/<name>.json`. The external storage
/// mount state is probed from `external_dir` at every call; nothing is
/// cached between probes.
pub struct FileHost {
    config: FileConfig,
}

impl FileHost {
    /// Create a host over the given configuration
    pub fn new(config: FileConfig) -> Self {
        Self { config }
    }

    fn namespace_path(&self, name: &str) -> PathBuf {
        self.config.data_dir.join(format!("{name}.json"))
    }
}

#[async_trait]
impl StorageHost for FileHost {
    async fn open_namespace(&self, name: &str) -> Result<Arc<dyn PreferenceBackend>> {
        let backend = FileBackend::open(self.namespace_path(name), self.config.pretty).await?;
        Ok(Arc::new(backend))
    }

    fn external_storage_state(&self) -> MountState {
        let Some(dir) = &self.config.external_dir else {
            return MountState::Unmounted;
        };

        match std::fs::metadata(dir) {
            Ok(meta) if meta.permissions().readonly() => MountState::MountedReadOnly,
            Ok(_) => MountState::Mounted,
            Err(_) => MountState::Unmounted,
        }
    }
}
