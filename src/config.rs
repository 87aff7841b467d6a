//! Configuration structures for the shipped storage hosts

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main store configuration enum
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreConfig {
    /// In-memory host configuration (tests and development)
    Memory(MemoryConfig),

    /// File-backed host configuration (durable)
    File(FileConfig),
}

/// Configuration for the in-memory host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Initial capacity for each namespace map
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            initial_capacity: default_initial_capacity(),
        }
    }
}

/// Configuration for the file-backed host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    /// Directory holding one JSON document per namespace
    pub data_dir: PathBuf,

    /// Path probed for the external storage mount state; `None` reports
    /// the volume as unmounted
    #[serde(default)]
    pub external_dir: Option<PathBuf>,

    /// Pretty-print the namespace documents on disk
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl FileConfig {
    /// Configuration with only a data directory, no external volume
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            external_dir: None,
            pretty: true,
        }
    }
}

// Default value functions
fn default_initial_capacity() -> usize {
    64
}

fn default_true() -> bool {
    true
}
