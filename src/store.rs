//! The preference store facade

use crate::error::Result;
use crate::traits::{PreferenceBackend, StorageHost};
use crate::value::PrefValue;
use std::collections::HashMap;
use std::sync::Arc;

/// Name of the namespace the facade opens at construction
pub const DEFAULT_NAMESPACE: &str = "sharedData";

/// Default returned by [`PreferenceStore::get_string`] on a miss
pub const DEFAULT_STRING: &str = "defValue";

/// Typed accessors over one flat, durable key-value namespace.
///
/// Opened against a [`StorageHost`]; every operation is a single
/// request/response against the namespace handle obtained at construction.
/// Missing keys are never errors: each typed getter returns its fixed
/// default. Only host and backend faults surface as `Err`.
///
/// The store is not type-checked across writes. A key holds at most one
/// value at a time and a `put_*` of any type overwrites whatever was there;
/// callers must know what type they stored. Reading a present key through
/// the wrong typed getter returns that getter's default.
pub struct PreferenceStore {
    prefs: Arc<dyn PreferenceBackend>,
    host: Arc<dyn StorageHost>,
}

impl PreferenceStore {
    /// Open (or create) the `"sharedData"` namespace on `host`.
    ///
    /// Fails only if the host cannot open the namespace.
    pub async fn open(host: Arc<dyn StorageHost>) -> Result<Self> {
        Self::open_namespace(host, DEFAULT_NAMESPACE).await
    }

    /// Open (or create) a specific namespace on `host`
    pub async fn open_namespace(host: Arc<dyn StorageHost>, namespace: &str) -> Result<Self> {
        let prefs = host.open_namespace(namespace).await?;
        Ok(Self { prefs, host })
    }

    /// Store a string value under `key`
    pub async fn put_string(&self, key: &str, value: impl Into<String>) -> Result<()> {
        self.prefs.put(key, PrefValue::String(value.into())).await
    }

    /// Get the string value at `key`, or `"defValue"` if not found
    pub async fn get_string(&self, key: &str) -> Result<String> {
        Ok(match self.prefs.get(key).await? {
            Some(PrefValue::String(s)) => s,
            _ => DEFAULT_STRING.to_string(),
        })
    }

    /// Store a 32-bit integer value under `key`
    pub async fn put_int(&self, key: &str, value: i32) -> Result<()> {
        self.prefs.put(key, PrefValue::Int(value)).await
    }

    /// Get the integer value at `key`, or `0` if not found
    pub async fn get_int(&self, key: &str) -> Result<i32> {
        Ok(match self.prefs.get(key).await? {
            Some(PrefValue::Int(i)) => i,
            _ => 0,
        })
    }

    /// Store a single-precision float value under `key`
    pub async fn put_float(&self, key: &str, value: f32) -> Result<()> {
        self.prefs.put(key, PrefValue::Float(value)).await
    }

    /// Get the float value at `key`, or `0.0` if not found
    pub async fn get_float(&self, key: &str) -> Result<f32> {
        Ok(match self.prefs.get(key).await? {
            Some(PrefValue::Float(f)) => f,
            _ => 0.0,
        })
    }

    /// Store a double value under `key`.
    ///
    /// The namespace has no native double type: the value is encoded as its
    /// decimal string representation and stored through the string path.
    pub async fn put_double(&self, key: &str, value: f64) -> Result<()> {
        self.put_string(key, value.to_string()).await
    }

    /// Get the double value at `key`, or `0.0` if not found.
    ///
    /// Reads the string entry and parses it; any parse failure (missing key
    /// yields the `"defValue"` default string, or a non-numeric string was
    /// written under the key) is swallowed and returns `0.0`. The two cases
    /// are indistinguishable through this accessor.
    pub async fn get_double(&self, key: &str) -> Result<f64> {
        Ok(self.get_string(key).await?.parse().unwrap_or(0.0))
    }

    /// Store a 64-bit integer value under `key`
    pub async fn put_long(&self, key: &str, value: i64) -> Result<()> {
        self.prefs.put(key, PrefValue::Long(value)).await
    }

    /// Get the long value at `key`, or `0` if not found
    pub async fn get_long(&self, key: &str) -> Result<i64> {
        Ok(match self.prefs.get(key).await? {
            Some(PrefValue::Long(l)) => l,
            _ => 0,
        })
    }

    /// Store a boolean value under `key`
    pub async fn put_boolean(&self, key: &str, value: bool) -> Result<()> {
        self.prefs.put(key, PrefValue::Bool(value)).await
    }

    /// Get the boolean value at `key`, or `false` if not found
    pub async fn get_boolean(&self, key: &str) -> Result<bool> {
        Ok(match self.prefs.get(key).await? {
            Some(PrefValue::Bool(b)) => b,
            _ => false,
        })
    }

    /// An owned snapshot of every entry in the namespace at call time
    pub async fn get_all(&self) -> Result<HashMap<String, PrefValue>> {
        self.prefs.snapshot().await
    }

    /// Remove the entry at `key`; no-op if absent
    pub async fn remove(&self, key: &str) -> Result<()> {
        self.prefs.remove(key).await
    }

    /// Remove every entry in the namespace
    pub async fn clear(&self) -> Result<()> {
        self.prefs.clear().await
    }

    /// Whether the external storage volume is currently mounted writable.
    ///
    /// Advisory snapshot at call time; unrelated to the namespace.
    pub fn is_external_storage_writable(&self) -> bool {
        self.host.external_storage_state().is_writable()
    }

    /// Whether the external storage volume is currently mounted readable
    pub fn is_external_storage_readable(&self) -> bool {
        self.host.external_storage_state().is_readable()
    }
}
