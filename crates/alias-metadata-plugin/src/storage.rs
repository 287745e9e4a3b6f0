//! Plugin storage.

use std::{future::Future, pin::Pin, sync::Arc};

use fnv::FnvHashMap;
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::RwLock;

use crate::{err, Error};

/// A future returned by [Storage] operations.
pub type StorageFuture<'s, T> = Pin<Box<dyn Future<Output = Result<T, Error>> + Send + 's>>;

/// A keyed storage entry.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StorageEntry {
    /// The key of the entry.
    pub key: String,

    /// The encoded value.
    pub value: Vec<u8>,
}

impl StorageEntry {
    /// Create an entry by encoding the value as JSON.
    pub fn json(key: impl Into<String>, value: &impl Serialize) -> Result<Self, Error> {
        Ok(Self {
            key: key.into(),
            value: serde_json::to_vec(value).map_err(err::codec)?,
        })
    }

    /// Decode the value of this entry from JSON.
    pub fn decode_json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_slice(&self.value).map_err(err::codec)
    }
}

/// Trait for the storage a plugin keeps its configuration in.
pub trait Storage {
    /// Get the entry stored under the key, if any.
    fn get(&self, key: &str) -> StorageFuture<'_, Option<StorageEntry>>;

    /// Store the entry, replacing any entry under the same key.
    fn put(&self, entry: StorageEntry) -> StorageFuture<'_, ()>;

    /// Delete the entry stored under the key, if any.
    fn delete(&self, key: &str) -> StorageFuture<'_, ()>;
}

/// [Storage] kept in memory, for testing.
#[derive(Clone, Default)]
pub struct InmemStorage {
    entries: Arc<RwLock<FnvHashMap<String, Vec<u8>>>>,
}

impl InmemStorage {
    /// The number of stored entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Storage for InmemStorage {
    fn get(&self, key: &str) -> StorageFuture<'_, Option<StorageEntry>> {
        let key = key.to_string();
        Box::pin(async move {
            let entries = self.entries.read().await;
            Ok(entries.get(&key).map(|value| StorageEntry {
                key: key.clone(),
                value: value.clone(),
            }))
        })
    }

    fn put(&self, entry: StorageEntry) -> StorageFuture<'_, ()> {
        Box::pin(async move {
            self.entries.write().await.insert(entry.key, entry.value);
            Ok(())
        })
    }

    fn delete(&self, key: &str) -> StorageFuture<'_, ()> {
        let key = key.to_string();
        Box::pin(async move {
            self.entries.write().await.remove(&key);
            Ok(())
        })
    }
}
