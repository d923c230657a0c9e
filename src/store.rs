//! The [`KvStore`] structure.

use crate::errors::StoreError;
use crate::traits::Store;
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Debug;
use std::fs::{self, File};
use std::hash::Hash;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// A thread-safe key/value store.
///
/// Every operation is a critical section over a single reader/writer lock:
/// lookups take shared access, mutations and persistence take exclusive
/// access. Operations on the same instance are linearizable with respect to
/// that lock.
///
/// The whole mapping can be written to and restored from a binary file with
/// [`save`](KvStore::save) and [`load`](KvStore::load).
#[derive(Debug)]
pub struct KvStore<K, V> {
    entries: RwLock<HashMap<K, V>>,
}

impl<K, V> Default for KvStore<K, V> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl<K, V> KvStore<K, V> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with room for at least `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Return the number of entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<K, V> KvStore<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Set the value of the given key, overwriting the previous value if it exists.
    pub fn put(&self, key: K, value: V) {
        self.entries.write().insert(key, value);
    }

    /// Get an owned copy of the value corresponding to the given key.
    pub fn get(&self, key: &K) -> Result<V, StoreError<K>>
    where
        V: Clone,
    {
        self.entries
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::KeyNotFound(key.clone()))
    }

    /// Overwrite the value of the given key.
    ///
    /// Unlike [`put`](KvStore::put), refuses to create a new entry: an absent
    /// key fails with [`StoreError::KeyNotFound`] and leaves the store
    /// untouched.
    pub fn update(&self, key: &K, value: V) -> Result<(), StoreError<K>> {
        match self.entries.write().get_mut(key) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(StoreError::KeyNotFound(key.clone())),
        }
    }

    /// Remove the given key, returning the value that was stored.
    pub fn delete(&self, key: &K) -> Result<V, StoreError<K>> {
        self.entries
            .write()
            .remove(key)
            .ok_or_else(|| StoreError::KeyNotFound(key.clone()))
    }

    /// Check whether the given key is present.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.read().contains_key(key)
    }
}

impl<K, V> KvStore<K, V>
where
    K: Debug,
    V: Debug,
{
    /// Log every entry at debug level. Diagnostics only.
    pub fn dump(&self) {
        for (key, value) in self.entries.read().iter() {
            debug!(?key, ?value, "entry");
        }
    }
}

impl<K, V> KvStore<K, V>
where
    K: Eq + Hash + Serialize + DeserializeOwned,
    V: Serialize + DeserializeOwned,
{
    /// Serialize the whole mapping to a binary file, replacing any existing
    /// file at `path`.
    ///
    /// Holds exclusive access for the duration of encode and write: a
    /// concurrent writer must not interleave with the snapshot, even though
    /// encoding itself only reads.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), StoreError<K>> {
        let path = path.as_ref();
        let entries = self.entries.write();
        if let Err(err) = fs::remove_file(path) {
            // An absent previous file is the expected case.
            if err.kind() != io::ErrorKind::NotFound {
                return Err(err.into());
            }
            debug!(path = %path.display(), "no previous store file to remove");
        }
        let mut writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(&mut writer, &*entries).map_err(StoreError::Encode)?;
        writer.flush()?;
        debug!(path = %path.display(), entries = entries.len(), "store saved");
        Ok(())
    }

    /// Decode a previously saved file into the store, replacing the current
    /// contents wholesale.
    ///
    /// Held under the same exclusive discipline as [`save`](KvStore::save) so
    /// no reader observes a half-replaced mapping. A file that cannot be
    /// opened fails with [`StoreError::Unavailable`]; a decode failure leaves
    /// the current contents untouched.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<(), StoreError<K>> {
        let path = path.as_ref();
        let mut entries = self.entries.write();
        let file = File::open(path).map_err(StoreError::Unavailable)?;
        let loaded: HashMap<K, V> =
            bincode::deserialize_from(BufReader::new(file)).map_err(StoreError::Decode)?;
        *entries = loaded;
        debug!(path = %path.display(), entries = entries.len(), "store loaded");
        Ok(())
    }
}

impl<K, V> Store<K, V> for KvStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn put(&self, key: K, value: V) {
        KvStore::put(self, key, value)
    }

    fn get(&self, key: &K) -> Result<V, StoreError<K>> {
        KvStore::get(self, key)
    }

    fn update(&self, key: &K, value: V) -> Result<(), StoreError<K>> {
        KvStore::update(self, key, value)
    }

    fn delete(&self, key: &K) -> Result<V, StoreError<K>> {
        KvStore::delete(self, key)
    }
}
