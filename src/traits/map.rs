use crate::errors::StoreError;

/// Shared key/value storage.
///
/// The four CRUD operations every store backend provides.
/// [`KvStore`](crate::KvStore) is the lock-disciplined implementation.
pub trait Store<K, V> {
    /// Set the value of the given key, overwriting the previous value if it exists.
    fn put(&self, key: K, value: V);

    /// Get an owned copy of the value corresponding to the given key.
    fn get(&self, key: &K) -> Result<V, StoreError<K>>;

    /// Overwrite the value of the given key, refusing to create a new entry.
    fn update(&self, key: &K, value: V) -> Result<(), StoreError<K>>;

    /// Remove the given key, returning the value that was stored.
    fn delete(&self, key: &K) -> Result<V, StoreError<K>>;
}
