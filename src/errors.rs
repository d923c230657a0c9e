//! All error types.

use thiserror::Error;

/// [`KvStore`](crate::KvStore) operation errors.
#[derive(Debug, Error)]
pub enum StoreError<K> {
    /// The key is not present in the store.
    #[error("the key ({0:?}) does not exist")]
    KeyNotFound(K),

    /// Io error while creating or removing the store file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The store file could not be opened for loading.
    #[error("store file unavailable: {0}")]
    Unavailable(#[source] std::io::Error),

    /// The store contents could not be encoded.
    #[error("encode error: {0}")]
    Encode(#[source] bincode::Error),

    /// The store file contents could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[source] bincode::Error),
}
