//! An embeddable, thread-safe in-memory key/value store with whole-store persistence.

#![deny(missing_docs)]

pub mod errors;
pub mod store;
pub mod traits;

pub use errors::StoreError;
pub use store::KvStore;
pub use traits::Store;
