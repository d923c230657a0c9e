//! Traits for key/value storage.

/// The [`Store`] trait definition.
pub mod map;

pub use map::Store;
