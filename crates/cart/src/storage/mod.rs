//! Snapshot storage boundary.
//!
//! The cart persists through a string key-value interface modeled on the
//! device-local storage the mobile storefront writes through: one key, one
//! serialized value, overwritten whole. Two backends are provided:
//!
//! - [`FileStorage`] - durable, all keys in a single JSON file on disk
//! - [`MemoryStorage`] - ephemeral, for tests and throwaway sessions
//!
//! Storage holds a derived copy of the cart. It is read once at store
//! startup and written after every mutation; during a session the in-memory
//! cart remains the source of truth.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use std::path::PathBuf;

use thiserror::Error;

/// Error from a snapshot storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file exists but is not a valid key-value map.
    #[error("malformed storage file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Asynchronous string key-value storage for cart snapshots.
///
/// Implementations must treat an absent key as `Ok(None)`, not an error,
/// and must make a completed `set` visible to every subsequent `get`.
pub trait SnapshotStorage {
    /// Read the value stored under `key`, if any.
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, StorageError>> + Send;

    /// Store `value` under `key`, replacing any previous value.
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;
}
