//! Unified error handling for the cart library.
//!
//! Every store operation returns `Result<T, CartError>`: the in-memory
//! transition is applied first, then the snapshot write is awaited and any
//! failure surfaced here instead of being dropped. A failed write leaves
//! memory ahead of storage until the next successful write reconciles them.

use thiserror::Error;

use crate::storage::StorageError;

/// Cart-level error type.
#[derive(Debug, Error)]
pub enum CartError {
    /// The storage backend failed to read or write the snapshot.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// A persisted snapshot exists but cannot be parsed as a cart.
    #[error("malformed cart snapshot: {0}")]
    Snapshot(#[source] serde_json::Error),

    /// The current cart could not be serialized for persistence.
    #[error("failed to encode cart snapshot: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Result type alias for `CartError`.
pub type Result<T> = std::result::Result<T, CartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = CartError::Storage(StorageError::Io(io));
        assert_eq!(err.to_string(), "storage error: storage I/O error: denied");
    }

    #[test]
    fn test_snapshot_error_display() {
        let Err(source) = serde_json::from_str::<Vec<u8>>("not json") else {
            panic!("parse should fail");
        };
        let err = CartError::Snapshot(source);
        assert!(err.to_string().starts_with("malformed cart snapshot"));
    }
}
