//! Key-value blob storage for the dashboard document
//!
//! The state service only needs `get`/`set` on opaque bytes, so storage is an
//! injected [`BlobStore`] rather than a process-wide handle:
//! - [`MemoryStore`]: in-process map, used by tests and `serve --memory`
//! - [`FileStore`]: one JSON file per key under a namespace directory
//!
//! Neither store offers compare-and-swap. Concurrent writers to the same key
//! race and the last write wins.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

/// Result type for blob store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by a blob store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Opaque get/set-by-key storage
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Read the bytes stored under `key`, if any
    async fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Replace the bytes stored under `key`; a single write is atomic
    async fn set(&self, key: &str, value: Vec<u8>) -> StoreResult<()>;
}

/// Reject keys that could escape a namespace directory
pub(crate) fn validate_key(key: &str) -> StoreResult<()> {
    let bad = key.is_empty()
        || key == "."
        || key == ".."
        || key.contains(['/', '\\', '\0']);

    if bad {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("state").is_ok());
        assert!(validate_key("state.v2").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("..").is_err());
        assert!(validate_key("../state").is_err());
        assert!(validate_key("a\\b").is_err());
    }
}
