//! Integration tests for the GoMarketplace cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p go-marketplace-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flows` - Cart mutation scenarios over file-backed storage
//! - `cart_persistence` - Snapshot format and cross-session hydration
//!
//! The [`TestContext`] helper owns a temp directory for the storage file and
//! opens stores against it; the directory is removed when the context drops.

use go_marketplace_cart::config::CartConfig;
use go_marketplace_cart::error::CartError;
use go_marketplace_cart::storage::FileStorage;
use go_marketplace_cart::store::CartStore;

/// A temp-dir-backed storage environment for cart tests.
pub struct TestContext {
    dir: tempfile::TempDir,
}

impl TestContext {
    /// Create a context with an empty storage directory.
    ///
    /// # Panics
    ///
    /// Panics if the temp directory cannot be created (test environment).
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn new() -> Self {
        go_marketplace_cart::telemetry::init_tracing();
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Configuration pointing at this context's directory, default key.
    #[must_use]
    pub fn config(&self) -> CartConfig {
        CartConfig::new(self.dir.path())
    }

    /// File storage rooted at this context's directory.
    #[must_use]
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.config().storage_dir)
    }

    /// Open a cart store under the configured snapshot key.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`CartStore::open`].
    pub async fn open_store(&self) -> Result<CartStore<FileStorage>, CartError> {
        let config = self.config();
        CartStore::open(FileStorage::new(config.storage_dir), config.storage_key).await
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
