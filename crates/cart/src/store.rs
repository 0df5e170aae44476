//! The cart state container.
//!
//! `CartStore` owns the authoritative in-memory cart for a session and keeps
//! a serialized snapshot in key-value storage synchronized with every
//! mutation. Mutations take the state lock, apply a pure transition to the
//! latest committed sequence, and await the snapshot write before releasing
//! the lock. Writers therefore form a single-writer queue: two mutations
//! issued concurrently cannot observe stale state or overwrite each other's
//! effect, in memory or in storage.
//!
//! The store is a plain value. Callers construct one, wrap it in an `Arc`,
//! and hand it to whatever needs cart access; there is no ambient global.

use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

use go_marketplace_core::{Price, ProductId};

use crate::error::{CartError, Result};
use crate::models::{LineItem, NewLineItem};
use crate::storage::SnapshotStorage;

/// Shopping-cart state container backed by snapshot storage `S`.
#[derive(Debug)]
pub struct CartStore<S: SnapshotStorage> {
    storage: S,
    key: String,
    items: Mutex<Vec<LineItem>>,
}

impl<S: SnapshotStorage> CartStore<S> {
    /// Open a store, hydrating from the snapshot persisted under `key`.
    ///
    /// An absent snapshot yields an empty cart. A snapshot that exists but
    /// does not parse as a cart is surfaced as [`CartError::Snapshot`]; the
    /// caller decides whether to discard it and start over.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Storage`] if the snapshot cannot be read and
    /// [`CartError::Snapshot`] if it cannot be parsed.
    pub async fn open(storage: S, key: impl Into<String>) -> Result<Self> {
        let key = key.into();

        let items = match storage.get(&key).await? {
            Some(raw) => serde_json::from_str(&raw).map_err(CartError::Snapshot)?,
            None => Vec::new(),
        };

        debug!(key = %key, items = items.len(), "cart store opened");

        Ok(Self {
            storage,
            key,
            items: Mutex::new(items),
        })
    }

    /// Add one unit of `item` to the cart.
    ///
    /// A product not yet in the cart is appended with quantity 1, preserving
    /// insertion order. A product already present has its quantity raised by
    /// one; the stored title, image and price are kept and the descriptor's
    /// non-id fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the updated cart fails. The in-memory
    /// update has been applied either way.
    #[instrument(skip(self, item), fields(id = %item.id))]
    pub async fn add_to_cart(&self, item: NewLineItem) -> Result<()> {
        let mut items = self.items.lock().await;
        apply_add(&mut items, item);
        self.persist(&items).await
    }

    /// Raise the quantity of the item with `id` by one.
    ///
    /// An id with no matching item leaves the cart unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the updated cart fails.
    #[instrument(skip(self))]
    pub async fn increment(&self, id: &ProductId) -> Result<()> {
        let mut items = self.items.lock().await;
        if !apply_increment(&mut items, id) {
            warn!(%id, "increment for id not in cart");
        }
        self.persist(&items).await
    }

    /// Lower the quantity of the item with `id` by one, removing the item
    /// entirely when its quantity reaches zero.
    ///
    /// An id with no matching item leaves the cart unchanged; the remaining
    /// items keep their relative order after a removal.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the updated cart fails.
    #[instrument(skip(self))]
    pub async fn decrement(&self, id: &ProductId) -> Result<()> {
        let mut items = self.items.lock().await;
        if !apply_decrement(&mut items, id) {
            warn!(%id, "decrement for id not in cart");
        }
        self.persist(&items).await
    }

    /// Current cart contents, cloned so every call yields a fresh identity.
    pub async fn products(&self) -> Vec<LineItem> {
        self.items.lock().await.clone()
    }

    /// Total number of units across all line items.
    pub async fn item_count(&self) -> u32 {
        self.items
            .lock()
            .await
            .iter()
            .map(|item| item.quantity)
            .sum()
    }

    /// Sum of line totals across the cart.
    pub async fn subtotal(&self) -> Price {
        self.items
            .lock()
            .await
            .iter()
            .fold(Price::zero(), |acc, item| acc.plus(item.line_price()))
    }

    /// Write the freshly computed sequence to storage under the store's key.
    ///
    /// Called with the state lock held, so snapshot writes are ordered the
    /// same way the in-memory transitions were.
    async fn persist(&self, items: &[LineItem]) -> Result<()> {
        let raw = serde_json::to_string(items).map_err(CartError::Encode)?;
        self.storage.set(&self.key, &raw).await?;
        debug!(key = %self.key, items = items.len(), "cart snapshot persisted");
        Ok(())
    }
}

/// Append `item` at quantity 1, or raise the matching item's quantity.
fn apply_add(items: &mut Vec<LineItem>, item: NewLineItem) {
    match items.iter_mut().find(|existing| existing.id == item.id) {
        Some(existing) => existing.quantity += 1,
        None => items.push(item.into()),
    }
}

/// Raise the matching item's quantity by one. Returns whether a match existed.
fn apply_increment(items: &mut [LineItem], id: &ProductId) -> bool {
    match items.iter_mut().find(|item| &item.id == id) {
        Some(item) => {
            item.quantity += 1;
            true
        }
        None => false,
    }
}

/// Lower the matching item's quantity by one, removing it at quantity 1.
/// Returns whether a match existed.
fn apply_decrement(items: &mut Vec<LineItem>, id: &ProductId) -> bool {
    let Some(position) = items.iter().position(|item| &item.id == id) else {
        return false;
    };

    match items.get_mut(position) {
        Some(item) if item.quantity > 1 => item.quantity -= 1,
        _ => {
            items.remove(position);
        }
    }
    true
}
