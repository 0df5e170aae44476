//! GoMarketplace cart library.
//!
//! A shopping-cart state container for the GoMarketplace storefront: an
//! ordered, in-memory list of line items keyed by product ID, persisted as a
//! JSON snapshot to local key-value storage after every mutation.
//!
//! # Architecture
//!
//! - [`store::CartStore`] - The state container: `add_to_cart`, `increment`,
//!   `decrement`, plus read accessors
//! - [`storage`] - The snapshot storage boundary (file-backed or in-memory)
//! - [`models`] - Line item types shared with callers
//! - [`view`] - Display models for a presentation layer
//!
//! The store owns the authoritative in-memory cart; storage holds a derived
//! snapshot that is only read back at the next session's startup.
//!
//! # Example
//!
//! ```rust,no_run
//! use go_marketplace_cart::models::NewLineItem;
//! use go_marketplace_cart::storage::MemoryStorage;
//! use go_marketplace_cart::store::CartStore;
//! use go_marketplace_core::Price;
//!
//! # async fn example() -> Result<(), go_marketplace_cart::error::CartError> {
//! let store = CartStore::open(MemoryStorage::new(), "@GoMarketplace").await?;
//! store
//!     .add_to_cart(NewLineItem {
//!         id: "shirt-01".into(),
//!         title: "Shirt".to_owned(),
//!         image_url: "https://cdn.example.com/shirt.png".to_owned(),
//!         price: Price::from_minor(1999),
//!     })
//!     .await?;
//! assert_eq!(store.item_count().await, 1);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod models;
pub mod storage;
pub mod store;
pub mod telemetry;
pub mod view;
