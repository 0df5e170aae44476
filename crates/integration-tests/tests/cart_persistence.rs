//! Snapshot persistence across store instances.
//!
//! A store opened over the same storage directory must hydrate exactly the
//! cart its predecessor last persisted.

#![allow(clippy::unwrap_used)]

use go_marketplace_cart::config::DEFAULT_STORAGE_KEY;
use go_marketplace_cart::error::CartError;
use go_marketplace_cart::models::NewLineItem;
use go_marketplace_cart::storage::SnapshotStorage;
use go_marketplace_core::{Price, ProductId};

use go_marketplace_integration_tests::TestContext;

fn product(id: &str, minor: i64) -> NewLineItem {
    NewLineItem {
        id: ProductId::new(id),
        title: format!("Product {id}"),
        image_url: format!("https://cdn.example.com/{id}.png"),
        price: Price::from_minor(minor),
    }
}

#[tokio::test]
async fn cart_survives_reopen() {
    let ctx = TestContext::new();

    let before = {
        let store = ctx.open_store().await.unwrap();
        store.add_to_cart(product("a", 250)).await.unwrap();
        store.add_to_cart(product("b", 1999)).await.unwrap();
        store.add_to_cart(product("a", 250)).await.unwrap();
        store.products().await
    };

    let reopened = ctx.open_store().await.unwrap();
    assert_eq!(reopened.products().await, before);
    assert_eq!(reopened.item_count().await, 3);
}

#[tokio::test]
async fn fresh_directory_opens_empty() {
    let ctx = TestContext::new();
    let store = ctx.open_store().await.unwrap();
    assert!(store.products().await.is_empty());
}

#[tokio::test]
async fn emptied_cart_persists_as_empty() {
    let ctx = TestContext::new();

    {
        let store = ctx.open_store().await.unwrap();
        store.add_to_cart(product("a", 100)).await.unwrap();
        store.decrement(&ProductId::new("a")).await.unwrap();
    }

    let reopened = ctx.open_store().await.unwrap();
    assert!(reopened.products().await.is_empty());
}

#[tokio::test]
async fn snapshot_is_a_json_array_with_fixed_fields() {
    let ctx = TestContext::new();
    let store = ctx.open_store().await.unwrap();
    store.add_to_cart(product("a", 1050)).await.unwrap();

    let raw = ctx
        .storage()
        .get(DEFAULT_STORAGE_KEY)
        .await
        .unwrap()
        .expect("snapshot written");
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 1);

    let entry = entries.first().unwrap().as_object().unwrap();
    assert_eq!(entry["id"], "a");
    assert_eq!(entry["title"], "Product a");
    assert_eq!(entry["image_url"], "https://cdn.example.com/a.png");
    assert_eq!(entry["quantity"], 1);
    assert!(entry["price"].is_number(), "price must be numeric");
}

#[tokio::test]
async fn malformed_snapshot_is_surfaced_at_open() {
    let ctx = TestContext::new();
    ctx.storage()
        .set(DEFAULT_STORAGE_KEY, "{\"not\": \"a cart\"}")
        .await
        .unwrap();

    let err = ctx.open_store().await.unwrap_err();
    assert!(matches!(err, CartError::Snapshot(_)));
}

#[tokio::test]
async fn unrelated_keys_are_preserved_by_cart_writes() {
    let ctx = TestContext::new();
    ctx.storage().set("@OtherFeature", "kept").await.unwrap();

    let store = ctx.open_store().await.unwrap();
    store.add_to_cart(product("a", 100)).await.unwrap();

    assert_eq!(
        ctx.storage().get("@OtherFeature").await.unwrap().as_deref(),
        Some("kept")
    );
}
