//! Display models for cart contents.
//!
//! Presentation layers consume these instead of [`LineItem`] directly:
//! prices arrive pre-formatted and the aggregates (subtotal, item count) are
//! already derived. No rendering happens here.

use go_marketplace_core::Price;

use crate::models::LineItem;

/// Cart item display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: format_price(Price::zero()),
            item_count: 0,
        }
    }
}

/// Format a price for display.
fn format_price(price: Price) -> String {
    price.to_string()
}

impl From<&LineItem> for CartItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id.as_str().to_owned(),
            title: item.title.clone(),
            image_url: item.image_url.clone(),
            quantity: item.quantity,
            price: format_price(item.price),
            line_price: format_price(item.line_price()),
        }
    }
}

impl From<&[LineItem]> for CartView {
    fn from(items: &[LineItem]) -> Self {
        Self {
            items: items.iter().map(CartItemView::from).collect(),
            subtotal: format_price(
                items
                    .iter()
                    .fold(Price::zero(), |acc, item| acc.plus(item.line_price())),
            ),
            item_count: items.iter().map(|item| item.quantity).sum(),
        }
    }
}
