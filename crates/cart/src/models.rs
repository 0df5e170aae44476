//! Cart line item models.
//!
//! These types define the persisted snapshot format: a JSON array of line
//! items with exactly the fields below (`price` as a plain number). There is
//! no versioning or migration scheme; the snapshot is overwritten whole on
//! every mutation.

use serde::{Deserialize, Serialize};

use go_marketplace_core::{Price, ProductId};

/// One product entry in the cart.
///
/// Invariant: `quantity >= 1`. An item decremented to zero is removed from
/// the cart and never persisted at quantity zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Opaque product identifier, unique within a cart.
    pub id: ProductId,
    /// Display name. Not validated.
    pub title: String,
    /// Image resource reference. Not validated.
    pub image_url: String,
    /// Unit price in the implied currency.
    pub price: Price,
    /// Positive item count.
    pub quantity: u32,
}

impl LineItem {
    /// Line total: unit price times quantity.
    #[must_use]
    pub fn line_price(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// Descriptor for an item entering the cart: a [`LineItem`] without a
/// quantity. The store assigns `quantity = 1` on first add.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLineItem {
    pub id: ProductId,
    pub title: String,
    pub image_url: String,
    pub price: Price,
}

impl From<NewLineItem> for LineItem {
    fn from(item: NewLineItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            image_url: item.image_url,
            price: item.price,
            quantity: 1,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> LineItem {
        LineItem {
            id: ProductId::new("shirt-01"),
            title: "Shirt".to_owned(),
            image_url: "https://cdn.example.com/shirt.png".to_owned(),
            price: Price::from_minor(1050),
            quantity: 2,
        }
    }

    #[test]
    fn test_snapshot_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        let obj = json.as_object().unwrap();

        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["id", "image_url", "price", "quantity", "title"]);

        // price is a bare number, quantity an integer
        assert!(obj["price"].is_number());
        assert_eq!(obj["quantity"], 2);
        assert_eq!(obj["id"], "shirt-01");
    }

    #[test]
    fn test_snapshot_round_trip() {
        let item = sample();
        let json = serde_json::to_string(&item).unwrap();
        let back: LineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_from_new_line_item_starts_at_one() {
        let item: LineItem = NewLineItem {
            id: ProductId::new("a"),
            title: "A".to_owned(),
            image_url: "u".to_owned(),
            price: Price::from_major(10),
        }
        .into();
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn test_line_price() {
        assert_eq!(sample().line_price(), Price::from_minor(2100));
    }
}
