//! Display-ready cart snapshots.
//!
//! Views render carts from these rather than from [`CartState`] directly so
//! price formatting and the quantity cap live in one place.

use naked_pineapple_core::{CurrencyCode, LineItem, Price};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::CartSettings;
use crate::state::CartState;

/// Cart item display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItemView {
    pub id: String,
    pub title: String,
    pub image: Option<String>,
    pub description: Option<String>,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
    /// Whether the "+" control should be enabled.
    pub can_increment: bool,
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u64,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub fn empty(currency: CurrencyCode) -> Self {
        Self {
            items: Vec::new(),
            subtotal: format_price(Decimal::ZERO, currency),
            item_count: 0,
        }
    }

    /// Build a view of `state`.
    #[must_use]
    pub fn from_state(state: &CartState, settings: &CartSettings) -> Self {
        Self {
            items: state
                .items()
                .iter()
                .map(|item| CartItemView::from_item(item, settings))
                .collect(),
            subtotal: format_price(state.total_price(), settings.currency),
            item_count: state.total_items(),
        }
    }

    /// Whether the cart has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl CartItemView {
    fn from_item(item: &LineItem, settings: &CartSettings) -> Self {
        Self {
            id: item.id.to_string(),
            title: item.display.name.clone(),
            image: item.display.image.clone(),
            description: item.display.description.clone(),
            quantity: item.quantity(),
            price: format_price(item.unit_price(), settings.currency),
            line_price: format_price(item.line_total(), settings.currency),
            can_increment: item.quantity() < settings.max_display_quantity,
        }
    }
}

fn format_price(amount: Decimal, currency: CurrencyCode) -> String {
    Price::new(amount, currency).display()
}
