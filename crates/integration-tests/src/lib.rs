//! Integration tests for Naked Pineapple.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p naked-pineapple-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_store` - Cart operations, totals and identity gating
//! - `cart_persistence` - Saving, loading and purging carts across identities
//!
//! Shared fixtures live here so every test file builds items the same way.

use naked_pineapple_cart::{CartStore, MemoryStore, RecordingNotifier};
use naked_pineapple_core::{DisplayFields, Identity, LineItem};
use rust_decimal::Decimal;

/// A cart store over in-memory collaborators.
pub type TestCart = CartStore<MemoryStore, RecordingNotifier>;

/// Build a line item priced in whole currency units.
///
/// # Panics
///
/// Panics if `id` is empty or `price` is negative.
#[must_use]
pub fn item(id: &str, price: i64) -> LineItem {
    LineItem::new(id, Decimal::from(price), DisplayFields::named(id)).expect("valid test item")
}

/// A fresh guest cart.
#[must_use]
pub fn guest_cart() -> TestCart {
    CartStore::new(MemoryStore::new(), RecordingNotifier::new())
}

/// A fresh cart signed in as `id`.
#[must_use]
pub fn signed_in_cart(id: &str) -> TestCart {
    let mut cart = guest_cart();
    cart.set_identity(Identity::authenticated(id));
    cart
}
