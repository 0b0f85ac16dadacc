//! Cart state and the reducer that mutates it.
//!
//! Every change to a cart goes through [`CartState::apply`] with a
//! [`CartAction`]. The reducer is pure: it performs no I/O and knows nothing
//! about identities or persistence, which live in [`crate::store`].
//!
//! # Invariants
//!
//! - No two items share an [`ItemId`]
//! - Every item has quantity ≥ 1 (enforced by [`LineItem`]'s `NonZeroU32`)

use core::num::NonZeroU32;

use naked_pineapple_core::{ItemId, LineItem};
use rust_decimal::Decimal;

/// A change to apply to a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add one unit. Existing items are incremented, new items appended with quantity 1.
    Add(LineItem),
    /// Remove an item. No-op if absent.
    Remove(ItemId),
    /// Replace an item's quantity. Clamped to ≥ 0; 0 removes the item.
    SetQuantity {
        /// Item to update.
        id: ItemId,
        /// Requested quantity, before clamping.
        quantity: i64,
    },
    /// Remove every item.
    Clear,
    /// Replace the whole cart with previously persisted items.
    Load(Vec<LineItem>),
}

impl CartAction {
    /// Short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Remove(_) => "remove",
            Self::SetQuantity { .. } => "set_quantity",
            Self::Clear => "clear",
            Self::Load(_) => "load",
        }
    }
}

/// Ordered collection of line items, keyed by item ID.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartState {
    items: Vec<LineItem>,
}

impl CartState {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up an item by ID.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == *id)
    }

    /// Number of distinct items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity()))
            .sum()
    }

    /// Sum of `unit_price * quantity` over all items, saturating at [`Decimal::MAX`].
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.items
            .iter()
            .map(LineItem::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Apply an action, returning whether the cart changed.
    pub fn apply(&mut self, action: CartAction) -> bool {
        match action {
            CartAction::Add(mut item) => {
                if let Some(existing) = self.find_mut(&item.id) {
                    let before = existing.quantity();
                    existing.increment();
                    existing.quantity() != before
                } else {
                    item.set_quantity(NonZeroU32::MIN);
                    self.items.push(item);
                    true
                }
            }
            CartAction::Remove(id) => self.remove(&id),
            CartAction::SetQuantity { id, quantity } => {
                let clamped = u32::try_from(quantity.max(0)).unwrap_or(u32::MAX);
                match NonZeroU32::new(clamped) {
                    None => self.remove(&id),
                    Some(quantity) => match self.find_mut(&id) {
                        Some(item) if item.quantity() != quantity.get() => {
                            item.set_quantity(quantity);
                            true
                        }
                        _ => false,
                    },
                }
            }
            CartAction::Clear => {
                let changed = !self.items.is_empty();
                self.items.clear();
                changed
            }
            CartAction::Load(items) => {
                let loaded = dedup_first(items);
                let changed = loaded != self.items;
                self.items = loaded;
                changed
            }
        }
    }

    fn find_mut(&mut self, id: &ItemId) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|item| item.id == *id)
    }

    fn remove(&mut self, id: &ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != *id);
        self.items.len() != before
    }
}

/// Keep the first occurrence of each ID.
fn dedup_first(items: Vec<LineItem>) -> Vec<LineItem> {
    let mut out: Vec<LineItem> = Vec::with_capacity(items.len());
    for item in items {
        if out.iter().all(|kept| kept.id != item.id) {
            out.push(item);
        }
    }
    out
}
