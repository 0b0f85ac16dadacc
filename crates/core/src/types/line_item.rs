//! Cart line items.
//!
//! A [`LineItem`] is one product-with-quantity entry in a cart. Its quantity is
//! a [`NonZeroU32`], so an item with quantity zero cannot be represented; the
//! store removes an item instead of driving it to zero.

use core::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`LineItem`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LineItemError {
    /// The unit price is below zero.
    #[error("unit price cannot be negative (got {0})")]
    NegativePrice(Decimal),
    /// The item ID is empty.
    #[error("item id cannot be empty")]
    EmptyId,
}

/// Display metadata carried alongside a line item.
///
/// Opaque to the cart: the store never reads these fields, it only keeps them
/// with the item so views can render it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFields {
    /// Product name.
    pub name: String,
    /// Image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Short description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl DisplayFields {
    /// Display fields with only a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: None,
            description: None,
        }
    }
}

/// One product-with-quantity entry in a cart.
///
/// ## Constraints
///
/// - `id` is non-empty
/// - `unit_price` is at least zero
/// - `quantity` is at least one
///
/// ## Examples
///
/// ```
/// use naked_pineapple_core::{DisplayFields, LineItem};
/// use rust_decimal::Decimal;
///
/// let mut item = LineItem::new("p1", Decimal::from(10), DisplayFields::named("Tee")).unwrap();
/// assert_eq!(item.quantity(), 1);
///
/// item.increment();
/// assert_eq!(item.line_total(), Decimal::from(20));
///
/// assert!(LineItem::new("p2", Decimal::from(-1), DisplayFields::default()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "LineItemRecord")]
pub struct LineItem {
    /// Unique (within a cart) product identifier.
    pub id: super::ItemId,
    unit_price: Decimal,
    quantity: NonZeroU32,
    /// Opaque display metadata.
    #[serde(flatten)]
    pub display: DisplayFields,
}

impl LineItem {
    /// Create a line item with quantity 1.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty or the unit price is negative.
    pub fn new(
        id: impl Into<super::ItemId>,
        unit_price: Decimal,
        display: DisplayFields,
    ) -> Result<Self, LineItemError> {
        Self::with_quantity(id, unit_price, NonZeroU32::MIN, display)
    }

    /// Create a line item with an explicit quantity.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty or the unit price is negative.
    pub fn with_quantity(
        id: impl Into<super::ItemId>,
        unit_price: Decimal,
        quantity: NonZeroU32,
        display: DisplayFields,
    ) -> Result<Self, LineItemError> {
        let id = id.into();
        if id.as_str().is_empty() {
            return Err(LineItemError::EmptyId);
        }
        if unit_price.is_sign_negative() && !unit_price.is_zero() {
            return Err(LineItemError::NegativePrice(unit_price));
        }
        Ok(Self {
            id,
            unit_price,
            quantity,
            display,
        })
    }

    /// Price of a single unit.
    #[must_use]
    pub const fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Number of units, always at least one.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// `unit_price * quantity`, saturating at [`Decimal::MAX`].
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price
            .saturating_mul(Decimal::from(self.quantity.get()))
    }

    /// Add one unit. Saturates at `u32::MAX`.
    pub const fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Replace the quantity.
    pub const fn set_quantity(&mut self, quantity: NonZeroU32) {
        self.quantity = quantity;
    }
}

/// Wire shape of a [`LineItem`], validated on the way in.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LineItemRecord {
    id: super::ItemId,
    unit_price: Decimal,
    quantity: NonZeroU32,
    #[serde(flatten)]
    display: DisplayFields,
}

impl TryFrom<LineItemRecord> for LineItem {
    type Error = LineItemError;

    fn try_from(record: LineItemRecord) -> Result<Self, Self::Error> {
        Self::with_quantity(
            record.id,
            record.unit_price,
            record.quantity,
            record.display,
        )
    }
}
