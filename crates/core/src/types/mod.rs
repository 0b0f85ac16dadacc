//! Core types for Naked Pineapple carts.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod identity;
pub mod line_item;
pub mod price;

pub use id::*;
pub use identity::Identity;
pub use line_item::{DisplayFields, LineItem, LineItemError};
pub use price::{CurrencyCode, Price};
