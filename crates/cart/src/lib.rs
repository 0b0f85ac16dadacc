//! Naked Pineapple Cart library.
//!
//! An in-memory shopping cart with per-shopper persistence. The cart is owned
//! by a single [`CartStore`], which is built once with its collaborators and
//! handed to whatever renders it:
//!
//! - a [`KeyValueStore`] the cart is saved to, one key per shopper
//! - a [`Notifier`] that surfaces rejected operations to the shopper
//! - an [`IdentityProvider`] the store is synced against when the shopper
//!   signs in, switches account, or signs out
//!
//! # Example
//!
//! ```rust
//! use naked_pineapple_cart::{CartStore, MemoryStore, TracingNotifier};
//! use naked_pineapple_core::{DisplayFields, Identity, LineItem};
//! use rust_decimal::Decimal;
//!
//! let mut cart = CartStore::new(MemoryStore::new(), TracingNotifier);
//! cart.set_identity(Identity::authenticated("u1"));
//!
//! let item = LineItem::new("p1", Decimal::from(10), DisplayFields::named("Tee")).unwrap();
//! assert!(cart.add(item.clone()));
//! assert!(cart.add(item));
//! assert_eq!(cart.total_price(), Decimal::from(20));
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod identity;
pub mod notify;
pub mod snapshot;
pub mod state;
pub mod storage;
pub mod store;
pub mod view;

pub use config::{CartConfig, CartSettings, ConfigError};
pub use error::{CartError, Result};
pub use identity::{IdentityProvider, IdentityTransition, StaticIdentity};
pub use notify::{Notification, NotificationKind, Notifier, RecordingNotifier, TracingNotifier};
pub use state::{CartAction, CartState};
pub use storage::{
    CART_KEY_PREFIX, FileStore, KeyValueStore, MemoryStore, StorageError, storage_key,
};
pub use store::CartStore;
pub use view::{CartItemView, CartView};
