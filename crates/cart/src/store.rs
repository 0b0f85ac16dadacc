//! The cart store.
//!
//! [`CartStore`] owns the cart for whoever is currently signed in. It applies
//! [`CartAction`]s through the reducer, saves the result for authenticated
//! shoppers, and reloads or purges saved carts when the identity changes.
//!
//! # Identity transitions
//!
//! | From | To | Effect |
//! |---|---|---|
//! | Guest | Authenticated(id) | load the saved cart for `id` (empty if none) |
//! | Authenticated(a) | Authenticated(b) | drop in-memory cart, load the saved cart for `b` |
//! | Authenticated(id) | Guest | clear the cart, delete every saved cart |
//! | same | same | nothing |
//!
//! # Failure handling
//!
//! Storage errors never surface from cart operations. A failed write is
//! logged and the in-memory cart stays authoritative; an unreadable or
//! corrupt saved cart loads as empty.

use chrono::Utc;
use naked_pineapple_core::{Identity, IdentityId, ItemId, LineItem};
use rust_decimal::Decimal;

use crate::config::CartSettings;
use crate::identity::{IdentityProvider, IdentityTransition};
use crate::notify::{NotificationKind, Notifier};
use crate::snapshot;
use crate::state::{CartAction, CartState};
use crate::storage::{KeyValueStore, is_cart_key, storage_key};
use crate::view::CartView;

/// Shown when a guest tries to add to the cart.
pub const LOGIN_REQUIRED_MESSAGE: &str = "Please sign in to add items to your cart";

/// Identity-scoped cart with persistence.
///
/// Build one per application with [`CartStore::new`] and pass it by reference
/// to whatever needs it.
#[derive(Debug)]
pub struct CartStore<S, N> {
    state: CartState,
    identity: Identity,
    storage: S,
    notifier: N,
    settings: CartSettings,
}

impl<S: KeyValueStore, N: Notifier> CartStore<S, N> {
    /// Create an empty guest cart.
    pub fn new(storage: S, notifier: N) -> Self {
        Self::with_settings(storage, notifier, CartSettings::default())
    }

    /// Create an empty guest cart with explicit display settings.
    pub fn with_settings(storage: S, notifier: N, settings: CartSettings) -> Self {
        Self {
            state: CartState::new(),
            identity: Identity::Guest,
            storage,
            notifier,
            settings,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        self.state.items()
    }

    /// Current cart state.
    #[must_use]
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    /// Identity the cart is scoped to.
    #[must_use]
    pub const fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Backing key-value store.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Notification sink.
    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Display settings.
    #[must_use]
    pub const fn settings(&self) -> &CartSettings {
        &self.settings
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.state.total_items()
    }

    /// Sum of `unit_price * quantity` over all items.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.state.total_price()
    }

    /// Display-ready snapshot of the cart.
    #[must_use]
    pub fn view(&self) -> CartView {
        CartView::from_state(&self.state, &self.settings)
    }

    /// Whether views should offer another unit of `id`.
    ///
    /// Items not yet in the cart can always be added. The store itself never
    /// enforces the cap.
    #[must_use]
    pub fn can_increment(&self, id: &ItemId) -> bool {
        self.state
            .get(id)
            .is_none_or(|item| item.quantity() < self.settings.max_display_quantity)
    }

    /// Split the store back into its collaborators.
    pub fn into_parts(self) -> (S, N) {
        (self.storage, self.notifier)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add one unit of `item`.
    ///
    /// Guests cannot add: the call is rejected, a notification is emitted,
    /// and `false` is returned with the cart untouched.
    pub fn add(&mut self, item: LineItem) -> bool {
        if !self.identity.is_authenticated() {
            tracing::warn!(item_id = %item.id, "Rejected add to cart: not signed in");
            self.notifier
                .notify(LOGIN_REQUIRED_MESSAGE, NotificationKind::Warning);
            return false;
        }
        self.dispatch(CartAction::Add(item));
        true
    }

    /// Remove `id`. No-op if absent.
    pub fn remove(&mut self, id: &ItemId) {
        self.dispatch(CartAction::Remove(id.clone()));
    }

    /// Set the quantity of `id`, clamped to ≥ 0. Zero removes the item.
    pub fn set_quantity(&mut self, id: &ItemId, quantity: i64) {
        self.dispatch(CartAction::SetQuantity {
            id: id.clone(),
            quantity,
        });
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.dispatch(CartAction::Clear);
    }

    /// Apply `action` and save the cart if it changed. Guest carts are never saved.
    fn dispatch(&mut self, action: CartAction) {
        let name = action.name();
        if !self.state.apply(action) {
            tracing::debug!(action = name, identity = %self.identity, "Cart unchanged");
            return;
        }
        tracing::debug!(
            action = name,
            identity = %self.identity,
            items = self.state.len(),
            "Cart updated"
        );
        if let Identity::Authenticated(id) = &self.identity {
            let id = id.clone();
            self.save(&id);
        }
    }

    // =========================================================================
    // Identity
    // =========================================================================

    /// How switching to `next` would affect the cart.
    #[must_use]
    pub fn transition(&self, next: &Identity) -> IdentityTransition {
        IdentityTransition::between(&self.identity, next)
    }

    /// Re-scope the cart to `next`.
    pub fn set_identity(&mut self, next: Identity) -> IdentityTransition {
        let transition = self.transition(&next);
        match transition {
            IdentityTransition::Unchanged => return transition,
            IdentityTransition::Login | IdentityTransition::Switch => {
                self.state = CartState::new();
                self.identity = next;
                if let Identity::Authenticated(id) = &self.identity {
                    let id = id.clone();
                    let items = self.load(&id);
                    self.state.apply(CartAction::Load(items));
                }
            }
            IdentityTransition::Logout => {
                self.identity = Identity::Guest;
                self.state.apply(CartAction::Clear);
                self.purge_all();
            }
        }
        tracing::info!(
            ?transition,
            identity = %self.identity,
            items = self.state.len(),
            "Cart identity changed"
        );
        transition
    }

    /// Re-scope the cart to whatever `provider` reports.
    pub fn sync_identity(&mut self, provider: &impl IdentityProvider) -> IdentityTransition {
        self.set_identity(provider.identity())
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    fn save(&mut self, id: &IdentityId) {
        let key = storage_key(id);
        let result = snapshot::encode(self.state.items(), Utc::now())
            .and_then(|raw| self.storage.set(&key, &raw));
        if let Err(e) = result {
            tracing::error!(key = %key, error = %e, "Failed to save cart");
        }
    }

    fn load(&self, id: &IdentityId) -> Vec<LineItem> {
        let key = storage_key(id);
        let raw = match self.storage.get(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key = %key, "No saved cart");
                return Vec::new();
            }
            Err(e) => {
                tracing::error!(key = %key, error = %e, "Failed to read saved cart");
                return Vec::new();
            }
        };
        match snapshot::decode(&key, &raw) {
            Ok(stored) => {
                tracing::debug!(
                    key = %key,
                    saved_at = %stored.saved_at,
                    items = stored.items.len(),
                    "Loaded saved cart"
                );
                stored.items
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Discarding corrupt saved cart");
                Vec::new()
            }
        }
    }

    /// Delete every saved cart, not only the current shopper's.
    fn purge_all(&mut self) {
        let keys = match self.storage.list_keys() {
            Ok(keys) => keys,
            Err(e) => {
                tracing::error!(error = %e, "Failed to list saved carts for purge");
                return;
            }
        };
        let mut purged = 0usize;
        for key in keys.iter().filter(|key| is_cart_key(key)) {
            match self.storage.remove(key) {
                Ok(()) => purged += 1,
                Err(e) => tracing::error!(key = %key, error = %e, "Failed to purge saved cart"),
            }
        }
        tracing::info!(purged, "Purged saved carts");
    }
}
