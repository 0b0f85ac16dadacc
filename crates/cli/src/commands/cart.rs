//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! np-cart add --id tee --price 19.99 --name "Pineapple Tee"
//! np-cart set-quantity tee 3
//! np-cart remove tee
//! np-cart clear
//! np-cart show --json
//! ```

use naked_pineapple_cart::{CartError, CartStore, KeyValueStore, Notifier};
use naked_pineapple_core::{DisplayFields, ItemId, LineItem};
use rust_decimal::Decimal;

use crate::output;

/// Product details for `add`.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub id: String,
    pub price: Decimal,
    pub name: String,
    pub image: Option<String>,
    pub description: Option<String>,
}

impl TryFrom<NewItem> for LineItem {
    type Error = CartError;

    fn try_from(input: NewItem) -> Result<Self, Self::Error> {
        let name = if input.name.is_empty() {
            input.id.clone()
        } else {
            input.name
        };
        Self::new(
            input.id,
            input.price,
            DisplayFields {
                name,
                image: input.image,
                description: input.description,
            },
        )
        .map_err(CartError::from)
    }
}

/// Add one unit. Returns whether the add was accepted.
pub fn add<S: KeyValueStore, N: Notifier>(
    store: &mut CartStore<S, N>,
    input: NewItem,
) -> Result<bool, CartError> {
    let item = LineItem::try_from(input)?;
    let id = item.id.clone();
    if !store.can_increment(&id) {
        tracing::info!(item_id = %id, "Quantity is above the display limit");
    }
    let added = store.add(item);
    if added {
        output::cart(&store.view());
    }
    Ok(added)
}

/// Remove a product.
pub fn remove<S: KeyValueStore, N: Notifier>(store: &mut CartStore<S, N>, id: &str) {
    store.remove(&ItemId::new(id));
    output::cart(&store.view());
}

/// Set a product's quantity.
pub fn set_quantity<S: KeyValueStore, N: Notifier>(
    store: &mut CartStore<S, N>,
    id: &str,
    quantity: i64,
) {
    store.set_quantity(&ItemId::new(id), quantity);
    output::cart(&store.view());
}

/// Empty the cart.
pub fn clear<S: KeyValueStore, N: Notifier>(store: &mut CartStore<S, N>) {
    store.clear();
    output::cart(&store.view());
}

/// Print the cart.
pub fn show<S: KeyValueStore, N: Notifier>(
    store: &CartStore<S, N>,
    json: bool,
) -> Result<(), CartError> {
    let view = store.view();
    if json {
        let raw = serde_json::to_string_pretty(&view)
            .map_err(naked_pineapple_cart::StorageError::from)?;
        output::line(&raw);
    } else {
        output::cart(&view);
    }
    Ok(())
}

/// List keys in the backing store.
pub fn keys<S: KeyValueStore, N: Notifier>(store: &CartStore<S, N>) -> Result<(), CartError> {
    for key in store.storage().list_keys()? {
        output::line(&key);
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use naked_pineapple_cart::{MemoryStore, RecordingNotifier};
    use naked_pineapple_core::Identity;

    use super::*;

    fn tee() -> NewItem {
        NewItem {
            id: "tee".to_string(),
            price: Decimal::new(1999, 2),
            name: String::new(),
            image: None,
            description: None,
        }
    }

    #[test]
    fn test_blank_name_falls_back_to_id() {
        let item = LineItem::try_from(tee()).unwrap();
        assert_eq!(item.display.name, "tee");
    }

    #[test]
    fn test_negative_price_is_invalid() {
        let mut input = tee();
        input.price = Decimal::new(-100, 2);
        assert!(matches!(
            LineItem::try_from(input),
            Err(CartError::InvalidItem(_))
        ));
    }

    #[test]
    fn test_add_as_guest_is_rejected() {
        let mut store = CartStore::new(MemoryStore::new(), RecordingNotifier::new());
        assert!(!add(&mut store, tee()).unwrap());
        assert_eq!(store.notifier().notifications().len(), 1);
    }

    #[test]
    fn test_add_and_set_quantity_when_signed_in() {
        let mut store = CartStore::new(MemoryStore::new(), RecordingNotifier::new());
        store.set_identity(Identity::authenticated("alice"));
        assert!(add(&mut store, tee()).unwrap());
        set_quantity(&mut store, "tee", 4);
        assert_eq!(store.total_items(), 4);
        assert_eq!(store.total_price(), Decimal::new(7996, 2));
        remove(&mut store, "tee");
        assert!(store.items().is_empty());
    }
}
