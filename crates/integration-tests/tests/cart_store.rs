//! Integration tests for cart operations.
//!
//! These tests drive the public `CartStore` API the way a storefront view
//! would: sign in, add, adjust, and read totals.

use naked_pineapple_cart::NotificationKind;
use naked_pineapple_core::{Identity, ItemId};
use naked_pineapple_integration_tests::{guest_cart, item, signed_in_cart};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Worked Example
// =============================================================================

#[test]
fn test_add_twice_then_zero_quantity() {
    let mut cart = signed_in_cart("shopper");

    assert!(cart.add(item("p1", 10)));
    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.items()[0].quantity(), 1);
    assert_eq!(cart.total_price(), Decimal::from(10));

    assert!(cart.add(item("p1", 10)));
    assert_eq!(cart.items()[0].quantity(), 2);
    assert_eq!(cart.total_price(), Decimal::from(20));

    cart.set_quantity(&ItemId::new("p1"), 0);
    assert!(cart.items().is_empty());
}

// =============================================================================
// Guest Gating
// =============================================================================

#[test]
fn test_guest_add_never_changes_items() {
    let mut cart = guest_cart();
    for id in ["a", "b", "a"] {
        assert!(!cart.add(item(id, 3)));
    }
    assert!(cart.items().is_empty());
    assert_eq!(cart.total_items(), 0);

    let seen = cart.notifier().notifications();
    assert_eq!(seen.len(), 3);
    assert!(seen.iter().all(|n| n.kind == NotificationKind::Warning));
}

#[test]
fn test_add_rejected_after_logout() {
    let mut cart = signed_in_cart("shopper");
    assert!(cart.add(item("p1", 1)));
    cart.set_identity(Identity::Guest);
    assert!(!cart.add(item("p1", 1)));
    assert!(cart.items().is_empty());
}

// =============================================================================
// No-ops
// =============================================================================

#[test]
fn test_unknown_ids_are_noops() {
    let mut cart = signed_in_cart("shopper");
    cart.add(item("p1", 2));
    let before = cart.items().to_vec();

    cart.remove(&ItemId::new("missing"));
    cart.set_quantity(&ItemId::new("missing"), 7);
    cart.set_quantity(&ItemId::new("missing"), 0);

    assert_eq!(cart.items(), before.as_slice());
}

#[test]
fn test_clear_empties_cart() {
    let mut cart = signed_in_cart("shopper");
    cart.add(item("p1", 2));
    cart.add(item("p2", 3));
    cart.clear();
    assert!(cart.items().is_empty());
    assert_eq!(cart.total_price(), Decimal::ZERO);
}

#[test]
fn test_large_quantities_are_not_capped_by_store() {
    let mut cart = signed_in_cart("shopper");
    cart.add(item("p1", 1));
    cart.set_quantity(&ItemId::new("p1"), 500);
    assert_eq!(cart.total_items(), 500);
    assert!(!cart.can_increment(&ItemId::new("p1")));
}

#[test]
fn test_totals_saturate_for_extreme_carts() {
    let mut cart = signed_in_cart("shopper");
    for id in ["p1", "p2", "p3"] {
        cart.add(item(id, i64::MAX));
        cart.set_quantity(&ItemId::new(id), i64::MAX);
    }
    assert_eq!(cart.total_price(), Decimal::MAX);

    let view = cart.view();
    assert_eq!(view.item_count, 3 * u64::from(u32::MAX));
    assert!(view.subtotal.starts_with('$'));
}

// =============================================================================
// Properties
// =============================================================================

#[derive(Debug, Clone)]
enum Op {
    Add(u8, u8),
    Remove(u8),
    SetQuantity(u8, i64),
    Clear,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0u8..5, 0u8..50).prop_map(|(id, price)| Op::Add(id, price)),
        1 => (0u8..5).prop_map(Op::Remove),
        2 => (0u8..5, -3i64..12).prop_map(|(id, q)| Op::SetQuantity(id, q)),
        1 => Just(Op::Clear),
    ]
}

fn run_ops(cart: &mut naked_pineapple_integration_tests::TestCart, ops: &[Op]) {
    for op in ops {
        match op {
            Op::Add(id, price) => {
                cart.add(item(&format!("p{id}"), i64::from(*price)));
            }
            Op::Remove(id) => cart.remove(&ItemId::new(format!("p{id}"))),
            Op::SetQuantity(id, q) => cart.set_quantity(&ItemId::new(format!("p{id}")), *q),
            Op::Clear => cart.clear(),
        }
    }
}

proptest! {
    #[test]
    fn prop_store_invariants_hold(ops in prop::collection::vec(arb_op(), 0..48)) {
        let mut cart = signed_in_cart("shopper");
        run_ops(&mut cart, &ops);

        let items = cart.items();
        for (i, a) in items.iter().enumerate() {
            prop_assert!(a.quantity() >= 1);
            prop_assert!(items.iter().skip(i + 1).all(|b| b.id != a.id));
        }

        let qty: u64 = items.iter().map(|i| u64::from(i.quantity())).sum();
        let price: Decimal = items
            .iter()
            .map(|i| i.unit_price() * Decimal::from(i.quantity()))
            .sum();
        prop_assert_eq!(cart.total_items(), qty);
        prop_assert_eq!(cart.total_price(), price);
    }

    #[test]
    fn prop_guest_cart_stays_empty(ops in prop::collection::vec(arb_op(), 0..48)) {
        let mut cart = guest_cart();
        run_ops(&mut cart, &ops);
        prop_assert!(cart.items().is_empty());
        prop_assert!(cart.storage().is_empty());
    }
}
