//! Integration tests for cart persistence across identities.
//!
//! These tests verify the identity state machine end to end: carts are saved
//! per shopper, restored on sign-in, and purged on sign-out.

use naked_pineapple_cart::{
    CartStore, FileStore, IdentityTransition, KeyValueStore, MemoryStore, RecordingNotifier,
    StaticIdentity, storage_key,
};
use naked_pineapple_core::{Identity, IdentityId, ItemId};
use naked_pineapple_integration_tests::{item, signed_in_cart};

// =============================================================================
// Round Trips
// =============================================================================

#[test]
fn test_switching_a_to_b_and_back_restores_a() {
    let mut cart = signed_in_cart("a");
    cart.add(item("shirt", 20));
    cart.add(item("shirt", 20));
    cart.add(item("hat", 15));
    let cart_a = cart.items().to_vec();

    cart.set_identity(Identity::authenticated("b"));
    cart.add(item("mug", 8));
    let cart_b = cart.items().to_vec();

    assert_eq!(
        cart.set_identity(Identity::authenticated("a")),
        IdentityTransition::Switch
    );
    assert_eq!(cart.items(), cart_a.as_slice());

    cart.set_identity(Identity::authenticated("b"));
    assert_eq!(cart.items(), cart_b.as_slice());
}

#[test]
fn test_logout_then_login_yields_empty_cart() {
    let mut cart = signed_in_cart("a");
    cart.add(item("shirt", 20));

    assert_eq!(cart.set_identity(Identity::Guest), IdentityTransition::Logout);
    assert!(cart.items().is_empty());

    assert_eq!(
        cart.set_identity(Identity::authenticated("a")),
        IdentityTransition::Login
    );
    assert!(cart.items().is_empty());
}

#[test]
fn test_logout_purges_other_shoppers_carts() {
    let mut cart = signed_in_cart("a");
    cart.add(item("shirt", 20));
    cart.set_identity(Identity::authenticated("b"));
    cart.add(item("mug", 8));

    cart.set_identity(Identity::Guest);

    let keys = cart.storage().list_keys().unwrap_or_default();
    assert!(keys.is_empty(), "expected no saved carts, found {keys:?}");
}

#[test]
fn test_logout_keeps_unrelated_keys() {
    let mut storage = MemoryStore::new();
    storage.set("wishlist:a", "[]").ok();
    let mut cart = CartStore::new(storage, RecordingNotifier::new());
    cart.set_identity(Identity::authenticated("a"));
    cart.add(item("shirt", 20));
    cart.set_identity(Identity::Guest);

    assert_eq!(
        cart.storage().list_keys().unwrap_or_default(),
        ["wishlist:a"]
    );
}

// =============================================================================
// Storage Format
// =============================================================================

#[test]
fn test_saved_under_cart_prefix() {
    let mut cart = signed_in_cart("shopper-9");
    cart.add(item("p1", 4));
    let key = storage_key(&IdentityId::new("shopper-9"));
    assert_eq!(key, "cart:shopper-9");

    let raw = cart.storage().get(&key).ok().flatten().unwrap_or_default();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap_or_default();
    assert_eq!(json["version"], 1);
    assert_eq!(json["items"][0]["id"], "p1");
    assert_eq!(json["items"][0]["quantity"], 1);
}

#[test]
fn test_guest_changes_are_never_saved() {
    let mut cart = signed_in_cart("a");
    cart.add(item("p1", 4));
    cart.set_identity(Identity::Guest);

    cart.set_quantity(&ItemId::new("p1"), 3);
    cart.clear();
    assert!(cart.storage().is_empty());
}

#[test]
fn test_corrupt_saved_cart_is_discarded() {
    let mut storage = MemoryStore::new();
    storage.set("cart:a", "definitely not a cart").ok();

    let mut cart = CartStore::new(storage, RecordingNotifier::new());
    cart.sync_identity(&StaticIdentity(Identity::authenticated("a")));
    assert!(cart.items().is_empty());
    assert!(cart.add(item("p1", 1)));
    assert_eq!(cart.total_items(), 1);
}

// =============================================================================
// File Store
// =============================================================================

#[test]
fn test_file_store_survives_restart() {
    let Ok(dir) = tempfile::tempdir() else {
        panic!("could not create temp dir");
    };
    let path = dir.path().join("carts.json");

    {
        let Ok(storage) = FileStore::open(&path) else {
            panic!("could not open store");
        };
        let mut cart = CartStore::new(storage, RecordingNotifier::new());
        cart.set_identity(Identity::authenticated("a"));
        cart.add(item("p1", 5));
        cart.add(item("p1", 5));
    }

    let Ok(storage) = FileStore::open(&path) else {
        panic!("could not reopen store");
    };
    let mut cart = CartStore::new(storage, RecordingNotifier::new());
    assert!(cart.items().is_empty());
    cart.set_identity(Identity::authenticated("a"));
    assert_eq!(cart.total_items(), 2);
}

#[test]
fn test_cart_borrows_store_mutably() {
    let mut storage = MemoryStore::new();
    {
        let mut cart = CartStore::new(&mut storage, RecordingNotifier::new());
        cart.set_identity(Identity::authenticated("a"));
        cart.add(item("p1", 5));
    }
    assert!(storage.get("cart:a").ok().flatten().is_some());
}
