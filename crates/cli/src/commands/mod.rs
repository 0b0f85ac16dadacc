//! Command handlers.
//!
//! Handlers are generic over the store's collaborators so they can be tested
//! against an in-memory store.

pub mod cart;
pub mod session;

use naked_pineapple_cart::{CartError, CartStore, KeyValueStore, Notifier};
use naked_pineapple_core::Identity;

use crate::Commands;

/// Run `command` against `store`.
///
/// Returns the identity to remember for the next run when the command changed
/// who is signed in.
pub fn execute<S: KeyValueStore, N: Notifier>(
    store: &mut CartStore<S, N>,
    command: Commands,
) -> Result<Option<Identity>, CartError> {
    match command {
        Commands::Login { id } => session::login(store, &id).map(Some),
        Commands::Logout => Ok(Some(session::logout(store))),
        Commands::Whoami => {
            session::whoami(store);
            Ok(None)
        }
        Commands::Add {
            id,
            price,
            name,
            image,
            description,
        } => {
            let item = cart::NewItem {
                id,
                price,
                name,
                image,
                description,
            };
            cart::add(store, item)?;
            Ok(None)
        }
        Commands::Remove { id } => {
            cart::remove(store, &id);
            Ok(None)
        }
        Commands::SetQuantity { id, quantity } => {
            cart::set_quantity(store, &id, quantity);
            Ok(None)
        }
        Commands::Clear => {
            cart::clear(store);
            Ok(None)
        }
        Commands::Show { json } => {
            cart::show(store, json)?;
            Ok(None)
        }
        Commands::Keys => {
            cart::keys(store)?;
            Ok(None)
        }
    }
}
