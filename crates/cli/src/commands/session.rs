//! Sign-in state commands.
//!
//! # Usage
//!
//! ```bash
//! np-cart login alice
//! np-cart whoami
//! np-cart logout
//! ```
//!
//! The signed-in shopper is kept in the backing store under
//! [`SESSION_IDENTITY_KEY`]. That key is outside the `cart:` namespace, so
//! signing out purges carts without touching it.

use naked_pineapple_cart::{
    CartError, CartStore, IdentityProvider, IdentityTransition, KeyValueStore, Notifier,
};
use naked_pineapple_core::Identity;

use crate::output;

/// Key holding the signed-in identity.
pub const SESSION_IDENTITY_KEY: &str = "session:identity";

/// Identity remembered from the previous run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionIdentity(Identity);

impl SessionIdentity {
    /// Read the remembered identity. Missing or unreadable sessions are guests.
    pub fn read(kv: &impl KeyValueStore) -> Self {
        let raw = match kv.get(SESSION_IDENTITY_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read session, continuing as guest");
                return Self::default();
            }
        };
        serde_json::from_str(&raw).map_or_else(
            |e| {
                tracing::warn!(error = %e, "Corrupt session, continuing as guest");
                Self::default()
            },
            Self,
        )
    }
}

impl IdentityProvider for SessionIdentity {
    fn identity(&self) -> Identity {
        self.0.clone()
    }
}

/// Remember `identity` for the next run.
pub fn write(kv: &mut impl KeyValueStore, identity: &Identity) -> Result<(), CartError> {
    match identity {
        Identity::Guest => kv.remove(SESSION_IDENTITY_KEY)?,
        Identity::Authenticated(_) => {
            let raw = serde_json::to_string(identity)
                .map_err(naked_pineapple_cart::StorageError::from)?;
            kv.set(SESSION_IDENTITY_KEY, &raw)?;
        }
    }
    Ok(())
}

/// Sign in as `id`.
pub fn login<S: KeyValueStore, N: Notifier>(
    store: &mut CartStore<S, N>,
    id: &str,
) -> Result<Identity, CartError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(CartError::BadRequest("shopper id cannot be empty".to_string()));
    }
    let identity = Identity::authenticated(id);
    let transition = store.set_identity(identity.clone());
    match transition {
        IdentityTransition::Unchanged => output::line(&format!("Already signed in as {id}")),
        _ => output::line(&format!(
            "Signed in as {id} ({} items in cart)",
            store.total_items()
        )),
    }
    Ok(identity)
}

/// Sign out.
pub fn logout<S: KeyValueStore, N: Notifier>(store: &mut CartStore<S, N>) -> Identity {
    match store.set_identity(Identity::Guest) {
        IdentityTransition::Unchanged => output::line("Not signed in"),
        _ => output::line("Signed out"),
    }
    Identity::Guest
}

/// Print the signed-in identity.
pub fn whoami<S: KeyValueStore, N: Notifier>(store: &CartStore<S, N>) {
    match store.identity().id() {
        Some(id) => output::line(id.as_str()),
        None => output::line("guest"),
    }
}
