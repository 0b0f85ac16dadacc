//! Identity provider seam and transition classification.

use naked_pineapple_core::Identity;

/// Source of the current shopper identity.
///
/// The cart store is synced against a provider whenever the host application
/// observes a sign-in, account switch, or sign-out.
pub trait IdentityProvider {
    /// The identity the cart should currently be scoped to.
    fn identity(&self) -> Identity;
}

impl<P: IdentityProvider + ?Sized> IdentityProvider for &P {
    fn identity(&self) -> Identity {
        (**self).identity()
    }
}

/// A provider that always reports the same identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticIdentity(pub Identity);

impl IdentityProvider for StaticIdentity {
    fn identity(&self) -> Identity {
        self.0.clone()
    }
}

/// What an identity change means for the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityTransition {
    /// Same identity as before; nothing happens.
    Unchanged,
    /// Guest signed in; the shopper's saved cart is loaded.
    Login,
    /// One shopper replaced another; in-memory state is dropped and the new
    /// shopper's cart is loaded.
    Switch,
    /// Shopper signed out; the cart is cleared and every saved cart purged.
    Logout,
}

impl IdentityTransition {
    /// Classify a change from `current` to `next`.
    #[must_use]
    pub fn between(current: &Identity, next: &Identity) -> Self {
        match (current, next) {
            (Identity::Guest, Identity::Guest) => Self::Unchanged,
            (Identity::Authenticated(a), Identity::Authenticated(b)) if a == b => Self::Unchanged,
            (Identity::Guest, Identity::Authenticated(_)) => Self::Login,
            (Identity::Authenticated(_), Identity::Authenticated(_)) => Self::Switch,
            (Identity::Authenticated(_), Identity::Guest) => Self::Logout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_table() {
        let guest = Identity::Guest;
        let a = Identity::authenticated("a");
        let b = Identity::authenticated("b");

        let cases = [
            (&guest, &guest, IdentityTransition::Unchanged),
            (&a, &a, IdentityTransition::Unchanged),
            (&guest, &a, IdentityTransition::Login),
            (&a, &b, IdentityTransition::Switch),
            (&b, &guest, IdentityTransition::Logout),
        ];
        for (from, to, expected) in cases {
            assert_eq!(IdentityTransition::between(from, to), expected, "{from:?} -> {to:?}");
        }
    }

    #[test]
    fn test_static_provider() {
        let provider = StaticIdentity(Identity::authenticated("u1"));
        assert_eq!((&provider).identity(), Identity::authenticated("u1"));
        assert_eq!(StaticIdentity::default().identity(), Identity::Guest);
    }
}
