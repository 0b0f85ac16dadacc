//! Shopper identity as seen by the cart.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::IdentityId;

/// Who the cart currently belongs to.
///
/// A cart is scoped to exactly one identity at a time. Guests can browse but
/// cannot add items; authenticated shoppers get a persisted cart keyed by
/// their [`IdentityId`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Identity {
    /// Not signed in.
    #[default]
    Guest,
    /// Signed in as the given shopper.
    Authenticated(IdentityId),
}

impl Identity {
    /// Shorthand for an authenticated identity.
    #[must_use]
    pub fn authenticated(id: impl Into<IdentityId>) -> Self {
        Self::Authenticated(id.into())
    }

    /// Whether this is a signed-in shopper.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The shopper ID, if signed in.
    #[must_use]
    pub const fn id(&self) -> Option<&IdentityId> {
        match self {
            Self::Guest => None,
            Self::Authenticated(id) => Some(id),
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guest => f.write_str("guest"),
            Self::Authenticated(id) => write!(f, "user:{id}"),
        }
    }
}
