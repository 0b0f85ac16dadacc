//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. Cart IDs come from
//! external systems (catalog, identity provider) as opaque strings, so the
//! wrappers are string-backed.

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>` and `AsRef<str>` implementations
///
/// # Example
///
/// ```rust
/// # use naked_pineapple_core::define_id;
/// define_id!(SkuId);
/// define_id!(ShopperId);
///
/// let sku = SkuId::new("p1");
/// let shopper = ShopperId::new("p1");
///
/// // These are different types, so this won't compile:
/// // let _: SkuId = shopper;
/// assert_eq!(sku.as_str(), shopper.as_str());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Product/variant identifier of a line item, unique within a cart.
define_id!(ItemId);
// Identifier of an authenticated shopper, as supplied by the identity provider.
define_id!(IdentityId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_raw_value() {
        assert_eq!(ItemId::new("p1").to_string(), "p1");
        assert_eq!(format!("{}", IdentityId::from("user-7")), "user-7");
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&ItemId::new("sku-9")).unwrap_or_default();
        assert_eq!(json, "\"sku-9\"");
    }

    #[test]
    fn test_conversions() {
        let id = IdentityId::from(String::from("abc"));
        assert_eq!(id.as_str(), "abc");
        let raw: String = id.into();
        assert_eq!(raw, "abc");
    }
}
