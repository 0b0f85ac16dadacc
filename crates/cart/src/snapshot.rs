//! Persisted cart format.
//!
//! A saved cart is a versioned JSON envelope around the line items:
//!
//! ```json
//! { "version": 1, "savedAt": "2026-01-01T00:00:00Z", "items": [ ... ] }
//! ```

use chrono::{DateTime, Utc};
use naked_pineapple_core::LineItem;
use serde::{Deserialize, Serialize};

use crate::storage::StorageError;

/// Current envelope version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// A cart as read back from storage.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredCart {
    /// Envelope version.
    pub version: u32,
    /// When the cart was written.
    pub saved_at: DateTime<Utc>,
    /// Line items in cart order.
    pub items: Vec<LineItem>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredCartRef<'a> {
    version: u32,
    saved_at: DateTime<Utc>,
    items: &'a [LineItem],
}

/// Serialize items for storage.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode(items: &[LineItem], saved_at: DateTime<Utc>) -> Result<String, StorageError> {
    Ok(serde_json::to_string(&StoredCartRef {
        version: SNAPSHOT_VERSION,
        saved_at,
        items,
    })?)
}

/// Parse a stored value.
///
/// # Errors
///
/// Returns an error if the value is not valid JSON, fails line item
/// validation, has an unknown version, or repeats an item ID.
pub fn decode(key: &str, raw: &str) -> Result<StoredCart, StorageError> {
    let stored: StoredCart = serde_json::from_str(raw)?;

    if stored.version != SNAPSHOT_VERSION {
        return Err(StorageError::Corrupt {
            key: key.to_owned(),
            reason: format!("unsupported version {}", stored.version),
        });
    }

    for (i, item) in stored.items.iter().enumerate() {
        if stored.items.iter().skip(i + 1).any(|other| other.id == item.id) {
            return Err(StorageError::Corrupt {
                key: key.to_owned(),
                reason: format!("duplicate item id {}", item.id),
            });
        }
    }

    Ok(stored)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use naked_pineapple_core::DisplayFields;
    use rust_decimal::Decimal;

    use super::*;

    fn items() -> Vec<LineItem> {
        vec![
            LineItem::new("p1", Decimal::new(999, 2), DisplayFields::named("Mug")).unwrap(),
            LineItem::new("p2", Decimal::from(25), DisplayFields::named("Hoodie")).unwrap(),
        ]
    }

    #[test]
    fn test_encode_then_decode() {
        let at = DateTime::parse_from_rfc3339("2026-01-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let raw = encode(&items(), at).unwrap();
        let stored = decode("cart:u1", &raw).unwrap();
        assert_eq!(stored.version, SNAPSHOT_VERSION);
        assert_eq!(stored.saved_at, at);
        assert_eq!(stored.items, items());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode("cart:u1", "{not json"),
            Err(StorageError::Serialization(_))
        ));
    }

    #[test]
    fn test_decode_rejects_unknown_version() {
        let raw = r#"{"version":7,"savedAt":"2026-01-01T00:00:00Z","items":[]}"#;
        assert!(matches!(
            decode("cart:u1", raw),
            Err(StorageError::Corrupt { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_duplicate_ids() {
        let raw = r#"{"version":1,"savedAt":"2026-01-01T00:00:00Z","items":[
            {"id":"p1","unitPrice":"1","quantity":1,"name":"A"},
            {"id":"p1","unitPrice":"2","quantity":3,"name":"B"}
        ]}"#;
        let err = decode("cart:u1", raw).unwrap_err();
        assert!(err.to_string().contains("duplicate item id p1"));
    }
}
