//! Record — the single entity managed by the service.
//!
//! A record is a flat document in one collection: a product name, a
//! price, and two provenance stamps set by the data-access layer at
//! creation time. There are no relationships to other entities, no
//! soft-delete, and no versioning.

use serde::{Deserialize, Serialize};

use crate::id::RecordId;
use crate::time::Timestamp;

/// Provenance tag stamped on records created through the HTTP API (as
/// opposed to bulk-loaded files, which carry their file name).
pub const API_SOURCE: &str = "api_created";

/// A stored record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Sequential identifier assigned at creation.
    pub id: RecordId,
    /// Free-form product name. No length or uniqueness constraint.
    pub product: String,
    /// Price. No range validation; negative values are accepted.
    pub price: f64,
    /// Provenance tag; not user-settable after creation.
    pub source_file: String,
    /// Set once at creation, never updated.
    pub uploaded_at: Timestamp,
}

/// User-supplied fields for creating a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRecord {
    pub product: String,
    pub price: f64,
}

/// User-supplied fields for updating a record. Only `product` and
/// `price` are mutable; provenance stamps are preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordUpdate {
    pub product: String,
    pub price: f64,
}

impl Record {
    /// Assemble a record from user-supplied fields and store-assigned
    /// provenance.
    #[must_use]
    pub fn created(id: RecordId, draft: NewRecord, source_file: String, at: Timestamp) -> Self {
        Self {
            id,
            product: draft.product,
            price: draft.price,
            source_file,
            uploaded_at: at,
        }
    }

    /// Apply an update in place. Touches `product` and `price` only.
    pub fn apply(&mut self, update: RecordUpdate) {
        self.product = update.product;
        self.price = update.price;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time;

    fn sample() -> Record {
        Record::created(
            RecordId::new(1),
            NewRecord {
                product: "Laptop".to_string(),
                price: 1200.0,
            },
            API_SOURCE.to_string(),
            time::now(),
        )
    }

    #[test]
    fn should_stamp_provenance_at_creation() {
        let record = sample();
        assert_eq!(record.id, RecordId::new(1));
        assert_eq!(record.product, "Laptop");
        assert_eq!(record.source_file, "api_created");
    }

    #[test]
    fn should_touch_only_product_and_price_when_applying_update() {
        let mut record = sample();
        let id = record.id;
        let source = record.source_file.clone();
        let uploaded = record.uploaded_at;

        record.apply(RecordUpdate {
            product: "Mouse".to_string(),
            price: 25.5,
        });

        assert_eq!(record.product, "Mouse");
        assert!((record.price - 25.5).abs() < f64::EPSILON);
        assert_eq!(record.id, id);
        assert_eq!(record.source_file, source);
        assert_eq!(record.uploaded_at, uploaded);
    }

    #[test]
    fn should_accept_negative_price() {
        let mut record = sample();
        record.apply(RecordUpdate {
            product: "Refund".to_string(),
            price: -10.0,
        });
        assert!(record.price < 0.0);
    }

    #[test]
    fn should_serialize_with_flat_field_names() {
        let record = sample();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["product"], "Laptop");
        assert_eq!(json["source_file"], "api_created");
        assert!(json.get("uploaded_at").is_some());
    }
}
