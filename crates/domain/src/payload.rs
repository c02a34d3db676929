//! Bulk-load payload classification.
//!
//! A JSON file dropped into the load directory can hold an object, an
//! array, or a bare scalar. The shape is resolved once at parse time
//! into a tagged variant so the uploader only matches on three cases.

use serde_json::{Map, Value};

/// The shape of one bulk-load file, decided once after parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum BulkPayload {
    /// A JSON object: becomes exactly one document.
    Single(Map<String, Value>),
    /// A JSON array: becomes one document per element.
    Batch(Vec<Value>),
    /// Any other JSON value: wrapped in a `{data, source_file,
    /// uploaded_at}` envelope.
    Scalar(Value),
}

impl BulkPayload {
    /// Classify a parsed JSON value.
    #[must_use]
    pub fn classify(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Single(map),
            Value::Array(items) => Self::Batch(items),
            other => Self::Scalar(other),
        }
    }

    /// Number of documents this payload produces when uploaded.
    #[must_use]
    pub fn document_count(&self) -> usize {
        match self {
            Self::Single(_) | Self::Scalar(_) => 1,
            Self::Batch(items) => items.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_classify_object_as_single() {
        let payload = BulkPayload::classify(json!({"product": "Laptop", "price": 1200.0}));
        assert!(matches!(payload, BulkPayload::Single(_)));
        assert_eq!(payload.document_count(), 1);
    }

    #[test]
    fn should_classify_array_as_batch_with_one_document_per_element() {
        let payload = BulkPayload::classify(json!([{"id": 1}, {"id": 2}, {"id": 3}]));
        assert!(matches!(payload, BulkPayload::Batch(_)));
        assert_eq!(payload.document_count(), 3);
    }

    #[test]
    fn should_classify_empty_array_as_empty_batch() {
        let payload = BulkPayload::classify(json!([]));
        assert_eq!(payload.document_count(), 0);
    }

    #[test]
    fn should_classify_scalars_as_scalar() {
        assert!(matches!(
            BulkPayload::classify(json!(42)),
            BulkPayload::Scalar(_)
        ));
        assert!(matches!(
            BulkPayload::classify(json!("bare string")),
            BulkPayload::Scalar(_)
        ));
        assert!(matches!(
            BulkPayload::classify(Value::Null),
            BulkPayload::Scalar(Value::Null)
        ));
    }
}
