//! Bulk loader — one-time ingestion of JSON files into the collection.
//!
//! Every `*.json` file in the load directory becomes one or more
//! documents, stamped with `source_file` and `uploaded_at`. Failures are
//! isolated per file: a malformed or uninsertable file is logged and
//! counted, and processing continues with the remaining files.

use std::path::Path;

use mongodb::Collection;
use mongodb::bson::{DateTime, Document, doc};

use wares_domain::error::WaresError;
use wares_domain::payload::BulkPayload;

use crate::error::StorageError;
use crate::store::MongoStore;

/// Outcome of a bulk-load run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Files whose documents were inserted.
    pub uploaded: usize,
    /// Files that failed to parse or insert.
    pub failed: usize,
}

impl LoadReport {
    /// Overall success: at least one file uploaded.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.uploaded > 0
    }
}

/// Uploads JSON files from a directory into a named collection.
pub struct BulkLoader {
    store: MongoStore,
}

impl BulkLoader {
    /// Create a loader over the given store handle.
    #[must_use]
    pub fn new(store: MongoStore) -> Self {
        Self { store }
    }

    /// Scan `dir` for `*.json` files and upload each one.
    ///
    /// # Errors
    ///
    /// Returns [`WaresError::Unavailable`] when the store is
    /// disconnected, or [`WaresError::Unexpected`] when the directory
    /// cannot be read. Per-file parse and insert failures do **not**
    /// error; they are logged, counted in the report, and skipped.
    pub async fn load_directory(
        &self,
        dir: &Path,
        collection: &str,
    ) -> Result<LoadReport, WaresError> {
        let coll: Collection<Document> = self.store.collection(collection)?;

        let mut report = LoadReport::default();
        let entries = std::fs::read_dir(dir).map_err(StorageError::from)?;

        for entry in entries {
            let path = entry.map_err(StorageError::from)?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();

            match upload_file(&coll, &path, &file_name).await {
                Ok(count) => {
                    tracing::info!(file = %file_name, documents = count, "file uploaded");
                    report.uploaded += 1;
                }
                Err(err) => {
                    tracing::warn!(file = %file_name, error = %err, "file upload failed");
                    report.failed += 1;
                }
            }
        }

        tracing::info!(
            uploaded = report.uploaded,
            failed = report.failed,
            "bulk load finished"
        );
        Ok(report)
    }
}

async fn upload_file(
    coll: &Collection<Document>,
    path: &Path,
    file_name: &str,
) -> Result<usize, StorageError> {
    let content = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;
    let documents = stamped_documents(BulkPayload::classify(value), file_name, DateTime::now())?;

    match documents.as_slice() {
        [] => {}
        [single] => {
            coll.insert_one(single).await?;
        }
        _ => {
            coll.insert_many(&documents).await?;
        }
    }
    Ok(documents.len())
}

/// Convert a classified payload into stamped BSON documents.
///
/// Batch elements must themselves be objects; a non-object element fails
/// the whole file. Scalars are wrapped in a `{data, source_file,
/// uploaded_at}` envelope.
fn stamped_documents(
    payload: BulkPayload,
    source_file: &str,
    at: DateTime,
) -> Result<Vec<Document>, StorageError> {
    match payload {
        BulkPayload::Single(map) => {
            let mut document = mongodb::bson::to_document(&map)?;
            stamp(&mut document, source_file, at);
            Ok(vec![document])
        }
        BulkPayload::Batch(items) => items
            .into_iter()
            .map(|item| {
                let mut document = mongodb::bson::to_document(&item)?;
                stamp(&mut document, source_file, at);
                Ok(document)
            })
            .collect(),
        BulkPayload::Scalar(value) => {
            let data = mongodb::bson::to_bson(&value)?;
            Ok(vec![doc! {
                "data": data,
                "source_file": source_file,
                "uploaded_at": at,
            }])
        }
    }
}

fn stamp(document: &mut Document, source_file: &str, at: DateTime) {
    document.insert("source_file", source_file);
    document.insert("uploaded_at", at);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn classify(value: serde_json::Value) -> BulkPayload {
        BulkPayload::classify(value)
    }

    #[test]
    fn should_stamp_object_payload_as_one_document() {
        let at = DateTime::now();
        let documents = stamped_documents(
            classify(json!({"id": 1, "product": "Laptop", "price": 1200.0})),
            "user_1.json",
            at,
        )
        .unwrap();

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].get_str("source_file").unwrap(), "user_1.json");
        assert_eq!(documents[0].get_datetime("uploaded_at").unwrap(), &at);
        assert_eq!(documents[0].get_str("product").unwrap(), "Laptop");
    }

    #[test]
    fn should_stamp_every_element_of_an_array_payload() {
        let documents = stamped_documents(
            classify(json!([{"id": 1}, {"id": 2}])),
            "batch.json",
            DateTime::now(),
        )
        .unwrap();

        assert_eq!(documents.len(), 2);
        for document in &documents {
            assert_eq!(document.get_str("source_file").unwrap(), "batch.json");
            assert!(document.get_datetime("uploaded_at").is_ok());
        }
    }

    #[test]
    fn should_wrap_scalar_payload_in_envelope() {
        let documents =
            stamped_documents(classify(json!(42)), "scalar.json", DateTime::now()).unwrap();

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].get_i64("data").unwrap(), 42);
        assert_eq!(documents[0].get_str("source_file").unwrap(), "scalar.json");
    }

    #[test]
    fn should_fail_file_when_array_contains_non_object_element() {
        let result = stamped_documents(
            classify(json!([{"id": 1}, "not an object"])),
            "mixed.json",
            DateTime::now(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn should_produce_no_documents_for_empty_array() {
        let documents =
            stamped_documents(classify(json!([])), "empty.json", DateTime::now()).unwrap();
        assert!(documents.is_empty());
    }

    #[test]
    fn should_count_success_only_when_files_uploaded() {
        assert!(
            LoadReport {
                uploaded: 1,
                failed: 1
            }
            .succeeded()
        );
        assert!(
            !LoadReport {
                uploaded: 0,
                failed: 3
            }
            .succeeded()
        );
        assert!(!LoadReport::default().succeeded());
    }

    #[tokio::test]
    async fn should_report_unavailable_when_store_disconnected() {
        let loader = BulkLoader::new(MongoStore::disconnected());
        let result = loader
            .load_directory(Path::new("does-not-matter"), "users")
            .await;
        assert!(matches!(result, Err(WaresError::Unavailable(_))));
    }
}
