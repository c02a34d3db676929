//! MongoDB implementation of [`RecordRepository`].

use std::future::Future;

use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::doc;
use serde::{Deserialize, Serialize};

use wares_app::ports::RecordRepository;
use wares_domain::error::WaresError;
use wares_domain::id::RecordId;
use wares_domain::record::{API_SOURCE, NewRecord, Record, RecordUpdate};
use wares_domain::time;

use crate::error::StorageError;
use crate::store::MongoStore;

/// Wire shape of a record inside the collection. `uploaded_at` is stored
/// as a native BSON datetime; the store's `_id` is not mapped and so
/// never reaches callers.
#[derive(Debug, Serialize, Deserialize)]
struct RecordDocument {
    id: i64,
    product: String,
    price: f64,
    source_file: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    uploaded_at: DateTime<Utc>,
}

impl From<RecordDocument> for Record {
    fn from(doc: RecordDocument) -> Self {
        Self {
            id: RecordId::new(doc.id),
            product: doc.product,
            price: doc.price,
            source_file: doc.source_file,
            uploaded_at: doc.uploaded_at,
        }
    }
}

impl From<&Record> for RecordDocument {
    fn from(record: &Record) -> Self {
        Self {
            id: record.id.as_i64(),
            product: record.product.clone(),
            price: record.price,
            source_file: record.source_file.clone(),
            uploaded_at: record.uploaded_at,
        }
    }
}

/// MongoDB-backed record repository over one named collection.
pub struct MongoRecordRepository {
    store: MongoStore,
    collection: String,
}

impl MongoRecordRepository {
    /// Create a new repository using the given store handle.
    #[must_use]
    pub fn new(store: MongoStore, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    fn collection(&self) -> Result<Collection<RecordDocument>, WaresError> {
        self.store.collection(&self.collection)
    }
}

impl RecordRepository for MongoRecordRepository {
    /// Not atomic: the id is read with a sort-descending probe before the
    /// insert, so two concurrent creates can observe the same maximum and
    /// assign duplicate ids.
    fn insert(&self, draft: NewRecord) -> impl Future<Output = Result<Record, WaresError>> + Send {
        let coll = self.collection();
        async move {
            let coll = coll?;
            let max_id = coll
                .find_one(doc! {})
                .sort(doc! { "id": -1 })
                .await
                .map_err(StorageError::from)?
                .map_or(0, |top| top.id);

            let record = Record::created(
                RecordId::new(max_id).next(),
                draft,
                API_SOURCE.to_string(),
                time::now(),
            );

            coll.insert_one(RecordDocument::from(&record))
                .await
                .map_err(StorageError::from)?;

            Ok(record)
        }
    }

    fn get_by_id(
        &self,
        id: RecordId,
    ) -> impl Future<Output = Result<Option<Record>, WaresError>> + Send {
        let coll = self.collection();
        async move {
            let found = coll?
                .find_one(doc! { "id": id.as_i64() })
                .await
                .map_err(StorageError::from)?;

            Ok(found.map(Record::from))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Record>, WaresError>> + Send {
        let coll = self.collection();
        async move {
            let cursor = coll?.find(doc! {}).await.map_err(StorageError::from)?;
            let documents: Vec<RecordDocument> =
                cursor.try_collect().await.map_err(StorageError::from)?;

            Ok(documents.into_iter().map(Record::from).collect())
        }
    }

    fn update(
        &self,
        id: RecordId,
        update: RecordUpdate,
    ) -> impl Future<Output = Result<Option<Record>, WaresError>> + Send {
        let coll = self.collection();
        async move {
            let coll = coll?;
            let result = coll
                .update_one(
                    doc! { "id": id.as_i64() },
                    doc! { "$set": { "product": &update.product, "price": update.price } },
                )
                .await
                .map_err(StorageError::from)?;

            if result.matched_count == 0 {
                return Ok(None);
            }

            // Re-read for the post-update document; a concurrent delete
            // between the two steps surfaces as not-found.
            let found = coll
                .find_one(doc! { "id": id.as_i64() })
                .await
                .map_err(StorageError::from)?;

            Ok(found.map(Record::from))
        }
    }

    fn delete(&self, id: RecordId) -> impl Future<Output = Result<bool, WaresError>> + Send {
        let coll = self.collection();
        async move {
            let result = coll?
                .delete_one(doc! { "id": id.as_i64() })
                .await
                .map_err(StorageError::from)?;

            Ok(result.deleted_count > 0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use mongodb::bson::{self, Bson};

    fn sample_record() -> Record {
        Record {
            id: RecordId::new(3),
            product: "Monitor".to_string(),
            price: 350.99,
            source_file: "user_3.json".to_string(),
            uploaded_at: Utc.with_ymd_and_hms(2025, 9, 30, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn should_roundtrip_record_through_document_mapping() {
        let record = sample_record();
        let document = RecordDocument::from(&record);
        let back = Record::from(document);
        assert_eq!(back, record);
    }

    #[test]
    fn should_store_uploaded_at_as_native_bson_datetime() {
        let document = RecordDocument::from(&sample_record());
        let bson_doc = bson::to_document(&document).unwrap();
        assert!(matches!(
            bson_doc.get("uploaded_at"),
            Some(Bson::DateTime(_))
        ));
        assert_eq!(bson_doc.get("id"), Some(&Bson::Int64(3)));
    }

    #[test]
    fn should_not_carry_an_object_id_field() {
        let document = RecordDocument::from(&sample_record());
        let bson_doc = bson::to_document(&document).unwrap();
        assert!(!bson_doc.contains_key("_id"));
    }

    #[tokio::test]
    async fn should_report_unavailable_when_store_disconnected() {
        let repo = MongoRecordRepository::new(MongoStore::disconnected(), "users");

        let result = repo.get_all().await;
        assert!(matches!(result, Err(WaresError::Unavailable(_))));

        let result = repo.get_by_id(RecordId::new(1)).await;
        assert!(matches!(result, Err(WaresError::Unavailable(_))));

        let result = repo
            .insert(NewRecord {
                product: "Laptop".to_string(),
                price: 1200.0,
            })
            .await;
        assert!(matches!(result, Err(WaresError::Unavailable(_))));

        let result = repo.delete(RecordId::new(1)).await;
        assert!(matches!(result, Err(WaresError::Unavailable(_))));
    }
}
