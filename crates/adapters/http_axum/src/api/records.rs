//! JSON REST handlers for records.
//!
//! Every successful response is `200 OK` with a JSON body; outcome
//! mapping for failures lives in [`ApiError`].

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};

use wares_app::ports::{RecordRepository, StoreStatus};
use wares_domain::id::RecordId;
use wares_domain::record::{NewRecord, Record, RecordUpdate};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or updating a record. Both fields are
/// required; malformed bodies are rejected by the `Json` extractor
/// before reaching the data-access layer.
#[derive(Deserialize)]
pub struct RecordPayload {
    pub product: String,
    pub price: f64,
}

/// Confirmation body returned by the delete endpoint.
#[derive(Serialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

/// `GET /api/users`
pub async fn list<R, S>(State(state): State<AppState<R, S>>) -> Result<Json<Vec<Record>>, ApiError>
where
    R: RecordRepository + Send + Sync + 'static,
    S: StoreStatus + Send + Sync + 'static,
{
    let records = state.record_service.list_records().await?;
    Ok(Json(records))
}

/// `GET /api/users/{id}`
pub async fn get<R, S>(
    State(state): State<AppState<R, S>>,
    Path(id): Path<RecordId>,
) -> Result<Json<Record>, ApiError>
where
    R: RecordRepository + Send + Sync + 'static,
    S: StoreStatus + Send + Sync + 'static,
{
    let record = state.record_service.get_record(id).await?;
    Ok(Json(record))
}

/// `POST /api/users`
pub async fn create<R, S>(
    State(state): State<AppState<R, S>>,
    Json(req): Json<RecordPayload>,
) -> Result<Json<Record>, ApiError>
where
    R: RecordRepository + Send + Sync + 'static,
    S: StoreStatus + Send + Sync + 'static,
{
    let created = state
        .record_service
        .create_record(NewRecord {
            product: req.product,
            price: req.price,
        })
        .await?;
    Ok(Json(created))
}

/// `PUT /api/users/{id}`
pub async fn update<R, S>(
    State(state): State<AppState<R, S>>,
    Path(id): Path<RecordId>,
    Json(req): Json<RecordPayload>,
) -> Result<Json<Record>, ApiError>
where
    R: RecordRepository + Send + Sync + 'static,
    S: StoreStatus + Send + Sync + 'static,
{
    let updated = state
        .record_service
        .update_record(
            id,
            RecordUpdate {
                product: req.product,
                price: req.price,
            },
        )
        .await?;
    Ok(Json(updated))
}

/// `DELETE /api/users/{id}`
pub async fn delete<R, S>(
    State(state): State<AppState<R, S>>,
    Path(id): Path<RecordId>,
) -> Result<Json<DeleteConfirmation>, ApiError>
where
    R: RecordRepository + Send + Sync + 'static,
    S: StoreStatus + Send + Sync + 'static,
{
    state.record_service.delete_record(id).await?;
    Ok(Json(DeleteConfirmation {
        message: format!("record {id} deleted"),
    }))
}
