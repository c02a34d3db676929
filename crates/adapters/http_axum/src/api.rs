//! JSON REST API handler modules and route table.

#[allow(clippy::missing_errors_doc)]
pub mod health;
#[allow(clippy::missing_errors_doc)]
pub mod records;

use axum::Router;
use axum::routing::get;

use wares_app::ports::{RecordRepository, StoreStatus};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R, S>() -> Router<AppState<R, S>>
where
    R: RecordRepository + Send + Sync + 'static,
    S: StoreStatus + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/users",
            get(records::list::<R, S>).post(records::create::<R, S>),
        )
        .route(
            "/users/{id}",
            get(records::get::<R, S>)
                .put(records::update::<R, S>)
                .delete(records::delete::<R, S>),
        )
        .route("/health", get(health::check::<R, S>))
}
