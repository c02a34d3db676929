//! Axum router assembly.

use axum::Router;
use axum::response::Html;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use wares_app::ports::{RecordRepository, StoreStatus};

use crate::state::AppState;

/// Landing page served at `/`, embedded at compile time.
const LANDING_PAGE: &str = include_str!("../assets/index.html");

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api` and serves the landing page at `/`.
/// CORS is wide open (all origins, methods, and headers); a
/// [`TraceLayer`] logs each HTTP request/response through the `tracing`
/// ecosystem.
pub fn build<R, S>(state: AppState<R, S>) -> Router
where
    R: RecordRepository + Send + Sync + 'static,
    S: StoreStatus + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(landing))
        .nest("/api", crate::api::routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn landing() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use wares_app::services::record_service::RecordService;
    use wares_domain::error::WaresError;
    use wares_domain::id::RecordId;
    use wares_domain::record::{API_SOURCE, NewRecord, Record, RecordUpdate};
    use wares_domain::time;

    struct StubRecordRepo;
    struct StubStatus(bool);

    impl wares_app::ports::RecordRepository for StubRecordRepo {
        async fn insert(&self, draft: NewRecord) -> Result<Record, WaresError> {
            Ok(Record::created(
                RecordId::new(1),
                draft,
                API_SOURCE.to_string(),
                time::now(),
            ))
        }
        async fn get_by_id(&self, _id: RecordId) -> Result<Option<Record>, WaresError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<Record>, WaresError> {
            Ok(vec![])
        }
        async fn update(
            &self,
            _id: RecordId,
            _update: RecordUpdate,
        ) -> Result<Option<Record>, WaresError> {
            Ok(None)
        }
        async fn delete(&self, _id: RecordId) -> Result<bool, WaresError> {
            Ok(false)
        }
    }

    impl wares_app::ports::StoreStatus for StubStatus {
        fn is_connected(&self) -> bool {
            self.0
        }
    }

    fn test_app(connected: bool) -> Router {
        build(AppState::new(
            RecordService::new(StubRecordRepo),
            StubStatus(connected),
        ))
    }

    #[tokio::test]
    async fn should_serve_landing_page_at_root() {
        let response = test_app(true)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("wares"));
    }

    #[tokio::test]
    async fn should_report_connected_store_in_health_body() {
        let response = test_app(true)
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value =
            serde_json::from_slice(&response.into_body().collect().await.unwrap().to_bytes())
                .unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["store"], "connected");
        assert!(body.get("timestamp").is_some());
    }

    #[tokio::test]
    async fn should_return_health_ok_even_when_store_disconnected() {
        let response = test_app(false)
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value =
            serde_json::from_slice(&response.into_body().collect().await.unwrap().to_bytes())
                .unwrap();
        assert_eq!(body["store"], "disconnected");
    }

    #[tokio::test]
    async fn should_map_missing_record_to_not_found_with_kind() {
        let response = test_app(true)
            .oneshot(
                Request::builder()
                    .uri("/api/users/7")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value =
            serde_json::from_slice(&response.into_body().collect().await.unwrap().to_bytes())
                .unwrap();
        assert_eq!(body["kind"], "not_found");
    }

    #[tokio::test]
    async fn should_reject_malformed_create_body_before_data_access() {
        let response = test_app(true)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/users")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"product":"Laptop"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }
}
