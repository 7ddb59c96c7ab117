//! HTTP surface: the lookup and activity endpoints.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::lookup::LookupService;
use crate::dataset::CompanyRecord;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<LookupService>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Build the service router: point lookup, activity report, liveness probe.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ticker/:ticker", get(lookup_ticker))
        .route("/activity", get(activity))
        .route("/health", get(health))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

async fn lookup_ticker(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
) -> Result<Json<CompanyRecord>, (StatusCode, Json<ErrorBody>)> {
    match state.lookup.lookup(&ticker).await {
        Some(record) => Ok(Json(record)),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorBody {
                error: "company not found".to_string(),
            }),
        )),
    }
}

async fn activity(State(state): State<AppState>) -> Json<HashMap<String, u64>> {
    Json(state.lookup.activity().await)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::KeyedCounterStore;
    use crate::dataset::ReferenceDataset;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    const WIRE: &str = r#"{
        "fields": ["cik", "name", "ticker", "exchange"],
        "data": [[320193, "Apple Inc.", "AAPL", "Nasdaq"]]
    }"#;

    fn test_router() -> Router {
        let dataset = Arc::new(ReferenceDataset::from_json(WIRE.as_bytes()).unwrap());
        let lookup = Arc::new(LookupService::new(
            dataset,
            Arc::new(KeyedCounterStore::new()),
        ));
        router(AppState { lookup })
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_lookup_hit_returns_record() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/ticker/aapl")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["cik"], 320193);
        assert_eq!(json["ticker"], "AAPL");
        assert_eq!(json["exchange"], "Nasdaq");
    }

    #[tokio::test]
    async fn test_lookup_miss_is_404_and_uncounted() {
        let app = test_router();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/ticker/GOOG")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"], "company not found");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/activity")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(body_json(response).await, serde_json::json!({}));
    }

    #[tokio::test]
    async fn test_activity_reports_counts() {
        let app = test_router();

        for _ in 0..3 {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .uri("/ticker/AAPL")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/activity")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!({ "AAPL": 3 }));
    }

    #[tokio::test]
    async fn test_health_probe() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
