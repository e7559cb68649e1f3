// HTTP request handlers
use crate::domain::layout::LayoutVariant;
use crate::infrastructure::chunked_json::stream_from_receiver;
use crate::infrastructure::json_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub seed: Option<u64>,
    pub variant: Option<String>,
}

impl DashboardQuery {
    fn variant(&self) -> Result<Option<LayoutVariant>, ApiError> {
        self.variant
            .as_deref()
            .map(str::parse)
            .transpose()
            .map_err(ApiError::BadRequest)
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Full layout in one JSON document
pub async fn get_dashboard(
    query: Result<Query<DashboardQuery>, QueryRejection>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let Query(query) = query?;
    let variant = query.variant()?;
    let layout = state
        .dashboard_service
        .get_dashboard(query.seed, variant)
        .await?;

    match json_response(&layout, StatusCode::OK, accepts_brotli(&headers)).await {
        Ok(response) => Ok(response),
        Err(status) => Ok(status.into_response()),
    }
}

/// Layout delivered progressively: skeleton, one chunk per panel, completion
pub async fn stream_dashboard(
    query: Result<Query<DashboardQuery>, QueryRejection>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let Query(query) = query?;
    let variant = query.variant()?;
    let rx = state
        .streaming_service
        .stream_dashboard(query.seed, variant)
        .await?;

    Ok(stream_from_receiver(rx, accepts_brotli(&headers))
        .await
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::composer::tests::sample_snapshot;
    use crate::application::dashboard_service::tests::service_with;
    use crate::application::streaming_service::StreamingDashboardService;
    use crate::domain::layout::Layout;
    use crate::domain::measurement::{names, Measurement};
    use crate::domain::snapshot::Snapshot;
    use bytes::Buf;

    fn state_with(snapshot: Snapshot) -> Arc<AppState> {
        let dashboard_service = service_with(snapshot);
        Arc::new(AppState {
            streaming_service: StreamingDashboardService::new(dashboard_service.clone()),
            dashboard_service,
        })
    }

    fn query(variant: Option<&str>) -> Result<Query<DashboardQuery>, QueryRejection> {
        Ok(Query(DashboardQuery {
            seed: None,
            variant: variant.map(str::to_string),
        }))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        assert_eq!(health_check().await, "ok");
    }

    #[tokio::test]
    async fn test_get_dashboard_returns_layout() {
        let state = state_with(sample_snapshot());
        let response = get_dashboard(query(Some("columns")), HeaderMap::new(), State(state))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let layout: Layout = serde_json::from_value(body_json(response).await).unwrap();
        assert_eq!(layout.variant, LayoutVariant::Columns);
        assert_eq!(layout.panel_count(), 8);
    }

    #[tokio::test]
    async fn test_get_dashboard_unknown_variant() {
        let state = state_with(sample_snapshot());
        let response = get_dashboard(query(Some("mosaic")), HeaderMap::new(), State(state))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_seed_is_json_bad_request() {
        let uri: axum::http::Uri = "/dashboard?seed=abc".parse().unwrap();
        let rejected = Query::<DashboardQuery>::try_from_uri(&uri);
        assert!(rejected.is_err());

        let state = state_with(sample_snapshot());
        let response = get_dashboard(rejected, HeaderMap::new(), State(state.clone()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "bad_request");
        assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));

        let rejected = Query::<DashboardQuery>::try_from_uri(&uri);
        let response = stream_dashboard(rejected, HeaderMap::new(), State(state))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "bad_request");
    }

    #[tokio::test]
    async fn test_get_dashboard_compose_errors_are_unprocessable() {
        let missing = state_with(sample_snapshot().without(names::LEAK_SEVERITY));
        let response = get_dashboard(query(None), HeaderMap::new(), State(missing))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["error"], "missing_measurement");

        let ragged = state_with(sample_snapshot().with(
            names::LEAK_SEVERITY,
            Measurement::matrix(vec![vec![0.1, 0.2], vec![0.3]]),
        ));
        let response = get_dashboard(query(None), HeaderMap::new(), State(ragged))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(response).await["error"], "shape_mismatch");
    }

    #[tokio::test]
    async fn test_stream_dashboard_first_chunk_is_skeleton() {
        let state = state_with(sample_snapshot());
        let response = stream_dashboard(query(None), HeaderMap::new(), State(state))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let mut body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let mut types = Vec::new();
        while body.has_remaining() {
            let length = body.get_u32() as usize;
            let chunk = body.split_to(length);
            let value: serde_json::Value = serde_json::from_slice(&chunk).unwrap();
            types.push(value["type"].as_str().unwrap_or_default().to_string());
        }

        assert_eq!(types.len(), 10);
        assert_eq!(types[0], "skeleton");
        assert!(types[1..9].iter().all(|t| t == "panel"));
        assert_eq!(types[9], "complete");
    }

    #[tokio::test]
    async fn test_stream_dashboard_compose_error_is_not_streamed() {
        let state = state_with(sample_snapshot().without(names::LEAK_LOSS));
        let response = stream_dashboard(query(None), HeaderMap::new(), State(state))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
