use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use hiring_risk::assessment::{AnswerSet, HeatmapRow, RiskReport, HEATMAP};
use hiring_risk::error::AppError;
use serde_json::json;
use tracing::info;

pub(crate) fn router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/assessment", post(assessment_endpoint))
        .route("/api/v1/heatmap", get(heatmap_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Score a submitted answer set. Missing fields yield 422 with the list of gaps.
pub(crate) async fn assessment_endpoint(
    Json(answers): Json<AnswerSet>,
) -> Result<Json<RiskReport>, AppError> {
    let answers = answers.resolve()?;
    let report = RiskReport::assess(&answers);
    info!(
        score = report.score,
        tier = report.tier_label,
        "assessment served"
    );
    Ok(Json(report))
}

pub(crate) async fn heatmap_endpoint() -> Json<Vec<HeatmapRow>> {
    Json(HEATMAP.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn post_assessment(payload: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/assessment")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request builds");

        let response = router().oneshot(request).await.expect("router responds");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn assessment_endpoint_returns_report() {
        let (status, body) = post_assessment(json!({
            "firm_size": "large",
            "bilingual_exposure": "high",
            "region": "brussels",
            "hiring_pressure": "aggressive",
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 100.0);
        assert_eq!(body["tier"], "structural");
        assert_eq!(body["tier_class"], "tier-structural");
        assert_eq!(body["indicators"].as_array().map(Vec::len), Some(4));
        assert_eq!(body["heatmap"].as_array().map(Vec::len), Some(4));
    }

    #[tokio::test]
    async fn assessment_endpoint_lists_missing_fields() {
        let (status, body) = post_assessment(json!({ "firm_size": "small" })).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body["missing"],
            json!(["bilingual_exposure", "region", "hiring_pressure"])
        );
    }

    #[tokio::test]
    async fn assessment_endpoint_rejects_unknown_values() {
        let (status, _) = post_assessment(json!({
            "firm_size": "huge",
            "bilingual_exposure": "high",
            "region": "brussels",
            "hiring_pressure": "aggressive",
        }))
        .await;

        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn heatmap_endpoint_returns_static_rows() {
        let Json(rows) = heatmap_endpoint().await;
        assert_eq!(rows, HEATMAP.to_vec());
    }
}
