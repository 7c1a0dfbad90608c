use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use renthub::application::{applications_router, SessionStore, WizardSessionService};
use renthub::listings::{listings_router, ListingProvider};
use renthub::tenancy::TenantDashboard;
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_marketplace_routes<P, S>(
    catalog: Arc<P>,
    sessions: Arc<WizardSessionService<S>>,
) -> axum::Router
where
    P: ListingProvider + 'static,
    S: SessionStore + 'static,
{
    listings_router(catalog)
        .merge(applications_router(sessions))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/dashboard",
            axum::routing::get(dashboard_endpoint),
        )
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

/// Snapshot of the demo tenant's dashboard. The dashboard is screen-local
/// state in the app; the endpoint serves the same sample the demo uses.
pub(crate) async fn dashboard_endpoint() -> Json<TenantDashboard> {
    Json(TenantDashboard::sample())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn dashboard_endpoint_serves_the_sample_tenant() {
        let Json(dashboard) = dashboard_endpoint().await;
        assert_eq!(dashboard.lease.rent, 1850);
        assert_eq!(dashboard.payment_history.len(), 4);
        assert_eq!(dashboard.open_maintenance_count(), 1);
    }
}
