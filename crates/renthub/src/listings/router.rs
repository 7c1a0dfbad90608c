use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::catalog::ListingProvider;
use super::domain::PropertyId;
use super::filter::ListingQuery;

/// Router builder exposing the catalog browse/search endpoints.
pub fn listings_router<P>(provider: Arc<P>) -> Router
where
    P: ListingProvider + 'static,
{
    Router::new()
        .route("/api/v1/listings", get(search_handler::<P>))
        .route("/api/v1/listings/:property_id", get(detail_handler::<P>))
        .with_state(provider)
}

/// Query-string shape for `/api/v1/listings`. Omitted fields fall back to the
/// defaults the home screen starts with.
#[derive(Debug, Deserialize)]
pub(crate) struct ListingSearchParams {
    #[serde(default)]
    query: Option<String>,
    #[serde(default)]
    price_min: Option<u32>,
    #[serde(default)]
    price_max: Option<u32>,
    #[serde(default)]
    min_bedrooms: Option<u8>,
    #[serde(default)]
    min_bathrooms: Option<u8>,
    #[serde(default)]
    smart_home_only: Option<bool>,
}

impl ListingSearchParams {
    fn into_query(self) -> ListingQuery {
        let defaults = ListingQuery::default();
        ListingQuery {
            price_min: self.price_min.unwrap_or(defaults.price_min),
            price_max: self.price_max.unwrap_or(defaults.price_max),
            min_bedrooms: self.min_bedrooms.unwrap_or(defaults.min_bedrooms),
            min_bathrooms: self.min_bathrooms.unwrap_or(defaults.min_bathrooms),
            smart_home_only: self.smart_home_only.unwrap_or(defaults.smart_home_only),
            text: self.query.unwrap_or_default(),
        }
    }
}

pub(crate) async fn search_handler<P>(
    State(provider): State<Arc<P>>,
    Query(params): Query<ListingSearchParams>,
) -> Response
where
    P: ListingProvider + 'static,
{
    let query = params.into_query();
    let results = query.apply(&provider.list_properties());
    let payload = json!({
        "count": results.len(),
        "listings": results,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn detail_handler<P>(
    State(provider): State<Arc<P>>,
    Path(property_id): Path<String>,
) -> Response
where
    P: ListingProvider + 'static,
{
    let id = PropertyId(property_id);
    match provider.property(&id) {
        Some(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        None => {
            let payload = json!({ "error": format!("no listing with id '{}'", id.as_str()) });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::catalog::StaticListingCatalog;
    use serde_json::Value;
    use tower::ServiceExt;

    fn router() -> Router {
        listings_router(Arc::new(StaticListingCatalog::default()))
    }

    async fn read_json_body(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    #[tokio::test]
    async fn unfiltered_listing_route_returns_full_catalog() {
        let response = router()
            .oneshot(
                axum::http::Request::get("/api/v1/listings")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload.get("count").and_then(Value::as_u64), Some(5));
    }

    #[tokio::test]
    async fn filtered_listing_route_conjoins_query_and_filters() {
        let response = router()
            .oneshot(
                axum::http::Request::get("/api/v1/listings?min_bedrooms=2&query=Chicago")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .expect("route executes");

        let payload = read_json_body(response).await;
        assert_eq!(payload.get("count").and_then(Value::as_u64), Some(1));
        let listings = payload
            .get("listings")
            .and_then(Value::as_array)
            .expect("listings array");
        assert_eq!(listings[0].get("id"), Some(&Value::String("4".into())));
    }

    #[tokio::test]
    async fn detail_route_returns_record_or_not_found() {
        let response = router()
            .oneshot(
                axum::http::Request::get("/api/v1/listings/3")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(
            payload.get("location").and_then(Value::as_str),
            Some("Austin")
        );

        let missing = router()
            .oneshot(
                axum::http::Request::get("/api/v1/listings/99")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .expect("route executes");
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }
}
