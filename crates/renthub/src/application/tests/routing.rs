use super::common::*;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

fn build_router() -> axum::Router {
    let (service, _) = build_service();
    router_with_service(service)
}

async fn open_session(router: &axum::Router) -> String {
    let response = router
        .clone()
        .oneshot(
            Request::post("/api/v1/applications")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json!({})).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    payload
        .get("session_id")
        .and_then(Value::as_str)
        .expect("session id")
        .to_string()
}

#[tokio::test]
async fn open_route_creates_a_session_with_fallback_property() {
    let router = build_router();
    let response = router
        .oneshot(
            Request::post("/api/v1/applications")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json!({})).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.pointer("/property/address").and_then(Value::as_str),
        Some("123 Main Street, San Francisco, CA 94107")
    );
    assert_eq!(
        payload.get("current_step").and_then(Value::as_str),
        Some("Personal Information")
    );
    assert_eq!(
        payload.get("progress"),
        Some(&json!(["current", "upcoming", "upcoming", "upcoming"]))
    );
}

#[tokio::test]
async fn state_route_returns_not_found_for_unknown_session() {
    let router = build_router();
    let response = router
        .oneshot(
            Request::get("/api/v1/applications/session-999999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn document_route_rejects_unknown_kinds() {
    let router = build_router();
    let session_id = open_session(&router).await;

    let response = router
        .oneshot(
            Request::post(format!(
                "/api/v1/applications/{session_id}/documents/lease"
            ))
            .body(Body::empty())
            .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .contains("unknown document kind"));
}

#[tokio::test]
async fn personal_form_route_updates_state() {
    let router = build_router();
    let session_id = open_session(&router).await;

    let response = router
        .oneshot(
            Request::put(format!("/api/v1/applications/{session_id}/personal"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&filled_personal()).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.pointer("/personal/first_name").and_then(Value::as_str),
        Some("John")
    );
    assert_eq!(payload.get("missing_fields"), Some(&json!([])));
}

#[tokio::test]
async fn advance_route_walks_the_flow_to_submission() {
    let router = build_router();
    let session_id = open_session(&router).await;

    // Three moves to the fee step.
    for expected_index in 1..=3 {
        let response = router
            .clone()
            .oneshot(
                Request::post(format!("/api/v1/applications/{session_id}/advance"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload.get("event"), Some(&json!("moved")));
        assert_eq!(
            payload.pointer("/state/step_index").and_then(Value::as_u64),
            Some(expected_index)
        );
    }

    // Unpaid gate blocks with declarative state.
    let response = router
        .clone()
        .oneshot(
            Request::post(format!("/api/v1/applications/{session_id}/advance"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("event"), Some(&json!("blocked")));

    let response = router
        .clone()
        .oneshot(
            Request::post(format!("/api/v1/applications/{session_id}/fee"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .clone()
        .oneshot(
            Request::post(format!("/api/v1/applications/{session_id}/advance"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("event"), Some(&json!("submitted")));
    assert_eq!(
        payload.get("navigate_to"),
        Some(&json!("application_success"))
    );

    // The session is gone once submitted.
    let response = router
        .oneshot(
            Request::get(format!("/api/v1/applications/{session_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn terms_and_back_routes_mutate_state() {
    let router = build_router();
    let session_id = open_session(&router).await;

    let response = router
        .clone()
        .oneshot(
            Request::put(format!("/api/v1/applications/{session_id}/terms"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json!({"agree": true})).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("agree_to_terms"), Some(&json!(true)));

    let response = router
        .oneshot(
            Request::post(format!("/api/v1/applications/{session_id}/back"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("step_index"), Some(&json!(0)));
}
