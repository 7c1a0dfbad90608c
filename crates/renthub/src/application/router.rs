use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::listings::PropertySnapshot;

use super::documents::DocumentKind;
use super::forms::{EmploymentInfo, PersonalInfo, RentalHistory};
use super::repository::{SessionId, SessionStore, SessionStoreError};
use super::service::{SessionAdvance, WizardSessionError, WizardSessionService};

/// Router builder exposing the wizard session endpoints.
pub fn applications_router<S>(service: Arc<WizardSessionService<S>>) -> Router
where
    S: SessionStore + 'static,
{
    Router::new()
        .route("/api/v1/applications", post(open_handler::<S>))
        .route("/api/v1/applications/:session_id", get(state_handler::<S>))
        .route(
            "/api/v1/applications/:session_id/personal",
            put(personal_handler::<S>),
        )
        .route(
            "/api/v1/applications/:session_id/employment",
            put(employment_handler::<S>),
        )
        .route(
            "/api/v1/applications/:session_id/rental-history",
            put(rental_history_handler::<S>),
        )
        .route(
            "/api/v1/applications/:session_id/documents/:kind",
            post(document_handler::<S>),
        )
        .route(
            "/api/v1/applications/:session_id/terms",
            put(terms_handler::<S>),
        )
        .route(
            "/api/v1/applications/:session_id/fee",
            post(fee_handler::<S>),
        )
        .route(
            "/api/v1/applications/:session_id/advance",
            post(advance_handler::<S>),
        )
        .route(
            "/api/v1/applications/:session_id/back",
            post(back_handler::<S>),
        )
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct OpenSessionRequest {
    #[serde(default)]
    property: Option<PropertySnapshot>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TermsRequest {
    agree: bool,
}

fn error_response(err: WizardSessionError) -> Response {
    let status = match &err {
        WizardSessionError::Store(SessionStoreError::NotFound) => StatusCode::NOT_FOUND,
        WizardSessionError::Store(SessionStoreError::Conflict) => StatusCode::CONFLICT,
        WizardSessionError::Store(SessionStoreError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({ "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}

fn state_response(
    result: Result<super::repository::WizardStateView, WizardSessionError>,
) -> Response {
    match result {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn open_handler<S>(
    State(service): State<Arc<WizardSessionService<S>>>,
    body: Option<axum::Json<OpenSessionRequest>>,
) -> Response
where
    S: SessionStore + 'static,
{
    let request = body.map(|axum::Json(request)| request).unwrap_or_default();
    match service.open(request.property) {
        Ok(view) => (StatusCode::CREATED, axum::Json(view)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn state_handler<S>(
    State(service): State<Arc<WizardSessionService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
{
    state_response(service.state(&SessionId(session_id)))
}

pub(crate) async fn personal_handler<S>(
    State(service): State<Arc<WizardSessionService<S>>>,
    Path(session_id): Path<String>,
    axum::Json(form): axum::Json<PersonalInfo>,
) -> Response
where
    S: SessionStore + 'static,
{
    state_response(service.update_personal(&SessionId(session_id), form))
}

pub(crate) async fn employment_handler<S>(
    State(service): State<Arc<WizardSessionService<S>>>,
    Path(session_id): Path<String>,
    axum::Json(form): axum::Json<EmploymentInfo>,
) -> Response
where
    S: SessionStore + 'static,
{
    state_response(service.update_employment(&SessionId(session_id), form))
}

pub(crate) async fn rental_history_handler<S>(
    State(service): State<Arc<WizardSessionService<S>>>,
    Path(session_id): Path<String>,
    axum::Json(form): axum::Json<RentalHistory>,
) -> Response
where
    S: SessionStore + 'static,
{
    state_response(service.update_rental_history(&SessionId(session_id), form))
}

pub(crate) async fn document_handler<S>(
    State(service): State<Arc<WizardSessionService<S>>>,
    Path((session_id, kind)): Path<(String, String)>,
) -> Response
where
    S: SessionStore + 'static,
{
    let kind: DocumentKind = match kind.parse() {
        Ok(kind) => kind,
        Err(err) => {
            let payload = json!({ "error": format!("{err}") });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };
    state_response(service.upload_document(&SessionId(session_id), kind))
}

pub(crate) async fn terms_handler<S>(
    State(service): State<Arc<WizardSessionService<S>>>,
    Path(session_id): Path<String>,
    axum::Json(request): axum::Json<TermsRequest>,
) -> Response
where
    S: SessionStore + 'static,
{
    state_response(service.agree_to_terms(&SessionId(session_id), request.agree))
}

pub(crate) async fn fee_handler<S>(
    State(service): State<Arc<WizardSessionService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
{
    state_response(service.pay_fee(&SessionId(session_id)))
}

pub(crate) async fn advance_handler<S>(
    State(service): State<Arc<WizardSessionService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
{
    match service.advance(&SessionId(session_id)) {
        Ok(SessionAdvance::Moved(view)) => {
            let payload = json!({ "event": "moved", "state": view });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Ok(SessionAdvance::Submitted(application)) => {
            let payload = json!({
                "event": "submitted",
                "navigate_to": "application_success",
                "application": application,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Ok(SessionAdvance::Blocked { state, reason }) => {
            let payload = json!({
                "event": "blocked",
                "error": reason.to_string(),
                "state": state,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn back_handler<S>(
    State(service): State<Arc<WizardSessionService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
{
    state_response(service.retreat(&SessionId(session_id)))
}
