use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::application::forms::{EmploymentInfo, PersonalInfo};
use crate::application::repository::{
    SessionId, SessionStore, SessionStoreError, WizardSession,
};
use crate::application::router::applications_router;
use crate::application::service::WizardSessionService;
use crate::config::WizardConfig;
use crate::listings::{PropertyId, PropertySnapshot};

pub(super) fn wizard_config() -> WizardConfig {
    WizardConfig {
        application_fee: 50,
    }
}

pub(super) fn chicago_snapshot() -> PropertySnapshot {
    PropertySnapshot {
        id: PropertyId("4".to_string()),
        address: "101 Lake View, Chicago, IL 60611".to_string(),
        price: 3100,
    }
}

pub(super) fn filled_personal() -> PersonalInfo {
    PersonalInfo {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: "johndoe@example.com".to_string(),
        phone: "(555) 123-4567".to_string(),
        dob: "01/15/1990".to_string(),
        ssn: "123-45-6789".to_string(),
    }
}

pub(super) fn filled_employment() -> EmploymentInfo {
    EmploymentInfo {
        employer: "Acme Corp".to_string(),
        position: "Software Engineer".to_string(),
        income: "5000".to_string(),
        employment_length: "2 years".to_string(),
        supervisor_name: "Jane Smith".to_string(),
        supervisor_phone: "(555) 987-6543".to_string(),
    }
}

pub(super) fn build_service() -> (
    WizardSessionService<MemorySessionStore>,
    Arc<MemorySessionStore>,
) {
    let store = Arc::new(MemorySessionStore::default());
    let service = WizardSessionService::new(store.clone(), wizard_config());
    (service, store)
}

pub(super) fn router_with_service(
    service: WizardSessionService<MemorySessionStore>,
) -> axum::Router {
    applications_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemorySessionStore {
    sessions: Arc<Mutex<HashMap<SessionId, WizardSession>>>,
}

impl SessionStore for MemorySessionStore {
    fn insert(&self, session: WizardSession) -> Result<(), SessionStoreError> {
        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        if guard.contains_key(&session.session_id) {
            return Err(SessionStoreError::Conflict);
        }
        guard.insert(session.session_id.clone(), session);
        Ok(())
    }

    fn update(&self, session: WizardSession) -> Result<(), SessionStoreError> {
        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        guard.insert(session.session_id.clone(), session);
        Ok(())
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<WizardSession>, SessionStoreError> {
        let guard = self.sessions.lock().expect("session mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn remove(&self, id: &SessionId) -> Result<(), SessionStoreError> {
        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        guard.remove(id).map(|_| ()).ok_or(SessionStoreError::NotFound)
    }

    fn open_count(&self) -> Result<usize, SessionStoreError> {
        let guard = self.sessions.lock().expect("session mutex poisoned");
        Ok(guard.len())
    }
}

pub(super) struct UnavailableStore;

impl SessionStore for UnavailableStore {
    fn insert(&self, _session: WizardSession) -> Result<(), SessionStoreError> {
        Err(SessionStoreError::Unavailable("store offline".to_string()))
    }

    fn update(&self, _session: WizardSession) -> Result<(), SessionStoreError> {
        Err(SessionStoreError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<WizardSession>, SessionStoreError> {
        Err(SessionStoreError::Unavailable("store offline".to_string()))
    }

    fn remove(&self, _id: &SessionId) -> Result<(), SessionStoreError> {
        Err(SessionStoreError::Unavailable("store offline".to_string()))
    }

    fn open_count(&self) -> Result<usize, SessionStoreError> {
        Ok(0)
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
