use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::info;

use crate::config::WizardConfig;
use crate::listings::PropertySnapshot;

use super::documents::DocumentKind;
use super::forms::{EmploymentInfo, PersonalInfo, RentalHistory};
use super::repository::{
    SessionId, SessionStore, SessionStoreError, WizardSession, WizardStateView,
};
use super::sequencer::GateNotSatisfied;
use super::wizard::{ApplicationWizard, SubmittedApplication, WizardEvent};

/// Service composing the wizard with a session store so remote drivers can
/// run the flow one action at a time.
pub struct WizardSessionService<S> {
    store: Arc<S>,
    config: WizardConfig,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("session-{id:06}"))
}

/// Outcome of driving the wizard forward through the service.
#[derive(Debug)]
pub enum SessionAdvance {
    Moved(WizardStateView),
    /// The session has been removed; the caller navigates to the success view.
    Submitted(Box<SubmittedApplication>),
    /// The payment gate held the final step; the session is unchanged.
    Blocked {
        state: WizardStateView,
        reason: GateNotSatisfied,
    },
}

/// Error raised by the session service.
#[derive(Debug, thiserror::Error)]
pub enum WizardSessionError {
    #[error(transparent)]
    Store(#[from] SessionStoreError),
}

impl<S> WizardSessionService<S>
where
    S: SessionStore + 'static,
{
    pub fn new(store: Arc<S>, config: WizardConfig) -> Self {
        Self { store, config }
    }

    /// Open a session for a listing. Absent property parameters fall back to
    /// the hardcoded default snapshot.
    pub fn open(
        &self,
        property: Option<PropertySnapshot>,
    ) -> Result<WizardStateView, WizardSessionError> {
        let session = WizardSession {
            session_id: next_session_id(),
            wizard: ApplicationWizard::new(property, self.config.application_fee),
        };
        let view = session.state_view();
        self.store.insert(session)?;
        Ok(view)
    }

    pub fn state(&self, id: &SessionId) -> Result<WizardStateView, WizardSessionError> {
        let session = self.fetch(id)?;
        Ok(session.state_view())
    }

    pub fn update_personal(
        &self,
        id: &SessionId,
        form: PersonalInfo,
    ) -> Result<WizardStateView, WizardSessionError> {
        self.mutate(id, |wizard| wizard.replace_personal(form))
    }

    pub fn update_employment(
        &self,
        id: &SessionId,
        form: EmploymentInfo,
    ) -> Result<WizardStateView, WizardSessionError> {
        self.mutate(id, |wizard| wizard.replace_employment(form))
    }

    pub fn update_rental_history(
        &self,
        id: &SessionId,
        form: RentalHistory,
    ) -> Result<WizardStateView, WizardSessionError> {
        self.mutate(id, |wizard| wizard.replace_rental_history(form))
    }

    pub fn upload_document(
        &self,
        id: &SessionId,
        kind: DocumentKind,
    ) -> Result<WizardStateView, WizardSessionError> {
        self.mutate(id, |wizard| wizard.upload_document(kind))
    }

    pub fn agree_to_terms(
        &self,
        id: &SessionId,
        agreed: bool,
    ) -> Result<WizardStateView, WizardSessionError> {
        self.mutate(id, |wizard| wizard.set_agree_to_terms(agreed))
    }

    /// Stubbed fee capture; one-way within the session.
    pub fn pay_fee(&self, id: &SessionId) -> Result<WizardStateView, WizardSessionError> {
        self.mutate(id, ApplicationWizard::complete_payment)
    }

    /// Drive the wizard forward. On submission the session is removed and the
    /// terminal summary returned.
    pub fn advance(&self, id: &SessionId) -> Result<SessionAdvance, WizardSessionError> {
        let mut session = self.fetch(id)?;
        match session.wizard.next() {
            WizardEvent::Submitted(application) => {
                self.store.remove(id)?;
                info!(
                    session = %id.0,
                    address = %application.property.address,
                    fee = application.fee_paid,
                    "application submitted"
                );
                Ok(SessionAdvance::Submitted(application))
            }
            WizardEvent::Blocked(reason) => Ok(SessionAdvance::Blocked {
                state: session.state_view(),
                reason,
            }),
            WizardEvent::MovedTo(_) | WizardEvent::StayedAt(_) => {
                let view = session.state_view();
                self.store.update(session)?;
                Ok(SessionAdvance::Moved(view))
            }
            // next() on a stored session never observes a submitted wizard:
            // submission removes the session in the same action.
            WizardEvent::AlreadySubmitted => Err(SessionStoreError::NotFound.into()),
        }
    }

    /// Step back; boundary no-ops keep the session unchanged.
    pub fn retreat(&self, id: &SessionId) -> Result<WizardStateView, WizardSessionError> {
        let mut session = self.fetch(id)?;
        session.wizard.back();
        let view = session.state_view();
        self.store.update(session)?;
        Ok(view)
    }

    fn fetch(&self, id: &SessionId) -> Result<WizardSession, WizardSessionError> {
        Ok(self.store.fetch(id)?.ok_or(SessionStoreError::NotFound)?)
    }

    fn mutate(
        &self,
        id: &SessionId,
        action: impl FnOnce(&mut ApplicationWizard),
    ) -> Result<WizardStateView, WizardSessionError> {
        let mut session = self.fetch(id)?;
        action(&mut session.wizard);
        let view = session.state_view();
        self.store.update(session)?;
        Ok(view)
    }
}
