use serde::Serialize;

use crate::listings::PropertySnapshot;

use super::documents::DocumentChecklist;
use super::forms::{EmploymentInfo, PersonalInfo, RentalHistory};
use super::sequencer::ApplicationStep;
use super::wizard::{ApplicationWizard, StepDot};

/// Identifier wrapper for open wizard sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SessionId(pub String);

/// One open wizard bound to its session id. Sessions live only as long as the
/// flow: submission removes them.
#[derive(Debug, Clone)]
pub struct WizardSession {
    pub session_id: SessionId,
    pub wizard: ApplicationWizard,
}

impl WizardSession {
    /// Declarative snapshot of the wizard for API responses: current step,
    /// progress dots, form contents, flags, and the advisory validation state
    /// of the step on screen.
    pub fn state_view(&self) -> WizardStateView {
        let step = self.wizard.current_step();
        let missing_fields = match self.wizard.step_validation(step) {
            Ok(()) => Vec::new(),
            Err(err) => err.missing,
        };
        WizardStateView {
            session_id: self.session_id.clone(),
            property: self.wizard.property().clone(),
            current_step: step.label(),
            step_index: step.index(),
            total_steps: ApplicationStep::COUNT,
            progress: self.wizard.progress(),
            personal: self.wizard.personal().clone(),
            employment: self.wizard.employment().clone(),
            rental_history: self.wizard.rental_history().clone(),
            documents: *self.wizard.documents(),
            agree_to_terms: self.wizard.agree_to_terms(),
            payment_complete: self.wizard.payment_complete(),
            fee_amount: self.wizard.fee_amount(),
            can_advance: self.wizard.can_advance(),
            missing_fields,
        }
    }
}

/// Storage abstraction so the session service can be exercised in isolation;
/// the shipped implementation is in-memory.
pub trait SessionStore: Send + Sync {
    fn insert(&self, session: WizardSession) -> Result<(), SessionStoreError>;
    fn update(&self, session: WizardSession) -> Result<(), SessionStoreError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<WizardSession>, SessionStoreError>;
    fn remove(&self, id: &SessionId) -> Result<(), SessionStoreError>;
    fn open_count(&self) -> Result<usize, SessionStoreError>;
}

/// Error enumeration for session storage failures.
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session already exists")]
    Conflict,
    #[error("session not found")]
    NotFound,
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}

/// Wire representation of an open session.
#[derive(Debug, Clone, Serialize)]
pub struct WizardStateView {
    pub session_id: SessionId,
    pub property: PropertySnapshot,
    pub current_step: &'static str,
    pub step_index: usize,
    pub total_steps: usize,
    pub progress: Vec<StepDot>,
    pub personal: PersonalInfo,
    pub employment: EmploymentInfo,
    pub rental_history: RentalHistory,
    pub documents: DocumentChecklist,
    pub agree_to_terms: bool,
    pub payment_complete: bool,
    pub fee_amount: u32,
    pub can_advance: bool,
    /// Advisory presence-check results for the step on screen; empty when the
    /// step is complete.
    pub missing_fields: Vec<&'static str>,
}
