//! The rental application wizard: per-step form stores, document upload
//! flags, the step sequencer with its payment gate, and the composition root
//! that binds them, plus a session service and HTTP router so the flow can be
//! driven remotely.

pub mod documents;
pub mod forms;
pub mod repository;
pub mod router;
pub mod sequencer;
pub mod service;
pub mod wizard;

#[cfg(test)]
mod tests;

pub use documents::{DocumentChecklist, DocumentKind, UnknownDocumentKind};
pub use forms::{
    EmploymentField, EmploymentInfo, PersonalField, PersonalInfo, RentalHistory,
    RentalHistoryField, ValidationError,
};
pub use repository::{SessionId, SessionStore, SessionStoreError, WizardSession, WizardStateView};
pub use router::applications_router;
pub use sequencer::{ApplicationStep, GateNotSatisfied, StepSequencer, StepSignal};
pub use service::{SessionAdvance, WizardSessionError, WizardSessionService};
pub use wizard::{ApplicationWizard, StepDot, SubmittedApplication, WizardEvent};
