use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::listings::PropertySnapshot;

use super::documents::{DocumentChecklist, DocumentKind};
use super::forms::{
    EmploymentField, EmploymentInfo, PersonalField, PersonalInfo, RentalHistory,
    RentalHistoryField, ValidationError,
};
use super::sequencer::{ApplicationStep, GateNotSatisfied, StepSequencer, StepSignal};

/// Composition root for the four-step application flow.
///
/// Owns every piece of wizard state exclusively for the lifetime of one
/// screen instance: the per-step forms, the document checklist, the step
/// sequencer, and the two one-way booleans (`agree_to_terms` is the switch on
/// the verification step, `payment_complete` gates the final advance).
#[derive(Debug, Clone)]
pub struct ApplicationWizard {
    property: PropertySnapshot,
    fee_amount: u32,
    sequencer: StepSequencer,
    personal: PersonalInfo,
    employment: EmploymentInfo,
    rental_history: RentalHistory,
    documents: DocumentChecklist,
    agree_to_terms: bool,
    payment_complete: bool,
    submitted: bool,
}

/// Outcome of a navigation action on the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    MovedTo(ApplicationStep),
    /// Boundary no-op (back at step 0).
    StayedAt(ApplicationStep),
    Blocked(GateNotSatisfied),
    /// Emitted exactly once; afterwards the wizard is terminal.
    Submitted(Box<SubmittedApplication>),
    AlreadySubmitted,
}

/// One dot of the progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepDot {
    Completed,
    Current,
    Upcoming,
}

/// Terminal summary handed to the success view once the final advance passes
/// the payment gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedApplication {
    pub property: PropertySnapshot,
    pub personal: PersonalInfo,
    pub employment: EmploymentInfo,
    pub rental_history: RentalHistory,
    pub documents: DocumentChecklist,
    pub agreed_to_terms: bool,
    /// Fee captured at submission, in whole dollars.
    pub fee_paid: u32,
    pub submitted_on: NaiveDate,
}

impl ApplicationWizard {
    /// Mount the wizard for a listing. A missing navigation parameter falls
    /// back to the hardcoded default snapshot.
    pub fn new(property: Option<PropertySnapshot>, fee_amount: u32) -> Self {
        Self {
            property: property.unwrap_or_else(PropertySnapshot::fallback),
            fee_amount,
            sequencer: StepSequencer::new(),
            personal: PersonalInfo::default(),
            employment: EmploymentInfo::default(),
            rental_history: RentalHistory::default(),
            documents: DocumentChecklist::default(),
            agree_to_terms: false,
            payment_complete: false,
            submitted: false,
        }
    }

    pub fn property(&self) -> &PropertySnapshot {
        &self.property
    }

    pub fn fee_amount(&self) -> u32 {
        self.fee_amount
    }

    pub fn current_step(&self) -> ApplicationStep {
        self.sequencer.current()
    }

    pub fn personal(&self) -> &PersonalInfo {
        &self.personal
    }

    pub fn employment(&self) -> &EmploymentInfo {
        &self.employment
    }

    pub fn rental_history(&self) -> &RentalHistory {
        &self.rental_history
    }

    pub fn documents(&self) -> &DocumentChecklist {
        &self.documents
    }

    pub fn agree_to_terms(&self) -> bool {
        self.agree_to_terms
    }

    pub fn payment_complete(&self) -> bool {
        self.payment_complete
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn set_personal(&mut self, field: PersonalField, value: impl Into<String>) {
        self.personal.set(field, value);
    }

    pub fn set_employment(&mut self, field: EmploymentField, value: impl Into<String>) {
        self.employment.set(field, value);
    }

    pub fn set_rental_history(&mut self, field: RentalHistoryField, value: impl Into<String>) {
        self.rental_history.set(field, value);
    }

    /// Whole-form replacements for remote drivers that submit a step at once.
    pub fn replace_personal(&mut self, form: PersonalInfo) {
        self.personal = form;
    }

    pub fn replace_employment(&mut self, form: EmploymentInfo) {
        self.employment = form;
    }

    pub fn replace_rental_history(&mut self, form: RentalHistory) {
        self.rental_history = form;
    }

    /// Mark a document flag; the stubbed flow has no picker and no un-upload.
    pub fn upload_document(&mut self, kind: DocumentKind) {
        self.documents.upload(kind);
    }

    pub fn set_agree_to_terms(&mut self, agreed: bool) {
        self.agree_to_terms = agreed;
    }

    /// Stubbed fee capture. One-way: there is no undo-payment.
    pub fn complete_payment(&mut self) {
        self.payment_complete = true;
    }

    /// Render-time check backing the "Next"/"Submit Application" button.
    pub fn can_advance(&self) -> bool {
        !self.submitted && self.sequencer.can_advance(self.payment_complete)
    }

    /// Advance the flow, submitting from the final step when the gate holds.
    pub fn next(&mut self) -> WizardEvent {
        if self.submitted {
            return WizardEvent::AlreadySubmitted;
        }
        match self.sequencer.advance(self.payment_complete) {
            StepSignal::Moved(step) => WizardEvent::MovedTo(step),
            StepSignal::Stayed(step) => WizardEvent::StayedAt(step),
            StepSignal::Blocked(gate) => WizardEvent::Blocked(gate),
            StepSignal::Submit => {
                self.submitted = true;
                WizardEvent::Submitted(Box::new(self.submission()))
            }
        }
    }

    /// Step back; no-op on the first step or after submission.
    pub fn back(&mut self) -> WizardEvent {
        if self.submitted {
            return WizardEvent::AlreadySubmitted;
        }
        match self.sequencer.retreat() {
            StepSignal::Moved(step) => WizardEvent::MovedTo(step),
            StepSignal::Stayed(step) => WizardEvent::StayedAt(step),
            // retreat never submits or blocks
            StepSignal::Submit | StepSignal::Blocked(_) => unreachable!(),
        }
    }

    /// Progress dots for the step indicator.
    pub fn progress(&self) -> Vec<StepDot> {
        let current = self.current_step().index();
        (0..ApplicationStep::COUNT)
            .map(|index| match index.cmp(&current) {
                std::cmp::Ordering::Less => StepDot::Completed,
                std::cmp::Ordering::Equal => StepDot::Current,
                std::cmp::Ordering::Greater => StepDot::Upcoming,
            })
            .collect()
    }

    /// Advisory presence checks for a step, surfaced as state for the UI.
    /// Never gates advancement.
    pub fn step_validation(&self, step: ApplicationStep) -> Result<(), ValidationError> {
        match step {
            ApplicationStep::PersonalInfo => self.personal.validate(),
            ApplicationStep::EmploymentIncome => self.employment.validate(),
            ApplicationStep::DocumentVerification => {
                let mut missing: Vec<&'static str> = self
                    .documents
                    .missing()
                    .into_iter()
                    .map(DocumentKind::label)
                    .collect();
                if !self.agree_to_terms {
                    missing.push("agree_to_terms");
                }
                if missing.is_empty() {
                    Ok(())
                } else {
                    Err(ValidationError { missing })
                }
            }
            ApplicationStep::ApplicationFee => {
                if self.payment_complete {
                    Ok(())
                } else {
                    Err(ValidationError {
                        missing: vec!["payment"],
                    })
                }
            }
        }
    }

    fn submission(&self) -> SubmittedApplication {
        SubmittedApplication {
            property: self.property.clone(),
            personal: self.personal.clone(),
            employment: self.employment.clone(),
            rental_history: self.rental_history.clone(),
            documents: self.documents,
            agreed_to_terms: self.agree_to_terms,
            fee_paid: self.fee_amount,
            submitted_on: Local::now().date_naive(),
        }
    }
}
