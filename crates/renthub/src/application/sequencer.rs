use serde::{Deserialize, Serialize};

/// The four wizard steps in order. Indices are stable and bounded; every
/// transition is a total function over them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStep {
    PersonalInfo,
    EmploymentIncome,
    DocumentVerification,
    ApplicationFee,
}

impl ApplicationStep {
    pub const COUNT: usize = 4;

    pub const fn index(self) -> usize {
        match self {
            ApplicationStep::PersonalInfo => 0,
            ApplicationStep::EmploymentIncome => 1,
            ApplicationStep::DocumentVerification => 2,
            ApplicationStep::ApplicationFee => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(ApplicationStep::PersonalInfo),
            1 => Some(ApplicationStep::EmploymentIncome),
            2 => Some(ApplicationStep::DocumentVerification),
            3 => Some(ApplicationStep::ApplicationFee),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStep::PersonalInfo => "Personal Information",
            ApplicationStep::EmploymentIncome => "Employment & Income",
            ApplicationStep::DocumentVerification => "Document Verification",
            ApplicationStep::ApplicationFee => "Application Fee",
        }
    }

    pub const fn is_final(self) -> bool {
        matches!(self, ApplicationStep::ApplicationFee)
    }

    fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }
}

/// The final step's precondition: the application fee must be paid before
/// submission is permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("application fee payment is required before submission")]
pub struct GateNotSatisfied;

/// Result of a sequencer transition, reported to the composition root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepSignal {
    /// The index changed.
    Moved(ApplicationStep),
    /// Boundary no-op; the index is unchanged.
    Stayed(ApplicationStep),
    /// Advance from the final step with the gate satisfied: the root should
    /// submit. No local mutation happens.
    Submit,
    /// Advance from the final step with the gate unsatisfied.
    Blocked(GateNotSatisfied),
}

/// Holds the current step index and the advance/retreat transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepSequencer {
    current: ApplicationStep,
}

impl Default for ApplicationStep {
    fn default() -> Self {
        ApplicationStep::PersonalInfo
    }
}

impl StepSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ApplicationStep {
        self.current
    }

    /// Whether advance is currently invocable. Evaluated at render time to
    /// drive the disabled state of the "Next" button.
    pub fn can_advance(&self, payment_complete: bool) -> bool {
        !self.current.is_final() || payment_complete
    }

    /// Move forward one step, or signal submission from the final step.
    ///
    /// The gate is re-checked here even though the UI disables the control,
    /// so an event delivered across frames cannot race past it.
    pub fn advance(&mut self, payment_complete: bool) -> StepSignal {
        match self.current.next() {
            Some(next) => {
                self.current = next;
                StepSignal::Moved(next)
            }
            None if payment_complete => StepSignal::Submit,
            None => StepSignal::Blocked(GateNotSatisfied),
        }
    }

    /// Move back one step; no-op at step 0.
    pub fn retreat(&mut self) -> StepSignal {
        match self.current.prev() {
            Some(prev) => {
                self.current = prev;
                StepSignal::Moved(prev)
            }
            None => StepSignal::Stayed(self.current),
        }
    }
}
