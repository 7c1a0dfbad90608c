use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The fixed set of verification documents the wizard tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Identification,
    ProofOfIncome,
    CreditReport,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::Identification,
        DocumentKind::ProofOfIncome,
        DocumentKind::CreditReport,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            DocumentKind::Identification => "identification",
            DocumentKind::ProofOfIncome => "proof_of_income",
            DocumentKind::CreditReport => "credit_report",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when a wire-level document name does not map to a known flag.
/// Inside the crate the enum makes unknown kinds unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown document kind '{0}'")]
pub struct UnknownDocumentKind(pub String);

impl FromStr for DocumentKind {
    type Err = UnknownDocumentKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "identification" | "id" => Ok(DocumentKind::Identification),
            "proof_of_income" | "proof-of-income" | "income" => Ok(DocumentKind::ProofOfIncome),
            "credit_report" | "credit-report" | "credit" => Ok(DocumentKind::CreditReport),
            other => Err(UnknownDocumentKind(other.to_string())),
        }
    }
}

/// Named boolean flags for the verification step. Flags only move false to
/// true in the stubbed flow; there is no un-upload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentChecklist {
    pub id_uploaded: bool,
    pub proof_of_income_uploaded: bool,
    pub credit_report_uploaded: bool,
}

impl DocumentChecklist {
    /// Set the named flag. Idempotent; uploading twice is not an error.
    pub fn upload(&mut self, kind: DocumentKind) {
        match kind {
            DocumentKind::Identification => self.id_uploaded = true,
            DocumentKind::ProofOfIncome => self.proof_of_income_uploaded = true,
            DocumentKind::CreditReport => self.credit_report_uploaded = true,
        }
    }

    pub fn is_uploaded(&self, kind: DocumentKind) -> bool {
        match kind {
            DocumentKind::Identification => self.id_uploaded,
            DocumentKind::ProofOfIncome => self.proof_of_income_uploaded,
            DocumentKind::CreditReport => self.credit_report_uploaded,
        }
    }

    pub fn missing(&self) -> Vec<DocumentKind> {
        DocumentKind::ALL
            .into_iter()
            .filter(|kind| !self.is_uploaded(*kind))
            .collect()
    }

    pub fn all_uploaded(&self) -> bool {
        self.missing().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_is_idempotent() {
        let mut checklist = DocumentChecklist::default();
        checklist.upload(DocumentKind::Identification);
        checklist.upload(DocumentKind::Identification);
        assert!(checklist.is_uploaded(DocumentKind::Identification));
        assert!(!checklist.is_uploaded(DocumentKind::ProofOfIncome));
    }

    #[test]
    fn missing_tracks_remaining_flags_in_order() {
        let mut checklist = DocumentChecklist::default();
        assert_eq!(checklist.missing().len(), 3);
        checklist.upload(DocumentKind::ProofOfIncome);
        assert_eq!(
            checklist.missing(),
            vec![DocumentKind::Identification, DocumentKind::CreditReport]
        );
        checklist.upload(DocumentKind::Identification);
        checklist.upload(DocumentKind::CreditReport);
        assert!(checklist.all_uploaded());
    }

    #[test]
    fn kind_parses_wire_names_and_rejects_unknowns() {
        assert_eq!(
            "credit-report".parse::<DocumentKind>(),
            Ok(DocumentKind::CreditReport)
        );
        assert_eq!("ID".parse::<DocumentKind>(), Ok(DocumentKind::Identification));
        let err = "lease".parse::<DocumentKind>().expect_err("unknown kind");
        assert_eq!(err, UnknownDocumentKind("lease".to_string()));
    }
}
