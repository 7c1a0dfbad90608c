//! Tenant dashboard store: lease summary, rent payments against a selected
//! method, and maintenance requests. Payments are stubbed; "paying" appends a
//! paid record locally.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::ValidationError;

/// Current lease terms shown at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaseSummary {
    pub address: String,
    /// Monthly rent in whole dollars.
    pub rent: u32,
    pub due_date: NaiveDate,
    pub lease_end: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    Due,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: String,
    pub date: NaiveDate,
    pub amount: u32,
    pub status: PaymentStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodKind {
    Visa,
    Bank,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub kind: PaymentMethodKind,
    pub last4: String,
    pub expiry: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Open,
    InProgress,
    Completed,
}

impl MaintenanceStatus {
    pub const fn label(self) -> &'static str {
        match self {
            MaintenanceStatus::Open => "Open",
            MaintenanceStatus::InProgress => "In Progress",
            MaintenanceStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceRequest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub status: MaintenanceStatus,
}

/// Screen-local dashboard state; nothing here persists across sessions.
#[derive(Debug, Clone, Serialize)]
pub struct TenantDashboard {
    pub lease: LeaseSummary,
    pub payment_methods: Vec<PaymentMethod>,
    pub selected_method: PaymentMethodKind,
    pub payment_history: Vec<PaymentRecord>,
    pub maintenance_requests: Vec<MaintenanceRequest>,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid mock date")
}

impl TenantDashboard {
    /// Mock dashboard mirroring the demo tenant: four paid months and two
    /// maintenance requests, newest first.
    pub fn sample() -> Self {
        let lease = LeaseSummary {
            address: "123 Main Street, San Francisco, CA 94107".to_string(),
            rent: 1850,
            due_date: date(2025, 5, 1),
            lease_end: date(2025, 12, 31),
        };
        let payment_history = vec![
            PaymentRecord {
                id: "1".to_string(),
                date: date(2025, 4, 1),
                amount: 1850,
                status: PaymentStatus::Paid,
            },
            PaymentRecord {
                id: "2".to_string(),
                date: date(2025, 3, 1),
                amount: 1850,
                status: PaymentStatus::Paid,
            },
            PaymentRecord {
                id: "3".to_string(),
                date: date(2025, 2, 1),
                amount: 1850,
                status: PaymentStatus::Paid,
            },
            PaymentRecord {
                id: "4".to_string(),
                date: date(2025, 1, 1),
                amount: 1850,
                status: PaymentStatus::Paid,
            },
        ];
        let maintenance_requests = vec![
            MaintenanceRequest {
                id: "1".to_string(),
                title: "Leaking Faucet".to_string(),
                description: String::new(),
                date: date(2025, 3, 15),
                status: MaintenanceStatus::InProgress,
            },
            MaintenanceRequest {
                id: "2".to_string(),
                title: "Broken Light Fixture".to_string(),
                description: String::new(),
                date: date(2025, 2, 20),
                status: MaintenanceStatus::Completed,
            },
        ];
        Self {
            lease,
            payment_methods: vec![
                PaymentMethod {
                    kind: PaymentMethodKind::Visa,
                    last4: "4242".to_string(),
                    expiry: Some("12/26".to_string()),
                },
                PaymentMethod {
                    kind: PaymentMethodKind::Bank,
                    last4: "9901".to_string(),
                    expiry: None,
                },
            ],
            selected_method: PaymentMethodKind::Visa,
            payment_history,
            maintenance_requests,
        }
    }

    pub fn select_payment_method(&mut self, kind: PaymentMethodKind) {
        self.selected_method = kind;
    }

    /// Stubbed rent capture: prepend a paid record for the current rent.
    pub fn pay_rent(&mut self, on: NaiveDate) -> PaymentRecord {
        let record = PaymentRecord {
            id: (self.payment_history.len() + 1).to_string(),
            date: on,
            amount: self.lease.rent,
            status: PaymentStatus::Paid,
        };
        self.payment_history.insert(0, record.clone());
        record
    }

    /// File a new request. Title and description are presence-checked; the
    /// result is surfaced as state, not raised.
    pub fn submit_maintenance(
        &mut self,
        title: &str,
        description: &str,
        on: NaiveDate,
    ) -> Result<MaintenanceRequest, ValidationError> {
        let mut missing = Vec::new();
        if title.trim().is_empty() {
            missing.push("title");
        }
        if description.trim().is_empty() {
            missing.push("description");
        }
        if !missing.is_empty() {
            return Err(ValidationError { missing });
        }

        let request = MaintenanceRequest {
            id: (self.maintenance_requests.len() + 1).to_string(),
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            date: on,
            status: MaintenanceStatus::Open,
        };
        self.maintenance_requests.insert(0, request.clone());
        Ok(request)
    }

    pub fn open_maintenance_count(&self) -> usize {
        self.maintenance_requests
            .iter()
            .filter(|request| request.status != MaintenanceStatus::Completed)
            .count()
    }
}
