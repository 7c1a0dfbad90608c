use serde::{Deserialize, Serialize};

/// Advisory required-field failure. Presence is the only check performed;
/// the wizard surfaces this as state for the UI rather than refusing the
/// mutation or the step transition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("required fields missing: {}", missing.join(", "))]
pub struct ValidationError {
    pub missing: Vec<&'static str>,
}

fn require(missing: &mut Vec<&'static str>, name: &'static str, value: &str) {
    if value.trim().is_empty() {
        missing.push(name);
    }
}

fn finish(missing: Vec<&'static str>) -> Result<(), ValidationError> {
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { missing })
    }
}

/// Step 0 form. All fields free text, created empty, mutated per keystroke.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub dob: String,
    /// Secure-entry field in the UI; stored as plain text like the rest.
    pub ssn: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    FirstName,
    LastName,
    Email,
    Phone,
    Dob,
    Ssn,
}

impl PersonalInfo {
    pub fn set(&mut self, field: PersonalField, value: impl Into<String>) {
        let value = value.into();
        match field {
            PersonalField::FirstName => self.first_name = value,
            PersonalField::LastName => self.last_name = value,
            PersonalField::Email => self.email = value,
            PersonalField::Phone => self.phone = value,
            PersonalField::Dob => self.dob = value,
            PersonalField::Ssn => self.ssn = value,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut missing = Vec::new();
        require(&mut missing, "first_name", &self.first_name);
        require(&mut missing, "last_name", &self.last_name);
        require(&mut missing, "email", &self.email);
        require(&mut missing, "phone", &self.phone);
        require(&mut missing, "dob", &self.dob);
        require(&mut missing, "ssn", &self.ssn);
        finish(missing)
    }
}

/// Step 1 form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmploymentInfo {
    pub employer: String,
    pub position: String,
    pub income: String,
    pub employment_length: String,
    pub supervisor_name: String,
    pub supervisor_phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmploymentField {
    Employer,
    Position,
    Income,
    EmploymentLength,
    SupervisorName,
    SupervisorPhone,
}

impl EmploymentInfo {
    pub fn set(&mut self, field: EmploymentField, value: impl Into<String>) {
        let value = value.into();
        match field {
            EmploymentField::Employer => self.employer = value,
            EmploymentField::Position => self.position = value,
            EmploymentField::Income => self.income = value,
            EmploymentField::EmploymentLength => self.employment_length = value,
            EmploymentField::SupervisorName => self.supervisor_name = value,
            EmploymentField::SupervisorPhone => self.supervisor_phone = value,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut missing = Vec::new();
        require(&mut missing, "employer", &self.employer);
        require(&mut missing, "position", &self.position);
        require(&mut missing, "income", &self.income);
        require(&mut missing, "employment_length", &self.employment_length);
        require(&mut missing, "supervisor_name", &self.supervisor_name);
        require(&mut missing, "supervisor_phone", &self.supervisor_phone);
        finish(missing)
    }
}

/// Declared by the wizard but not bound to any rendered step; kept so the
/// submission payload matches the full application shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RentalHistory {
    pub current_address: String,
    pub current_landlord: String,
    pub current_landlord_phone: String,
    pub length_of_stay: String,
    pub reason_for_leaving: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RentalHistoryField {
    CurrentAddress,
    CurrentLandlord,
    CurrentLandlordPhone,
    LengthOfStay,
    ReasonForLeaving,
}

impl RentalHistory {
    pub fn set(&mut self, field: RentalHistoryField, value: impl Into<String>) {
        let value = value.into();
        match field {
            RentalHistoryField::CurrentAddress => self.current_address = value,
            RentalHistoryField::CurrentLandlord => self.current_landlord = value,
            RentalHistoryField::CurrentLandlordPhone => self.current_landlord_phone = value,
            RentalHistoryField::LengthOfStay => self.length_of_stay = value,
            RentalHistoryField::ReasonForLeaving => self.reason_for_leaving = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_single_field_only() {
        let mut form = PersonalInfo::default();
        form.set(PersonalField::FirstName, "John");
        form.set(PersonalField::Email, "johndoe@example.com");
        assert_eq!(form.first_name, "John");
        assert_eq!(form.email, "johndoe@example.com");
        assert!(form.last_name.is_empty());
    }

    #[test]
    fn validation_lists_every_blank_field() {
        let mut form = EmploymentInfo::default();
        form.set(EmploymentField::Employer, "Acme Corp");
        form.set(EmploymentField::Income, "5000");
        let err = form.validate().expect_err("blank fields remain");
        assert_eq!(
            err.missing,
            vec![
                "position",
                "employment_length",
                "supervisor_name",
                "supervisor_phone"
            ]
        );
    }

    #[test]
    fn whitespace_only_values_count_as_missing() {
        let mut form = PersonalInfo::default();
        form.set(PersonalField::FirstName, "   ");
        let err = form.validate().expect_err("whitespace is not presence");
        assert!(err.missing.contains(&"first_name"));
    }

    #[test]
    fn fully_populated_form_validates() {
        let form = PersonalInfo {
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "johndoe@example.com".into(),
            phone: "(555) 123-4567".into(),
            dob: "01/15/1990".into(),
            ssn: "123-45-6789".into(),
        };
        assert!(form.validate().is_ok());
    }
}
