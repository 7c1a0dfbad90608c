//! Profile screen store: contact details with edit/save/discard semantics and
//! four independent communication toggles. Logout is a local notice only.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl UserProfile {
    pub fn sample() -> Self {
        Self {
            name: "John Doe".to_string(),
            email: "johndoe@example.com".to_string(),
            phone: "(555) 123-4567".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunicationPreferences {
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub push_notifications: bool,
    pub marketing_emails: bool,
}

impl Default for CommunicationPreferences {
    fn default() -> Self {
        Self {
            email_notifications: true,
            sms_notifications: true,
            push_notifications: true,
            marketing_emails: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceKind {
    EmailNotifications,
    SmsNotifications,
    PushNotifications,
    MarketingEmails,
}

/// Emitted by logout; the UI shows it as a blocking notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignOutNotice {
    pub message: &'static str,
}

/// Edits accumulate in a draft and apply only on save.
#[derive(Debug, Clone)]
pub struct ProfileEditor {
    saved: UserProfile,
    draft: Option<UserProfile>,
    preferences: CommunicationPreferences,
}

impl ProfileEditor {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            saved: profile,
            draft: None,
            preferences: CommunicationPreferences::default(),
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.saved
    }

    pub fn preferences(&self) -> &CommunicationPreferences {
        &self.preferences
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    pub fn begin_edit(&mut self) {
        if self.draft.is_none() {
            self.draft = Some(self.saved.clone());
        }
    }

    /// Mutate the draft; starts an edit session if none is active.
    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        self.begin_edit();
        let draft = self.draft.as_mut().expect("draft exists after begin_edit");
        let value = value.into();
        match field {
            ProfileField::Name => draft.name = value,
            ProfileField::Email => draft.email = value,
            ProfileField::Phone => draft.phone = value,
        }
    }

    /// Apply the draft to the saved profile and leave edit mode.
    pub fn save(&mut self) {
        if let Some(draft) = self.draft.take() {
            self.saved = draft;
        }
    }

    /// Drop the draft, keeping the saved profile untouched.
    pub fn discard(&mut self) {
        self.draft = None;
    }

    pub fn toggle(&mut self, kind: PreferenceKind) {
        let prefs = &mut self.preferences;
        match kind {
            PreferenceKind::EmailNotifications => {
                prefs.email_notifications = !prefs.email_notifications
            }
            PreferenceKind::SmsNotifications => prefs.sms_notifications = !prefs.sms_notifications,
            PreferenceKind::PushNotifications => {
                prefs.push_notifications = !prefs.push_notifications
            }
            PreferenceKind::MarketingEmails => prefs.marketing_emails = !prefs.marketing_emails,
        }
    }

    pub fn sign_out(&self) -> SignOutNotice {
        SignOutNotice {
            message: "Logged out successfully",
        }
    }
}
