use serde::{Deserialize, Serialize};

use crate::field::{clear_field_validation, mark_field_invalid, FieldHandle};
use crate::logging::{log_draft_validation, log_validation_failure};
use crate::timezone::default_timezone;
use crate::validation::{validate_backend_url, validate_font_scale, validate_timezone};

/// How the application is deployed, as selected during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentMode {
    /// Everything runs on this machine.
    Local,
    /// This instance is a client of a remote backend.
    RemoteClient,
    /// This instance serves remote clients.
    RemoteServer,
}

impl DeploymentMode {
    /// Only a remote client cannot work without a backend URL.
    pub fn requires_backend_url(&self) -> bool {
        matches!(self, DeploymentMode::RemoteClient)
    }
}

/// Unsaved settings as collected from the form, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingsDraft {
    pub mode: DeploymentMode,
    pub backend_url: String,
    pub user_timezone: String,
    pub ui_font_scale: f64,
}

impl Default for SettingsDraft {
    fn default() -> Self {
        Self {
            mode: DeploymentMode::Local,
            backend_url: String::new(),
            user_timezone: default_timezone(),
            ui_font_scale: 100.0,
        }
    }
}

/// Form field a validation issue belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsField {
    BackendUrl,
    UserTimezone,
    UiFontScale,
}

impl SettingsField {
    /// All validated fields, in form order.
    pub const ALL: [SettingsField; 3] = [
        SettingsField::BackendUrl,
        SettingsField::UserTimezone,
        SettingsField::UiFontScale,
    ];

    /// Name of the draft field this corresponds to.
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingsField::BackendUrl => "backendUrl",
            SettingsField::UserTimezone => "userTimezone",
            SettingsField::UiFontScale => "uiFontScale",
        }
    }
}

/// One rejected field with a user-facing message.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub field: SettingsField,
    pub message: String,
}

impl ValidationIssue {
    fn new(field: SettingsField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Handles to the rendered settings form fields.
///
/// Any handle may be absent; operations skip absent fields silently, the
/// same way the validation helpers treat an absent field.
#[derive(Default)]
pub struct SettingsForm<'a> {
    pub backend_url: Option<&'a mut dyn FieldHandle>,
    pub user_timezone: Option<&'a mut dyn FieldHandle>,
    pub ui_font_scale: Option<&'a mut dyn FieldHandle>,
}

impl<'a> SettingsForm<'a> {
    fn field_mut(&mut self, field: SettingsField) -> Option<&mut (dyn FieldHandle + 'a)> {
        match field {
            SettingsField::BackendUrl => self.backend_url.as_deref_mut(),
            SettingsField::UserTimezone => self.user_timezone.as_deref_mut(),
            SettingsField::UiFontScale => self.ui_font_scale.as_deref_mut(),
        }
    }
}

/// Validates a settings draft, returning one issue per rejected field.
///
/// An empty vector means the draft can be persisted. The backend URL is
/// required in remote client mode and must be well-formed whenever it is
/// set; a set timezone must name a known IANA zone; the font scale must be
/// within the supported range.
pub fn validate_settings_draft(draft: &SettingsDraft) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let backend_url = draft.backend_url.trim();
    if backend_url.is_empty() {
        if draft.mode.requires_backend_url() {
            issues.push(ValidationIssue::new(
                SettingsField::BackendUrl,
                "A backend URL is required for remote client mode",
            ));
        }
    } else if let Err(err) = validate_backend_url(backend_url) {
        issues.push(ValidationIssue::new(SettingsField::BackendUrl, err.to_string()));
    }

    let timezone = draft.user_timezone.trim();
    if !timezone.is_empty() {
        if let Err(err) = validate_timezone(timezone) {
            issues.push(ValidationIssue::new(SettingsField::UserTimezone, err.to_string()));
        }
    }

    if let Err(err) = validate_font_scale(draft.ui_font_scale) {
        issues.push(ValidationIssue::new(SettingsField::UiFontScale, err.to_string()));
    }

    for issue in &issues {
        let value = match issue.field {
            SettingsField::BackendUrl => draft.backend_url.clone(),
            SettingsField::UserTimezone => draft.user_timezone.clone(),
            SettingsField::UiFontScale => draft.ui_font_scale.to_string(),
        };
        log_validation_failure(issue.field.as_str(), &value, &issue.message);
    }
    log_draft_validation(issues.len());

    issues
}

/// Marks the field behind every issue as invalid.
pub fn apply_validation_issues(form: &mut SettingsForm<'_>, issues: &[ValidationIssue]) {
    for issue in issues {
        mark_field_invalid(form.field_mut(issue.field));
    }
}

/// Clears the validation markers from every settings form field.
pub fn reset_settings_validation(form: &mut SettingsForm<'_>) {
    for field in SettingsField::ALL {
        clear_field_validation(form.field_mut(field));
    }
}
