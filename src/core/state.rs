//! # Application State
//!
//! Core business state for Folio. This module contains domain logic only -
//! no TUI-specific types. Presentation state (scroll offsets, cursors,
//! field buffers) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── profile / skills / projects   // resolved page content
//! ├── active_section: SectionId     // current nav target
//! ├── menu_open: bool               // menu overlay visibility
//! ├── typed_text: String            // hero typewriter display
//! ├── form: ContactForm             // validation + submission state
//! ├── pending_project: Option<..>   // project button in "Loading..."
//! ├── notice: Option<String>        // modal raised by project buttons
//! └── status_message: String        // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::core::config::ResolvedConfig;
use crate::core::content::{Profile, Project, ProjectLink, SectionId, Skill};
use crate::core::validate::{FieldStatus, FormField};

/// How long the form's success banner stays up.
pub const SUCCESS_NOTICE_DURATION: Duration = Duration::from_secs(5);
/// Simulated delivery delay for a submitted message.
pub const SUBMISSION_DELAY: Duration = Duration::from_secs(2);
/// Simulated delay before a project link "opens".
pub const PROJECT_OPEN_DELAY: Duration = Duration::from_secs(1);

pub struct App {
    pub profile: Profile,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub active_section: SectionId,
    pub menu_open: bool,
    /// Current hero typewriter text, written by `Action::TypewriterFrame`.
    pub typed_text: String,
    pub form: ContactForm,
    /// Project button currently showing its simulated loading state.
    pub pending_project: Option<PendingProject>,
    /// Modal notice raised when a project link "opens".
    pub notice: Option<String>,
    pub status_message: String,
}

impl App {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            profile: config.profile.clone(),
            skills: config.skills.clone(),
            projects: config.projects.clone(),
            active_section: config.start_section,
            menu_open: false,
            typed_text: String::new(),
            form: ContactForm::default(),
            pending_project: None,
            notice: None,
            status_message: String::from("Welcome! Press m for menu, q to quit"),
        }
    }
}

/// Validation and submission state for the contact form. The text the user
/// is editing lives in the TUI's field buffers; the core only sees
/// snapshots on blur and submit.
#[derive(Debug, Default)]
pub struct ContactForm {
    pub name_status: FieldStatus,
    pub email_status: FieldStatus,
    pub message_status: FieldStatus,
    /// True between submit and the simulated delivery completing.
    pub is_sending: bool,
    pub success: Option<SuccessNotice>,
}

impl ContactForm {
    pub fn status(&self, field: FormField) -> FieldStatus {
        match field {
            FormField::Name => self.name_status,
            FormField::Email => self.email_status,
            FormField::Message => self.message_status,
        }
    }

    pub fn set_status(&mut self, field: FormField, status: FieldStatus) {
        match field {
            FormField::Name => self.name_status = status,
            FormField::Email => self.email_status = status,
            FormField::Message => self.message_status = status,
        }
    }

    pub fn all_valid(&self) -> bool {
        FormField::ALL.iter().all(|f| self.status(*f).is_valid())
    }

    /// Clear validation styling, as after a successful send.
    pub fn reset_statuses(&mut self) {
        for field in FormField::ALL {
            self.set_status(field, FieldStatus::Pristine);
        }
    }
}

/// The success banner under the form, with its display deadline.
#[derive(Debug)]
pub struct SuccessNotice {
    pub text: String,
    pub shown_at: Instant,
}

impl SuccessNotice {
    pub fn new(text: String) -> Self {
        Self {
            text,
            shown_at: Instant::now(),
        }
    }

    pub fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= SUCCESS_NOTICE_DURATION
    }
}

/// A project button in its simulated loading state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingProject {
    pub index: usize,
    pub link: ProjectLink,
}

/// A validated contact form snapshot on its way to the simulated backend.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Submission {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: String,
}

impl Submission {
    pub fn new(name: String, email: String, message: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            email,
            message,
            submitted_at: chrono::Local::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_from_config_defaults() {
        let app = test_app();
        assert_eq!(app.active_section, SectionId::Home);
        assert!(!app.menu_open);
        assert!(app.typed_text.is_empty());
        assert!(app.notice.is_none());
        assert!(app.status_message.contains("menu"));
    }

    #[test]
    fn test_form_status_round_trip() {
        let mut form = ContactForm::default();
        assert_eq!(form.status(FormField::Email), FieldStatus::Pristine);

        form.set_status(FormField::Email, FieldStatus::Valid);
        assert!(form.status(FormField::Email).is_valid());
        assert!(!form.all_valid());

        for field in FormField::ALL {
            form.set_status(field, FieldStatus::Valid);
        }
        assert!(form.all_valid());

        form.reset_statuses();
        assert_eq!(form.status(FormField::Name), FieldStatus::Pristine);
    }

    #[test]
    fn test_success_notice_expiry() {
        let notice = SuccessNotice::new("sent".to_string());
        assert!(!notice.expired(notice.shown_at + Duration::from_secs(4)));
        assert!(notice.expired(notice.shown_at + SUCCESS_NOTICE_DURATION));
    }

    #[test]
    fn test_submission_ids_are_unique() {
        let a = Submission::new("a".into(), "a@b.co".into(), "hello there!".into());
        let b = Submission::new("a".into(), "a@b.co".into(), "hello there!".into());
        assert_ne!(a.id, b.id);
    }
}
