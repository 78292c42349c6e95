//! # Actions
//!
//! Everything that can happen in Folio becomes an `Action`.
//! User picks a nav link? That's `Action::NavigateTo`.
//! The typewriter task produces a frame? That's `Action::TypewriterFrame`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing work the TUI layer must
//! perform (spawn a task, scroll the page, quit). No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: apply an action, assert on the state
//! and the effect. And debuggable: log every action, replay the session.

use crate::core::content::{ProjectLink, SectionId};
use crate::core::state::{App, PendingProject, Submission, SuccessNotice};
use crate::core::validate::{self, FormField};

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Quit,
    /// Nav link activated (header digit, menu selection, or Tab cycling).
    NavigateTo(SectionId),
    ToggleMenu,
    CloseMenu,
    /// One frame from the typewriter task.
    TypewriterFrame(String),
    /// Focus left a form field; validate the value it held.
    FieldBlurred { field: FormField, value: String },
    /// Submit pressed with a snapshot of all three fields.
    SubmitForm {
        name: String,
        email: String,
        message: String,
    },
    /// The simulated delivery finished.
    SubmissionComplete(Submission),
    /// A project card button was activated.
    OpenProject { index: usize, link: ProjectLink },
    /// The simulated link-open delay finished.
    ProjectOpened { index: usize, link: ProjectLink },
    DismissNotice,
}

/// Side effects the TUI layer performs after a state change.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// Smooth-scroll the page to a section.
    ScrollTo(SectionId),
    /// Spawn the simulated form delivery task.
    SpawnSubmission(Submission),
    /// Spawn the simulated project-open task.
    SpawnProjectOpen { index: usize, link: ProjectLink },
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => Effect::Quit,

        Action::NavigateTo(section) => {
            app.active_section = section;
            // Picking a link always closes the menu overlay
            app.menu_open = false;
            app.status_message = section.label().to_string();
            Effect::ScrollTo(section)
        }

        Action::ToggleMenu => {
            app.menu_open = !app.menu_open;
            Effect::None
        }

        Action::CloseMenu => {
            app.menu_open = false;
            Effect::None
        }

        Action::TypewriterFrame(text) => {
            app.typed_text = text;
            Effect::None
        }

        Action::FieldBlurred { field, value } => {
            app.form.set_status(field, validate::validate(field, &value));
            Effect::None
        }

        Action::SubmitForm {
            name,
            email,
            message,
        } => {
            for (field, value) in [
                (FormField::Name, name.as_str()),
                (FormField::Email, email.as_str()),
                (FormField::Message, message.as_str()),
            ] {
                app.form.set_status(field, validate::validate(field, value));
            }

            if !app.form.all_valid() || app.form.is_sending {
                return Effect::None;
            }

            app.form.is_sending = true;
            app.status_message = String::from("Sending...");
            Effect::SpawnSubmission(Submission::new(name, email, message))
        }

        Action::SubmissionComplete(submission) => {
            app.form.is_sending = false;
            app.form.reset_statuses();
            app.form.success = Some(SuccessNotice::new(format!(
                "Thank you {}! Your message has been received. \
                 I'll get back to you soon at {}.",
                submission.name, submission.email
            )));
            app.status_message = String::from("Message sent");
            Effect::None
        }

        Action::OpenProject { index, link } => {
            if app.pending_project.is_some() || index >= app.projects.len() {
                return Effect::None;
            }
            app.pending_project = Some(PendingProject { index, link });
            Effect::SpawnProjectOpen { index, link }
        }

        Action::ProjectOpened { index, link } => {
            app.pending_project = None;
            if let Some(project) = app.projects.get(index) {
                let mut text = match link {
                    ProjectLink::Demo => format!(
                        "Opening demo for {}. In a real portfolio, this would \
                         link to your live project!",
                        project.name
                    ),
                    ProjectLink::Repo => format!(
                        "Opening GitHub repository for {}. In a real portfolio, \
                         this would link to your GitHub repo!",
                        project.name
                    ),
                };
                let url = match link {
                    ProjectLink::Demo => project.demo_url.as_deref(),
                    ProjectLink::Repo => project.repo_url.as_deref(),
                };
                if let Some(url) = url {
                    text.push_str("\n\n");
                    text.push_str(url);
                }
                app.notice = Some(text);
            }
            Effect::None
        }

        Action::DismissNotice => {
            app.notice = None;
            Effect::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validate::FieldStatus;
    use crate::test_support::test_app;

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_navigate_closes_menu_and_scrolls() {
        let mut app = test_app();
        app.menu_open = true;

        let effect = update(&mut app, Action::NavigateTo(SectionId::Skills));

        assert_eq!(effect, Effect::ScrollTo(SectionId::Skills));
        assert_eq!(app.active_section, SectionId::Skills);
        assert!(!app.menu_open);
    }

    #[test]
    fn test_menu_toggle_round_trip() {
        let mut app = test_app();
        update(&mut app, Action::ToggleMenu);
        assert!(app.menu_open);
        update(&mut app, Action::ToggleMenu);
        assert!(!app.menu_open);

        update(&mut app, Action::ToggleMenu);
        update(&mut app, Action::CloseMenu);
        assert!(!app.menu_open);
    }

    #[test]
    fn test_typewriter_frame_updates_hero() {
        let mut app = test_app();
        update(&mut app, Action::TypewriterFrame("Full St".to_string()));
        assert_eq!(app.typed_text, "Full St");
    }

    #[test]
    fn test_blur_records_field_status() {
        let mut app = test_app();
        update(
            &mut app,
            Action::FieldBlurred {
                field: FormField::Name,
                value: "x".to_string(),
            },
        );
        assert_eq!(
            app.form.status(FormField::Name),
            FieldStatus::Invalid("Name must be at least 2 characters long")
        );

        update(
            &mut app,
            Action::FieldBlurred {
                field: FormField::Name,
                value: "Sam".to_string(),
            },
        );
        assert!(app.form.status(FormField::Name).is_valid());
    }

    #[test]
    fn test_submit_with_invalid_fields_spawns_nothing() {
        let mut app = test_app();
        let effect = update(
            &mut app,
            Action::SubmitForm {
                name: "Sam".to_string(),
                email: "not-an-email".to_string(),
                message: "long enough message".to_string(),
            },
        );

        assert_eq!(effect, Effect::None);
        assert!(!app.form.is_sending);
        // Valid fields still get success styling, invalid ones an error
        assert!(app.form.status(FormField::Name).is_valid());
        assert!(app.form.status(FormField::Email).error().is_some());
    }

    #[test]
    fn test_valid_submit_spawns_delivery() {
        let mut app = test_app();
        let effect = update(
            &mut app,
            Action::SubmitForm {
                name: "Sam".to_string(),
                email: "sam@example.com".to_string(),
                message: "Hello from the terminal!".to_string(),
            },
        );

        let Effect::SpawnSubmission(submission) = effect else {
            panic!("expected SpawnSubmission, got {effect:?}");
        };
        assert_eq!(submission.name, "Sam");
        assert!(app.form.is_sending);
    }

    #[test]
    fn test_submit_while_sending_is_ignored() {
        let mut app = test_app();
        app.form.is_sending = true;
        let effect = update(
            &mut app,
            Action::SubmitForm {
                name: "Sam".to_string(),
                email: "sam@example.com".to_string(),
                message: "Hello from the terminal!".to_string(),
            },
        );
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn test_submission_complete_raises_success_notice() {
        let mut app = test_app();
        app.form.is_sending = true;

        let submission = Submission::new(
            "Sam".to_string(),
            "sam@example.com".to_string(),
            "Hello from the terminal!".to_string(),
        );
        update(&mut app, Action::SubmissionComplete(submission));

        assert!(!app.form.is_sending);
        let success = app.form.success.as_ref().unwrap();
        assert!(success.text.contains("Thank you Sam!"));
        assert!(success.text.contains("sam@example.com"));
        assert_eq!(app.form.status(FormField::Name), FieldStatus::Pristine);
    }

    #[test]
    fn test_project_open_marks_loading_then_notices() {
        let mut app = test_app();
        let effect = update(
            &mut app,
            Action::OpenProject {
                index: 0,
                link: ProjectLink::Demo,
            },
        );
        assert_eq!(
            effect,
            Effect::SpawnProjectOpen {
                index: 0,
                link: ProjectLink::Demo
            }
        );
        assert!(app.pending_project.is_some());

        // A second press while loading is ignored
        let effect = update(
            &mut app,
            Action::OpenProject {
                index: 1,
                link: ProjectLink::Repo,
            },
        );
        assert_eq!(effect, Effect::None);

        update(
            &mut app,
            Action::ProjectOpened {
                index: 0,
                link: ProjectLink::Demo,
            },
        );
        assert!(app.pending_project.is_none());
        let notice = app.notice.as_ref().unwrap();
        assert!(notice.starts_with("Opening demo for"));

        update(&mut app, Action::DismissNotice);
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_project_open_out_of_range_ignored() {
        let mut app = test_app();
        let effect = update(
            &mut app,
            Action::OpenProject {
                index: 99,
                link: ProjectLink::Repo,
            },
        );
        assert_eq!(effect, Effect::None);
        assert!(app.pending_project.is_none());
    }

    #[test]
    fn test_repo_notice_mentions_github() {
        let mut app = test_app();
        update(
            &mut app,
            Action::OpenProject {
                index: 0,
                link: ProjectLink::Repo,
            },
        );
        update(
            &mut app,
            Action::ProjectOpened {
                index: 0,
                link: ProjectLink::Repo,
            },
        );
        assert!(app.notice.as_ref().unwrap().contains("GitHub repository"));
    }
}
