//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::Field;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────────────────────
    // Dialog Visibility
    // ─────────────────────────────────────────────────────────────────────────
    /// Show the user details dialog
    OpenDialog,
    /// Hide the user details dialog, discarding its form
    CloseDialog,

    // ─────────────────────────────────────────────────────────────────────────
    // Form Editing
    // ─────────────────────────────────────────────────────────────────────────
    /// Move focus to the next input
    FocusNext,
    /// Move focus to the previous input
    FocusPrev,
    /// Move focus to a specific input
    FocusField(Field),
    /// Type a character into the focused input
    FieldInput(char),
    /// Remove the last character of the focused input
    FieldBackspace,
    /// Validate the form
    SubmitForm,
    /// Dismiss the current validation notice
    AcknowledgeNotice,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::Quit => write!(f, "Quit"),
            Action::OpenDialog => write!(f, "OpenDialog"),
            Action::CloseDialog => write!(f, "CloseDialog"),
            Action::FocusNext => write!(f, "FocusNext"),
            Action::FocusPrev => write!(f, "FocusPrev"),
            Action::FocusField(field) => write!(f, "FocusField({:?})", field),
            Action::FieldInput(c) => write!(f, "FieldInput('{}')", c),
            Action::FieldBackspace => write!(f, "FieldBackspace"),
            Action::SubmitForm => write!(f, "SubmitForm"),
            Action::AcknowledgeNotice => write!(f, "AcknowledgeNotice"),
        }
    }
}
