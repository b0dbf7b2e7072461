//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! It owns the dialog visibility flag and the pointer hub the dialog
//! subscribes to while it is shown.

use crate::action::Action;
use crate::component::Component;
use crate::components::{HomeComponent, UserDetailsDialog};
use crate::model::PointerHub;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Whether the user details dialog is shown
    pub dialog_visible: bool,

    /// Screen-wide mouse listeners
    pub pointer_hub: PointerHub,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub home: HomeComponent,
    pub dialog: UserDetailsDialog,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create a new App instance
    pub fn new() -> App {
        App {
            dialog_visible: false,
            pointer_hub: PointerHub::new(),
            should_quit: false,
            home: HomeComponent::new(),
            dialog: UserDetailsDialog::new(),
        }
    }

    /// Show the dialog
    pub fn open_dialog(&mut self) {
        self.dialog_visible = true;
        self.sync_dialog();
    }

    /// Hide the dialog; a no-op when it is already hidden
    pub fn close_dialog(&mut self) {
        self.dialog_visible = false;
        self.sync_dialog();
    }

    fn sync_dialog(&mut self) {
        self.dialog
            .sync_visibility(self.dialog_visible, &self.pointer_hub);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        if self.dialog_visible {
            self.dialog.handle_key_event(key)
        } else {
            self.home.handle_key_event(key)
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        // Screen-wide presses go to the subscribed dialog first
        if matches!(mouse.kind, MouseEventKind::Down(_)) && self.dialog.is_listening() {
            return self.dialog.handle_mouse_event(mouse);
        }

        if self.dialog_visible {
            Ok(None)
        } else {
            self.home.handle_mouse_event(mouse)
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick | Action::Resize(_, _) => {}
            Action::Quit => {
                tracing::info!("quit requested");
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Dialog Visibility
            // ─────────────────────────────────────────────────────────────────
            Action::OpenDialog => self.open_dialog(),
            Action::CloseDialog => self.close_dialog(),

            // ─────────────────────────────────────────────────────────────────
            // Form Editing (delegate to UserDetailsDialog)
            // ─────────────────────────────────────────────────────────────────
            Action::FocusNext
            | Action::FocusPrev
            | Action::FocusField(_)
            | Action::FieldInput(_)
            | Action::FieldBackspace
            | Action::SubmitForm
            | Action::AcknowledgeNotice => return self.dialog.update(action),
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.home.draw(frame, area)?;

        // Draw modal overlay if active
        if self.dialog.is_open() {
            self.dialog.draw(frame, area)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ValidationError;
    use crossterm::event::MouseButton;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Process an action and its follow-ups like the main loop does
    fn dispatch(app: &mut App, action: Option<Action>) {
        let mut current = action;
        while let Some(a) = current {
            current = app.update(a).unwrap();
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        let action = app.handle_key_event(key(code)).unwrap();
        dispatch(app, action);
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn fill(app: &mut App, values: [&str; 4]) {
        for value in values {
            type_str(app, value);
            press(app, KeyCode::Tab);
        }
    }

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                app.draw(frame, area).unwrap();
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_starts_hidden() {
        let mut app = App::new();
        assert!(!app.dialog_visible);
        assert!(!app.dialog.is_open());
        assert_eq!(app.pointer_hub.listener_count(), 0);
        let screen = render(&mut app);
        assert!(screen.contains("Open Form"));
        assert!(!screen.contains("Fill Details"));
    }

    #[test]
    fn test_open_and_close() {
        let mut app = App::new();
        press(&mut app, KeyCode::Enter);
        assert!(app.dialog_visible);
        assert!(app.dialog.is_open());
        assert_eq!(app.pointer_hub.listener_count(), 1);
        assert!(render(&mut app).contains("Fill Details"));

        app.close_dialog();
        assert!(!app.dialog_visible);
        assert!(!app.dialog.is_open());
        assert_eq!(app.pointer_hub.listener_count(), 0);
    }

    #[test]
    fn test_close_when_hidden_is_noop() {
        let mut app = App::new();
        app.close_dialog();
        app.close_dialog();
        assert!(!app.dialog_visible);
        assert_eq!(app.pointer_hub.listener_count(), 0);
    }

    #[test]
    fn test_open_twice_keeps_one_listener() {
        let mut app = App::new();
        app.open_dialog();
        type_str(&mut app, "ann");
        app.open_dialog();
        assert_eq!(app.pointer_hub.listener_count(), 1);
        assert_eq!(app.dialog.form().unwrap().username, "ann");
    }

    #[test]
    fn test_valid_submit_hides_dialog() {
        let mut app = App::new();
        app.open_dialog();
        fill(&mut app, ["ann", "a@b.com", "1234567890", "2000-01-01"]);
        press(&mut app, KeyCode::Enter);
        assert!(!app.dialog_visible);
        assert!(!app.dialog.is_open());
        assert_eq!(app.pointer_hub.listener_count(), 0);
    }

    #[test]
    fn test_invalid_submit_keeps_dialog_open() {
        let mut app = App::new();
        app.open_dialog();
        fill(&mut app, ["ann", "ab.com", "1234567890", "2000-01-01"]);
        press(&mut app, KeyCode::Enter);
        assert!(app.dialog_visible);
        let screen = render(&mut app);
        assert!(screen.contains("Invalid email. Please check your email address."));
    }

    #[test]
    fn test_outside_click_hides_and_discards_form() {
        let mut app = App::new();
        app.open_dialog();
        type_str(&mut app, "ann");
        render(&mut app);

        let action = app.handle_mouse_event(click(0, 0)).unwrap();
        assert_eq!(action, Some(Action::CloseDialog));
        dispatch(&mut app, action);
        assert!(!app.dialog_visible);
        assert_eq!(app.pointer_hub.listener_count(), 0);

        app.open_dialog();
        assert_eq!(app.dialog.form().unwrap().username, "");
    }

    #[test]
    fn test_outside_click_keeps_dialog_while_notice_shown() {
        let mut app = App::new();
        app.open_dialog();
        type_str(&mut app, "a");
        press(&mut app, KeyCode::Enter);
        render(&mut app);

        let action = app.handle_mouse_event(click(0, 0)).unwrap();
        assert_eq!(action, None);
        dispatch(&mut app, action);
        assert!(app.dialog_visible);
        assert_eq!(app.pointer_hub.listener_count(), 1);
        assert_eq!(app.dialog.notice(), Some(ValidationError::MissingField));
        assert!(render(&mut app).contains("Please fill out all fields."));
    }

    #[test]
    fn test_home_ignores_keys_while_dialog_open() {
        let mut app = App::new();
        app.open_dialog();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.dialog.form().unwrap().username, "q");
    }

    #[test]
    fn test_quit() {
        let mut app = App::new();
        press(&mut app, KeyCode::Esc);
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = App::new();
        app.open_dialog();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let action = app.handle_key_event(ctrl_c).unwrap();
        dispatch(&mut app, action);
        assert!(app.should_quit);
    }

    #[test]
    fn test_dropping_open_dialog_releases_listener() {
        let mut app = App::new();
        app.open_dialog();
        assert!(app.dialog.is_listening());

        drop(std::mem::take(&mut app.dialog));
        assert_eq!(app.pointer_hub.listener_count(), 0);

        // Presses are no longer routed to a dialog that is gone
        let action = app.handle_mouse_event(click(0, 0)).unwrap();
        assert_eq!(action, None);
    }
}
