//! User details dialog component
//!
//! Collects username, email, phone number and date of birth. While open it
//! holds a pointer subscription so mouse-downs outside its area can dismiss
//! it; the subscription and the form are dropped together when it closes.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{centered_popup, contains};
use crate::model::{
    validation, Field, FieldEdit, FormState, PointerHub, PointerSubscription, ValidationError,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthChar;

const DIALOG_WIDTH: u16 = 68;
const DIALOG_HEIGHT: u16 = 22;
const SUBMIT_WIDTH: u16 = 12;

/// State that exists only while the dialog is shown
struct OpenDialog {
    form: FormState,
    focus: Field,
    notice: Option<ValidationError>,
    /// Regions from the last draw, used for hit-testing
    area: Option<Rect>,
    input_areas: Vec<(Field, Rect)>,
    submit_area: Option<Rect>,
    subscription: PointerSubscription,
}

impl OpenDialog {
    fn new(subscription: PointerSubscription) -> Self {
        Self {
            form: FormState::new(),
            focus: Field::Username,
            notice: None,
            area: None,
            input_areas: Vec::new(),
            submit_area: None,
            subscription,
        }
    }

    fn field_at(&self, column: u16, row: u16) -> Option<Field> {
        self.input_areas
            .iter()
            .find(|(_, rect)| contains(*rect, column, row))
            .map(|(field, _)| *field)
    }
}

/// Modal form for entering user details
#[derive(Default)]
pub struct UserDetailsDialog {
    open: Option<OpenDialog>,
}

impl UserDetailsDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Bring the dialog in line with the host's visibility flag
    ///
    /// Becoming visible mounts a fresh form and subscribes to pointer
    /// events; becoming hidden drops both. Syncing to the current state
    /// does nothing.
    pub fn sync_visibility(&mut self, visible: bool, hub: &PointerHub) {
        match (visible, self.open.is_some()) {
            (true, false) => {
                let subscription = hub.subscribe();
                tracing::info!(listener = ?subscription.id(), "user details dialog opened");
                self.open = Some(OpenDialog::new(subscription));
            }
            (false, true) => {
                self.open = None;
                tracing::info!("user details dialog closed");
            }
            _ => {}
        }
    }

    /// Whether this dialog's pointer subscription is still registered
    pub fn is_listening(&self) -> bool {
        self.open
            .as_ref()
            .is_some_and(|o| o.subscription.is_active())
    }

    fn submit(open: &mut OpenDialog) -> Option<Action> {
        match validation::validate(&open.form) {
            Ok(()) => {
                tracing::info!("user details accepted");
                Some(Action::CloseDialog)
            }
            Err(err) => {
                tracing::info!(reason = err.kind(), "user details rejected");
                open.notice = Some(err);
                None
            }
        }
    }
}

#[cfg(test)]
impl UserDetailsDialog {
    pub fn form(&self) -> Option<&FormState> {
        self.open.as_ref().map(|o| &o.form)
    }

    pub fn focus(&self) -> Option<Field> {
        self.open.as_ref().map(|o| o.focus)
    }

    pub fn notice(&self) -> Option<ValidationError> {
        self.open.as_ref().and_then(|o| o.notice)
    }
}

impl Component for UserDetailsDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let Some(open) = &self.open else {
            return Ok(None);
        };

        // A notice has to be acknowledged before anything else happens
        if open.notice.is_some() {
            let action = match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                    Some(Action::AcknowledgeNotice)
                }
                _ => None,
            };
            return Ok(action);
        }

        let action = match key.code {
            KeyCode::Esc => Some(Action::CloseDialog),
            KeyCode::Enter => Some(Action::SubmitForm),
            KeyCode::Tab | KeyCode::Down => Some(Action::FocusNext),
            KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),
            KeyCode::Backspace => Some(Action::FieldBackspace),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::FieldInput(c))
            }
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let Some(open) = &self.open else {
            return Ok(None);
        };
        let MouseEventKind::Down(button) = mouse.kind else {
            return Ok(None);
        };
        // Nothing drawn yet, so there is no region to test against
        let Some(area) = open.area else {
            return Ok(None);
        };
        let inside = contains(area, mouse.column, mouse.row);

        // An open notice keeps the dialog up until it is acknowledged
        if open.notice.is_some() {
            let acknowledge = inside && button == MouseButton::Left;
            return Ok(acknowledge.then_some(Action::AcknowledgeNotice));
        }

        if !inside {
            tracing::info!(
                column = mouse.column,
                row = mouse.row,
                "user details dialog dismissed by outside click"
            );
            return Ok(Some(Action::CloseDialog));
        }

        if button != MouseButton::Left {
            return Ok(None);
        }
        if open
            .submit_area
            .is_some_and(|rect| contains(rect, mouse.column, mouse.row))
        {
            return Ok(Some(Action::SubmitForm));
        }
        Ok(open
            .field_at(mouse.column, mouse.row)
            .map(Action::FocusField))
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let Some(open) = self.open.as_mut() else {
            return Ok(None);
        };

        if open.notice.is_some() && action != Action::AcknowledgeNotice {
            return Ok(None);
        }

        match action {
            Action::FocusNext => open.focus = open.focus.next(),
            Action::FocusPrev => open.focus = open.focus.prev(),
            Action::FocusField(field) => open.focus = field,
            Action::FieldInput(c) => {
                open.form.edit(open.focus, FieldEdit::Insert(c));
            }
            Action::FieldBackspace => {
                open.form.edit(open.focus, FieldEdit::Backspace);
            }
            Action::SubmitForm => return Ok(Self::submit(open)),
            Action::AcknowledgeNotice => open.notice = None,
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let Some(open) = self.open.as_mut() else {
            return Ok(());
        };

        let popup_area = centered_popup(area, DIALOG_WIDTH, DIALOG_HEIGHT);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Fill Details ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Spacer
                Constraint::Length(3), // Username
                Constraint::Length(3), // Email
                Constraint::Length(3), // Phone
                Constraint::Length(3), // Date of birth
                Constraint::Length(4), // Notice / hints
                Constraint::Length(3), // Submit
            ])
            .split(inner);

        open.input_areas.clear();
        for field in Field::all() {
            let rect = chunks[field.index() + 1];
            draw_input(frame, rect, field, open.form.get(field), field == open.focus);
            open.input_areas.push((field, rect));
        }

        draw_notice(frame, chunks[5], open.notice);

        let submit_area = centered_popup(chunks[6], SUBMIT_WIDTH, 3);
        let submit = Paragraph::new(Line::from(Span::styled(
            "Submit",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
        frame.render_widget(submit, submit_area);

        open.submit_area = Some(submit_area);
        open.area = Some(popup_area);
        Ok(())
    }
}

fn draw_input(frame: &mut Frame, area: Rect, field: Field, value: &str, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    // Leave room for the cursor marker
    let width = area.width.saturating_sub(3) as usize;
    let line = if value.is_empty() && !focused {
        Line::from(Span::styled(
            field.placeholder(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut spans = vec![Span::styled(
            visible_tail(value, width).to_string(),
            Style::default().fg(Color::White),
        )];
        if focused {
            spans.push(Span::styled("_", Style::default().fg(Color::Cyan)));
        }
        Line::from(spans)
    };

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {}: ", field.label())),
    );
    frame.render_widget(input, area);
}

fn draw_notice(frame: &mut Frame, area: Rect, notice: Option<ValidationError>) {
    match notice {
        Some(err) => {
            let content = vec![
                Line::from(Span::styled(
                    err.to_string(),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    Span::styled(
                        " Enter ",
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("OK"),
                ]),
            ];
            let paragraph = Paragraph::new(content)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Red)),
                );
            frame.render_widget(paragraph, area);
        }
        None => {
            let hints = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Tab next field  Enter submit  Esc close",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(hints, area);
        }
    }
}

/// Longest suffix of `value` that fits in `width` terminal columns
fn visible_tail(value: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = value.len();
    for (idx, c) in value.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &value[start..]
}
