//! Home screen component
//!
//! The page behind the dialog: a heading and the "Open Form" trigger.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{calculate_home_layout, contains};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Home screen with the dialog trigger
#[derive(Default)]
pub struct HomeComponent {
    /// Where the button was last drawn
    button_area: Option<Rect>,
}

impl HomeComponent {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Enter | KeyCode::Char('o') | KeyCode::Char(' ') => Some(Action::OpenDialog),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        let clicked = self
            .button_area
            .is_some_and(|rect| contains(rect, mouse.column, mouse.row));
        Ok(clicked.then_some(Action::OpenDialog))
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_home_layout(area);

        let heading = Paragraph::new(Line::from(Span::styled(
            "User Details Modal",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(heading, layout.heading);

        let button = Paragraph::new(Line::from(Span::styled(
            "Open Form",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(button, layout.button);
        self.button_area = Some(layout.button);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(
                " Enter/o ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Open Form  "),
            Span::styled(
                " q ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Quit"),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, layout.help);

        Ok(())
    }
}
