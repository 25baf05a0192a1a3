//! Help dialog showing all keyboard shortcuts

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const BINDINGS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "Switch screen"),
    ("j/k, ↑/↓", "Move row cursor"),
    ("g / G", "First / last row"),
    ("h/l, ←/→", "Previous / next page"),
    ("/", "Search (Esc cancels, Enter keeps)"),
    ("1-9", "Sort by column, repeat to flip"),
    ("Space", "Toggle row selection"),
    ("Ctrl-a", "Select / deselect current page"),
    ("Esc", "Clear selection"),
    ("Enter", "Open record detail"),
    ("x", "Export table to CSV"),
    ("d", "Date range picker (Report)"),
    ("R", "Reload datasets"),
    ("?", "This help"),
    ("q", "Quit"),
];

/// Help dialog listing every key binding
#[derive(Default)]
pub struct HelpDialog {
    scroll: usize,
}

impl HelpDialog {
    pub fn new() -> Self {
        Self { scroll: 0 }
    }
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                Some(Action::ModalUp)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.scroll + 1 < BINDINGS.len() {
                    self.scroll += 1;
                }
                Some(Action::ModalDown)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup = super::centered_popup(area, 52, BINDINGS.len() as u16 + 4);
        frame.render_widget(Clear, popup);

        let lines: Vec<Line> = BINDINGS
            .iter()
            .skip(self.scroll)
            .map(|(keys, what)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:16} ", keys),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*what),
                ])
            })
            .collect();

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Keyboard Shortcuts ")
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                )
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(paragraph, popup);

        Ok(())
    }
}
