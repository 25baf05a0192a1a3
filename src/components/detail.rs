//! Record detail dialog - flattened field view of one record
//!
//! The row-activation target: shows every field of the activated record
//! under its dotted path, scrollable for wide records.

use crate::action::Action;
use crate::component::Component;
use crate::model::record::{flatten_fields, Record};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Record detail dialog
pub struct RecordDetailDialog {
    title: String,
    fields: Vec<(String, String)>,
    scroll: usize,
}

impl Default for RecordDetailDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordDetailDialog {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            fields: Vec::new(),
            scroll: 0,
        }
    }

    /// Load the record to display
    pub fn set_record(&mut self, screen_title: &str, record: &Record) {
        self.title = format!(" {} · {} ", screen_title, record.id);
        self.fields = flatten_fields(&record.value);
        self.scroll = 0;
    }
}

impl Component for RecordDetailDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Action::CloseModal),
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                Some(Action::ModalUp)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.scroll + 1 < self.fields.len() {
                    self.scroll += 1;
                }
                Some(Action::ModalDown)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_width = 60u16.min(area.width.saturating_sub(4));
        let popup_height = (self.fields.len() as u16 + 4)
            .min(area.height.saturating_sub(4))
            .max(8);
        let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
        let popup_area = Rect::new(x, y, popup_width, popup_height);

        frame.render_widget(Clear, popup_area);

        let label_width = self
            .fields
            .iter()
            .map(|(path, _)| path.len())
            .max()
            .unwrap_or(0);

        let lines: Vec<Line> = self
            .fields
            .iter()
            .skip(self.scroll)
            .map(|(path, value)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:w$}  ", path, w = label_width),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(value.clone(), Style::default().fg(Color::White)),
                ])
            })
            .collect();

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(self.title.clone())
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                )
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(paragraph, popup_area);

        Ok(())
    }
}
