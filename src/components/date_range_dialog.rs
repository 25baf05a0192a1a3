//! Date range picker dialog
//!
//! A popover calendar for the report screen. Space/Enter selects the
//! cursor day through the two-click range rule; 'a' applies the pending
//! range to the caller, 'r' resets the pending selection to the default
//! range, Esc cancels without notifying (the pending selection is kept).

use crate::action::Action;
use crate::component::Component;
use crate::model::daterange::{month_grid, DateRange, RangeSelection};
use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const WEEKDAY_HEADER: &str = " Su  Mo  Tu  We  Th  Fr  Sa";

/// Date range picker dialog
pub struct DateRangeDialog {
    /// Pending selection; survives cancel, replaced on open/reset
    pub selection: RangeSelection,
    /// Range reverted to by the reset control
    pub default_range: DateRange,
}

impl DateRangeDialog {
    pub fn new(default_range: DateRange) -> Self {
        Self {
            selection: RangeSelection::new(default_range),
            default_range,
        }
    }

    /// Open the picker seeded with the committed range
    pub fn open(&mut self, committed: DateRange) {
        self.selection = RangeSelection::new(committed);
    }

    /// Revert the pending selection to the default range
    pub fn reset(&mut self) {
        self.selection.reset_to(self.default_range);
    }
}

impl Component for DateRangeDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::CloseModal),
            KeyCode::Char('a') => {
                let range = self.selection.range();
                Some(Action::ApplyDateRange(range.start, range.end))
            }
            KeyCode::Char('r') => Some(Action::ResetDateRange),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.selection.select(self.selection.cursor_day);
                None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.selection.move_cursor(-1);
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.selection.move_cursor(1);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selection.move_cursor(-7);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selection.move_cursor(7);
                None
            }
            KeyCode::Char('p') | KeyCode::Char('[') => {
                self.selection.prev_month();
                None
            }
            KeyCode::Char('n') | KeyCode::Char(']') => {
                self.selection.next_month();
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_width = 35u16.min(area.width.saturating_sub(4));
        let popup_height = 15u16.min(area.height.saturating_sub(2));
        let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
        let popup_area = Rect::new(x, y, popup_width, popup_height);

        frame.render_widget(Clear, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // month title + pending range
                Constraint::Min(7),    // weekday header + grid
                Constraint::Length(3), // help bar
            ])
            .split(popup_area);

        let month = self.selection.cursor_month;
        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("◂ {} ▸", month.format("%B %Y")),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.selection.range().label(),
                Style::default().fg(Color::Yellow),
            )),
        ])
        .alignment(ratatui::layout::Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
                .title(" Date Range ")
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(header, chunks[0]);

        let mut lines = vec![Line::from(Span::styled(
            WEEKDAY_HEADER,
            Style::default().fg(Color::DarkGray),
        ))];
        lines.extend(self.grid_lines(month));

        let grid = Paragraph::new(lines).block(
            Block::default().borders(Borders::LEFT | Borders::RIGHT),
        );
        frame.render_widget(grid, chunks[1]);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" ⏎ ", Style::default().fg(Color::Green)),
            Span::raw("Pick  "),
            Span::styled(" a ", Style::default().fg(Color::Green)),
            Span::raw("Apply  "),
            Span::styled(" r ", Style::default().fg(Color::Yellow)),
            Span::raw("Reset  "),
            Span::styled(" Esc ", Style::default().fg(Color::Yellow)),
            Span::raw("Cancel"),
        ]))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);

        Ok(())
    }
}

impl DateRangeDialog {
    /// Render the month grid as weekly lines of day cells
    fn grid_lines(&self, month: NaiveDate) -> Vec<Line<'static>> {
        let cells = month_grid(month.year(), month.month());
        let mut lines = Vec::new();
        for week in cells.chunks(7) {
            let mut spans = Vec::new();
            for cell in week {
                match cell {
                    // Placeholder: never selectable, never highlighted
                    None => spans.push(Span::raw("    ")),
                    Some(day) => {
                        let mut style = Style::default().fg(Color::White);
                        if self.selection.in_range(*day) {
                            style = Style::default().fg(Color::Black).bg(Color::Cyan);
                        }
                        if self.selection.is_start(*day) || self.selection.is_end(*day) {
                            style = Style::default()
                                .fg(Color::Black)
                                .bg(Color::Green)
                                .add_modifier(Modifier::BOLD);
                        }
                        if *day == self.selection.cursor_day {
                            style = style.add_modifier(Modifier::REVERSED);
                        }
                        spans.push(Span::styled(format!(" {:>2} ", day.day()), style));
                    }
                }
            }
            lines.push(Line::from(spans));
        }
        lines
    }
}
