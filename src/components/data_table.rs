//! Data table component - renders one admin table page with controls
//!
//! Owns the table interaction state and the geometry captured at draw time
//! so mouse clicks can be resolved to header cells, selection markers, or
//! rows. Row activation opens the record detail; a click on the selection
//! marker toggles selection instead, so the two controls never fire
//! together.

use crate::model::table::{TablePage, TableSpec, TableState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Widest a column may render; long values are truncated with an ellipsis
const MAX_COL_WIDTH: usize = 26;
/// Width of the selection marker gutter
const MARKER_WIDTH: u16 = 2;

/// What a mouse click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableHit {
    /// A header cell (column index) - sort control
    Header(usize),
    /// A row's selection marker (visible row index)
    Marker(usize),
    /// A row body (visible row index) - activation
    Row(usize),
}

/// Table component for one admin screen
pub struct DataTableComponent {
    /// Interaction state: page, search, sort, selection, cursor
    pub state: TableState,

    // Geometry captured during draw, used for mouse hit-testing
    header_row: u16,
    first_data_row: u16,
    visible_rows: usize,
    col_spans: Vec<(u16, u16)>,
}

impl DataTableComponent {
    pub fn new(page_size: usize) -> Self {
        Self {
            state: TableState::new(page_size),
            header_row: 0,
            first_data_row: 0,
            visible_rows: 0,
            col_spans: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Cursor & paging
    // ─────────────────────────────────────────────────────────────────────────

    pub fn next_row(&mut self, page_len: usize) {
        if page_len > 0 && self.state.cursor + 1 < page_len {
            self.state.cursor += 1;
        }
    }

    pub fn prev_row(&mut self) {
        self.state.cursor = self.state.cursor.saturating_sub(1);
    }

    pub fn first_row(&mut self) {
        self.state.cursor = 0;
    }

    pub fn last_row(&mut self, page_len: usize) {
        self.state.cursor = page_len.saturating_sub(1);
    }

    pub fn next_page(&mut self, page_count: usize) {
        if self.state.page < page_count {
            self.state.page += 1;
            self.state.cursor = 0;
        }
    }

    pub fn prev_page(&mut self) {
        if self.state.page > 1 {
            self.state.page -= 1;
            self.state.cursor = 0;
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mouse hit-testing
    // ─────────────────────────────────────────────────────────────────────────

    /// Resolve a click position against the last drawn geometry
    pub fn hit(&self, column: u16, row: u16) -> Option<TableHit> {
        if row == self.header_row {
            for (i, (start, end)) in self.col_spans.iter().enumerate() {
                if column >= *start && column < *end {
                    return Some(TableHit::Header(i));
                }
            }
            return None;
        }

        if row >= self.first_data_row && row < self.first_data_row + self.visible_rows as u16 {
            let index = (row - self.first_data_row) as usize;
            let marker_start = self.col_spans.first().map(|(s, _)| *s).unwrap_or(0);
            if column < marker_start && column + MARKER_WIDTH >= marker_start {
                return Some(TableHit::Marker(index));
            }
            return Some(TableHit::Row(index));
        }

        None
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────

    /// Draw the table for the given pipeline output
    pub fn draw(&mut self, frame: &mut Frame, area: Rect, spec: &TableSpec, page: &TablePage) {
        let mut title = format!(" {} ({}) ", spec.title, page.total);
        if !self.state.selected.is_empty() {
            title = format!(
                " {} ({}) [{}✓] ",
                spec.title,
                page.total,
                self.state.selected.len()
            );
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if page.total == 0 {
            self.visible_rows = 0;
            self.col_spans.clear();
            let message = if self.state.search.is_empty() {
                "No data found".to_string()
            } else {
                format!("No results for '{}'", self.state.search)
            };
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(message, Style::default().fg(Color::Yellow))),
            ])
            .alignment(ratatui::layout::Alignment::Center);
            frame.render_widget(empty, inner);
            return;
        }

        let widths = self.column_widths(spec, page);
        self.capture_geometry(inner, &widths, page.rows.len());

        let mut lines = Vec::new();
        lines.push(self.header_line(spec, &widths));
        lines.push(separator_line(&widths));
        for (i, record) in page.rows.iter().enumerate() {
            let selected = self.state.selected.contains(&record.id);
            let is_cursor = i == self.state.cursor;
            let marker = if selected { "● " } else { "  " };
            let marker_style = if selected {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            let cell_style = if is_cursor {
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else if selected {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };

            let mut spans = vec![Span::styled(marker, marker_style)];
            for (col, width) in spec.columns.iter().zip(&widths) {
                let rendered = col.renderer.render(record.field(&col.key));
                spans.push(Span::styled(pad_cell(&rendered, *width), cell_style));
                spans.push(Span::raw(" │ "));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(
                "Page {}/{} · {} rows · {} selected",
                page.page,
                page.page_count,
                page.total,
                self.state.selected.len()
            ),
            Style::default().fg(Color::Yellow),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn header_line(&self, spec: &TableSpec, widths: &[usize]) -> Line<'static> {
        let mut spans = vec![Span::raw(" ".repeat(MARKER_WIDTH as usize))];
        for (i, (col, width)) in spec.columns.iter().zip(widths).enumerate() {
            let mut label = col.header.clone();
            if let Some(sort) = self.state.sort {
                if sort.column == i {
                    label = format!("{} {}", label, sort.direction.indicator());
                }
            }
            spans.push(Span::styled(
                pad_cell(&label, *width),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" │ "));
        }
        Line::from(spans)
    }

    /// Column widths from header and visible cell content, capped
    fn column_widths(&self, spec: &TableSpec, page: &TablePage) -> Vec<usize> {
        let mut widths: Vec<usize> = spec
            .columns
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let mut w = c.header.width();
                if self.state.sort.map(|s| s.column == i).unwrap_or(false) {
                    w += 2; // room for the sort indicator
                }
                w
            })
            .collect();
        for record in &page.rows {
            for (i, col) in spec.columns.iter().enumerate() {
                let rendered = col.renderer.render(record.field(&col.key));
                widths[i] = widths[i].max(rendered.width());
            }
        }
        for width in &mut widths {
            *width = (*width).min(MAX_COL_WIDTH);
        }
        widths
    }

    fn capture_geometry(&mut self, inner: Rect, widths: &[usize], rows: usize) {
        self.header_row = inner.y;
        self.first_data_row = inner.y + 2;
        self.visible_rows = rows;
        self.col_spans.clear();
        let mut x = inner.x + MARKER_WIDTH;
        for width in widths {
            let end = x + *width as u16 + 3; // cell + " │ "
            self.col_spans.push((x, end));
            x = end;
        }
    }
}

/// Pad or truncate a cell to the column width
fn pad_cell(text: &str, width: usize) -> String {
    if text.width() > width {
        let mut out = String::new();
        let mut used = 0;
        for c in text.chars() {
            let cw = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
            if used + cw > width.saturating_sub(1) {
                break;
            }
            out.push(c);
            used += cw;
        }
        out.push('…');
        format!("{:w$}", out, w = width)
    } else {
        format!("{:w$}", text, w = width)
    }
}

fn separator_line(widths: &[usize]) -> Line<'static> {
    let mut sep = " ".repeat(MARKER_WIDTH as usize);
    sep.push_str(
        &widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─"),
    );
    Line::from(Span::styled(sep, Style::default().fg(Color::DarkGray)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_stays_within_page() {
        let mut table = DataTableComponent::new(5);
        table.next_row(3);
        table.next_row(3);
        table.next_row(3);
        assert_eq!(table.state.cursor, 2);
        table.prev_row();
        table.prev_row();
        table.prev_row();
        assert_eq!(table.state.cursor, 0);
    }

    #[test]
    fn test_paging_bounds() {
        let mut table = DataTableComponent::new(5);
        table.next_page(3);
        table.next_page(3);
        table.next_page(3);
        assert_eq!(table.state.page, 3);
        table.prev_page();
        table.prev_page();
        table.prev_page();
        assert_eq!(table.state.page, 1);
    }

    #[test]
    fn test_page_change_resets_cursor() {
        let mut table = DataTableComponent::new(5);
        table.next_row(5);
        table.next_page(2);
        assert_eq!(table.state.cursor, 0);
    }

    #[test]
    fn test_hit_resolves_header_marker_and_row() {
        let mut table = DataTableComponent::new(5);
        let inner = Rect::new(1, 1, 60, 20);
        table.capture_geometry(inner, &[10, 6], 3);

        // Header row, first column
        assert_eq!(table.hit(4, 1), Some(TableHit::Header(0)));
        // Header row, second column starts after 10 + 3
        assert_eq!(table.hit(17, 1), Some(TableHit::Header(1)));
        // Marker gutter on the second data row
        assert_eq!(table.hit(1, 4), Some(TableHit::Marker(1)));
        // Row body on the first data row
        assert_eq!(table.hit(10, 3), Some(TableHit::Row(0)));
        // Below the data rows
        assert_eq!(table.hit(10, 9), None);
    }

    #[test]
    fn test_pad_cell_truncates_with_ellipsis() {
        let padded = pad_cell("abcdefghij", 5);
        assert_eq!(padded.chars().count(), 5);
        assert!(padded.ends_with('…'));
        assert_eq!(pad_cell("ab", 4), "ab  ");
    }
}
