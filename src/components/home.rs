//! Home component - main console screen
//!
//! Owns tab selection and search mode, and renders everything around the
//! table: tab strip, search input, status line, help bar. The table panel
//! itself is drawn by the active `DataTableComponent`.

use crate::action::Action;
use crate::component::Component;
use crate::model::domain::{DomainState, ReportSummary};
use crate::model::ui::Tab;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Home component for the main console view
pub struct HomeComponent {
    /// Current active tab
    pub active_tab: Tab,
    /// Whether the search input has focus
    pub search_mode: bool,
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeComponent {
    pub fn new() -> Self {
        Self {
            active_tab: Tab::Users,
            search_mode: false,
        }
    }

    /// Switch to the next tab
    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current = self.active_tab.index();
        self.active_tab = tabs[(current + 1) % tabs.len()];
    }

    /// Switch to the previous tab
    pub fn previous_tab(&mut self) {
        let tabs = Tab::all();
        let current = self.active_tab.index();
        self.active_tab = tabs[(current + tabs.len() - 1) % tabs.len()];
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            // Esc discards the term, Enter keeps it
            KeyCode::Esc => Some(Action::ClearSearch),
            KeyCode::Enter => Some(Action::ExitSearchMode),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::SearchInput(c))
            }
            _ => None,
        }
    }
}

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.search_mode {
            return Ok(self.handle_search_key(key));
        }

        let action = match key.code {
            // Navigation
            KeyCode::Tab => Some(Action::NextTab),
            KeyCode::BackTab => Some(Action::PrevTab),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextRow),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevRow),
            KeyCode::Char('g') => Some(Action::FirstRow),
            KeyCode::Char('G') => Some(Action::LastRow),
            KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevPage),
            KeyCode::Char('l') | KeyCode::Right => Some(Action::NextPage),

            // Search
            KeyCode::Char('/') => Some(Action::EnterSearchMode),

            // Sorting: number keys map to column indices
            KeyCode::Char(c @ '1'..='9') => {
                Some(Action::SortColumn(c as usize - '1' as usize))
            }

            // Selection
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::SelectAllPage)
            }
            KeyCode::Char(' ') => Some(Action::ToggleRowSelection),
            KeyCode::Esc => Some(Action::ClearSelection),

            // Records & export
            KeyCode::Enter => Some(Action::OpenDetail),
            KeyCode::Char('x') => Some(Action::Export),
            KeyCode::Char('R') => Some(Action::ReloadData),

            // Report range
            KeyCode::Char('d') => Some(Action::OpenRangePicker),

            // Dialogs
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),

            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Rendering goes through the render_* functions which take context
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Context needed for the status line
pub struct StatusContext<'a> {
    pub domain: &'a DomainState,
    pub error: Option<&'a str>,
    pub status_message: Option<&'a str>,
}

pub fn render_tabs(frame: &mut Frame, area: Rect, home: &HomeComponent) {
    let all_tabs = Tab::all();
    let titles: Vec<&str> = all_tabs.iter().map(|t| t.name()).collect();
    let selected = home.active_tab.index();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::BOTTOM))
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

pub fn render_search_bar(frame: &mut Frame, area: Rect, term: &str) {
    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled("/ ", Style::default().fg(Color::Cyan)),
        Span::styled(term.to_string(), Style::default().fg(Color::White)),
        Span::styled("▏", Style::default().fg(Color::Cyan)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(paragraph, area);
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, home: &HomeComponent, ctx: &StatusContext) {
    let mut spans = vec![Span::styled(
        " campus ",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        format!("{} records", ctx.domain.total_records()),
        Style::default().fg(Color::DarkGray),
    ));

    if home.active_tab == Tab::Report {
        let ReportSummary {
            enrollments,
            revenue,
        } = ctx.domain.report_summary();
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!(" {} ", ctx.domain.report_range.label()),
            Style::default().fg(Color::Black).bg(Color::Magenta),
        ));
        spans.push(Span::styled(
            format!(" {} enrollments · ${:.2} earned", enrollments, revenue),
            Style::default().fg(Color::White),
        ));
    }

    // Errors replace everything else on the line
    if let Some(error) = ctx.error {
        spans.clear();
        spans.push(Span::styled(
            format!(" Error: {} ", error),
            Style::default().fg(Color::Red),
        ));
    }

    if let Some(status) = ctx.status_message {
        spans.push(Span::styled(
            format!(" {} ", status),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub fn render_help_bar(frame: &mut Frame, area: Rect, home: &HomeComponent, selected: usize) {
    let help_spans = if home.search_mode {
        vec![
            Span::styled(" Esc ", Style::default().fg(Color::Yellow)),
            Span::raw("Discard  "),
            Span::styled(" Enter ", Style::default().fg(Color::Green)),
            Span::raw("Keep filter"),
        ]
    } else if selected > 0 {
        vec![
            Span::styled(" Space ", Style::default().fg(Color::Green)),
            Span::raw("Toggle  "),
            Span::styled(" Ctrl-a ", Style::default().fg(Color::Green)),
            Span::raw("Page  "),
            Span::styled(" Esc ", Style::default().fg(Color::Yellow)),
            Span::raw("Clear  "),
            Span::styled(" x ", Style::default().fg(Color::Cyan)),
            Span::raw("Export selected  "),
            Span::styled(
                format!("{} selected", selected),
                Style::default().fg(Color::Cyan),
            ),
        ]
    } else {
        let mut spans = vec![
            Span::styled(" / ", Style::default().fg(Color::Cyan)),
            Span::raw("Search  "),
            Span::styled(" 1-9 ", Style::default().fg(Color::Cyan)),
            Span::raw("Sort  "),
            Span::styled(" ⏎ ", Style::default().fg(Color::Green)),
            Span::raw("Detail  "),
            Span::styled(" x ", Style::default().fg(Color::Cyan)),
            Span::raw("Export  "),
        ];
        if home.active_tab == Tab::Report {
            spans.push(Span::styled(" d ", Style::default().fg(Color::Magenta)));
            spans.push(Span::raw("Date range  "));
        }
        spans.push(Span::styled(" ? ", Style::default().fg(Color::White)));
        spans.push(Span::raw("Help  "));
        spans.push(Span::styled(" q ", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw("Quit"));
        spans
    };

    frame.render_widget(Paragraph::new(Line::from(help_spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_tab_cycling_wraps() {
        let mut home = HomeComponent::new();
        for _ in 0..Tab::all().len() {
            home.next_tab();
        }
        assert_eq!(home.active_tab, Tab::Users);

        home.previous_tab();
        assert_eq!(home.active_tab, Tab::Report);
    }

    #[test]
    fn test_number_keys_map_to_sort_columns() {
        let mut home = HomeComponent::new();
        let action = home.handle_key_event(key(KeyCode::Char('3'))).unwrap();
        assert_eq!(action, Some(Action::SortColumn(2)));
    }

    #[test]
    fn test_search_mode_captures_characters() {
        let mut home = HomeComponent::new();
        home.search_mode = true;
        let action = home.handle_key_event(key(KeyCode::Char('q'))).unwrap();
        assert_eq!(action, Some(Action::SearchInput('q')));

        let action = home.handle_key_event(key(KeyCode::Esc)).unwrap();
        assert_eq!(action, Some(Action::ClearSearch));
    }

    #[test]
    fn test_normal_mode_q_opens_quit_dialog() {
        let mut home = HomeComponent::new();
        let action = home.handle_key_event(key(KeyCode::Char('q'))).unwrap();
        assert_eq!(action, Some(Action::OpenQuitDialog));
    }
}
