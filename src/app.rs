//! Root application component
//!
//! The App struct implements the Component trait, acting as the root
//! component that delegates event handling and rendering to child
//! components. App coordinates between components; the table engine and
//! date range logic live in the model layer.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_main_layout, render_help_bar, render_search_bar, render_status_bar, render_tabs,
    DataTableComponent, DateRangeDialog, HelpDialog, HomeComponent, QuitDialog,
    RecordDetailDialog, StatusContext, TableHit,
};
use crate::config::Config;
use crate::model::catalog::spec_for_tab;
use crate::model::daterange::DateRange;
use crate::model::domain::DomainState;
use crate::model::modal::{Modal, ModalStack};
use crate::model::table::{run_filter_sort, run_pipeline};
use crate::model::ui::Tab;
use crate::services;
use anyhow::Result;
use chrono::Local;
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{layout::Rect, Frame};
use std::path::PathBuf;

/// Owned snapshot of the current page, safe to hold while mutating state
struct PageSnapshot {
    len: usize,
    page_count: usize,
    ids: Vec<String>,
}

/// Main application state - coordinates between components
pub struct App {
    /// Main screen: tabs + search mode
    pub home: HomeComponent,

    /// One table component per tab, preserving state across switches
    pub tables: Vec<DataTableComponent>,

    /// Date range picker for the report screen
    pub range_dialog: DateRangeDialog,

    /// Record detail overlay
    pub detail_dialog: RecordDetailDialog,

    /// Help overlay
    pub help_dialog: HelpDialog,

    /// Quit confirmation
    pub quit_dialog: QuitDialog,

    /// Domain state (datasets, report range)
    pub domain: DomainState,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Loaded configuration
    pub config: Config,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display
    pub error: Option<String>,

    /// Status message to display
    pub status_message: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> App {
        let config = Config::load().unwrap_or_default();
        let today = Local::now().date_naive();
        let domain = DomainState::new(PathBuf::from(&config.data_dir), today);
        let tables = Tab::all()
            .iter()
            .map(|_| DataTableComponent::new(config.page_size))
            .collect();
        let range_dialog = DateRangeDialog::new(DateRange::current_month(today));

        App {
            home: HomeComponent::new(),
            tables,
            range_dialog,
            detail_dialog: RecordDetailDialog::new(),
            help_dialog: HelpDialog::new(),
            quit_dialog: QuitDialog::new(),
            domain,
            modals: ModalStack::new(),
            config,
            should_quit: false,
            error: None,
            status_message: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Data access
    // ─────────────────────────────────────────────────────────────────────────

    fn active_tab(&self) -> Tab {
        self.home.active_tab
    }

    fn active_table(&mut self) -> &mut DataTableComponent {
        let index = self.home.active_tab.index();
        &mut self.tables[index]
    }

    /// Owned view of the current page: length, page count, row ids
    fn page_snapshot(&self) -> PageSnapshot {
        let tab = self.active_tab();
        let spec = spec_for_tab(tab);
        let records = self.domain.records_for(tab);
        let state = &self.tables[tab.index()].state;
        let page = run_pipeline(&records, &spec, state);
        PageSnapshot {
            len: page.rows.len(),
            page_count: page.page_count,
            ids: page.row_ids(),
        }
    }

    fn reload_datasets(&mut self) {
        match services::load_datasets(&self.domain.data_dir) {
            Ok(report) => {
                self.domain.datasets = report.datasets;
                self.error = None;
                let mut message = format!(
                    "Loaded {} records from {}",
                    self.domain.total_records(),
                    self.domain.data_dir.display()
                );
                if !report.missing.is_empty() {
                    message.push_str(&format!(" (missing: {})", report.missing.join(", ")));
                }
                self.status_message = Some(message);
            }
            Err(e) => {
                self.error = Some(format!("{:#}", e));
            }
        }
    }

    fn export_current_table(&mut self) {
        let tab = self.active_tab();
        let spec = spec_for_tab(tab);
        let records = self.domain.records_for(tab);
        let state = &self.tables[tab.index()].state;

        let mut rows = run_filter_sort(&records, &spec, state);
        // A live selection narrows the export to the selected records
        if !state.selected.is_empty() {
            rows.retain(|r| state.selected.contains(&r.id));
        }

        if rows.is_empty() {
            self.status_message = Some("Nothing to export".to_string());
            return;
        }

        let today = Local::now().date_naive();
        let outcome = services::export_csv(&rows, &spec.columns).and_then(|text| {
            services::write_export(
                PathBuf::from(&self.config.export_dir).as_path(),
                &spec.title,
                today,
                &text,
            )
        });
        match outcome {
            Ok(path) => {
                self.status_message =
                    Some(format!("Exported {} rows to {}", rows.len(), path.display()));
            }
            Err(e) => self.error = Some(format!("export failed: {:#}", e)),
        }
    }

    fn open_detail(&mut self, index: usize) {
        let tab = self.active_tab();
        let spec = spec_for_tab(tab);
        let records = self.domain.records_for(tab);
        let page = run_pipeline(&records, &spec, &self.tables[tab.index()].state);

        if let Some(record) = page.rows.get(index) {
            self.detail_dialog.set_record(&spec.title, record);
            self.modals.push(Modal::RecordDetail);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        // First run: persist the defaults so they are discoverable
        if Config::load().is_none() {
            let _ = self.config.save();
        }
        self.reload_datasets();
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Ctrl+C always quits, regardless of focus
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        match self.modals.top() {
            Some(Modal::QuitConfirm) => self.quit_dialog.handle_key_event(key),
            Some(Modal::Help) => self.help_dialog.handle_key_event(key),
            Some(Modal::RecordDetail) => self.detail_dialog.handle_key_event(key),
            Some(Modal::RangePicker) => self.range_dialog.handle_key_event(key),
            None => self.home.handle_key_event(key),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        // Modals stay keyboard-driven; the main table takes clicks
        if !self.modals.is_empty() {
            return Ok(None);
        }

        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let table = &self.tables[self.active_tab().index()];
                match table.hit(mouse.column, mouse.row) {
                    // Header click sorts; marker click toggles selection;
                    // a row body click activates the record
                    Some(TableHit::Header(col)) => Some(Action::SortColumn(col)),
                    Some(TableHit::Marker(row)) => Some(Action::ToggleRowSelectionAt(row)),
                    Some(TableHit::Row(row)) => Some(Action::OpenDetailAt(row)),
                    None => None,
                }
            }
            MouseEventKind::ScrollDown => Some(Action::NextRow),
            MouseEventKind::ScrollUp => Some(Action::PrevRow),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        // Any real action clears the previous status line
        if !matches!(action, Action::Tick | Action::Resize(_, _)) {
            self.status_message = None;
        }

        match action {
            Action::Tick | Action::Resize(_, _) => {}
            Action::ForceQuit => self.should_quit = true,

            // Navigation
            Action::NextTab => self.home.next_tab(),
            Action::PrevTab => self.home.previous_tab(),
            Action::NextRow => {
                let snap = self.page_snapshot();
                self.active_table().next_row(snap.len);
            }
            Action::PrevRow => self.active_table().prev_row(),
            Action::FirstRow => self.active_table().first_row(),
            Action::LastRow => {
                let snap = self.page_snapshot();
                self.active_table().last_row(snap.len);
            }
            Action::NextPage => {
                let snap = self.page_snapshot();
                self.active_table().next_page(snap.page_count);
            }
            Action::PrevPage => self.active_table().prev_page(),

            // Search
            Action::EnterSearchMode => self.home.search_mode = true,
            Action::ExitSearchMode => self.home.search_mode = false,
            Action::SearchInput(c) => self.active_table().state.push_search(c),
            Action::SearchBackspace => self.active_table().state.pop_search(),
            Action::ClearSearch => {
                self.active_table().state.set_search("");
                self.home.search_mode = false;
            }

            // Sorting & selection
            Action::SortColumn(column) => {
                let columns = spec_for_tab(self.active_tab()).columns;
                self.active_table().state.sort_by(column, &columns);
            }
            Action::ToggleRowSelection => {
                let snap = self.page_snapshot();
                let cursor = self.active_table().state.cursor;
                if let Some(id) = snap.ids.get(cursor) {
                    let id = id.clone();
                    self.active_table().state.toggle_selected(&id);
                }
            }
            Action::ToggleRowSelectionAt(index) => {
                let snap = self.page_snapshot();
                if let Some(id) = snap.ids.get(index) {
                    let id = id.clone();
                    let table = self.active_table();
                    table.state.cursor = index;
                    table.state.toggle_selected(&id);
                }
            }
            Action::SelectAllPage => {
                let snap = self.page_snapshot();
                self.active_table().state.toggle_select_all(&snap.ids);
            }
            Action::ClearSelection => self.active_table().state.clear_selection(),

            // Records & export
            Action::OpenDetail => {
                let cursor = self.tables[self.active_tab().index()].state.cursor;
                self.open_detail(cursor);
            }
            Action::OpenDetailAt(index) => {
                self.active_table().state.cursor = index;
                self.open_detail(index);
            }
            Action::Export => self.export_current_table(),
            Action::ReloadData => self.reload_datasets(),

            // Date range
            Action::OpenRangePicker => {
                if self.active_tab() == Tab::Report {
                    self.range_dialog.open(self.domain.report_range);
                    self.modals.push(Modal::RangePicker);
                } else {
                    self.status_message =
                        Some("Date range applies to the Report screen".to_string());
                }
            }
            Action::ApplyDateRange(start, end) => {
                self.domain.report_range = DateRange::new(start, end);
                self.modals.pop();
                self.status_message = Some(format!(
                    "Report range set to {}",
                    self.domain.report_range.label()
                ));
            }
            Action::ResetDateRange => {
                self.range_dialog.reset();
                self.status_message = Some("Selection reset to default range".to_string());
            }

            // Modals
            Action::OpenQuitDialog => self.modals.push(Modal::QuitConfirm),
            Action::OpenHelp => self.modals.push(Modal::Help),
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ModalUp | Action::ModalDown => {}
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_main_layout(area, self.home.search_mode);

        render_tabs(frame, layout.tabs, &self.home);

        let tab = self.active_tab();
        let spec = spec_for_tab(tab);

        if let Some(search_area) = layout.search {
            let term = self.tables[tab.index()].state.search.clone();
            render_search_bar(frame, search_area, &term);
        }

        {
            let records = self.domain.records_for(tab);
            let table = &mut self.tables[tab.index()];
            let page = run_pipeline(&records, &spec, &table.state);
            table.draw(frame, layout.table, &spec, &page);
        }

        let ctx = StatusContext {
            domain: &self.domain,
            error: self.error.as_deref(),
            status_message: self.status_message.as_deref(),
        };
        render_status_bar(frame, layout.status, &self.home, &ctx);

        let selected = self.tables[tab.index()].state.selected.len();
        render_help_bar(frame, layout.help, &self.home, selected);

        // Top modal draws over the main screen
        match self.modals.top() {
            Some(Modal::QuitConfirm) => self.quit_dialog.draw(frame, area)?,
            Some(Modal::Help) => self.help_dialog.draw(frame, area)?,
            Some(Modal::RecordDetail) => self.detail_dialog.draw(frame, area)?,
            Some(Modal::RangePicker) => self.range_dialog.draw(frame, area)?,
            None => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::Record;
    use chrono::NaiveDate;
    use serde_json::json;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn app_with_users(count: usize) -> App {
        let mut app = App::new();
        let users: Vec<Record> = (0..count)
            .map(|i| {
                Record::new(
                    format!("u-{}", i),
                    json!({"id": format!("u-{}", i), "name": format!("User {}", i),
                           "email": format!("user{}@example.com", i)}),
                )
            })
            .collect();
        app.domain.datasets.insert("users".to_string(), users);
        app
    }

    #[test]
    fn test_select_all_accumulates_across_pages() {
        let mut app = app_with_users(7);
        app.tables[0].state.page_size = 5;

        app.update(Action::SelectAllPage).unwrap();
        assert_eq!(app.tables[0].state.selected.len(), 5);

        app.update(Action::NextPage).unwrap();
        app.update(Action::SelectAllPage).unwrap();
        assert_eq!(app.tables[0].state.selected.len(), 7);

        // Toggling the second page off keeps the first page's ids
        app.update(Action::SelectAllPage).unwrap();
        assert_eq!(app.tables[0].state.selected.len(), 5);
    }

    #[test]
    fn test_search_resets_page() {
        let mut app = app_with_users(12);
        app.tables[0].state.page_size = 5;
        app.update(Action::NextPage).unwrap();
        assert_eq!(app.tables[0].state.page, 2);

        app.update(Action::EnterSearchMode).unwrap();
        app.update(Action::SearchInput('1')).unwrap();
        assert_eq!(app.tables[0].state.page, 1);
    }

    #[test]
    fn test_apply_date_range_commits_and_closes() {
        let mut app = App::new();
        app.home.active_tab = Tab::Report;
        app.update(Action::OpenRangePicker).unwrap();
        assert!(!app.modals.is_empty());

        app.update(Action::ApplyDateRange(d(2026, 3, 2), d(2026, 3, 9)))
            .unwrap();
        assert!(app.modals.is_empty());
        assert_eq!(app.domain.report_range.start, d(2026, 3, 2));
        assert_eq!(app.domain.report_range.end, d(2026, 3, 9));
    }

    #[test]
    fn test_range_picker_only_on_report_tab() {
        let mut app = App::new();
        app.update(Action::OpenRangePicker).unwrap();
        assert!(app.modals.is_empty());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_close_modal_pops_stack() {
        let mut app = App::new();
        app.update(Action::OpenHelp).unwrap();
        assert!(!app.modals.is_empty());
        app.update(Action::CloseModal).unwrap();
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_quit_flow() {
        let mut app = App::new();
        app.update(Action::OpenQuitDialog).unwrap();
        assert!(!app.should_quit);
        app.update(Action::ForceQuit).unwrap();
        assert!(app.should_quit);
    }
}
