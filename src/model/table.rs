//! Table engine - filter, sort, paginate and select over record sets
//!
//! The pipeline is a pure function of (records, spec, state) and is re-run
//! on every relevant state change, always in the same order:
//! filter -> sort -> paginate. Datasets are small (admin screens), so no
//! memoization is needed.

use crate::model::record::{display_value, Record};
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::HashSet;

// ─────────────────────────────────────────────────────────────────────────────
// Column configuration
// ─────────────────────────────────────────────────────────────────────────────

/// How a cell value is formatted for display and export
///
/// A tagged renderer instead of arbitrary closures keeps column configs
/// plain data and testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRenderer {
    /// Plain string coercion
    Text,
    /// Numbers rendered as-is, non-numbers coerced
    Number,
    /// Two-decimal amount with a dollar prefix
    Currency,
    /// ISO date or datetime rendered as YYYY-MM-DD
    Date,
    /// Upper-cased status label
    Badge,
}

impl CellRenderer {
    /// Format a resolved cell value; absent values render empty
    pub fn render(&self, value: Option<&serde_json::Value>) -> String {
        let Some(value) = value else {
            return String::new();
        };
        match self {
            CellRenderer::Text | CellRenderer::Number => display_value(value),
            CellRenderer::Currency => match value.as_f64() {
                Some(amount) => format!("${:.2}", amount),
                None => display_value(value),
            },
            CellRenderer::Date => {
                let raw = display_value(value);
                // Accept full datetimes but display the calendar date only
                let date_part = raw.split('T').next().unwrap_or(&raw);
                match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
                    Ok(date) => date.format("%Y-%m-%d").to_string(),
                    Err(_) => raw,
                }
            }
            CellRenderer::Badge => display_value(value).to_uppercase(),
        }
    }
}

/// Configuration for one table column
#[derive(Debug, Clone)]
pub struct TableColumn {
    /// Dot-path into the record (must resolve or the cell renders empty)
    pub key: String,
    /// Header label
    pub header: String,
    /// Whether header clicks / sort keys apply to this column
    pub sortable: bool,
    /// Display formatting for cells and export
    pub renderer: CellRenderer,
}

impl TableColumn {
    pub fn new(key: &str, header: &str) -> Self {
        Self {
            key: key.to_string(),
            header: header.to_string(),
            sortable: true,
            renderer: CellRenderer::Text,
        }
    }

    pub fn renderer(mut self, renderer: CellRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}

/// The full schema of one admin table
#[derive(Debug, Clone)]
pub struct TableSpec {
    /// Title shown in the panel border and used for export file names
    pub title: String,
    /// Field holding the record identifier
    pub id_key: String,
    /// Ordered column descriptors
    pub columns: Vec<TableColumn>,
    /// Dot-paths searched by the substring filter
    pub search_keys: Vec<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Table state
// ─────────────────────────────────────────────────────────────────────────────

/// Sort direction for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

/// Active sort configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    /// Index into the spec's columns
    pub column: usize,
    pub direction: SortDirection,
}

/// Mutable per-table interaction state
///
/// The page and cursor reset to the top whenever the search term or sort
/// configuration changes; selections survive both.
#[derive(Debug, Clone)]
pub struct TableState {
    /// Current page, 1-based
    pub page: usize,
    /// Fixed window size, guarded to at least 1
    pub page_size: usize,
    /// Substring search term (empty matches everything)
    pub search: String,
    /// Active sort, if any
    pub sort: Option<SortSpec>,
    /// Selected record ids, spanning all pages
    pub selected: HashSet<String>,
    /// Highlighted row within the current page
    pub cursor: usize,
}

impl TableState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            search: String::new(),
            sort: None,
            selected: HashSet::new(),
            cursor: 0,
        }
    }

    /// Replace the search term, returning to the first page
    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
        self.page = 1;
        self.cursor = 0;
    }

    pub fn push_search(&mut self, c: char) {
        self.search.push(c);
        self.page = 1;
        self.cursor = 0;
    }

    pub fn pop_search(&mut self) {
        self.search.pop();
        self.page = 1;
        self.cursor = 0;
    }

    /// Sort by a column; repeat presses toggle the direction
    ///
    /// Non-sortable and out-of-range columns are ignored.
    pub fn sort_by(&mut self, column: usize, columns: &[TableColumn]) {
        let sortable = columns.get(column).map(|c| c.sortable).unwrap_or(false);
        if !sortable {
            return;
        }
        self.sort = match self.sort {
            Some(spec) if spec.column == column => Some(SortSpec {
                column,
                direction: spec.direction.toggled(),
            }),
            _ => Some(SortSpec {
                column,
                direction: SortDirection::Asc,
            }),
        };
        self.page = 1;
        self.cursor = 0;
    }

    /// Toggle one record id in the selection set
    pub fn toggle_selected(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    /// Toggle "all of the current page" without touching other pages
    ///
    /// If every given id is already selected, they are all deselected;
    /// otherwise they are all added.
    pub fn toggle_select_all(&mut self, page_ids: &[String]) {
        if page_ids.is_empty() {
            return;
        }
        let all_selected = page_ids.iter().all(|id| self.selected.contains(id));
        if all_selected {
            for id in page_ids {
                self.selected.remove(id);
            }
        } else {
            for id in page_ids {
                self.selected.insert(id.clone());
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Pipeline
// ─────────────────────────────────────────────────────────────────────────────

/// One page of pipeline output
pub struct TablePage<'a> {
    /// Records visible on the clamped current page
    pub rows: Vec<&'a Record>,
    /// Record count after filtering (all pages)
    pub total: usize,
    /// The clamped current page, 1-based
    pub page: usize,
    /// Total pages, at least 1
    pub page_count: usize,
}

impl<'a> TablePage<'a> {
    /// Ids of the records on this page, for select-all
    pub fn row_ids(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.id.clone()).collect()
    }
}

/// Comparable key extracted from a cell for sorting
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Number(f64),
    Text(String),
}

fn sort_key(record: &Record, key: &str) -> Option<SortKey> {
    let value = record.field(key)?;
    match value.as_f64() {
        Some(n) => Some(SortKey::Number(n)),
        None => Some(SortKey::Text(display_value(value).to_lowercase())),
    }
}

fn compare_keys(a: &SortKey, b: &SortKey) -> Ordering {
    match (a, b) {
        (SortKey::Number(x), SortKey::Number(y)) => x.total_cmp(y),
        (SortKey::Text(x), SortKey::Text(y)) => x.cmp(y),
        // Mixed-type columns put numbers before text
        (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
        (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
    }
}

/// Does any configured search key contain the term, case-insensitively?
pub fn matches_search(record: &Record, search_keys: &[String], term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    search_keys.iter().any(|key| {
        record
            .field(key)
            .map(|v| display_value(v).to_lowercase().contains(&needle))
            .unwrap_or(false)
    })
}

/// Run the filter and sort stages, skipping pagination
///
/// The input order is preserved for unsorted tables and for equal sort
/// keys (the sort is stable). Records with an absent sort value always
/// land after records with one, regardless of direction. Export uses this
/// directly since it spans all pages.
pub fn run_filter_sort<'a>(
    records: &[&'a Record],
    spec: &TableSpec,
    state: &TableState,
) -> Vec<&'a Record> {
    // 1. Filter
    let mut filtered: Vec<&Record> = records
        .iter()
        .copied()
        .filter(|r| matches_search(r, &spec.search_keys, &state.search))
        .collect();

    // 2. Sort
    if let Some(sort) = state.sort {
        if let Some(column) = spec.columns.get(sort.column) {
            filtered.sort_by(|a, b| {
                match (sort_key(a, &column.key), sort_key(b, &column.key)) {
                    (None, None) => Ordering::Equal,
                    (None, Some(_)) => Ordering::Greater,
                    (Some(_), None) => Ordering::Less,
                    (Some(ka), Some(kb)) => {
                        let ord = compare_keys(&ka, &kb);
                        match sort.direction {
                            SortDirection::Asc => ord,
                            SortDirection::Desc => ord.reverse(),
                        }
                    }
                }
            });
        }
    }

    filtered
}

/// Run the full filter -> sort -> paginate pipeline
pub fn run_pipeline<'a>(
    records: &[&'a Record],
    spec: &TableSpec,
    state: &TableState,
) -> TablePage<'a> {
    let filtered = run_filter_sort(records, spec, state);

    // 3. Paginate
    let total = filtered.len();
    let page_size = state.page_size.max(1);
    let page_count = total.div_ceil(page_size).max(1);
    let page = state.page.clamp(1, page_count);
    let start = (page - 1) * page_size;
    let rows = filtered
        .into_iter()
        .skip(start)
        .take(page_size)
        .collect();

    TablePage {
        rows,
        total,
        page,
        page_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn spec() -> TableSpec {
        TableSpec {
            title: "People".to_string(),
            id_key: "id".to_string(),
            columns: vec![
                TableColumn::new("name", "Name"),
                TableColumn::new("score", "Score").renderer(CellRenderer::Number),
                TableColumn::new("student.email", "Email"),
            ],
            search_keys: vec!["name".to_string(), "student.email".to_string()],
        }
    }

    fn records() -> Vec<Record> {
        vec![
            Record::new("1", json!({"name": "Carol", "score": 70, "student": {"email": "carol@example.com"}})),
            Record::new("2", json!({"name": "alice", "score": 90, "student": {"email": "alice@example.com"}})),
            Record::new("3", json!({"name": "Bob", "score": 80, "student": {"email": "bob@other.org"}})),
            Record::new("4", json!({"name": "Dave"})),
        ]
    }

    fn refs(records: &[Record]) -> Vec<&Record> {
        records.iter().collect()
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let data = records();
        let page = run_pipeline(&refs(&data), &spec(), &TableState::new(10));
        assert_eq!(page.total, 4);
        assert_eq!(page.page_count, 1);
    }

    #[test]
    fn test_search_nested_email_case_insensitive() {
        let data = records();
        let mut state = TableState::new(10);
        state.set_search("EXAMPLE.COM");
        let page = run_pipeline(&refs(&data), &spec(), &state);
        assert_eq!(page.total, 2);
        assert!(page.rows.iter().all(|r| {
            r.field("student.email")
                .map(|v| v.as_str().unwrap().contains("example.com"))
                .unwrap_or(false)
        }));
    }

    #[test]
    fn test_search_unknown_path_matches_nothing() {
        let data = records();
        let mut spec = spec();
        spec.search_keys = vec!["teacher.email".to_string()];
        let mut state = TableState::new(10);
        state.set_search("example");
        let page = run_pipeline(&refs(&data), &spec, &state);
        assert_eq!(page.total, 0);
        assert_eq!(page.page_count, 1);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let data = records();
        let mut state = TableState::new(10);
        state.set_search("example.com");
        let spec = spec();
        let first = run_pipeline(&refs(&data), &spec, &state);
        let once: Vec<String> = first.rows.iter().map(|r| r.id.clone()).collect();

        let filtered_refs: Vec<&Record> = first.rows.clone();
        let second = run_pipeline(&filtered_refs, &spec, &state);
        let twice: Vec<String> = second.rows.iter().map(|r| r.id.clone()).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_strings_case_insensitive() {
        let data = records();
        let mut state = TableState::new(10);
        state.sort_by(0, &spec().columns);
        let page = run_pipeline(&refs(&data), &spec(), &state);
        let names: Vec<&str> = page
            .rows
            .iter()
            .map(|r| r.field("name").unwrap().as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["alice", "Bob", "Carol", "Dave"]);
    }

    #[test]
    fn test_absent_sort_value_always_last() {
        let data = records();
        let mut state = TableState::new(10);
        // Sort by score: record 4 has none and must land last both ways
        state.sort_by(1, &spec().columns);
        let asc = run_pipeline(&refs(&data), &spec(), &state);
        assert_eq!(asc.rows.last().unwrap().id, "4");

        state.sort_by(1, &spec().columns);
        let desc = run_pipeline(&refs(&data), &spec(), &state);
        assert_eq!(desc.rows.last().unwrap().id, "4");
        assert_eq!(desc.rows[0].id, "2");
    }

    #[test]
    fn test_double_toggle_restores_order() {
        let data = records();
        let mut state = TableState::new(10);
        state.sort_by(1, &spec().columns);
        let first = run_pipeline(&refs(&data), &spec(), &state);
        let order_asc: Vec<String> = first.rows.iter().map(|r| r.id.clone()).collect();

        state.sort_by(1, &spec().columns);
        state.sort_by(1, &spec().columns);
        let third = run_pipeline(&refs(&data), &spec(), &state);
        let order_again: Vec<String> = third.rows.iter().map(|r| r.id.clone()).collect();
        assert_eq!(order_asc, order_again);
    }

    #[test]
    fn test_no_sort_preserves_input_order() {
        let data = records();
        let page = run_pipeline(&refs(&data), &spec(), &TableState::new(10));
        let ids: Vec<&str> = page.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_pagination_partitions_filtered_set() {
        let data = records();
        let mut state = TableState::new(3);
        let spec = spec();
        let mut seen = Vec::new();
        let mut page_no = 1;
        loop {
            state.page = page_no;
            let page = run_pipeline(&refs(&data), &spec, &state);
            for row in &page.rows {
                assert!(!seen.contains(&row.id), "record on two pages");
                seen.push(row.id.clone());
            }
            if page_no >= page.page_count {
                break;
            }
            page_no += 1;
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_page_clamped_into_range() {
        let data = records();
        let mut state = TableState::new(3);
        state.page = 99;
        let page = run_pipeline(&refs(&data), &spec(), &state);
        assert_eq!(page.page, 2);
        assert_eq!(page.rows.len(), 1);

        // Empty data clamps to page 1 of 1
        state.set_search("no such person");
        state.page = 7;
        let empty = run_pipeline(&refs(&data), &spec(), &state);
        assert_eq!(empty.page, 1);
        assert_eq!(empty.page_count, 1);
        assert!(empty.rows.is_empty());
    }

    #[test]
    fn test_page_size_guarded_to_minimum_one() {
        let state = TableState::new(0);
        assert_eq!(state.page_size, 1);
    }

    #[test]
    fn test_search_change_resets_page() {
        let mut state = TableState::new(2);
        state.page = 3;
        state.push_search('a');
        assert_eq!(state.page, 1);
        state.page = 2;
        state.pop_search();
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_sort_change_resets_page() {
        let mut state = TableState::new(2);
        state.page = 3;
        state.sort_by(0, &spec().columns);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_sort_ignores_unsortable_column() {
        let columns = vec![TableColumn::new("name", "Name").not_sortable()];
        let mut state = TableState::new(10);
        state.sort_by(0, &columns);
        assert!(state.sort.is_none());
    }

    #[test]
    fn test_select_all_is_per_page() {
        let mut state = TableState::new(3);
        let page_one = vec!["1".to_string(), "2".to_string(), "3".to_string()];
        let page_two = vec!["4".to_string(), "5".to_string(), "6".to_string()];

        state.toggle_select_all(&page_one);
        assert_eq!(state.selected.len(), 3);

        // Selecting another page accumulates without dropping the first
        state.toggle_select_all(&page_two);
        assert_eq!(state.selected.len(), 6);

        // Toggling page one again removes only page one's ids
        state.toggle_select_all(&page_one);
        assert_eq!(state.selected.len(), 3);
        assert!(state.selected.contains("4"));
        assert!(!state.selected.contains("1"));
    }

    #[test]
    fn test_toggle_single_selection() {
        let mut state = TableState::new(10);
        state.toggle_selected("7");
        assert!(state.selected.contains("7"));
        state.toggle_selected("7");
        assert!(!state.selected.contains("7"));
    }

    #[test]
    fn test_renderer_currency_and_badge() {
        assert_eq!(
            CellRenderer::Currency.render(Some(&json!(49.9))),
            "$49.90"
        );
        assert_eq!(CellRenderer::Badge.render(Some(&json!("open"))), "OPEN");
        assert_eq!(CellRenderer::Text.render(None), "");
    }

    #[test]
    fn test_renderer_date_trims_datetime() {
        assert_eq!(
            CellRenderer::Date.render(Some(&json!("2026-02-14T09:30:00Z"))),
            "2026-02-14"
        );
        assert_eq!(
            CellRenderer::Date.render(Some(&json!("2026-02-14"))),
            "2026-02-14"
        );
    }
}
