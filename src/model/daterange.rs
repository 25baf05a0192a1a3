//! Date range model - month grid math and the two-click selection rule
//!
//! The picker tracks a pending (start, end) pair plus the displayed month.
//! Selecting a day either extends the pending range or restarts it: once a
//! two-distinct-day range exists, the next selection always restarts.

use chrono::{Datelike, Days, NaiveDate};

/// A committed pair of calendar dates, start <= end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The whole calendar month containing `today`
    pub fn current_month(today: NaiveDate) -> Self {
        let start = today.with_day(1).unwrap_or(today);
        let last = days_in_month(today.year(), today.month());
        let end = NaiveDate::from_ymd_opt(today.year(), today.month(), last).unwrap_or(today);
        Self { start, end }
    }

    /// Inclusive calendar-date containment
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    pub fn label(&self) -> String {
        if self.start == self.end {
            self.start.format("%Y-%m-%d").to_string()
        } else {
            format!(
                "{} → {}",
                self.start.format("%Y-%m-%d"),
                self.end.format("%Y-%m-%d")
            )
        }
    }
}

/// Number of days in a month, via day 0 of the next month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}

/// Flat month grid: leading placeholders, then one cell per day
///
/// Placeholders pad the first week so day 1 lands on its weekday column
/// (0 = Sunday). Placeholder cells are never selectable and never
/// participate in range highlighting.
pub fn month_grid(year: i32, month: u32) -> Vec<Option<NaiveDate>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let leading = first.weekday().num_days_from_sunday() as usize;
    let days = days_in_month(year, month);

    let mut cells: Vec<Option<NaiveDate>> = vec![None; leading];
    for day in 1..=days {
        cells.push(NaiveDate::from_ymd_opt(year, month, day));
    }
    cells
}

/// In-progress range selection plus the displayed month and day cursor
#[derive(Debug, Clone)]
pub struct RangeSelection {
    /// Pending range start; equals `end` for a single-day selection
    pub start: NaiveDate,
    /// Pending range end
    pub end: NaiveDate,
    /// First day of the month currently displayed
    pub cursor_month: NaiveDate,
    /// Day highlighted by the keyboard cursor
    pub cursor_day: NaiveDate,
}

impl RangeSelection {
    pub fn new(range: DateRange) -> Self {
        let cursor_month = range.start.with_day(1).unwrap_or(range.start);
        Self {
            start: range.start,
            end: range.end,
            cursor_month,
            cursor_day: range.start,
        }
    }

    /// Apply the two-click selection rule to day `d`
    ///
    /// Restart (start = end = d) when d precedes the current start or when
    /// a completed two-distinct-day range exists; otherwise extend the end.
    pub fn select(&mut self, d: NaiveDate) {
        if d < self.start || self.start != self.end {
            self.start = d;
            self.end = d;
        } else {
            self.end = d;
        }
    }

    /// The pending range as a committed pair
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start, self.end)
    }

    /// Discard the pending selection in favor of `range`
    pub fn reset_to(&mut self, range: DateRange) {
        *self = RangeSelection::new(range);
    }

    pub fn is_start(&self, day: NaiveDate) -> bool {
        self.start == day
    }

    /// End marker is suppressed for a single-day selection
    pub fn is_end(&self, day: NaiveDate) -> bool {
        self.end == day && self.start != self.end
    }

    pub fn in_range(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Move the keyboard cursor by whole days, following it across months
    pub fn move_cursor(&mut self, days: i64) {
        let moved = if days >= 0 {
            self.cursor_day.checked_add_days(Days::new(days as u64))
        } else {
            self.cursor_day.checked_sub_days(Days::new((-days) as u64))
        };
        if let Some(day) = moved {
            self.cursor_day = day;
            self.cursor_month = day.with_day(1).unwrap_or(day);
        }
    }

    /// Show the previous month, clamping the cursor day into it
    pub fn prev_month(&mut self) {
        self.shift_month(-1);
    }

    /// Show the next month, clamping the cursor day into it
    pub fn next_month(&mut self) {
        self.shift_month(1);
    }

    fn shift_month(&mut self, delta: i32) {
        let total = self.cursor_month.year() * 12 + self.cursor_month.month0() as i32 + delta;
        let year = total.div_euclid(12);
        let month = total.rem_euclid(12) as u32 + 1;
        if let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) {
            self.cursor_month = first;
            let day = self.cursor_day.day().min(days_in_month(year, month));
            if let Some(cursor) = NaiveDate::from_ymd_opt(year, month, day) {
                self.cursor_day = cursor;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2026, 1), 31);
        assert_eq!(days_in_month(2026, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2026, 4), 30);
        assert_eq!(days_in_month(2026, 12), 31);
    }

    #[test]
    fn test_month_grid_leading_placeholders() {
        // June 2026 starts on a Monday -> one leading placeholder
        let grid = month_grid(2026, 6);
        assert_eq!(grid[0], None);
        assert_eq!(grid[1], Some(d(2026, 6, 1)));
        assert_eq!(grid.len(), 1 + 30);

        // February 2026 starts on a Sunday -> no placeholders
        let grid = month_grid(2026, 2);
        assert_eq!(grid[0], Some(d(2026, 2, 1)));
        assert_eq!(grid.len(), 28);
    }

    #[test]
    fn test_two_clicks_extend_into_range() {
        let mut sel = RangeSelection::new(DateRange::current_month(d(2026, 8, 1)));
        sel.select(d(2026, 8, 10));
        assert_eq!((sel.start, sel.end), (d(2026, 8, 10), d(2026, 8, 10)));

        sel.select(d(2026, 8, 15));
        assert_eq!((sel.start, sel.end), (d(2026, 8, 10), d(2026, 8, 15)));
    }

    #[test]
    fn test_third_click_restarts_selection() {
        let mut sel = RangeSelection::new(DateRange::current_month(d(2026, 8, 1)));
        sel.select(d(2026, 8, 10));
        sel.select(d(2026, 8, 15));

        // A completed two-distinct-day range exists: any next click restarts
        sel.select(d(2026, 8, 5));
        assert_eq!((sel.start, sel.end), (d(2026, 8, 5), d(2026, 8, 5)));
    }

    #[test]
    fn test_earlier_click_restarts_single_day_selection() {
        let mut sel = RangeSelection::new(DateRange::current_month(d(2026, 8, 1)));
        sel.select(d(2026, 8, 10));
        sel.select(d(2026, 8, 4));
        assert_eq!((sel.start, sel.end), (d(2026, 8, 4), d(2026, 8, 4)));
    }

    #[test]
    fn test_same_day_click_keeps_single_day_range() {
        let mut sel = RangeSelection::new(DateRange::current_month(d(2026, 8, 1)));
        sel.select(d(2026, 8, 10));
        sel.select(d(2026, 8, 10));
        assert_eq!((sel.start, sel.end), (d(2026, 8, 10), d(2026, 8, 10)));
    }

    #[test]
    fn test_markers_and_highlight() {
        let mut sel = RangeSelection::new(DateRange::current_month(d(2026, 8, 1)));
        sel.select(d(2026, 8, 10));
        sel.select(d(2026, 8, 15));

        assert!(sel.is_start(d(2026, 8, 10)));
        assert!(sel.is_end(d(2026, 8, 15)));
        assert!(sel.in_range(d(2026, 8, 12)));
        assert!(!sel.in_range(d(2026, 8, 16)));
    }

    #[test]
    fn test_single_day_shows_only_start_marker() {
        let mut sel = RangeSelection::new(DateRange::current_month(d(2026, 8, 1)));
        sel.select(d(2026, 8, 10));
        assert!(sel.is_start(d(2026, 8, 10)));
        assert!(!sel.is_end(d(2026, 8, 10)));
    }

    #[test]
    fn test_month_navigation_clamps_cursor() {
        let mut sel = RangeSelection::new(DateRange::new(d(2026, 1, 31), d(2026, 1, 31)));
        sel.next_month();
        assert_eq!(sel.cursor_month, d(2026, 2, 1));
        assert_eq!(sel.cursor_day, d(2026, 2, 28));

        sel.prev_month();
        assert_eq!(sel.cursor_month, d(2026, 1, 1));
    }

    #[test]
    fn test_month_navigation_across_year_boundary() {
        let mut sel = RangeSelection::new(DateRange::new(d(2026, 12, 5), d(2026, 12, 5)));
        sel.next_month();
        assert_eq!(sel.cursor_month, d(2027, 1, 1));
        sel.prev_month();
        sel.prev_month();
        assert_eq!(sel.cursor_month, d(2026, 11, 1));
    }

    #[test]
    fn test_cursor_movement_crosses_month() {
        let mut sel = RangeSelection::new(DateRange::new(d(2026, 8, 30), d(2026, 8, 30)));
        sel.move_cursor(7);
        assert_eq!(sel.cursor_day, d(2026, 9, 6));
        assert_eq!(sel.cursor_month, d(2026, 9, 1));
    }

    #[test]
    fn test_current_month_default_range() {
        let range = DateRange::current_month(d(2026, 2, 14));
        assert_eq!(range.start, d(2026, 2, 1));
        assert_eq!(range.end, d(2026, 2, 28));
        assert!(range.contains(d(2026, 2, 14)));
        assert!(!range.contains(d(2026, 3, 1)));
    }
}
