//! Domain state - platform data separate from UI concerns

use crate::model::daterange::DateRange;
use crate::model::record::Record;
use crate::model::ui::Tab;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::path::PathBuf;

/// Domain state containing all loaded platform data
pub struct DomainState {
    /// Datasets keyed by file stem (users, courses, ...)
    pub datasets: HashMap<String, Vec<Record>>,

    /// Committed date range for the report screen
    pub report_range: DateRange,

    /// Directory the datasets were loaded from
    pub data_dir: PathBuf,
}

impl DomainState {
    pub fn new(data_dir: PathBuf, today: NaiveDate) -> Self {
        Self {
            datasets: HashMap::new(),
            report_range: DateRange::current_month(today),
            data_dir,
        }
    }

    /// Records backing a tab, with the report screen's date pre-filter
    ///
    /// The report view shows enrollments whose `enrolled_at` falls inside
    /// the committed range; all other tabs pass their dataset through.
    pub fn records_for(&self, tab: Tab) -> Vec<&Record> {
        let all = self
            .datasets
            .get(tab.dataset())
            .map(|v| v.as_slice())
            .unwrap_or(&[]);

        match tab {
            Tab::Report => all
                .iter()
                .filter(|r| {
                    enrollment_date(r)
                        .map(|d| self.report_range.contains(d))
                        .unwrap_or(false)
                })
                .collect(),
            _ => all.iter().collect(),
        }
    }

    /// Earnings summary over the report screen's visible enrollments
    pub fn report_summary(&self) -> ReportSummary {
        let rows = self.records_for(Tab::Report);
        let revenue = rows
            .iter()
            .filter_map(|r| r.field("amount").and_then(|v| v.as_f64()))
            .sum();
        ReportSummary {
            enrollments: rows.len(),
            revenue,
        }
    }

    /// Total record count across all loaded datasets
    pub fn total_records(&self) -> usize {
        self.datasets.values().map(|v| v.len()).sum()
    }
}

/// Aggregates shown in the report summary line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportSummary {
    pub enrollments: usize,
    pub revenue: f64,
}

/// Parse an enrollment's date field as a calendar date
fn enrollment_date(record: &Record) -> Option<NaiveDate> {
    let raw = record.field("enrolled_at")?.as_str()?.to_string();
    let date_part = raw.split('T').next().unwrap_or(&raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::daterange::DateRange;
    use serde_json::json;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn domain_with_enrollments() -> DomainState {
        let mut domain = DomainState::new(PathBuf::from("data"), d(2026, 8, 15));
        domain.datasets.insert(
            "enrollments".to_string(),
            vec![
                Record::new(
                    "e1",
                    json!({"amount": 50.0, "enrolled_at": "2026-08-03"}),
                ),
                Record::new(
                    "e2",
                    json!({"amount": 75.5, "enrolled_at": "2026-08-20T12:00:00Z"}),
                ),
                Record::new(
                    "e3",
                    json!({"amount": 30.0, "enrolled_at": "2026-07-28"}),
                ),
                Record::new("e4", json!({"amount": 10.0})),
            ],
        );
        domain
    }

    #[test]
    fn test_report_filters_by_committed_range() {
        let domain = domain_with_enrollments();
        let ids: Vec<&str> = domain
            .records_for(Tab::Report)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["e1", "e2"]);
    }

    #[test]
    fn test_enrollments_tab_is_unfiltered() {
        let domain = domain_with_enrollments();
        assert_eq!(domain.records_for(Tab::Enrollments).len(), 4);
    }

    #[test]
    fn test_report_summary_sums_revenue_in_range() {
        let mut domain = domain_with_enrollments();
        let summary = domain.report_summary();
        assert_eq!(summary.enrollments, 2);
        assert!((summary.revenue - 125.5).abs() < f64::EPSILON);

        domain.report_range = DateRange::new(d(2026, 7, 1), d(2026, 7, 31));
        let july = domain.report_summary();
        assert_eq!(july.enrollments, 1);
        assert!((july.revenue - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_dataset_is_empty_not_error() {
        let domain = DomainState::new(PathBuf::from("data"), d(2026, 8, 15));
        assert!(domain.records_for(Tab::Users).is_empty());
        assert_eq!(domain.total_records(), 0);
    }
}
