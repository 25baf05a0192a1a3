//! Column catalog - the table schema for every admin screen
//!
//! Each screen supplies an ordered list of column descriptors plus the keys
//! the substring search runs over. This is the table's entire schema; the
//! renderer tag replaces the original dashboard's per-column closures.

use crate::model::table::{CellRenderer, TableColumn, TableSpec};
use crate::model::ui::Tab;

/// Build the table spec for one admin screen
pub fn spec_for_tab(tab: Tab) -> TableSpec {
    match tab {
        Tab::Users => TableSpec {
            title: "Users".to_string(),
            id_key: "id".to_string(),
            columns: vec![
                TableColumn::new("name", "Name"),
                TableColumn::new("email", "Email"),
                TableColumn::new("role", "Role").renderer(CellRenderer::Badge),
                TableColumn::new("status", "Status").renderer(CellRenderer::Badge),
                TableColumn::new("joined_at", "Joined").renderer(CellRenderer::Date),
            ],
            search_keys: vec!["name".to_string(), "email".to_string()],
        },
        Tab::Instructors => TableSpec {
            title: "Instructors".to_string(),
            id_key: "id".to_string(),
            columns: vec![
                TableColumn::new("name", "Name"),
                TableColumn::new("email", "Email"),
                TableColumn::new("specialty", "Specialty"),
                TableColumn::new("courses", "Courses").renderer(CellRenderer::Number),
                TableColumn::new("rating", "Rating").renderer(CellRenderer::Number),
            ],
            search_keys: vec![
                "name".to_string(),
                "email".to_string(),
                "specialty".to_string(),
            ],
        },
        Tab::Courses => TableSpec {
            title: "Courses".to_string(),
            id_key: "id".to_string(),
            columns: vec![
                TableColumn::new("title", "Title"),
                TableColumn::new("instructor.name", "Instructor"),
                TableColumn::new("price", "Price").renderer(CellRenderer::Currency),
                TableColumn::new("modules", "Modules").renderer(CellRenderer::Number),
                TableColumn::new("status", "Status").renderer(CellRenderer::Badge),
            ],
            search_keys: vec!["title".to_string(), "instructor.name".to_string()],
        },
        Tab::Enrollments | Tab::Report => TableSpec {
            title: if tab == Tab::Report {
                "Enrollment Report".to_string()
            } else {
                "Enrollments".to_string()
            },
            id_key: "id".to_string(),
            columns: vec![
                TableColumn::new("student.name", "Student"),
                TableColumn::new("student.email", "Email"),
                TableColumn::new("course.title", "Course"),
                TableColumn::new("amount", "Amount").renderer(CellRenderer::Currency),
                TableColumn::new("enrolled_at", "Enrolled").renderer(CellRenderer::Date),
            ],
            search_keys: vec![
                "student.name".to_string(),
                "student.email".to_string(),
                "course.title".to_string(),
            ],
        },
        Tab::Tickets => TableSpec {
            title: "Tickets".to_string(),
            id_key: "id".to_string(),
            columns: vec![
                TableColumn::new("subject", "Subject"),
                TableColumn::new("user.email", "Reporter"),
                TableColumn::new("priority", "Priority").renderer(CellRenderer::Badge),
                TableColumn::new("status", "Status").renderer(CellRenderer::Badge),
                TableColumn::new("opened_at", "Opened").renderer(CellRenderer::Date),
            ],
            search_keys: vec!["subject".to_string(), "user.email".to_string()],
        },
    }
}
