//! UI state - tab selection for the admin screens

/// Top-level admin screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Users,
    Instructors,
    Courses,
    Enrollments,
    Tickets,
    Report,
}

impl Tab {
    pub fn all() -> Vec<Tab> {
        vec![
            Tab::Users,
            Tab::Instructors,
            Tab::Courses,
            Tab::Enrollments,
            Tab::Tickets,
            Tab::Report,
        ]
    }

    pub fn name(&self) -> &str {
        match self {
            Tab::Users => "Users",
            Tab::Instructors => "Instructors",
            Tab::Courses => "Courses",
            Tab::Enrollments => "Enrollments",
            Tab::Tickets => "Tickets",
            Tab::Report => "Report",
        }
    }

    /// Dataset file stem under the data directory
    ///
    /// The report screen reads the enrollments dataset through a date
    /// filter rather than owning a file of its own.
    pub fn dataset(&self) -> &str {
        match self {
            Tab::Users => "users",
            Tab::Instructors => "instructors",
            Tab::Courses => "courses",
            Tab::Enrollments | Tab::Report => "enrollments",
            Tab::Tickets => "tickets",
        }
    }

    pub fn index(&self) -> usize {
        Tab::all().iter().position(|t| t == self).unwrap_or(0)
    }
}
