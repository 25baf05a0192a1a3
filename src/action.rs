//! Action enum - All possible application actions
//!
//! Actions are discrete operations the console can perform. Components
//! emit Actions in response to events, and the App processes them to
//! update state.

use chrono::NaiveDate;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to the next tab
    NextTab,
    /// Move to the previous tab
    PrevTab,
    /// Move the row cursor down
    NextRow,
    /// Move the row cursor up
    PrevRow,
    /// Jump to the first row of the page
    FirstRow,
    /// Jump to the last row of the page
    LastRow,
    /// Advance one page
    NextPage,
    /// Go back one page
    PrevPage,

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────
    /// Enter search mode
    EnterSearchMode,
    /// Exit search mode
    ExitSearchMode,
    /// Add a character to the search term
    SearchInput(char),
    /// Remove the last character from the search term
    SearchBackspace,
    /// Clear the search term entirely
    ClearSearch,

    // ─────────────────────────────────────────────────────────────────────────
    // Sorting & Selection
    // ─────────────────────────────────────────────────────────────────────────
    /// Sort by a column index; repeats toggle direction
    SortColumn(usize),
    /// Toggle selection of the cursor row
    ToggleRowSelection,
    /// Toggle selection of a specific visible row (mouse)
    ToggleRowSelectionAt(usize),
    /// Toggle select-all for the current page
    SelectAllPage,
    /// Clear the selection set
    ClearSelection,

    // ─────────────────────────────────────────────────────────────────────────
    // Records & Export
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the detail view for the cursor row
    OpenDetail,
    /// Open the detail view for a specific visible row (mouse)
    OpenDetailAt(usize),
    /// Export the current table to CSV
    Export,
    /// Reload all datasets from disk
    ReloadData,

    // ─────────────────────────────────────────────────────────────────────────
    // Date Range
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the range picker (report screen)
    OpenRangePicker,
    /// Commit the picker's pending range
    ApplyDateRange(NaiveDate, NaiveDate),
    /// Revert the picker's pending selection to the default range
    ResetDateRange,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the quit confirmation dialog
    OpenQuitDialog,
    /// Open the help overlay
    OpenHelp,
    /// Close the current modal
    CloseModal,
    /// Scroll up inside a modal
    ModalUp,
    /// Scroll down inside a modal
    ModalDown,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::NextTab => write!(f, "NextTab"),
            Action::PrevTab => write!(f, "PrevTab"),
            Action::NextRow => write!(f, "NextRow"),
            Action::PrevRow => write!(f, "PrevRow"),
            Action::FirstRow => write!(f, "FirstRow"),
            Action::LastRow => write!(f, "LastRow"),
            Action::NextPage => write!(f, "NextPage"),
            Action::PrevPage => write!(f, "PrevPage"),
            Action::EnterSearchMode => write!(f, "EnterSearchMode"),
            Action::ExitSearchMode => write!(f, "ExitSearchMode"),
            Action::SearchInput(c) => write!(f, "SearchInput('{}')", c),
            Action::SearchBackspace => write!(f, "SearchBackspace"),
            Action::ClearSearch => write!(f, "ClearSearch"),
            Action::SortColumn(i) => write!(f, "SortColumn({})", i),
            Action::ToggleRowSelection => write!(f, "ToggleRowSelection"),
            Action::ToggleRowSelectionAt(i) => write!(f, "ToggleRowSelectionAt({})", i),
            Action::SelectAllPage => write!(f, "SelectAllPage"),
            Action::ClearSelection => write!(f, "ClearSelection"),
            Action::OpenDetail => write!(f, "OpenDetail"),
            Action::OpenDetailAt(i) => write!(f, "OpenDetailAt({})", i),
            Action::Export => write!(f, "Export"),
            Action::ReloadData => write!(f, "ReloadData"),
            Action::OpenRangePicker => write!(f, "OpenRangePicker"),
            Action::ApplyDateRange(start, end) => {
                write!(f, "ApplyDateRange({}, {})", start, end)
            }
            Action::ResetDateRange => write!(f, "ResetDateRange"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ModalUp => write!(f, "ModalUp"),
            Action::ModalDown => write!(f, "ModalDown"),
        }
    }
}
