//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering
//! logic. Components communicate through Actions rather than direct state
//! mutation.

pub mod data_table;
pub mod date_range_dialog;
pub mod detail;
pub mod help_dialog;
pub mod home;
pub mod layout;
pub mod quit_dialog;

pub use data_table::{DataTableComponent, TableHit};
pub use date_range_dialog::DateRangeDialog;
pub use detail::RecordDetailDialog;
pub use help_dialog::HelpDialog;
pub use home::{
    render_help_bar, render_search_bar, render_status_bar, render_tabs, HomeComponent,
    StatusContext,
};
pub use layout::{calculate_main_layout, centered_popup};
pub use quit_dialog::QuitDialog;
