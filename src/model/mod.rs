//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `DomainState` - platform data (datasets, report range)
//! - table engine - filter/sort/paginate/select over records
//! - date range - month grid math and range selection
//! - `ModalStack` - modal overlay management

pub mod catalog;
pub mod daterange;
pub mod domain;
pub mod modal;
pub mod record;
pub mod table;
pub mod ui;

// Re-export commonly used types
pub use daterange::{DateRange, RangeSelection};
pub use record::Record;
pub use table::{TablePage, TableSpec, TableState};
pub use ui::Tab;
