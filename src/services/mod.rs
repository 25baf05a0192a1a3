//! Services - dataset loading and export, no UI concerns

pub mod dataset;
pub mod export;

pub use dataset::{load_datasets, LoadReport};
pub use export::{export_csv, export_filename, write_export};
