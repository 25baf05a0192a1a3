//! CSV export - delimited blob from rendered cell values
//!
//! The export uses each column's renderer, not the raw filter/sort value:
//! what the admin sees is what lands in the file. Header fields are plain,
//! every data field is double-quoted.

use crate::model::record::Record;
use crate::model::table::TableColumn;
use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};
use std::fs;
use std::path::{Path, PathBuf};

/// Build the export text: header row first, one row per record
///
/// An empty record set produces an empty string; callers treat that as a
/// no-op rather than writing a header-only file.
pub fn export_csv(records: &[&Record], columns: &[TableColumn]) -> Result<String> {
    if records.is_empty() {
        return Ok(String::new());
    }

    let header = write_row(
        columns.iter().map(|c| c.header.clone()).collect(),
        QuoteStyle::Never,
    )?;

    let mut body = String::new();
    for record in records {
        let fields = columns
            .iter()
            .map(|c| c.renderer.render(record.field(&c.key)))
            .collect();
        body.push_str(&write_row(fields, QuoteStyle::Always)?);
    }

    let mut out = header;
    out.push_str(&body);
    // One line per row, no trailing terminator
    Ok(out.trim_end_matches('\n').to_string())
}

fn write_row(fields: Vec<String>, quote_style: QuoteStyle) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(quote_style)
        .from_writer(Vec::new());
    writer.write_record(&fields)?;
    writer.flush()?;
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow!("csv writer: {}", e))?;
    Ok(String::from_utf8(bytes)?)
}

/// File name pattern: `<title-slug>-<ISO-date>.csv`
pub fn export_filename(title: &str, date: NaiveDate) -> String {
    let slug: String = title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();
    let slug = slug.trim_matches('-').replace("--", "-");
    format!("{}-{}.csv", slug, date.format("%Y-%m-%d"))
}

/// Write the export blob into the export directory
pub fn write_export(
    export_dir: &Path,
    title: &str,
    date: NaiveDate,
    contents: &str,
) -> Result<PathBuf> {
    fs::create_dir_all(export_dir)?;
    let path = export_dir.join(export_filename(title, date));
    fs::write(&path, contents)?;
    Ok(path)
}
