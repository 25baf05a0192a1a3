//! Dataset loading - JSON array files under the data directory
//!
//! One file per admin screen (users.json, courses.json, ...). A missing
//! file yields an empty dataset so a partially populated directory still
//! opens; malformed JSON is a real error for that file.

use crate::model::record::{display_value, resolve_path, Record};
use crate::model::ui::Tab;
use anyhow::{anyhow, Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Outcome of loading every dataset the tabs reference
pub struct LoadReport {
    pub datasets: HashMap<String, Vec<Record>>,
    /// File stems that were absent on disk
    pub missing: Vec<String>,
}

/// Load all datasets referenced by the admin tabs
pub fn load_datasets(data_dir: &Path) -> Result<LoadReport> {
    let mut datasets = HashMap::new();
    let mut missing = Vec::new();

    for tab in Tab::all() {
        let stem = tab.dataset().to_string();
        if datasets.contains_key(&stem) {
            continue;
        }
        let path = data_dir.join(format!("{}.json", stem));
        if !path.exists() {
            missing.push(stem.clone());
            datasets.insert(stem, Vec::new());
            continue;
        }
        let id_key = crate::model::catalog::spec_for_tab(tab).id_key;
        let records = load_dataset(&path, &id_key)
            .with_context(|| format!("failed to load {}", path.display()))?;
        datasets.insert(stem, records);
    }

    Ok(LoadReport { datasets, missing })
}

/// Parse one dataset file into records
///
/// The file must contain a JSON array of objects; each object's `id_key`
/// field becomes the record id (numbers are stringified).
pub fn load_dataset(path: &Path, id_key: &str) -> Result<Vec<Record>> {
    let contents = fs::read_to_string(path)?;
    let values: Vec<serde_json::Value> = serde_json::from_str(&contents)?;

    let mut records = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        let id = resolve_path(&value, id_key)
            .map(display_value)
            .ok_or_else(|| anyhow!("row {} has no '{}' field", index, id_key))?;
        records.push(Record::new(id, value));
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_dataset_extracts_ids() {
        let dir = std::env::temp_dir().join("campus-tui-test-load");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("users.json");
        fs::write(
            &path,
            r#"[{"id": 1, "name": "Ada"}, {"id": "u-2", "name": "Grace"}]"#,
        )
        .unwrap();

        let records = load_dataset(&path, "id").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "1");
        assert_eq!(records[1].id, "u-2");

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_dataset_rejects_missing_id() {
        let dir = std::env::temp_dir().join("campus-tui-test-noid");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("users.json");
        fs::write(&path, r#"[{"name": "Ada"}]"#).unwrap();

        assert!(load_dataset(&path, "id").is_err());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_datasets_tolerates_missing_files() {
        let dir = std::env::temp_dir().join("campus-tui-test-missing");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("users.json"), r#"[{"id": 1, "name": "Ada"}]"#).unwrap();

        let report = load_datasets(&dir).unwrap();
        assert_eq!(report.datasets.get("users").unwrap().len(), 1);
        assert!(report.missing.contains(&"courses".to_string()));
        assert!(report.datasets.get("courses").unwrap().is_empty());

        fs::remove_dir_all(&dir).ok();
    }
}
