//! Registry configuration
//!
//! By default the registry is built from the tables compiled into the crate.
//! A `Config` can point at replacement JSON files for the prefecture table,
//! the zip table, or both:
//!
//! - `mapping_data`: `[{"code": 1, "name": "北海道", "name_e": "Hokkaido",
//!   "name_h": "ほっかいどう", "name_k": "ホッカイドウ"}, ...]`, each entry
//!   optionally carrying `"zips": [{"start": 10000, "end": 70895}]`
//! - `zip_mapping_data`: `{"1": [[10000, 70895], [400000, 996509]], ...}`
//!
//! When a zip table is given it replaces every record's zips, including zips
//! listed inline in `mapping_data`.

use std::collections::BTreeMap;
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::RegistryError;
use crate::prefecture::Prefecture;
use crate::query::Scalar;
use crate::reference::prefectures::PREFECTURE_DATA;
use crate::reference::zips::get_zips_for_code;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Replacement prefecture table (JSON array)
    pub mapping_data: Option<PathBuf>,
    /// Replacement zip table (JSON object keyed by code)
    pub zip_mapping_data: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct MappingEntry {
    code: u8,
    name: String,
    name_e: String,
    name_h: String,
    name_k: String,
    #[serde(default)]
    zips: Option<Vec<RangeInclusive<u32>>>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mapping_data(mut self, path: impl Into<PathBuf>) -> Self {
        self.mapping_data = Some(path.into());
        self
    }

    pub fn with_zip_mapping_data(mut self, path: impl Into<PathBuf>) -> Self {
        self.zip_mapping_data = Some(path.into());
        self
    }

    /// True when nothing overrides the built-in tables
    pub fn is_embedded(&self) -> bool {
        self.mapping_data.is_none() && self.zip_mapping_data.is_none()
    }

    /// Produce the unvalidated record list this configuration describes
    pub fn load_records(&self) -> Result<Vec<Prefecture>, RegistryError> {
        let entries = match &self.mapping_data {
            Some(path) => {
                let entries: Vec<MappingEntry> = read_json(path)?;
                log::info!("Loaded {} prefectures from {}", entries.len(), path.display());
                entries
            }
            None => PREFECTURE_DATA
                .iter()
                .map(|e| MappingEntry {
                    code: e.code,
                    name: e.name.to_string(),
                    name_e: e.name_e.to_string(),
                    name_h: e.name_h.to_string(),
                    name_k: e.name_k.to_string(),
                    zips: None,
                })
                .collect(),
        };

        let mut zip_table = match &self.zip_mapping_data {
            Some(path) => Some(load_zip_table(path, &entries)?),
            None => None,
        };

        let records = entries
            .into_iter()
            .map(|entry| {
                let zips = match zip_table.as_mut() {
                    Some(table) => table.remove(&entry.code).unwrap_or_default(),
                    None => entry.zips.unwrap_or_else(|| get_zips_for_code(entry.code)),
                };
                Prefecture::build(entry.code, entry.name, entry.name_e, entry.name_h, entry.name_k, zips)
            })
            .collect();

        Ok(records)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, RegistryError> {
    let content = fs::read_to_string(path).map_err(|source| RegistryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| RegistryError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn load_zip_table(
    path: &Path,
    entries: &[MappingEntry],
) -> Result<BTreeMap<u8, Vec<RangeInclusive<u32>>>, RegistryError> {
    let raw: BTreeMap<String, Vec<(u32, u32)>> = read_json(path)?;
    log::info!("Loaded zip ranges for {} prefectures from {}", raw.len(), path.display());

    let mut table = BTreeMap::new();
    for (key, ranges) in raw {
        let code = Scalar::Text(key.clone())
            .to_code()
            .filter(|code| entries.iter().any(|e| e.code == *code))
            .ok_or(RegistryError::UnknownZipCode(key))?;
        table.insert(code, ranges.into_iter().map(|(start, end)| start..=end).collect());
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_is_embedded() {
        let config = Config::new();
        assert!(config.is_embedded());

        let records = config.load_records().unwrap();
        assert_eq!(records.len(), 47);
        assert_eq!(records[0].zips(), &[10000..=70895, 400000..=996509]);
    }

    #[test]
    fn test_config_deserializes() {
        let config: Config = serde_json::from_str(r#"{"zip_mapping_data": "zips.json"}"#).unwrap();
        assert_eq!(config, Config::new().with_zip_mapping_data("zips.json"));
        assert!(!config.is_embedded());
    }

    #[test]
    fn test_mapping_data_with_inline_zips() {
        let file = write_temp(
            r#"[
                {"code": 1, "name": "北海道", "name_e": "Hokkaido", "name_h": "ほっかいどう",
                 "name_k": "ホッカイドウ", "zips": [{"start": 1, "end": 2}]},
                {"code": 2, "name": "青森県", "name_e": "Aomori", "name_h": "あおもりけん",
                 "name_k": "アオモリケン"}
            ]"#,
        );
        let records = Config::new().with_mapping_data(file.path()).load_records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].zips(), &[1..=2]);
        // Falls back to the built-in zip table
        assert_eq!(records[1].zips(), &[300000..=399999]);
    }

    #[test]
    fn test_zip_mapping_replaces_zips() {
        let file = write_temp(r#"{"01": [[10, 20]], "13": [[30, 40], [50, 60]]}"#);
        let records = Config::new().with_zip_mapping_data(file.path()).load_records().unwrap();
        assert_eq!(records[0].zips(), &[10..=20]);
        assert_eq!(records[12].zips(), &[30..=40, 50..=60]);
        assert!(records[1].zips().is_empty());
    }

    #[test]
    fn test_zip_mapping_unknown_code() {
        let file = write_temp(r#"{"99": [[10, 20]]}"#);
        let err = Config::new().with_zip_mapping_data(file.path()).load_records().unwrap_err();
        assert!(matches!(err, RegistryError::UnknownZipCode(ref key) if key == "99"));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::new()
            .with_mapping_data("/nonexistent/prefectures.json")
            .load_records()
            .unwrap_err();
        assert!(matches!(err, RegistryError::Io { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let file = write_temp("[{\"code\": \"one\"}]");
        let err = Config::new().with_mapping_data(file.path()).load_records().unwrap_err();
        assert!(matches!(err, RegistryError::Parse { .. }));
    }
}
