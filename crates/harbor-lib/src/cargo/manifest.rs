//! Cargo manifest loading.
//!
//! A manifest is a CSV file with one cargo unit per row. Each row is passed
//! through [`CargoUnit::create`], so category tags follow the same rules as the
//! cargo factory.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{Error, Result};

use super::unit::{CargoId, CargoUnit};

/// Canonical field name -> accepted header spellings (already normalized).
const COLUMN_SYNONYMS: &[(&str, &[&str])] = &[
    ("category", &["category", "type", "kind", "item_type"]),
    ("id", &["id", "item_id", "cargo_id"]),
    ("weight", &["weight", "unit_weight", "unitweight", "weight_kg"]),
    ("count", &["count", "quantity", "qty"]),
    ("container_id", &["container_id", "container"]),
];

const REQUIRED_COLUMNS: &[&str] = &["category", "id", "weight"];

/// Ordered list of cargo units loaded from a CSV manifest.
#[derive(Debug, Clone, Default)]
pub struct CargoManifest {
    units: Vec<CargoUnit>,
    source: Option<PathBuf>,
}

impl CargoManifest {
    /// Load a manifest from a file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let mut manifest = Self::from_reader(file)?;
        manifest.source = Some(path.to_path_buf());
        Ok(manifest)
    }

    /// Load a manifest from a reader (e.g., file or in-memory buffer).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|err| Error::ManifestValidation {
                message: format!("failed to read manifest headers: {err}"),
            })?
            .clone();
        let columns = resolve_columns(&headers)?;

        let mut units = Vec::new();
        let mut seen = HashSet::new();

        // header is line 1
        for (offset, result) in csv_reader.records().enumerate() {
            let row = offset + 2;
            let record = result.map_err(|e| Error::ManifestValidation {
                message: e.to_string(),
            })?;

            let get = |field: &str| cell(&record, &columns, field);

            let category = get("category").ok_or_else(|| Error::ManifestValidation {
                message: format!("missing category at row {row}"),
            })?;
            let id: CargoId = parse_field(get("id"), "id", row)?;
            let weight: f64 = parse_field(get("weight"), "weight", row)?;
            let count: u32 = match get("count") {
                Some(_) => parse_field(get("count"), "count", row)?,
                None => 1,
            };
            let container_id: Option<u64> = match get("container_id") {
                Some(_) => Some(parse_field(get("container_id"), "container_id", row)?),
                None => None,
            };

            let unit = CargoUnit::create(category, id, weight, count, container_id)?;
            if !seen.insert(unit.id()) {
                return Err(Error::DuplicateCargoId { id: unit.id() });
            }
            units.push(unit);
        }

        Ok(Self {
            units,
            source: None,
        })
    }

    /// Units in manifest order.
    pub fn units(&self) -> &[CargoUnit] {
        &self.units
    }

    /// Find a unit by id.
    pub fn get(&self, id: CargoId) -> Option<&CargoUnit> {
        self.units.iter().find(|unit| unit.id() == id)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn into_units(self) -> Vec<CargoUnit> {
        self.units
    }

    /// Get the source path if the manifest was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

fn normalize_header(s: &str) -> String {
    s.to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

fn resolve_columns(headers: &StringRecord) -> Result<BTreeMap<&'static str, usize>> {
    let normalized: Vec<String> = headers.iter().map(normalize_header).collect();

    let mut columns = BTreeMap::new();
    for (canon, alts) in COLUMN_SYNONYMS {
        if let Some(index) = normalized
            .iter()
            .position(|header| alts.contains(&header.as_str()))
        {
            columns.insert(*canon, index);
        }
    }

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|c| !columns.contains_key(c))
        .collect();

    if !missing.is_empty() {
        return Err(Error::ManifestValidation {
            message: format!(
                "manifest missing required columns: {}. Available: {}",
                missing.join(", "),
                headers.iter().collect::<Vec<_>>().join(", ")
            ),
        });
    }

    Ok(columns)
}

fn cell<'r>(
    record: &'r StringRecord,
    columns: &BTreeMap<&'static str, usize>,
    field: &str,
) -> Option<&'r str> {
    columns
        .get(field)
        .and_then(|&i| record.get(i))
        .filter(|s| !s.is_empty())
}

fn parse_field<T>(value: Option<&str>, field: &str, row: usize) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = value.ok_or_else(|| Error::ManifestValidation {
        message: format!("missing {field} at row {row}"),
    })?;
    value.parse::<T>().map_err(|e| Error::ManifestValidation {
        message: format!("invalid {field} at row {row}: {e}"),
    })
}
