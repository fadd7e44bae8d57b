//! CSV-based reference data loader
//!
//! Loads the three year-keyed tables from CSV files in data/reference/

use std::collections::BTreeMap;
use std::fmt::Display;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use csv::StringRecord;

use super::bend_points::BendPoints;
use crate::error::{BenefitError, Result};

/// Default path to reference data directory
pub const DEFAULT_REFERENCE_PATH: &str = "data/reference";

pub const WAGE_INDEX_FILE: &str = "wage_index.csv";
pub const BEND_POINTS_FILE: &str = "bend_points.csv";
pub const COLA_FILE: &str = "cola.csv";

fn open_reader(path: &Path) -> Result<csv::Reader<File>> {
    let file = File::open(path).map_err(|source| BenefitError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(csv::Reader::from_reader(file))
}

fn parse_field<T>(record: &StringRecord, idx: usize, table: &'static str, row: usize) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = record.get(idx).ok_or_else(|| BenefitError::InvalidRow {
        table,
        row,
        reason: format!("missing column {}", idx + 1),
    })?;
    raw.trim().parse().map_err(|e: T::Err| BenefitError::InvalidRow {
        table,
        row,
        reason: format!("'{}': {}", raw, e),
    })
}

/// Load average wage index by year
/// Columns: year, wage_index
pub fn load_wage_index(path: &Path) -> Result<BTreeMap<i32, f64>> {
    let mut reader = open_reader(&path.join(WAGE_INDEX_FILE))?;
    let mut index = BTreeMap::new();

    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let year: i32 = parse_field(&record, 0, "wage_index", row + 1)?;
        let value: f64 = parse_field(&record, 1, "wage_index", row + 1)?;
        index.insert(year, value);
    }

    Ok(index)
}

/// Load bend points by eligibility year
/// Columns: eligibility_year, first, second
pub fn load_bend_points(path: &Path) -> Result<BTreeMap<i32, BendPoints>> {
    let mut reader = open_reader(&path.join(BEND_POINTS_FILE))?;
    let mut points = BTreeMap::new();

    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let year: i32 = parse_field(&record, 0, "bend_points", row + 1)?;
        let first: f64 = parse_field(&record, 1, "bend_points", row + 1)?;
        let second: f64 = parse_field(&record, 2, "bend_points", row + 1)?;
        points.insert(year, BendPoints { first, second });
    }

    Ok(points)
}

/// Load COLA percentages by year
/// Columns: year, cola_percent
pub fn load_cola(path: &Path) -> Result<BTreeMap<i32, f64>> {
    let mut reader = open_reader(&path.join(COLA_FILE))?;
    let mut colas = BTreeMap::new();

    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let year: i32 = parse_field(&record, 0, "cola", row + 1)?;
        let percent: f64 = parse_field(&record, 1, "cola", row + 1)?;
        colas.insert(year, percent);
    }

    Ok(colas)
}

/// All reference tables as read from disk
#[derive(Debug)]
pub struct LoadedReferenceData {
    pub wage_index: BTreeMap<i32, f64>,
    pub bend_points: BTreeMap<i32, BendPoints>,
    pub cola: BTreeMap<i32, f64>,
}

impl LoadedReferenceData {
    /// Load all tables from the default path
    pub fn load_default() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_REFERENCE_PATH))
    }

    /// Load all tables from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        log::debug!("loading reference data from {}", path.display());
        Ok(Self {
            wage_index: load_wage_index(path)?,
            bend_points: load_bend_points(path)?,
            cola: load_cola(path)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_reference_data() {
        let result = LoadedReferenceData::load_default();
        assert!(result.is_ok(), "Failed to load reference data: {:?}", result.err());

        let data = result.unwrap();

        assert_eq!(data.wage_index.len(), 66);
        assert_eq!(data.wage_index[&2022], 63761.65);
        assert_eq!(data.wage_index[&1960], 4007.12);

        assert_eq!(data.bend_points.len(), 11);
        assert_eq!(data.bend_points[&2023], BendPoints { first: 1115.0, second: 6721.0 });

        assert_eq!(data.cola.len(), 10);
        assert_eq!(data.cola[&2022], 8.7);
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let err = LoadedReferenceData::load_from(Path::new("data/does-not-exist")).unwrap_err();
        assert!(matches!(err, BenefitError::Io { .. }));
    }
}
