//! Cost-of-living adjustment percentages

use std::collections::BTreeMap;

/// COLA percentage by year, applied to benefits payable after that year
#[derive(Debug, Clone, PartialEq)]
pub struct ColaTable {
    entries: BTreeMap<i32, f64>,
}

impl ColaTable {
    pub fn new(entries: BTreeMap<i32, f64>) -> Self {
        Self { entries }
    }

    /// Create from loaded CSV data
    pub fn from_loaded(loaded: &super::loader::LoadedReferenceData) -> Self {
        Self::new(loaded.cola.clone())
    }

    /// Published COLAs for 2015-2024
    pub fn published() -> Self {
        let rows: [(i32, f64); 10] = [
            (2015, 0.0),
            (2016, 0.3),
            (2017, 2.0),
            (2018, 2.8),
            (2019, 1.6),
            (2020, 1.3),
            (2021, 5.9),
            (2022, 8.7),
            (2023, 3.2),
            (2024, 2.5),
        ];
        Self::new(rows.into_iter().collect())
    }

    /// COLA percent for a year; None means no adjustment for that year
    pub fn get(&self, year: i32) -> Option<f64> {
        self.entries.get(&year).copied()
    }
}

impl Default for ColaTable {
    fn default() -> Self {
        Self::published()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cola_lookup() {
        let table = ColaTable::published();
        assert_eq!(table.get(2021), Some(5.9));
        assert_eq!(table.get(2015), Some(0.0));
        assert_eq!(table.get(2025), None);
    }
}
