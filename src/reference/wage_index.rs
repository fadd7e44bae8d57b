//! National average wage index used to index historical earnings

use std::collections::BTreeMap;

/// Year whose entry stands in when the indexing year is not in the table
pub const FALLBACK_INDEX_YEAR: i32 = 2022;

/// Wage index used when neither the indexing year nor the fallback year is present
pub const FALLBACK_WAGE_INDEX: f64 = 63_761.65;

/// Average wage index by calendar year (sparse)
#[derive(Debug, Clone, PartialEq)]
pub struct WageIndexTable {
    entries: BTreeMap<i32, f64>,
}

impl WageIndexTable {
    pub fn new(entries: BTreeMap<i32, f64>) -> Self {
        Self { entries }
    }

    /// Create from loaded CSV data
    pub fn from_loaded(loaded: &super::loader::LoadedReferenceData) -> Self {
        Self::new(loaded.wage_index.clone())
    }

    /// Published AWI series 1960-2023 plus 2024-2025 estimates
    pub fn published() -> Self {
        let series: [(i32, f64); 66] = [
            (1960, 4007.12), (1961, 4086.76), (1962, 4291.40), (1963, 4396.64), (1964, 4576.32),
            (1965, 4658.72), (1966, 4938.36), (1967, 5213.44), (1968, 5571.76), (1969, 5893.76),
            (1970, 6186.24), (1971, 6497.08), (1972, 7133.80), (1973, 7580.16), (1974, 8030.76),
            (1975, 8630.92), (1976, 9226.48), (1977, 9779.44), (1978, 10556.03), (1979, 11479.46),
            (1980, 12513.46), (1981, 13773.10), (1982, 14531.34), (1983, 15239.24), (1984, 16135.07),
            (1985, 16822.51), (1986, 17321.82), (1987, 18426.51), (1988, 19334.04), (1989, 20099.55),
            (1990, 21027.98), (1991, 21811.60), (1992, 22935.42), (1993, 23132.67), (1994, 23753.53),
            (1995, 24705.66), (1996, 25913.90), (1997, 27426.00), (1998, 28861.44), (1999, 30469.84),
            (2000, 32154.82), (2001, 32921.92), (2002, 33252.09), (2003, 34064.95), (2004, 35648.55),
            (2005, 36952.94), (2006, 38651.41), (2007, 40405.48), (2008, 41334.97), (2009, 40711.61),
            (2010, 41673.83), (2011, 42979.61), (2012, 44321.67), (2013, 44888.16), (2014, 46481.52),
            (2015, 48098.63), (2016, 48642.15), (2017, 50321.89), (2018, 52145.80), (2019, 54099.99),
            (2020, 55628.60), (2021, 60575.07), (2022, 63761.65), (2023, 66621.80),
            // Estimates until the official figures are published
            (2024, 68620.00), (2025, 70678.00),
        ];
        Self::new(series.into_iter().collect())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact lookup; None for years outside the table's coverage
    pub fn get(&self, year: i32) -> Option<f64> {
        self.entries.get(&year).copied()
    }

    /// Wage index for the indexing year (age 60)
    ///
    /// Falls back to the `FALLBACK_INDEX_YEAR` entry, then to `FALLBACK_WAGE_INDEX`.
    /// Non-positive entries count as missing.
    pub fn at_indexing_year(&self, indexing_year: i32) -> f64 {
        if let Some(value) = self.positive(indexing_year) {
            return value;
        }
        match self.positive(FALLBACK_INDEX_YEAR) {
            Some(value) => {
                log::warn!(
                    "no wage index for {}; using {} value {:.2}",
                    indexing_year, FALLBACK_INDEX_YEAR, value
                );
                value
            }
            None => {
                log::warn!(
                    "no wage index for {} or {}; using constant {:.2}",
                    indexing_year, FALLBACK_INDEX_YEAR, FALLBACK_WAGE_INDEX
                );
                FALLBACK_WAGE_INDEX
            }
        }
    }

    fn positive(&self, year: i32) -> Option<f64> {
        self.get(year).filter(|v| *v > 0.0)
    }
}
impl Default for WageIndexTable {
    fn default() -> Self {
        Self::published()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_lookup() {
        let table = WageIndexTable::published();
        assert_eq!(table.get(1990), Some(21027.98));
        assert_eq!(table.get(2023), Some(66621.80));
        assert_eq!(table.get(1959), None);
        assert_eq!(table.get(2026), None);
    }

    #[test]
    fn test_indexing_year_fallbacks() {
        let table = WageIndexTable::published();
        assert_eq!(table.at_indexing_year(2020), 55628.60);
        // Beyond coverage -> reference year entry
        assert_eq!(table.at_indexing_year(2030), 63761.65);

        let sparse = WageIndexTable::new(BTreeMap::from([(2000, 32154.82)]));
        assert_eq!(sparse.at_indexing_year(2030), FALLBACK_WAGE_INDEX);

        let sparse = WageIndexTable::new(BTreeMap::from([(2000, 32154.82), (FALLBACK_INDEX_YEAR, 70_000.0)]));
        assert_eq!(sparse.at_indexing_year(2030), 70_000.0);
    }

    #[test]
    fn test_non_positive_indexing_year_entry_falls_through() {
        let table = WageIndexTable::new(BTreeMap::from([(1990, 20_000.0), (2020, 0.0)]));
        assert_eq!(table.at_indexing_year(2020), FALLBACK_WAGE_INDEX);

        let table = WageIndexTable::new(BTreeMap::from([(2020, -1.0), (FALLBACK_INDEX_YEAR, 0.0)]));
        assert_eq!(table.at_indexing_year(2020), FALLBACK_WAGE_INDEX);

        let table = WageIndexTable::new(BTreeMap::from([(2020, 0.0), (FALLBACK_INDEX_YEAR, 63_000.0)]));
        assert_eq!(table.at_indexing_year(2020), 63_000.0);
    }
}
