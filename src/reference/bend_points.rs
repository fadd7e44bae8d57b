//! PIA formula bend points by eligibility year

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{BenefitError, Result};

/// The two AIME thresholds separating the 90% / 32% / 15% brackets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BendPoints {
    pub first: f64,
    pub second: f64,
}

/// Bend points resolved for an eligibility year
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedBendPoints {
    pub points: BendPoints,
    /// Table year the points came from (differs from the request on fallback)
    pub source_year: i32,
}

/// Bend points keyed by the year the worker turns 62
#[derive(Debug, Clone, PartialEq)]
pub struct BendPointTable {
    entries: BTreeMap<i32, BendPoints>,
}

impl BendPointTable {
    pub fn new(entries: BTreeMap<i32, BendPoints>) -> Self {
        Self { entries }
    }

    /// Create from loaded CSV data
    pub fn from_loaded(loaded: &super::loader::LoadedReferenceData) -> Self {
        Self::new(loaded.bend_points.clone())
    }

    /// Published bend points for eligibility years 2015-2025
    pub fn published() -> Self {
        let rows: [(i32, f64, f64); 11] = [
            (2015, 826.0, 4980.0),
            (2016, 856.0, 5157.0),
            (2017, 885.0, 5336.0),
            (2018, 895.0, 5397.0),
            (2019, 926.0, 5583.0),
            (2020, 960.0, 5785.0),
            (2021, 996.0, 6002.0),
            (2022, 1024.0, 6172.0),
            (2023, 1115.0, 6721.0),
            (2024, 1174.0, 7078.0),
            (2025, 1226.0, 7391.0),
        ];
        Self::new(
            rows.into_iter()
                .map(|(year, first, second)| (year, BendPoints { first, second }))
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, eligibility_year: i32) -> Option<BendPoints> {
        self.entries.get(&eligibility_year).copied()
    }

    /// Most recent year in the table
    pub fn latest(&self) -> Option<(i32, BendPoints)> {
        self.entries.iter().next_back().map(|(y, p)| (*y, *p))
    }

    /// Bend points for an eligibility year
    ///
    /// Years missing from the table (before or after its coverage) use the latest
    /// known year. Fails only when the table is empty.
    pub fn for_eligibility_year(&self, eligibility_year: i32) -> Result<ResolvedBendPoints> {
        if let Some(points) = self.get(eligibility_year) {
            return Ok(ResolvedBendPoints { points, source_year: eligibility_year });
        }
        let (source_year, points) = self
            .latest()
            .ok_or(BenefitError::EmptyReferenceTable { table: "bend_points" })?;
        log::warn!(
            "no bend points for eligibility year {}; using {} ({}, {})",
            eligibility_year, source_year, points.first, points.second
        );
        Ok(ResolvedBendPoints { points, source_year })
    }
}

impl Default for BendPointTable {
    fn default() -> Self {
        Self::published()
    }
}
