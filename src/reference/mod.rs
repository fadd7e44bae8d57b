//! Reference data: wage index, bend points and cost-of-living adjustments
//!
//! Each table is a sparse year-keyed mapping with its own explicit fallback
//! rule, so missing years degrade instead of failing:
//! - wage index: indexing year -> reference year 2022 -> fixed constant
//! - bend points: eligibility year -> latest year in the table
//! - COLA: missing years are skipped

mod bend_points;
mod cola;
mod wage_index;
pub mod loader;

pub use bend_points::{BendPoints, BendPointTable, ResolvedBendPoints};
pub use cola::ColaTable;
pub use wage_index::{WageIndexTable, FALLBACK_INDEX_YEAR, FALLBACK_WAGE_INDEX};
pub use loader::LoadedReferenceData;

use std::path::Path;

use crate::error::{BenefitError, Result};

/// Container for all reference tables used by a calculation
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTables {
    pub wage_index: WageIndexTable,
    pub bend_points: BendPointTable,
    pub cola: ColaTable,
}

impl ReferenceTables {
    /// Tables embedded in the crate (published values through 2025)
    pub fn default_published() -> Self {
        Self {
            wage_index: WageIndexTable::published(),
            bend_points: BendPointTable::published(),
            cola: ColaTable::published(),
        }
    }

    /// Load tables from CSV files in the default location (data/reference/)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(loader::DEFAULT_REFERENCE_PATH))
    }

    /// Load tables from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let loaded = LoadedReferenceData::load_from(path)?;

        let tables = Self {
            wage_index: WageIndexTable::from_loaded(&loaded),
            bend_points: BendPointTable::from_loaded(&loaded),
            cola: ColaTable::from_loaded(&loaded),
        };
        tables.validate()?;
        Ok(tables)
    }

    /// Reject tables that leave no fallback path at all
    ///
    /// An empty COLA table is valid (no adjustments apply).
    pub fn validate(&self) -> Result<()> {
        if self.wage_index.is_empty() {
            return Err(BenefitError::EmptyReferenceTable { table: "wage_index" });
        }
        if self.bend_points.is_empty() {
            return Err(BenefitError::EmptyReferenceTable { table: "bend_points" });
        }
        Ok(())
    }
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::default_published()
    }
}
