//! Calculation output structures

use serde::{Deserialize, Serialize};

use super::retirement_age::RetirementAdjustment;

/// One year of earnings after wage indexing and top-35 selection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexedEarningRecord {
    pub year: i32,
    pub raw_amount: f64,
    pub index_factor: f64,
    pub indexed_amount: f64,
    pub used_in_top35: bool,
    pub is_projected: bool,
}

/// Split of AIME across the three formula brackets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PiaBreakdown {
    pub portion_at_90_percent: f64,
    pub portion_at_32_percent: f64,
    pub portion_at_15_percent: f64,
    pub bend_point_1: f64,
    pub bend_point_2: f64,
}

impl PiaBreakdown {
    /// Unrounded PIA (sum of the three portions)
    pub fn total(&self) -> f64 {
        self.portion_at_90_percent + self.portion_at_32_percent + self.portion_at_15_percent
    }
}

/// A single year's cost-of-living increase applied to the PIA
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColaAdjustment {
    pub year: i32,
    pub percent: f64,
    /// PIA after this increase, truncated to the dime
    pub pia_after: f64,
}

/// Complete benefit calculation with its derivation trail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub birth_year: i32,

    /// Benefit start year
    pub retire_year: i32,

    /// Year the worker turns 60
    pub indexing_year: i32,

    /// Year the worker turns 62
    pub eligibility_year: i32,

    /// Table year the bend points came from; differs from `eligibility_year`
    /// when the table has no entry for it
    pub bend_points_year: i32,

    /// Average indexed monthly earnings (whole currency units)
    pub aime: f64,

    /// PIA at eligibility, before COLAs
    pub base_pia: f64,

    /// PIA after COLAs through the valuation year
    pub pia: f64,

    /// Monthly benefit at the chosen start date (whole currency units)
    pub benefit: f64,

    /// Full retirement age in decimal years
    pub fra: f64,

    /// Age when benefits start, in decimal years
    pub start_age: f64,

    /// All earnings years, ascending by year
    pub indexed_earnings: Vec<IndexedEarningRecord>,

    pub pia_breakdown: PiaBreakdown,

    pub cola_adjustments: Vec<ColaAdjustment>,

    pub retirement_adjustment: RetirementAdjustment,
}

impl CalculationResult {
    /// Records that entered the AIME sum
    pub fn top_years(&self) -> impl Iterator<Item = &IndexedEarningRecord> {
        self.indexed_earnings.iter().filter(|r| r.used_in_top35)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ResultSummary {
        let top35_indexed_total: f64 = self.top_years().map(|r| r.indexed_amount).sum();
        let years_used = self.top_years().count() as u32;
        let projected_years = self.indexed_earnings.iter().filter(|r| r.is_projected).count() as u32;
        let benefit_to_pia = if self.pia > 0.0 { self.benefit / self.pia } else { 0.0 };

        ResultSummary {
            total_years: self.indexed_earnings.len() as u32,
            years_used,
            projected_years,
            top35_indexed_total,
            benefit_to_pia,
        }
    }
}

/// Summary statistics for a calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultSummary {
    pub total_years: u32,
    pub years_used: u32,
    pub projected_years: u32,
    pub top35_indexed_total: f64,
    /// Final benefit as a fraction of the COLA-adjusted PIA
    pub benefit_to_pia: f64,
}
