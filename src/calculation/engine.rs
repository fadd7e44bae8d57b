//! Benefit calculation pipeline
//!
//! FRA -> projection -> indexing -> top-35 -> AIME -> bend points -> COLA ->
//! early/delayed adjustment. Every stage is pure; the calculator holds only
//! read-only tables and configuration.

use crate::earnings::{EarningRecord, PersonalInputs};
use crate::error::Result;
use crate::reference::ReferenceTables;
use super::indexing::{index_earnings, project_earnings, select_top_years};
use super::pia::{apply_colas, base_pia, compute_aime, pia_breakdown};
use super::result::CalculationResult;
use super::retirement_age::{FullRetirementAge, RetirementAdjustment};

/// Configuration for a calculation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculationConfig {
    /// COLAs are applied for years before this one
    pub valuation_year: i32,
}

impl CalculationConfig {
    pub fn new(valuation_year: i32) -> Self {
        Self { valuation_year }
    }

    /// Valuation year set to the current calendar year
    pub fn current_year() -> Self {
        use chrono::Datelike;
        Self::new(chrono::Local::now().year())
    }
}

/// Main benefit calculator
#[derive(Debug, Clone)]
pub struct BenefitCalculator {
    tables: ReferenceTables,
    config: CalculationConfig,
}

impl BenefitCalculator {
    /// Create a calculator with given reference tables and config
    pub fn new(tables: ReferenceTables, config: CalculationConfig) -> Self {
        Self { tables, config }
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    pub fn config(&self) -> CalculationConfig {
        self.config
    }

    /// Run the full pipeline for one person
    ///
    /// Fails only when the bend point table is empty.
    pub fn calculate(&self, earnings: &[EarningRecord], inputs: &PersonalInputs) -> Result<CalculationResult> {
        let fra = FullRetirementAge::for_birth_year(inputs.birth_year);
        let indexing_year = inputs.indexing_year();
        let eligibility_year = inputs.eligibility_year();

        let all_earnings = project_earnings(earnings, inputs);
        let indexed = index_earnings(&all_earnings, indexing_year, &self.tables.wage_index);
        let indexed_earnings = select_top_years(&indexed);

        let aime = compute_aime(&indexed_earnings);

        let bend_points = self.tables.bend_points.for_eligibility_year(eligibility_year)?;
        let breakdown = pia_breakdown(aime, bend_points.points);
        let base = base_pia(&breakdown);

        let (pia, cola_adjustments) =
            apply_colas(base, eligibility_year, self.config.valuation_year, &self.tables.cola);

        let retirement_adjustment = RetirementAdjustment::for_start_date(inputs, fra);
        let benefit = retirement_adjustment.apply(pia);

        log::debug!(
            "birth {} aime {} base pia {:.1} adjusted pia {:.1} multiplier {:.4} benefit {}",
            inputs.birth_year, aime, base, pia, retirement_adjustment.multiplier, benefit
        );

        Ok(CalculationResult {
            birth_year: inputs.birth_year,
            retire_year: inputs.benefit_start_year,
            indexing_year,
            eligibility_year,
            bend_points_year: bend_points.source_year,
            aime,
            base_pia: base,
            pia,
            benefit,
            fra: fra.years(),
            start_age: inputs.start_age(),
            indexed_earnings,
            pia_breakdown: breakdown,
            cola_adjustments,
            retirement_adjustment,
        })
    }
}
