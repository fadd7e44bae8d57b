//! Scenario runner for batch calculations
//!
//! Pre-loads reference tables once, then runs many calculations (different
//! people, or different start dates for one person) without re-reading CSV files.

use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::calculation::{BenefitCalculator, CalculationConfig, CalculationResult};
use crate::earnings::{EarningRecord, PersonalInputs};
use crate::error::Result;
use crate::reference::ReferenceTables;

/// Earliest claiming age considered in a sweep
pub const EARLIEST_CLAIMING_AGE: i32 = 62;

/// Latest claiming age considered in a sweep (credits stop at 70)
pub const LATEST_CLAIMING_AGE: i32 = 70;

/// One person's inputs for a batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenefitCase {
    pub inputs: PersonalInputs,
    #[serde(default)]
    pub earnings: Vec<EarningRecord>,
}

/// Benefit at one candidate start date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimingOption {
    pub start_year: i32,
    pub start_month: u32,
    pub start_age: f64,
    pub multiplier: f64,
    pub pia: f64,
    pub benefit: f64,
}

/// Pre-loaded scenario runner for batch calculations
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_csv(CalculationConfig::new(2025))?;
///
/// for option in runner.claiming_sweep(&earnings, &inputs)? {
///     println!("{} -> {}", option.start_age, option.benefit);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    calculator: BenefitCalculator,
}

impl ScenarioRunner {
    /// Create runner with the embedded published tables
    pub fn new(config: CalculationConfig) -> Self {
        Self::with_tables(ReferenceTables::default_published(), config)
    }

    /// Create runner by loading tables from CSV files
    pub fn from_csv(config: CalculationConfig) -> Result<Self> {
        Ok(Self::with_tables(ReferenceTables::from_csv()?, config))
    }

    /// Create runner from a specific reference data directory
    pub fn from_csv_path(path: &Path, config: CalculationConfig) -> Result<Self> {
        Ok(Self::with_tables(ReferenceTables::from_csv_path(path)?, config))
    }

    /// Create runner with pre-built tables
    pub fn with_tables(tables: ReferenceTables, config: CalculationConfig) -> Self {
        Self {
            calculator: BenefitCalculator::new(tables, config),
        }
    }

    /// Run a single calculation
    pub fn run(&self, earnings: &[EarningRecord], inputs: &PersonalInputs) -> Result<CalculationResult> {
        self.calculator.calculate(earnings, inputs)
    }

    /// Run calculations for many people in parallel, preserving input order
    pub fn run_batch(&self, cases: &[BenefitCase]) -> Vec<Result<CalculationResult>> {
        cases
            .par_iter()
            .map(|case| self.calculator.calculate(&case.earnings, &case.inputs))
            .collect()
    }

    /// Benefit for each claiming age 62..=70, starting in the birth month
    pub fn claiming_sweep(&self, earnings: &[EarningRecord], inputs: &PersonalInputs) -> Result<Vec<ClaimingOption>> {
        (EARLIEST_CLAIMING_AGE..=LATEST_CLAIMING_AGE)
            .into_par_iter()
            .map(|age| -> Result<ClaimingOption> {
                let candidate = inputs.starting_at(inputs.birth_year + age, inputs.birth_month);
                let result = self.calculator.calculate(earnings, &candidate)?;
                Ok(ClaimingOption {
                    start_year: candidate.benefit_start_year,
                    start_month: candidate.benefit_start_month,
                    start_age: result.start_age,
                    multiplier: result.retirement_adjustment.multiplier,
                    pia: result.pia,
                    benefit: result.benefit,
                })
            })
            .collect()
    }

    pub fn calculator(&self) -> &BenefitCalculator {
        &self.calculator
    }

    /// Get reference to the loaded tables for inspection
    pub fn tables(&self) -> &ReferenceTables {
        self.calculator.tables()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn career() -> Vec<EarningRecord> {
        (1985..=2024).map(|y| EarningRecord::new(y, 55_000.0)).collect()
    }

    #[test]
    fn test_claiming_sweep() {
        let runner = ScenarioRunner::new(CalculationConfig::new(2026));
        let inputs = PersonalInputs::new(1962, 5, 2029, 5, 55_000.0);

        let options = runner.claiming_sweep(&career(), &inputs).unwrap();
        assert_eq!(options.len(), 9);
        assert_eq!(options[0].start_year, 2024);
        assert_eq!(options[8].start_year, 2032);
        assert!(options.iter().all(|o| o.start_month == 5));

        // FRA 67: 60 months early at 62, 36 months of credit at 70
        assert_abs_diff_eq!(options[0].multiplier, 0.70, epsilon = 1e-12);
        assert_eq!(options[5].multiplier, 1.0);
        assert_abs_diff_eq!(options[8].multiplier, 1.24, epsilon = 1e-12);

        for pair in options.windows(2) {
            assert!(pair[1].benefit >= pair[0].benefit);
        }
    }

    #[test]
    fn test_batch_preserves_order() {
        let runner = ScenarioRunner::new(CalculationConfig::new(2026));
        let cases: Vec<_> = [1955, 1960, 1965]
            .iter()
            .map(|&birth_year| BenefitCase {
                inputs: PersonalInputs::new(birth_year, 1, birth_year + 67, 1, 55_000.0),
                earnings: career(),
            })
            .collect();

        let results = runner.run_batch(&cases);
        assert_eq!(results.len(), 3);
        for (case, result) in cases.iter().zip(&results) {
            let result = result.as_ref().unwrap();
            assert_eq!(result.birth_year, case.inputs.birth_year);
            assert_eq!(result, &runner.run(&case.earnings, &case.inputs).unwrap());
        }
    }
}
