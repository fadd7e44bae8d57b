//! Benefit calculation: indexing, AIME, PIA, COLA and claiming adjustments

mod engine;
mod indexing;
mod pia;
mod result;
mod retirement_age;

pub use engine::{BenefitCalculator, CalculationConfig};
pub use indexing::{index_earnings, project_earnings, select_top_years, TOP_YEARS};
pub use pia::{apply_colas, base_pia, compute_aime, floor_to_dime, pia_breakdown, AIME_MONTHS};
pub use result::{CalculationResult, ColaAdjustment, IndexedEarningRecord, PiaBreakdown, ResultSummary};
pub use retirement_age::{
    delayed_multiplier, early_multiplier, FullRetirementAge, RetirementAdjustment, MAX_CREDIT_AGE,
};
