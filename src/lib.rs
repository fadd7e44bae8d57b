//! Benefit Estimator - statutory retirement benefit calculation
//!
//! This library provides:
//! - Wage indexing of an earnings history with projected future salary
//! - Top-35 year selection and AIME
//! - Bend-point PIA with per-year COLA compounding
//! - Early/delayed claiming adjustments against full retirement age
//! - CSV loading of earnings histories and reference tables
//! - Batch runs and claiming-age sweeps

pub mod calculation;
pub mod earnings;
pub mod error;
pub mod reference;
pub mod scenario;

// Re-export commonly used types
pub use calculation::{BenefitCalculator, CalculationConfig, CalculationResult, IndexedEarningRecord, PiaBreakdown};
pub use earnings::{EarningRecord, PersonalInputs};
pub use error::{BenefitError, Result};
pub use reference::ReferenceTables;
pub use scenario::ScenarioRunner;
