//! Earnings history and personal inputs for a benefit calculation

use serde::{Deserialize, Serialize};

/// Age at which the wage index denominator is taken
pub const INDEXING_AGE: i32 = 60;

/// Age at which bend points are fixed
pub const ELIGIBILITY_AGE: i32 = 62;

/// Synthetic last-earnings age used when the history is empty
pub const EMPTY_HISTORY_FLOOR_AGE: i32 = 18;

/// One year of covered earnings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EarningRecord {
    pub year: i32,

    /// Covered earnings for the year
    pub amount: f64,

    /// Synthesized from the projected salary rather than reported
    #[serde(default)]
    pub is_projected: bool,
}

impl EarningRecord {
    pub fn new(year: i32, amount: f64) -> Self {
        Self { year, amount, is_projected: false }
    }

    pub fn projected(year: i32, amount: f64) -> Self {
        Self { year, amount, is_projected: true }
    }
}

/// Personal parameters of a single calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalInputs {
    pub birth_year: i32,

    /// 1-12
    pub birth_month: u32,

    pub benefit_start_year: i32,

    /// 1-12
    pub benefit_start_month: u32,

    /// Annual salary assumed for every year between the last reported year and the start year
    pub projected_future_salary: f64,
}

impl PersonalInputs {
    pub fn new(
        birth_year: i32,
        birth_month: u32,
        benefit_start_year: i32,
        benefit_start_month: u32,
        projected_future_salary: f64,
    ) -> Self {
        Self {
            birth_year,
            birth_month,
            benefit_start_year,
            benefit_start_month,
            projected_future_salary,
        }
    }

    /// Year the worker turns 60
    pub fn indexing_year(&self) -> i32 {
        self.birth_year + INDEXING_AGE
    }

    /// Year the worker turns 62
    pub fn eligibility_year(&self) -> i32 {
        self.birth_year + ELIGIBILITY_AGE
    }

    /// Same inputs with a different benefit start date
    pub fn starting_at(&self, benefit_start_year: i32, benefit_start_month: u32) -> Self {
        Self { benefit_start_year, benefit_start_month, ..*self }
    }

    /// Age in decimal years when benefits start
    ///
    /// Not normalized: a start month before the birth month yields a fractional
    /// reduction of the year difference.
    pub fn start_age(&self) -> f64 {
        (self.benefit_start_year - self.birth_year) as f64
            + (self.benefit_start_month as f64 - self.birth_month as f64) / 12.0
    }

    /// Month count of the benefit start date (year * 12 + month)
    pub fn start_month_total(&self) -> i64 {
        self.benefit_start_year as i64 * 12 + self.benefit_start_month as i64
    }

    /// Month count of the birth date (year * 12 + month)
    pub fn birth_month_total(&self) -> i64 {
        self.birth_year as i64 * 12 + self.birth_month as i64
    }
}
