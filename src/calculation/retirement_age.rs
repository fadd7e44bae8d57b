//! Full retirement age and the early/delayed claiming multiplier

use serde::{Deserialize, Serialize};

use crate::earnings::PersonalInputs;

/// Reduction per month for the first 36 months of early claiming (5/9 of 1%)
pub const EARLY_REDUCTION_FIRST_36: f64 = 5.0 / 900.0;

/// Reduction per month beyond 36 months early (5/12 of 1%)
pub const EARLY_REDUCTION_BEYOND_36: f64 = 5.0 / 1200.0;

/// Delayed retirement credit per month (8% per year)
pub const DELAYED_CREDIT_PER_MONTH: f64 = 8.0 / 1200.0;

/// Delayed credits stop accruing at this age
pub const MAX_CREDIT_AGE: u32 = 70;

/// Full retirement age, held in whole months
///
/// Simplified schedule: 65 through 1937, 66 for 1938-1954, two extra months per
/// birth year for 1955-1959, 67 from 1960. The 1938-1942 transition months of
/// the published schedule are not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FullRetirementAge {
    months: u32,
}

impl FullRetirementAge {
    pub fn for_birth_year(birth_year: i32) -> Self {
        let months = if birth_year <= 1937 {
            65 * 12
        } else if birth_year <= 1954 {
            66 * 12
        } else if birth_year <= 1959 {
            66 * 12 + 2 * (birth_year - 1954) as u32
        } else {
            67 * 12
        };
        Self { months }
    }

    pub fn months(&self) -> u32 {
        self.months
    }

    /// FRA in decimal years (66.5 for 66 and 6 months)
    pub fn years(&self) -> f64 {
        self.months as f64 / 12.0
    }
}

/// How the chosen start date compares to FRA, and the resulting multiplier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementAdjustment {
    /// Start date minus FRA date in months (negative = early)
    pub month_difference: i64,
    pub months_early: u32,
    /// Months of delay that earn credits (capped at age 70)
    pub months_delayed: u32,
    pub multiplier: f64,
}

impl RetirementAdjustment {
    /// Compute the claiming adjustment for the inputs' start date
    pub fn for_start_date(inputs: &PersonalInputs, fra: FullRetirementAge) -> Self {
        let fra_month_total = inputs.birth_month_total() + fra.months() as i64;
        let month_difference = inputs.start_month_total() - fra_month_total;

        if month_difference < 0 {
            let months_early = month_difference.unsigned_abs() as u32;
            Self {
                month_difference,
                months_early,
                months_delayed: 0,
                multiplier: early_multiplier(months_early),
            }
        } else if month_difference > 0 {
            let max_delay = (MAX_CREDIT_AGE * 12).saturating_sub(fra.months()) as i64;
            let months_delayed = month_difference.min(max_delay) as u32;
            Self {
                month_difference,
                months_early: 0,
                months_delayed,
                multiplier: delayed_multiplier(months_delayed),
            }
        } else {
            Self {
                month_difference,
                months_early: 0,
                months_delayed: 0,
                multiplier: 1.0,
            }
        }
    }

    /// Monthly benefit after adjustment, truncated to whole currency units
    ///
    /// Never negative: the early multiplier bottoms out at zero.
    pub fn apply(&self, adjusted_pia: f64) -> f64 {
        (adjusted_pia * self.multiplier).floor()
    }
}

/// Reduction factor for claiming `months_early` months before FRA
///
/// Floored at zero; past 228 months early the reduction would exceed the benefit.
pub fn early_multiplier(months_early: u32) -> f64 {
    let months = months_early as f64;
    let multiplier = if months_early <= 36 {
        1.0 - months * EARLY_REDUCTION_FIRST_36
    } else {
        1.0 - 36.0 * EARLY_REDUCTION_FIRST_36 - (months - 36.0) * EARLY_REDUCTION_BEYOND_36
    };
    multiplier.max(0.0)
}

/// Credit factor for `months_delayed` months after FRA (cap applied by caller)
pub fn delayed_multiplier(months_delayed: u32) -> f64 {
    1.0 + months_delayed as f64 * DELAYED_CREDIT_PER_MONTH
}
