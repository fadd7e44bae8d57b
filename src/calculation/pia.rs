//! AIME, bend-point PIA and COLA compounding
//!
//! Rounding is statutory and exact:
//! - AIME is truncated to the whole dollar
//! - PIA is truncated to the dime after the formula and again after every COLA

use crate::reference::{BendPoints, ColaTable};
use super::indexing::TOP_YEARS;
use super::result::{ColaAdjustment, IndexedEarningRecord, PiaBreakdown};

/// AIME denominator: always 35 years of months, even for shorter histories
pub const AIME_MONTHS: f64 = (TOP_YEARS * 12) as f64;

pub const FIRST_BRACKET_RATE: f64 = 0.90;
pub const SECOND_BRACKET_RATE: f64 = 0.32;
pub const THIRD_BRACKET_RATE: f64 = 0.15;

/// Truncate down to the next lower dime
pub fn floor_to_dime(amount: f64) -> f64 {
    (amount * 10.0).floor() / 10.0
}

/// Average indexed monthly earnings over the flagged top years
pub fn compute_aime(records: &[IndexedEarningRecord]) -> f64 {
    let top_total: f64 = records
        .iter()
        .filter(|r| r.used_in_top35)
        .map(|r| r.indexed_amount)
        .sum();
    (top_total / AIME_MONTHS).floor()
}

/// Apply the 90% / 32% / 15% brackets to an AIME
pub fn pia_breakdown(aime: f64, bend_points: BendPoints) -> PiaBreakdown {
    let BendPoints { first: b1, second: b2 } = bend_points;

    let (p90, p32, p15) = if aime <= b1 {
        (FIRST_BRACKET_RATE * aime, 0.0, 0.0)
    } else if aime <= b2 {
        (FIRST_BRACKET_RATE * b1, SECOND_BRACKET_RATE * (aime - b1), 0.0)
    } else {
        (
            FIRST_BRACKET_RATE * b1,
            SECOND_BRACKET_RATE * (b2 - b1),
            THIRD_BRACKET_RATE * (aime - b2),
        )
    };

    PiaBreakdown {
        portion_at_90_percent: p90,
        portion_at_32_percent: p32,
        portion_at_15_percent: p15,
        bend_point_1: b1,
        bend_point_2: b2,
    }
}

/// PIA at eligibility, truncated to the dime
pub fn base_pia(breakdown: &PiaBreakdown) -> f64 {
    floor_to_dime(breakdown.total())
}

/// Compound COLAs for every year in `[eligibility_year, valuation_year)`
///
/// Years without a table entry are skipped. The PIA is truncated to the dime
/// after each increase, so the order of application matters.
pub fn apply_colas(
    base_pia: f64,
    eligibility_year: i32,
    valuation_year: i32,
    colas: &ColaTable,
) -> (f64, Vec<ColaAdjustment>) {
    let mut pia = base_pia;
    let mut applied = Vec::new();

    for year in eligibility_year..valuation_year {
        if let Some(percent) = colas.get(year) {
            pia = floor_to_dime(pia * (1.0 + percent / 100.0));
            applied.push(ColaAdjustment { year, percent, pia_after: pia });
        }
    }

    (pia, applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const BP_2023: BendPoints = BendPoints { first: 1115.0, second: 6721.0 };

    fn top(amount: f64) -> IndexedEarningRecord {
        IndexedEarningRecord {
            year: 2000,
            raw_amount: amount,
            index_factor: 1.0,
            indexed_amount: amount,
            used_in_top35: true,
            is_projected: false,
        }
    }

    #[test]
    fn test_floor_to_dime() {
        assert_eq!(floor_to_dime(1003.59), 1003.5);
        assert_eq!(floor_to_dime(1003.5), 1003.5);
        assert_eq!(floor_to_dime(0.0), 0.0);
    }

    #[test]
    fn test_aime_truncates_and_uses_fixed_denominator() {
        // 35 years at 42,000 -> 3,500/month exactly
        let records: Vec<_> = (0..35).map(|_| top(42_000.0)).collect();
        assert_eq!(compute_aime(&records), 3500.0);

        // One year only still divides by 420
        assert_eq!(compute_aime(&[top(42_000.0)]), 100.0);
        assert_eq!(compute_aime(&[top(42_419.0)]), 100.0);

        // Unflagged years do not count
        let mut unused = top(1_000_000.0);
        unused.used_in_top35 = false;
        assert_eq!(compute_aime(&[top(42_000.0), unused]), 100.0);
    }

    #[test]
    fn test_aime_exactly_at_first_bend_point() {
        let breakdown = pia_breakdown(1115.0, BP_2023);
        assert_abs_diff_eq!(breakdown.portion_at_90_percent, 1003.5, epsilon = 1e-9);
        assert_eq!(breakdown.portion_at_32_percent, 0.0);
        assert_eq!(breakdown.portion_at_15_percent, 0.0);
        assert_eq!(base_pia(&breakdown), 1003.5);
    }

    #[test]
    fn test_second_bracket() {
        let breakdown = pia_breakdown(3000.0, BP_2023);
        assert_abs_diff_eq!(breakdown.portion_at_32_percent, 0.32 * 1885.0, epsilon = 1e-9);
        assert_eq!(breakdown.portion_at_15_percent, 0.0);
        assert_eq!(base_pia(&breakdown), 1606.7);
    }

    #[test]
    fn test_third_bracket() {
        let breakdown = pia_breakdown(8000.0, BP_2023);
        assert_abs_diff_eq!(breakdown.portion_at_32_percent, 0.32 * 5606.0, epsilon = 1e-9);
        assert_abs_diff_eq!(breakdown.portion_at_15_percent, 0.15 * 1279.0, epsilon = 1e-9);
        assert_eq!(breakdown.bend_point_1, 1115.0);
        assert_eq!(breakdown.bend_point_2, 6721.0);
        // 2989.27 truncated to the dime
        assert_eq!(base_pia(&breakdown), 2989.2);
    }

    #[test]
    fn test_cola_truncates_each_year() {
        let colas = ColaTable::published();
        let (pia, applied) = apply_colas(1003.5, 2023, 2025, &colas);

        assert_eq!(applied.len(), 2);
        assert_eq!(applied[0], ColaAdjustment { year: 2023, percent: 3.2, pia_after: 1035.6 });
        assert_eq!(applied[1].year, 2024);
        // Truncating once at the end would give 1061.5
        assert_eq!(pia, 1061.4);
    }

    #[test]
    fn test_cola_missing_years_skipped() {
        let colas = ColaTable::published();
        // 2025 onwards not in the table
        let (pia, applied) = apply_colas(1500.0, 2025, 2030, &colas);
        assert_eq!(pia, 1500.0);
        assert!(applied.is_empty());

        // Valuation year at eligibility -> nothing applied
        let (pia, applied) = apply_colas(1500.0, 2023, 2023, &colas);
        assert_eq!(pia, 1500.0);
        assert!(applied.is_empty());
    }
}
