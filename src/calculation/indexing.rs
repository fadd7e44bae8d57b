//! Earnings projection, wage indexing and top-35 selection
//!
//! Each step takes the previous step's output by reference and returns a new
//! sequence; the caller's earnings list is never modified.

use std::cmp::Ordering;

use crate::earnings::{EarningRecord, PersonalInputs, EMPTY_HISTORY_FLOOR_AGE};
use crate::reference::WageIndexTable;
use super::result::IndexedEarningRecord;

/// Number of highest indexed years that enter the AIME
pub const TOP_YEARS: usize = 35;

/// Append projected-salary years from the last reported year up to the year
/// before benefits start
///
/// An empty history is treated as ending at age 18.
pub fn project_earnings(earnings: &[EarningRecord], inputs: &PersonalInputs) -> Vec<EarningRecord> {
    let last_recorded_year = earnings
        .iter()
        .map(|e| e.year)
        .max()
        .unwrap_or(inputs.birth_year + EMPTY_HISTORY_FLOOR_AGE);

    let mut all = earnings.to_vec();
    all.extend(
        (last_recorded_year + 1..inputs.benefit_start_year)
            .map(|year| EarningRecord::projected(year, inputs.projected_future_salary)),
    );

    log::debug!(
        "projected {} years after {} at {:.2}",
        all.len() - earnings.len(),
        last_recorded_year,
        inputs.projected_future_salary
    );
    all
}

/// Scale each pre-indexing-year amount by AWI(indexing year) / AWI(year)
///
/// Years at or after the indexing year, and years without a wage index entry,
/// keep a factor of 1.0.
pub fn index_earnings(
    records: &[EarningRecord],
    indexing_year: i32,
    wage_index: &WageIndexTable,
) -> Vec<IndexedEarningRecord> {
    let reference_index = records
        .iter()
        .any(|r| r.year < indexing_year)
        .then(|| wage_index.at_indexing_year(indexing_year));

    records
        .iter()
        .map(|record| {
            let factor = match reference_index {
                Some(reference) if record.year < indexing_year => {
                    match wage_index.get(record.year).filter(|v| *v > 0.0) {
                        Some(year_index) => reference / year_index,
                        None => {
                            log::debug!("no wage index for {}; left unindexed", record.year);
                            1.0
                        }
                    }
                }
                _ => 1.0,
            };

            IndexedEarningRecord {
                year: record.year,
                raw_amount: record.amount,
                index_factor: factor,
                indexed_amount: record.amount * factor,
                used_in_top35: false,
                is_projected: record.is_projected,
            }
        })
        .collect()
}

/// Ranking used for top-35 selection: indexed amount descending, then the more
/// recent year, then input order
fn rank(a: &IndexedEarningRecord, b: &IndexedEarningRecord) -> Ordering {
    b.indexed_amount
        .total_cmp(&a.indexed_amount)
        .then_with(|| b.year.cmp(&a.year))
}

/// Flag the `TOP_YEARS` highest indexed records and return all records by year
///
/// Flags are assigned per record, so duplicate years in the input are ranked
/// independently.
pub fn select_top_years(indexed: &[IndexedEarningRecord]) -> Vec<IndexedEarningRecord> {
    let mut order: Vec<usize> = (0..indexed.len()).collect();
    order.sort_by(|&a, &b| rank(&indexed[a], &indexed[b]).then(a.cmp(&b)));

    let mut selected = vec![false; indexed.len()];
    for &idx in order.iter().take(TOP_YEARS) {
        selected[idx] = true;
    }

    let mut flagged: Vec<IndexedEarningRecord> = indexed
        .iter()
        .zip(selected)
        .map(|(record, used_in_top35)| IndexedEarningRecord { used_in_top35, ..*record })
        .collect();
    flagged.sort_by_key(|r| r.year);
    flagged
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::BTreeMap;

    fn indexed(year: i32, amount: f64) -> IndexedEarningRecord {
        IndexedEarningRecord {
            year,
            raw_amount: amount,
            index_factor: 1.0,
            indexed_amount: amount,
            used_in_top35: false,
            is_projected: false,
        }
    }

    #[test]
    fn test_projection_fills_to_year_before_start() {
        let inputs = PersonalInputs::new(1965, 6, 2032, 1, 85_000.0);
        let earnings = vec![EarningRecord::new(2020, 70_000.0), EarningRecord::new(2023, 80_000.0)];

        let all = project_earnings(&earnings, &inputs);
        assert_eq!(all.len(), 2 + 8);
        assert_eq!(&all[..2], &earnings[..]);
        assert_eq!(all[2], EarningRecord::projected(2024, 85_000.0));
        assert_eq!(all.last(), Some(&EarningRecord::projected(2031, 85_000.0)));
        // Gap years inside the reported history are not padded
        assert!(all.iter().all(|r| r.year != 2021));
    }

    #[test]
    fn test_no_projection_when_history_reaches_start() {
        let inputs = PersonalInputs::new(1960, 1, 2025, 1, 50_000.0);
        let earnings = vec![EarningRecord::new(2024, 60_000.0)];
        assert_eq!(project_earnings(&earnings, &inputs), earnings);

        let earnings = vec![EarningRecord::new(2026, 60_000.0)];
        assert_eq!(project_earnings(&earnings, &inputs), earnings);
    }

    #[test]
    fn test_empty_history_projects_from_age_18() {
        let inputs = PersonalInputs::new(1965, 6, 2032, 1, 85_000.0);
        let all = project_earnings(&[], &inputs);
        assert_eq!(all.first().map(|r| r.year), Some(1984));
        assert_eq!(all.last().map(|r| r.year), Some(2031));
        assert_eq!(all.len(), 48);
        assert!(all.iter().all(|r| r.is_projected && r.amount == 85_000.0));
    }

    #[test]
    fn test_indexing_factors() {
        let table = WageIndexTable::published();
        let records = vec![
            EarningRecord::new(1990, 20_000.0),
            EarningRecord::new(2020, 50_000.0),
            EarningRecord::new(2021, 52_000.0),
            EarningRecord::projected(2022, 55_000.0),
        ];

        let out = index_earnings(&records, 2020, &table);
        assert_relative_eq!(out[0].index_factor, 55628.60 / 21027.98, max_relative = 1e-12);
        assert_relative_eq!(out[0].indexed_amount, 20_000.0 * 55628.60 / 21027.98, max_relative = 1e-12);
        for r in &out[1..] {
            assert_eq!(r.index_factor, 1.0);
            assert_eq!(r.indexed_amount, r.raw_amount);
        }
        assert!(out[3].is_projected);
    }

    #[test]
    fn test_year_missing_from_wage_index_is_unindexed() {
        let table = WageIndexTable::published();
        let records = vec![EarningRecord::new(1955, 3_000.0)];
        let out = index_earnings(&records, 2020, &table);
        assert_eq!(out[0].index_factor, 1.0);
        assert_eq!(out[0].indexed_amount, 3_000.0);
    }

    #[test]
    fn test_indexing_year_beyond_table_uses_reference_year() {
        let mut entries = BTreeMap::new();
        entries.insert(2000, 32_000.0);
        entries.insert(2022, 64_000.0);
        let table = WageIndexTable::new(entries);

        let out = index_earnings(&[EarningRecord::new(2000, 10_000.0)], 2030, &table);
        assert_eq!(out[0].index_factor, 2.0);
        assert_eq!(out[0].indexed_amount, 20_000.0);
    }

    #[test]
    fn test_zero_indexing_year_entry_does_not_zero_out_history() {
        let table = WageIndexTable::new(BTreeMap::from([(1990, 20_000.0), (2020, 0.0)]));

        let out = index_earnings(&[EarningRecord::new(1990, 30_000.0)], 2020, &table);
        assert_relative_eq!(out[0].index_factor, 63_761.65 / 20_000.0, max_relative = 1e-12);
        assert!(out[0].indexed_amount > 30_000.0);
    }

    #[test]
    fn test_top35_selection() {
        let records: Vec<_> = (1980..2020).map(|y| indexed(y, (y - 1979) as f64 * 1000.0)).collect();
        let out = select_top_years(&records);

        assert_eq!(out.len(), 40);
        assert_eq!(out.iter().filter(|r| r.used_in_top35).count(), 35);
        // Five lowest years (1980-1984) dropped
        assert!(out[..5].iter().all(|r| !r.used_in_top35));
        assert!(out[5..].iter().all(|r| r.used_in_top35));
    }

    #[test]
    fn test_short_history_uses_all_years() {
        let records = vec![indexed(2001, 1.0), indexed(2000, 0.0), indexed(2002, 5.0)];
        let out = select_top_years(&records);
        assert!(out.iter().all(|r| r.used_in_top35));
        assert_eq!(out.iter().map(|r| r.year).collect::<Vec<_>>(), vec![2000, 2001, 2002]);
    }

    #[test]
    fn test_ties_prefer_more_recent_year() {
        let mut records: Vec<_> = (1990..2024).map(|y| indexed(y, 10_000.0 + y as f64)).collect();
        // Two equal candidates for the last slot
        records.push(indexed(1970, 500.0));
        records.push(indexed(1975, 500.0));

        let out = select_top_years(&records);
        assert_eq!(out.iter().filter(|r| r.used_in_top35).count(), 35);
        let y1970 = out.iter().find(|r| r.year == 1970).unwrap();
        let y1975 = out.iter().find(|r| r.year == 1975).unwrap();
        assert!(!y1970.used_in_top35);
        assert!(y1975.used_in_top35);
    }

    #[test]
    fn test_duplicate_years_flagged_individually() {
        let mut records: Vec<_> = (1980..2015).map(|y| indexed(y, 40_000.0)).collect();
        records.push(indexed(2000, 10.0));

        let out = select_top_years(&records);
        assert_eq!(out.len(), 36);
        assert_eq!(out.iter().filter(|r| r.used_in_top35).count(), 35);
        let dup: Vec<_> = out.iter().filter(|r| r.year == 2000).collect();
        assert_eq!(dup.len(), 2);
        assert_eq!(dup.iter().filter(|r| r.used_in_top35).count(), 1);
    }
}
