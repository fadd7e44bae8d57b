//! Load an earnings history from `Year,Earnings` CSV text
//!
//! The first row is treated as a header when its first cell is not a number or
//! mentions "year". Amount cells may carry quotes, `$` and thousands
//! separators; an unquoted `2023,100,000` is read as 2023 -> 100000.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use super::EarningRecord;
use crate::error::{BenefitError, Result};

/// Years accepted by the loader (exclusive bounds)
pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

fn clean(cell: &str, strip: &[char]) -> String {
    cell.chars().filter(|c| !strip.contains(c)).collect::<String>().trim().to_string()
}

fn is_header(record: &StringRecord) -> bool {
    let first = record.get(0).map(|c| c.trim().to_lowercase()).unwrap_or_default();
    first.contains("year") || (!first.is_empty() && first.parse::<f64>().is_err())
}

fn parse_row(record: &StringRecord) -> Option<EarningRecord> {
    if record.len() < 2 {
        return None;
    }

    let year: i32 = clean(&record[0], &['"', '\'']).parse().ok()?;
    let amount_text: String = record.iter().skip(1).collect();
    let amount: f64 = clean(&amount_text, &['"', '$', ',']).parse().ok()?;

    if year <= MIN_YEAR || year >= MAX_YEAR || !amount.is_finite() || amount < 0.0 {
        return None;
    }
    Some(EarningRecord::new(year, amount))
}

/// Load earnings from any reader (e.g., string buffer, uploaded file)
pub fn load_earnings_from_reader<R: Read>(reader: R) -> Result<Vec<EarningRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (i, result) in csv_reader.records().enumerate() {
        let row = result?;
        if i == 0 && is_header(&row) {
            continue;
        }
        match parse_row(&row) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        log::debug!("skipped {} unparseable earnings rows", skipped);
    }
    if records.is_empty() {
        return Err(BenefitError::NoEarnings);
    }
    Ok(records)
}

/// Load earnings from CSV text
pub fn parse_earnings(text: &str) -> Result<Vec<EarningRecord>> {
    load_earnings_from_reader(text.as_bytes())
}

/// Load earnings from a CSV file
pub fn load_earnings<P: AsRef<Path>>(path: P) -> Result<Vec<EarningRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| BenefitError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_earnings_from_reader(file)
}
