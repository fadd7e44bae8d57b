//! Error types for the benefit estimator

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenefitError {
    /// A reference table has no rows at all, so no fallback can apply
    #[error("Reference data missing: {table} table is empty")]
    EmptyReferenceTable { table: &'static str },

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid value in {table} row {row}: {reason}")]
    InvalidRow {
        table: &'static str,
        row: usize,
        reason: String,
    },

    #[error("No valid earnings records found. Expected format: Year, Earnings (e.g. 1990, 25000)")]
    NoEarnings,
}

pub type Result<T> = std::result::Result<T, BenefitError>;
