//! Earnings history, personal inputs and CSV history loading

mod data;
pub mod loader;

pub use data::{EarningRecord, PersonalInputs, INDEXING_AGE, ELIGIBILITY_AGE, EMPTY_HISTORY_FLOOR_AGE};
pub use loader::{load_earnings, load_earnings_from_reader, parse_earnings};
