pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod optimizer;
pub mod report;
pub mod time;
pub mod types;

pub use error::{HolidayError, Result};
pub use optimizer::{
    compute_optimization_result, find_best_voluntary_holidays, total_days_until_holiday,
    SearchOutcome,
};
pub use time::compute_fixed_holidays;
pub use types::*;
