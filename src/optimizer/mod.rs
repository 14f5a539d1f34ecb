pub mod cost;
pub mod search;

pub use cost::{gap_cost, total_days_until_holiday, wrap_ordinal, DaysUntilProfile};
pub use search::{
    combination_count, find_best_voluntary_holidays, SearchEngine, SearchOutcome,
    DEFAULT_EXACT_WARN_THRESHOLD,
};

use chrono::NaiveDate;
use std::collections::BTreeSet;
use tracing::info;

use crate::error::{HolidayError, Result};
use crate::time::calendar::days_in_year;
use crate::time::holidays::compute_fixed_holidays;
use crate::types::{OptimizationResult, SearchMode, VoluntaryHoliday};

/// Convert a user-supplied count into a usable one, rejecting negatives
pub fn validate_count(raw: i64) -> Result<usize> {
    if raw < 0 {
        return Err(HolidayError::InvalidParameter(format!(
            "number of voluntary holidays must be non-negative, got {}",
            raw
        )));
    }
    usize::try_from(raw).map_err(|_| {
        HolidayError::InvalidParameter(format!("number of voluntary holidays {} is too large", raw))
    })
}

/// Fixed holidays -> baseline -> search -> summary for one year
pub fn compute_optimization_result(
    year: i32,
    num_voluntary_holidays: usize,
    mode: SearchMode,
    exact_warn_threshold: u128,
) -> Result<OptimizationResult> {
    let fixed_holidays = compute_fixed_holidays(year)?;
    let fixed_dates: BTreeSet<NaiveDate> = fixed_holidays.iter().map(|h| h.date).collect();

    let baseline_total = total_days_until_holiday(year, &fixed_dates)?;
    info!("Baseline total for {}: {}", year, baseline_total);

    let engine = SearchEngine::new(year, &fixed_dates)?.with_exact_warn_threshold(exact_warn_threshold);
    let outcome = engine.run(num_voluntary_holidays, mode)?;

    // Re-score the final set with the reference cost function
    let mut all_dates = fixed_dates;
    all_dates.extend(outcome.selected.iter().copied());
    let optimized_total = total_days_until_holiday(year, &all_dates)?;
    debug_assert_eq!(optimized_total, outcome.total);

    let improvement = baseline_total.saturating_sub(optimized_total);
    let improvement_pct = if baseline_total > 0 {
        improvement as f64 / baseline_total as f64 * 100.0
    } else {
        0.0
    };

    info!(
        "Optimized total for {}: {} ({} days better)",
        year, optimized_total, improvement
    );

    Ok(OptimizationResult {
        year,
        fixed_holidays,
        num_voluntary_holidays,
        mode,
        baseline_total,
        voluntary_holidays: outcome.selected.into_iter().map(VoluntaryHoliday::from).collect(),
        optimized_total,
        improvement,
        improvement_pct,
        average_days_per_day: optimized_total as f64 / days_in_year(year) as f64,
        combinations_evaluated: outcome.combinations_evaluated,
    })
}
