/// Voluntary holiday search: greedy forward selection and exhaustive enumeration
use chrono::NaiveDate;
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

use super::cost::{gap_cost, holiday_ordinals, wrap_ordinal, DaysUntilProfile};
use crate::error::{HolidayError, Result};
use crate::time::calendar::{date_from_ordinal0, days_in_year};
use crate::types::SearchMode;

/// Exact mode logs a warning when asked to enumerate more combinations than this
pub const DEFAULT_EXACT_WARN_THRESHOLD: u128 = 50_000_000;

/// Chosen voluntary holidays and the resulting total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub selected: Vec<NaiveDate>,
    pub total: u64,
    /// Number of combinations scored (exact mode only)
    pub combinations_evaluated: Option<u128>,
}

/// Binomial coefficient C(n, k), saturating at `u128::MAX`
pub fn combination_count(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        // result * (n - i) / (i + 1) stays an integer at every step
        result = match result.checked_mul((n - i) as u128) {
            Some(product) => product / (i as u128 + 1),
            None => return u128::MAX,
        };
    }
    result
}

/// Lexicographic k-combinations of `0..n`, yielding index slices
struct Combinations {
    indices: Vec<usize>,
    n: usize,
    first: bool,
    done: bool,
}

impl Combinations {
    fn new(n: usize, k: usize) -> Self {
        Combinations {
            indices: (0..k).collect(),
            n,
            first: true,
            done: k > n,
        }
    }

    fn next_combination(&mut self) -> Option<&[usize]> {
        if self.done {
            return None;
        }
        if self.first {
            self.first = false;
            return Some(self.indices.as_slice());
        }

        let k = self.indices.len();
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                return None;
            }
            i -= 1;
            if self.indices[i] != i + self.n - k {
                break;
            }
        }
        self.indices[i] += 1;
        for j in (i + 1)..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.indices.as_slice())
    }
}

/// Merge two ascending, disjoint ordinal lists into `out`
fn merge_sorted(a: &[usize], b: &[usize], out: &mut Vec<usize>) {
    out.clear();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i] < b[j] {
            out.push(a[i]);
            i += 1;
        } else {
            out.push(b[j]);
            j += 1;
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
}

/// Search state for one year and one set of fixed holidays
pub struct SearchEngine {
    year: i32,
    num_days: usize,
    wrap: usize,
    fixed: Vec<usize>,
    candidates: Vec<usize>,
    exact_warn_threshold: u128,
}

impl SearchEngine {
    pub fn new(year: i32, fixed: &BTreeSet<NaiveDate>) -> Result<Self> {
        if fixed.is_empty() {
            return Err(HolidayError::EmptyHolidaySet);
        }
        let fixed = holiday_ordinals(year, fixed)?;
        let num_days = days_in_year(year);
        let candidates = (0..num_days)
            .filter(|ordinal| fixed.binary_search(ordinal).is_err())
            .collect();

        Ok(SearchEngine {
            year,
            num_days,
            wrap: wrap_ordinal(year)?,
            fixed,
            candidates,
            exact_warn_threshold: DEFAULT_EXACT_WARN_THRESHOLD,
        })
    }

    pub fn with_exact_warn_threshold(mut self, threshold: u128) -> Self {
        self.exact_warn_threshold = threshold;
        self
    }

    /// Days of the year that are not fixed holidays, ascending
    pub fn candidate_dates(&self) -> Result<Vec<NaiveDate>> {
        self.candidates
            .iter()
            .map(|&ordinal| date_from_ordinal0(self.year, ordinal))
            .collect()
    }

    pub fn num_candidates(&self) -> usize {
        self.candidates.len()
    }

    pub fn baseline_total(&self) -> u64 {
        gap_cost(&self.fixed, self.num_days, self.wrap)
    }

    fn check_feasible(&self, k: usize) -> Result<()> {
        if k > self.candidates.len() {
            return Err(HolidayError::InfeasibleRequest {
                requested: k,
                available: self.candidates.len(),
            });
        }
        Ok(())
    }

    pub fn run(&self, k: usize, mode: SearchMode) -> Result<SearchOutcome> {
        match mode {
            SearchMode::Exact => self.exact(k),
            SearchMode::Greedy => self.greedy(k),
        }
    }

    /// Pick one day per round, the one with the largest reduction; ties go to the earliest date
    pub fn greedy(&self, k: usize) -> Result<SearchOutcome> {
        self.check_feasible(k)?;
        info!("Greedy search for {} voluntary holiday(s) in {}", k, self.year);

        let mut profile = DaysUntilProfile::new(self.num_days, self.wrap, &self.fixed)?;
        let mut selected = Vec::with_capacity(k);

        for round in 0..k {
            let mut best: Option<(usize, u64)> = None;
            for &candidate in &self.candidates {
                if profile.is_holiday(candidate) {
                    continue;
                }
                let gain = profile.gain_if_added(candidate);
                if best.map_or(true, |(_, best_gain)| gain > best_gain) {
                    best = Some((candidate, gain));
                }
            }

            let (ordinal, gain) = best.ok_or(HolidayError::InfeasibleRequest {
                requested: k,
                available: round,
            })?;
            profile.add(ordinal);
            selected.push(ordinal);
            debug!(
                "Round {}: picked day {} (gain {}, total now {})",
                round + 1,
                ordinal + 1,
                gain,
                profile.total()
            );
        }

        selected.sort_unstable();
        Ok(SearchOutcome {
            selected: self.to_dates(&selected)?,
            total: profile.total(),
            combinations_evaluated: None,
        })
    }

    /// Score every k-combination of candidates; ties go to the lexicographically first set
    pub fn exact(&self, k: usize) -> Result<SearchOutcome> {
        self.check_feasible(k)?;
        let expected = combination_count(self.candidates.len(), k);
        info!(
            "Exact search for {} voluntary holiday(s) in {}: {} combinations",
            k, self.year, expected
        );
        if expected > self.exact_warn_threshold {
            warn!(
                "Exact search over {} combinations may take a long time; consider --mode greedy",
                expected
            );
        }

        let mut combinations = Combinations::new(self.candidates.len(), k);
        let mut chosen: Vec<usize> = Vec::with_capacity(k);
        let mut merged: Vec<usize> = Vec::with_capacity(self.fixed.len() + k);
        let mut best: Option<(u64, Vec<usize>)> = None;
        let mut evaluated: u128 = 0;

        while let Some(indices) = combinations.next_combination() {
            chosen.clear();
            chosen.extend(indices.iter().map(|&i| self.candidates[i]));
            merge_sorted(&self.fixed, &chosen, &mut merged);

            let total = gap_cost(&merged, self.num_days, self.wrap);
            evaluated += 1;
            if best.as_ref().map_or(true, |(best_total, _)| total < *best_total) {
                best = Some((total, chosen.clone()));
            }
        }

        let (total, selected) = best.ok_or(HolidayError::InfeasibleRequest {
            requested: k,
            available: self.candidates.len(),
        })?;
        debug!("Exact search evaluated {} combinations, best total {}", evaluated, total);

        Ok(SearchOutcome {
            selected: self.to_dates(&selected)?,
            total,
            combinations_evaluated: Some(evaluated),
        })
    }

    fn to_dates(&self, ordinals: &[usize]) -> Result<Vec<NaiveDate>> {
        ordinals
            .iter()
            .map(|&ordinal| date_from_ordinal0(self.year, ordinal))
            .collect()
    }
}

/// Find the `k` voluntary holidays that minimize the days-until-holiday total
pub fn find_best_voluntary_holidays(
    year: i32,
    fixed: &BTreeSet<NaiveDate>,
    k: usize,
    mode: SearchMode,
) -> Result<SearchOutcome> {
    SearchEngine::new(year, fixed)?.run(k, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimizer::cost::total_days_until_holiday;
    use crate::time::holidays::fixed_holiday_dates;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_combination_count() {
        assert_eq!(combination_count(356, 0), 1);
        assert_eq!(combination_count(356, 1), 356);
        assert_eq!(combination_count(356, 2), 63190);
        assert_eq!(combination_count(5, 6), 0);
        assert_eq!(combination_count(10, 10), 1);
    }

    #[test]
    fn test_combinations_enumerates_all() {
        let mut combinations = Combinations::new(5, 3);
        let mut seen = Vec::new();
        while let Some(c) = combinations.next_combination() {
            seen.push(c.to_vec());
        }
        assert_eq!(seen.len(), 10);
        assert_eq!(seen.first().unwrap(), &vec![0, 1, 2]);
        assert_eq!(seen.last().unwrap(), &vec![2, 3, 4]);
    }

    #[test]
    fn test_combinations_of_zero() {
        let mut combinations = Combinations::new(4, 0);
        assert_eq!(combinations.next_combination(), Some(&[][..]));
        assert_eq!(combinations.next_combination(), None);
    }

    #[test]
    fn test_candidates_exclude_fixed() {
        let fixed = fixed_holiday_dates(2025).unwrap();
        let engine = SearchEngine::new(2025, &fixed).unwrap();
        let candidates = engine.candidate_dates().unwrap();
        assert_eq!(candidates.len(), 356);
        assert_eq!(engine.num_candidates(), 356);
        assert_eq!(engine.baseline_total(), 14585);
        assert!(candidates.iter().all(|d| !fixed.contains(d)));
    }

    #[test]
    fn test_greedy_2025_five() {
        let fixed = fixed_holiday_dates(2025).unwrap();
        let outcome = find_best_voluntary_holidays(2025, &fixed, 5, SearchMode::Greedy).unwrap();
        assert_eq!(
            outcome.selected,
            vec![
                ymd(2025, 2, 20),
                ymd(2025, 3, 24),
                ymd(2025, 4, 24),
                ymd(2025, 8, 2),
                ymd(2025, 10, 14),
            ]
        );
        assert_eq!(outcome.total, 5870);
        assert_eq!(outcome.combinations_evaluated, None);
    }

    #[test]
    fn test_exact_2025_small_k() {
        let fixed = fixed_holiday_dates(2025).unwrap();
        let one = find_best_voluntary_holidays(2025, &fixed, 1, SearchMode::Exact).unwrap();
        assert_eq!(one.selected, vec![ymd(2025, 3, 24)]);
        assert_eq!(one.total, 10616);
        assert_eq!(one.combinations_evaluated, Some(356));

        let two = find_best_voluntary_holidays(2025, &fixed, 2, SearchMode::Exact).unwrap();
        assert_eq!(two.selected, vec![ymd(2025, 3, 24), ymd(2025, 10, 14)]);
        assert_eq!(two.total, 8724);
        assert_eq!(two.combinations_evaluated, Some(63190));
    }

    #[test]
    fn test_zero_holidays_returns_baseline() {
        let fixed = fixed_holiday_dates(2025).unwrap();
        for mode in [SearchMode::Exact, SearchMode::Greedy] {
            let outcome = find_best_voluntary_holidays(2025, &fixed, 0, mode).unwrap();
            assert!(outcome.selected.is_empty());
            assert_eq!(outcome.total, 14585);
        }
    }

    #[test]
    fn test_infeasible_count() {
        let fixed = fixed_holiday_dates(2025).unwrap();
        let err = find_best_voluntary_holidays(2025, &fixed, 357, SearchMode::Greedy).unwrap_err();
        assert!(matches!(
            err,
            HolidayError::InfeasibleRequest { requested: 357, available: 356 }
        ));
    }

    #[test]
    fn test_greedy_total_matches_cost_function() {
        let fixed = fixed_holiday_dates(2024).unwrap();
        let outcome = find_best_voluntary_holidays(2024, &fixed, 7, SearchMode::Greedy).unwrap();
        let mut all = fixed.clone();
        all.extend(outcome.selected.iter().copied());
        assert_eq!(total_days_until_holiday(2024, &all).unwrap(), outcome.total);
    }

    #[test]
    fn test_greedy_can_fill_every_candidate() {
        let fixed = fixed_holiday_dates(2025).unwrap();
        let outcome = find_best_voluntary_holidays(2025, &fixed, 356, SearchMode::Greedy).unwrap();
        assert_eq!(outcome.selected.len(), 356);
        assert_eq!(outcome.total, 0);
    }
}
