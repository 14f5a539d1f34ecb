/// Days-until-next-holiday cost function
///
/// The cost of a holiday set is the sum, over every day of the year, of the
/// number of days until the next holiday at or after that day. Days after the
/// last holiday of the year count towards the first fixed holiday of the
/// following year; voluntary holidays never carry over.
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

use crate::error::{HolidayError, Result};
use crate::time::calendar::days_in_year;
use crate::time::holidays::first_fixed_holiday;

/// Ordinal (relative to January 1 of `year`) of the first fixed holiday of `year + 1`
pub fn wrap_ordinal(year: i32) -> Result<usize> {
    let next_year = year.checked_add(1).ok_or(HolidayError::InvalidYear(year))?;
    let first_next = first_fixed_holiday(next_year)?;
    Ok(days_in_year(year) + first_next.ordinal0() as usize)
}

/// Sorted, de-duplicated 0-based ordinals of `holidays`, all of which must fall in `year`
pub fn holiday_ordinals<'a, I>(year: i32, holidays: I) -> Result<Vec<usize>>
where
    I: IntoIterator<Item = &'a NaiveDate>,
{
    let mut ordinals = Vec::new();
    for date in holidays {
        if date.year() != year {
            return Err(HolidayError::DateOutsideYear { date: *date, year });
        }
        ordinals.push(date.ordinal0() as usize);
    }
    ordinals.sort_unstable();
    ordinals.dedup();
    Ok(ordinals)
}

/// Sum of days-until-next-holiday over every day of `year`
pub fn total_days_until_holiday(year: i32, holidays: &BTreeSet<NaiveDate>) -> Result<u64> {
    if holidays.is_empty() {
        return Err(HolidayError::EmptyHolidaySet);
    }
    let ordinals = holiday_ordinals(year, holidays)?;
    let profile = DaysUntilProfile::new(days_in_year(year), wrap_ordinal(year)?, &ordinals)?;
    Ok(profile.total())
}

/// Per-day days-until-next-holiday for one holiday set, maintained incrementally
#[derive(Debug, Clone)]
pub struct DaysUntilProfile {
    days_until: Vec<u32>,
    /// First day of the block that shares a day's next holiday
    block_start: Vec<usize>,
    is_holiday: Vec<bool>,
    wrap: usize,
    total: u64,
}

impl DaysUntilProfile {
    /// Build the profile with a single reverse scan over the year
    pub fn new(num_days: usize, wrap: usize, ordinals: &[usize]) -> Result<Self> {
        if ordinals.is_empty() {
            return Err(HolidayError::EmptyHolidaySet);
        }
        if wrap < num_days {
            return Err(HolidayError::InvalidParameter(format!(
                "wrap ordinal {} lies inside a {}-day year",
                wrap, num_days
            )));
        }

        let mut is_holiday = vec![false; num_days];
        for &ordinal in ordinals {
            let slot = is_holiday.get_mut(ordinal).ok_or_else(|| {
                HolidayError::InvalidParameter(format!(
                    "holiday ordinal {} outside a {}-day year",
                    ordinal, num_days
                ))
            })?;
            *slot = true;
        }

        let mut days_until = vec![0u32; num_days];
        let mut next = wrap;
        let mut total = 0u64;
        for day in (0..num_days).rev() {
            if is_holiday[day] {
                next = day;
            }
            let distance = (next - day) as u32;
            days_until[day] = distance;
            total += u64::from(distance);
        }

        let mut block_start = vec![0usize; num_days];
        let mut start = 0;
        for day in 0..num_days {
            block_start[day] = start;
            if is_holiday[day] {
                start = day + 1;
            }
        }

        Ok(DaysUntilProfile {
            days_until,
            block_start,
            is_holiday,
            wrap,
            total,
        })
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn num_days(&self) -> usize {
        self.days_until.len()
    }

    pub fn wrap(&self) -> usize {
        self.wrap
    }

    pub fn days_until(&self) -> &[u32] {
        &self.days_until
    }

    pub fn is_holiday(&self, ordinal: usize) -> bool {
        self.is_holiday.get(ordinal).copied().unwrap_or(false)
    }

    /// Reduction of the total if `ordinal` became a holiday
    pub fn gain_if_added(&self, ordinal: usize) -> u64 {
        if ordinal >= self.num_days() || self.is_holiday[ordinal] {
            return 0;
        }
        let shortened = (ordinal - self.block_start[ordinal] + 1) as u64;
        shortened * u64::from(self.days_until[ordinal])
    }

    /// Mark `ordinal` as a holiday. Returns the gain, or `None` if it already was one.
    pub fn add(&mut self, ordinal: usize) -> Option<u64> {
        if ordinal >= self.num_days() || self.is_holiday[ordinal] {
            return None;
        }
        let gain = self.gain_if_added(ordinal);
        let step = self.days_until[ordinal];
        let next = ordinal + step as usize;

        for day in self.block_start[ordinal]..=ordinal {
            self.days_until[day] -= step;
        }
        for day in (ordinal + 1)..=next.min(self.num_days() - 1) {
            self.block_start[day] = ordinal + 1;
        }
        self.is_holiday[ordinal] = true;
        self.total -= gain;
        Some(gain)
    }
}

fn triangular(n: u64) -> u64 {
    n * (n + 1) / 2
}

/// Same metric as the reverse scan, computed from sorted holiday ordinals in O(#holidays)
pub fn gap_cost(sorted_ordinals: &[usize], num_days: usize, wrap: usize) -> u64 {
    debug_assert!(!sorted_ordinals.is_empty());
    debug_assert!(sorted_ordinals.windows(2).all(|w| w[0] < w[1]));

    let mut total = 0u64;
    let mut start = 0usize;
    for &holiday in sorted_ordinals {
        total += triangular((holiday - start) as u64);
        start = holiday + 1;
    }
    // Days after the last holiday count towards the wrap ordinal
    if start < num_days {
        total += triangular((wrap - start) as u64) - triangular((wrap - num_days) as u64);
    }
    total
}
