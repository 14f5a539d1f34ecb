/// Fixed holiday calendar (US federal style rules)
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::BTreeSet;

use super::calendar::{last_weekday_of_month, nth_weekday_of_month};
use crate::error::{HolidayError, Result};
use crate::types::FixedHoliday;

/// How a holiday resolves to a date in a given year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayRule {
    /// Same month and day every year
    Fixed { month: u32, day: u32 },
    /// Nth occurrence of a weekday in a month
    NthWeekday { month: u32, weekday: Weekday, n: u8 },
    /// Last occurrence of a weekday in a month
    LastWeekday { month: u32, weekday: Weekday },
    /// Offset from another rule in the table
    DayAfter(&'static str),
}

/// Name and rule for every fixed holiday. `DayAfter` must refer to an earlier entry.
pub const HOLIDAY_RULES: &[(&str, HolidayRule)] = &[
    ("New Year's Day", HolidayRule::Fixed { month: 1, day: 1 }),
    ("MLK Day", HolidayRule::NthWeekday { month: 1, weekday: Weekday::Mon, n: 3 }),
    ("Memorial Day", HolidayRule::LastWeekday { month: 5, weekday: Weekday::Mon }),
    ("Independence Day", HolidayRule::Fixed { month: 7, day: 4 }),
    ("Labor Day", HolidayRule::NthWeekday { month: 9, weekday: Weekday::Mon, n: 1 }),
    ("Thanksgiving Day", HolidayRule::NthWeekday { month: 11, weekday: Weekday::Thu, n: 4 }),
    ("Day After Thanksgiving", HolidayRule::DayAfter("Thanksgiving Day")),
    ("Christmas Eve", HolidayRule::Fixed { month: 12, day: 24 }),
    ("Christmas Day", HolidayRule::Fixed { month: 12, day: 25 }),
];

impl HolidayRule {
    fn resolve(&self, year: i32, resolved: &[FixedHoliday]) -> Result<NaiveDate> {
        match *self {
            HolidayRule::Fixed { month, day } => {
                NaiveDate::from_ymd_opt(year, month, day).ok_or(HolidayError::InvalidYear(year))
            }
            HolidayRule::NthWeekday { month, weekday, n } => {
                nth_weekday_of_month(year, month, weekday, n)
            }
            HolidayRule::LastWeekday { month, weekday } => {
                last_weekday_of_month(year, month, weekday)
            }
            HolidayRule::DayAfter(base) => resolved
                .iter()
                .find(|h| h.name == base)
                .map(|h| h.date + Duration::days(1))
                .ok_or_else(|| {
                    HolidayError::ConfigError(format!("holiday rule refers to unknown holiday '{}'", base))
                }),
        }
    }
}

/// Get all fixed holidays for a year, sorted by date
pub fn compute_fixed_holidays(year: i32) -> Result<Vec<FixedHoliday>> {
    let mut holidays: Vec<FixedHoliday> = Vec::with_capacity(HOLIDAY_RULES.len());

    for (name, rule) in HOLIDAY_RULES {
        let date = rule.resolve(year, &holidays)?;
        holidays.push(FixedHoliday::new(*name, date));
    }

    holidays.sort_by_key(|h| h.date);
    Ok(holidays)
}

/// Dates of the fixed holidays for a year
pub fn fixed_holiday_dates(year: i32) -> Result<BTreeSet<NaiveDate>> {
    Ok(compute_fixed_holidays(year)?.into_iter().map(|h| h.date).collect())
}

/// Earliest fixed holiday of a year
pub fn first_fixed_holiday(year: i32) -> Result<NaiveDate> {
    compute_fixed_holidays(year)?
        .first()
        .map(|h| h.date)
        .ok_or(HolidayError::EmptyHolidaySet)
}

/// Check if a date is one of the fixed holidays of its year
pub fn is_fixed_holiday(date: NaiveDate) -> Result<bool> {
    Ok(fixed_holiday_dates(date.year())?.contains(&date))
}
