/// Calendar helpers: year bounds, day-of-year ordinals and weekday rules
use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::{HolidayError, Result};

/// First day of the year, or `InvalidYear` if chrono cannot represent it
pub fn first_day_of_year(year: i32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1).ok_or(HolidayError::InvalidYear(year))
}

/// Last day of the year, or `InvalidYear` if chrono cannot represent it
pub fn last_day_of_year(year: i32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 12, 31).ok_or(HolidayError::InvalidYear(year))
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_year(year: i32) -> usize {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Date for a 0-based day-of-year ordinal (0 = January 1)
pub fn date_from_ordinal0(year: i32, ordinal0: usize) -> Result<NaiveDate> {
    let ordinal = u32::try_from(ordinal0 + 1)
        .map_err(|_| HolidayError::InvalidParameter(format!("ordinal {} out of range", ordinal0)))?;
    NaiveDate::from_yo_opt(year, ordinal).ok_or_else(|| {
        HolidayError::InvalidParameter(format!("day {} does not exist in year {}", ordinal, year))
    })
}

/// Every date of the year in ascending order
pub fn dates_in_year(year: i32) -> Result<Vec<NaiveDate>> {
    let first = first_day_of_year(year)?;
    Ok(first.iter_days().take(days_in_year(year)).collect())
}

/// Get the nth occurrence (1-based) of a weekday in a month
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, n: u8) -> Result<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, n).ok_or_else(|| {
        HolidayError::InvalidParameter(format!(
            "no occurrence {} of {} in {}-{:02}",
            n, weekday, year, month
        ))
    })
}

/// Get the last occurrence of a weekday in a month
pub fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Result<NaiveDate> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or(HolidayError::InvalidYear(year))?;

    let last_of_month = first_of_next - Duration::days(1);
    let back = (7 + last_of_month.weekday().num_days_from_monday()
        - weekday.num_days_from_monday())
        % 7;
    Ok(last_of_month - Duration::days(i64::from(back)))
}

/// Short weekday name as printed in reports ("Mon", "Tue", ...)
pub fn weekday_abbrev(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2025));
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(2025), 365);
    }

    #[test]
    fn test_dates_in_year() {
        let dates = dates_in_year(2024).unwrap();
        assert_eq!(dates.len(), 366);
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(dates[365], NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }

    #[test]
    fn test_date_from_ordinal0() {
        assert_eq!(
            date_from_ordinal0(2025, 58).unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
        assert_eq!(
            date_from_ordinal0(2024, 59).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(date_from_ordinal0(2025, 365).is_err());
    }

    #[test]
    fn test_nth_weekday() {
        // 3rd Monday of January 2025
        assert_eq!(
            nth_weekday_of_month(2025, 1, Weekday::Mon, 3).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 20).unwrap()
        );
        // 4th Thursday of November 2024
        assert_eq!(
            nth_weekday_of_month(2024, 11, Weekday::Thu, 4).unwrap(),
            NaiveDate::from_ymd_opt(2024, 11, 28).unwrap()
        );
        assert!(nth_weekday_of_month(2025, 2, Weekday::Mon, 5).is_err());
    }

    #[test]
    fn test_last_weekday() {
        assert_eq!(
            last_weekday_of_month(2025, 5, Weekday::Mon).unwrap(),
            NaiveDate::from_ymd_opt(2025, 5, 26).unwrap()
        );
        // May 31, 2021 is itself a Monday
        assert_eq!(
            last_weekday_of_month(2021, 5, Weekday::Mon).unwrap(),
            NaiveDate::from_ymd_opt(2021, 5, 31).unwrap()
        );
        assert_eq!(
            last_weekday_of_month(2025, 12, Weekday::Wed).unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_invalid_year() {
        assert!(matches!(first_day_of_year(i32::MAX), Err(HolidayError::InvalidYear(_))));
    }

    #[test]
    fn test_weekday_abbrev() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(weekday_abbrev(date), "Wed");
    }
}
