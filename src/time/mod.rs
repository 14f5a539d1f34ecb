pub mod calendar;
pub mod holidays;

pub use calendar::{days_in_year, is_leap_year, last_weekday_of_month, nth_weekday_of_month};
pub use holidays::{compute_fixed_holidays, first_fixed_holiday, fixed_holiday_dates, HolidayRule};
