use chrono::{Datelike, NaiveDate, Weekday};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Full English name for a 1-based month.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1..=12 => MONTH_NAMES[month as usize - 1],
        _ => "Unknown",
    }
}

/// Full English name for a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_sunday() as usize]
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    match (
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
        NaiveDate::from_ymd_opt(year, month, 1),
    ) {
        (Some(next), Some(first)) => next.signed_duration_since(first).num_days() as u32,
        _ => 31,
    }
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(days_in_month(date.year(), date.month()))
        .unwrap_or(date)
}

/// Shifts `date` by whole months, clamping the day to the target month's length.
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let month = date.month() as i32;
    let new_total = month - 1 + months;
    let new_month = (new_total.rem_euclid(12) + 1) as u32;
    let new_year = date.year() + new_total.div_euclid(12);
    clamp_ymd(new_year, new_month, date.day()).unwrap_or(date)
}

pub fn add_years(date: NaiveDate, years: i32) -> NaiveDate {
    clamp_ymd(date.year() + years, date.month(), date.day()).unwrap_or(date)
}

/// Moves `date` to the 1-based `month` of the same year (day clamped).
pub fn with_month_clamped(date: NaiveDate, month: u32) -> NaiveDate {
    clamp_ymd(date.year(), month, date.day()).unwrap_or(date)
}

/// Moves `date` to `year`, keeping month and day (Feb 29 becomes Feb 28).
pub fn with_year_clamped(date: NaiveDate, year: i32) -> NaiveDate {
    clamp_ymd(year, date.month(), date.day()).unwrap_or(date)
}

fn clamp_ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let day = day.min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Number of columns `weekday` sits after `first` in a row starting on `first`.
pub fn weekday_offset(weekday: Weekday, first: Weekday) -> u32 {
    let w = weekday.num_days_from_sunday() as i32;
    let f = first.num_days_from_sunday() as i32;
    (w - f).rem_euclid(7) as u32
}

/// Maps 0 = Sunday .. 6 = Saturday to a `Weekday`.
pub fn weekday_from_sunday(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_add_months_forward() {
        assert_eq!(add_months(d(2025, 1, 15), 1), d(2025, 2, 15));
    }

    #[test]
    fn test_add_months_across_year() {
        assert_eq!(add_months(d(2025, 12, 1), 1), d(2026, 1, 1));
    }

    #[test]
    fn test_add_months_backward_across_year() {
        assert_eq!(add_months(d(2025, 1, 10), -1), d(2024, 12, 10));
        assert_eq!(add_months(d(2025, 3, 10), -15), d(2023, 12, 10));
    }

    #[test]
    fn test_add_months_clamps_month_end() {
        assert_eq!(add_months(d(2025, 1, 31), 1), d(2025, 2, 28));
        assert_eq!(add_months(d(2024, 1, 31), 1), d(2024, 2, 29));
        assert_eq!(add_months(d(2025, 3, 31), -1), d(2025, 2, 28));
    }

    #[test]
    fn test_add_years_leap_day() {
        assert_eq!(add_years(d(2024, 2, 29), 1), d(2025, 2, 28));
        assert_eq!(add_years(d(2024, 2, 29), 4), d(2028, 2, 29));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 12), 31);
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(start_of_month(d(2024, 2, 17)), d(2024, 2, 1));
        assert_eq!(end_of_month(d(2024, 2, 17)), d(2024, 2, 29));
    }

    #[test]
    fn test_with_month_clamped() {
        assert_eq!(with_month_clamped(d(2024, 3, 31), 4), d(2024, 4, 30));
        assert_eq!(with_month_clamped(d(2024, 3, 31), 13), d(2024, 3, 31));
    }

    #[test]
    fn test_with_year_clamped() {
        assert_eq!(with_year_clamped(d(2024, 2, 29), 2023), d(2023, 2, 28));
        assert_eq!(with_year_clamped(d(2024, 7, 4), 1999), d(1999, 7, 4));
    }

    #[test]
    fn test_weekday_offset_wraps() {
        assert_eq!(weekday_offset(Weekday::Sun, Weekday::Sun), 0);
        assert_eq!(weekday_offset(Weekday::Sun, Weekday::Mon), 6);
        assert_eq!(weekday_offset(Weekday::Wed, Weekday::Mon), 2);
        assert_eq!(weekday_offset(Weekday::Sat, Weekday::Sat), 0);
    }

    #[test]
    fn test_weekday_from_sunday() {
        assert_eq!(weekday_from_sunday(0), Some(Weekday::Sun));
        assert_eq!(weekday_from_sunday(6), Some(Weekday::Sat));
        assert_eq!(weekday_from_sunday(7), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(13), "Unknown");
        assert_eq!(weekday_name(Weekday::Thu), "Thursday");
    }
}
