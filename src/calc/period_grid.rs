use crate::calc::dates::MONTH_NAMES;
use crate::calc::validity::Bounds;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

pub const YEAR_RANGE: i32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCell {
    /// 1-based month number.
    pub month: u32,
    pub name: &'static str,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_valid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearCell {
    pub year: i32,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_valid: bool,
}

/// A fixed block of `YEAR_RANGE` years, `min_year` always congruent to 1 mod the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearWindow {
    pub min_year: i32,
    pub max_year: i32,
}

impl YearWindow {
    /// The window containing `year`. Away from exact multiples of the range this is
    /// `year - year % 20 + 1`; a multiple of 20 closes the window that ends on it.
    pub fn containing(year: i32) -> Self {
        let min_year = year - (year - 1).rem_euclid(YEAR_RANGE);
        YearWindow {
            min_year,
            max_year: min_year + YEAR_RANGE - 1,
        }
    }

    pub fn next(self) -> Self {
        Self::containing(self.min_year + YEAR_RANGE)
    }

    pub fn prev(self) -> Self {
        Self::containing(self.min_year - YEAR_RANGE)
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.min_year..=self.max_year).contains(&year)
    }

    pub fn label(&self) -> String {
        format!("{} - {}", self.min_year, self.max_year)
    }
}

/// The twelve months of the anchor's year. A month is selected only when
/// `selected` falls inside it.
pub fn build_month_grid(
    anchor: NaiveDate,
    selected: Option<NaiveDate>,
    today: NaiveDate,
    bounds: &Bounds,
) -> Vec<MonthCell> {
    let year = anchor.year();
    (1..=12u32)
        .map(|month| MonthCell {
            month,
            name: MONTH_NAMES[month as usize - 1],
            is_today: year == today.year() && month == today.month(),
            is_selected: selected.is_some_and(|s| s.year() == year && s.month() == month),
            is_valid: bounds.is_valid_month(year, month),
        })
        .collect()
}

pub fn build_year_grid(
    window: YearWindow,
    selected: Option<NaiveDate>,
    today: NaiveDate,
    bounds: &Bounds,
) -> Vec<YearCell> {
    (window.min_year..=window.max_year)
        .map(|year| YearCell {
            year,
            is_today: year == today.year(),
            is_selected: selected.is_some_and(|s| s.year() == year),
            is_valid: bounds.is_valid_year(year),
        })
        .collect()
}
