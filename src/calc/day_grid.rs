use crate::calc::dates::{end_of_month, start_of_month, weekday_offset};
use crate::calc::validity::Bounds;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;

/// One calendar date in the day view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub day: u32,
    /// 1-based month of `date`, which differs from the anchor for padding days.
    pub month: u32,
    pub year: i32,
    pub in_current_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_valid: bool,
}

/// What every grid builder needs besides the anchor.
#[derive(Debug, Clone, Copy)]
pub struct GridContext {
    pub today: NaiveDate,
    /// The date shown as selected, if any.
    pub selected: Option<NaiveDate>,
    pub bounds: Bounds,
}

impl GridContext {
    fn day_cell(&self, date: NaiveDate, in_current_month: bool) -> DayCell {
        DayCell {
            date,
            day: date.day(),
            month: date.month(),
            year: date.year(),
            in_current_month,
            is_today: date == self.today,
            is_selected: self.selected == Some(date),
            is_valid: self.bounds.is_valid_date(date),
        }
    }
}

/// Builds whole weeks around the anchor's month, the first cell falling on `first_day`.
pub fn build_day_grid(anchor: NaiveDate, first_day: Weekday, ctx: &GridContext) -> Vec<DayCell> {
    let start = start_of_month(anchor);
    let end = end_of_month(anchor);

    let leading = weekday_offset(start.weekday(), first_day) as u64;
    let trailing = 6 - weekday_offset(end.weekday(), first_day) as u64;

    let mut days = Vec::with_capacity(42);

    for i in (1..=leading).rev() {
        if let Some(date) = start.checked_sub_days(Days::new(i)) {
            days.push(ctx.day_cell(date, false));
        }
    }

    let mut current = start;
    while current <= end {
        days.push(ctx.day_cell(current, true));
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }

    for i in 1..=trailing {
        if let Some(date) = end.checked_add_days(Days::new(i)) {
            days.push(ctx.day_cell(date, false));
        }
    }

    days
}

/// Short weekday labels for the grid header, starting at `first_day`.
pub fn day_names(first_day: Weekday) -> Vec<String> {
    let mut names = Vec::with_capacity(7);
    let mut day = first_day;
    for _ in 0..7 {
        names.push(crate::calc::dates::weekday_name(day)[..3].to_string());
        day = day.succ();
    }
    names
}
