use chrono::{Datelike, NaiveDate};

/// Inclusive selection bounds. An unset side is unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

impl Bounds {
    pub fn new(min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        Bounds { min, max }
    }

    pub fn is_valid_date(&self, date: NaiveDate) -> bool {
        self.min.is_none_or(|min| date >= min) && self.max.is_none_or(|max| date <= max)
    }

    /// Compares at month granularity: any month overlapping the bounds is valid.
    pub fn is_valid_month(&self, year: i32, month: u32) -> bool {
        let key = (year, month);
        self.min.is_none_or(|min| key >= (min.year(), min.month()))
            && self.max.is_none_or(|max| key <= (max.year(), max.month()))
    }

    pub fn is_valid_year(&self, year: i32) -> bool {
        self.min.is_none_or(|min| year >= min.year())
            && self.max.is_none_or(|max| year <= max.year())
    }
}
