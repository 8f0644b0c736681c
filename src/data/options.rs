use crate::calc::dates::weekday_from_sunday;
use crate::calc::{Bounds, TitleFormat, DEFAULT_TITLE_FORMAT};
use crate::data::persistence::Persistable;
use crate::error::ConfigError;
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// User-facing options as they appear in `datepicker.yaml` or on the command line.
/// Every field is optional; unset fields fall back to the defaults.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DatepickerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_title_format: Option<String>,
    /// 0 = Sunday (default), 1 = Monday, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_calendar_day: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_on_click: Option<bool>,
}

impl Persistable for DatepickerOptions {
    fn filename() -> &'static str {
        "datepicker.yaml"
    }
}

impl DatepickerOptions {
    /// The defaults spelled out, as written by `calpick init`.
    pub fn with_defaults() -> Self {
        DatepickerOptions {
            bar_title_format: Some(DEFAULT_TITLE_FORMAT.to_string()),
            first_calendar_day: Some(0),
            min_date: None,
            max_date: None,
            update_on_click: Some(true),
        }
    }

    /// Fields set in `other` win over fields set in `self`.
    pub fn overridden_by(self, other: DatepickerOptions) -> Self {
        DatepickerOptions {
            bar_title_format: other.bar_title_format.or(self.bar_title_format),
            first_calendar_day: other.first_calendar_day.or(self.first_calendar_day),
            min_date: other.min_date.or(self.min_date),
            max_date: other.max_date.or(self.max_date),
            update_on_click: other.update_on_click.or(self.update_on_click),
        }
    }

    pub fn to_config(&self) -> Result<PickerConfig, ConfigError> {
        let title_format = match &self.bar_title_format {
            Some(pattern) => TitleFormat::parse(pattern)?,
            None => TitleFormat::default(),
        };

        let first_index = self.first_calendar_day.unwrap_or(0);
        let first_day =
            weekday_from_sunday(first_index).ok_or(ConfigError::FirstCalendarDay(first_index))?;

        if let (Some(min), Some(max)) = (self.min_date, self.max_date) {
            if min > max {
                return Err(ConfigError::InvertedBounds { min, max });
            }
        }

        Ok(PickerConfig {
            title_format,
            first_day,
            bounds: Bounds::new(self.min_date, self.max_date),
            update_on_click: self.update_on_click.unwrap_or(true),
        })
    }
}

/// Validated configuration consumed by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerConfig {
    pub title_format: TitleFormat,
    pub first_day: Weekday,
    pub bounds: Bounds,
    /// true: a day click commits and closes. false: it stages a pending selection.
    pub update_on_click: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        PickerConfig {
            title_format: TitleFormat::default(),
            first_day: Weekday::Sun,
            bounds: Bounds::default(),
            update_on_click: true,
        }
    }
}
