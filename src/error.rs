use crate::engine::ViewMode;

/// Raised while turning `DatepickerOptions` into a `PickerConfig`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("first_calendar_day must be 0-6 (0 = Sunday), got {0}")]
    FirstCalendarDay(u8),

    #[error("min_date ({min}) is after max_date ({max})")]
    InvertedBounds {
        min: chrono::NaiveDate,
        max: chrono::NaiveDate,
    },

    #[error("invalid title format {pattern:?}: {reason}")]
    TitleFormat { pattern: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("{view} cell index {index} is out of range (grid has {len} cells)")]
    CellOutOfRange {
        view: ViewMode,
        index: usize,
        len: usize,
    },
}
