//! Calendar engine for a date picker: day/month/year grids, selection and
//! validity rules, and the open/close view state machine. Rendering is left to
//! the host; the `calpick` binary ships a terminal one.

pub mod calc;
pub mod data;
pub mod engine;
pub mod error;

pub use data::{DatepickerOptions, PickerConfig};
pub use engine::{CalendarEngine, HitRegion, HitTest, ViewMode};
pub use error::{ConfigError, EngineError};
