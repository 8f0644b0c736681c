pub mod dates;
pub mod day_grid;
pub mod period_grid;
pub mod title_format;
pub mod validity;

pub use day_grid::{build_day_grid, day_names, DayCell, GridContext};
pub use period_grid::{build_month_grid, build_year_grid, MonthCell, YearCell, YearWindow, YEAR_RANGE};
pub use title_format::{TitleFormat, DEFAULT_TITLE_FORMAT};
pub use validity::Bounds;
