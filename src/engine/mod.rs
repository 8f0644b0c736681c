pub mod binding;
pub mod calendar_engine;
pub mod clock;
pub mod view;

pub use calendar_engine::CalendarEngine;
pub use clock::{Clock, FixedClock, SystemClock};
pub use hit_test::{HitRegion, HitTest};
pub use view::ViewMode;
