use crate::calc::dates::{add_months, add_years, with_month_clamped, with_year_clamped};
use crate::calc::{
    build_day_grid, build_month_grid, build_year_grid, day_names, DayCell, GridContext,
    MonthCell, YearCell, YearWindow,
};
use crate::data::PickerConfig;
use crate::engine::binding::Observers;
use crate::engine::clock::{Clock, SystemClock};
use crate::engine::hit_test::{HitRegion, HitTest};
use crate::engine::view::ViewMode;
use crate::error::EngineError;
use chrono::{Datelike, NaiveDate};
use log::{debug, warn};

/// Calendar state for one picker instance.
///
/// All grids, flags and the header title are recomputed after every command, so a
/// renderer can read the accessors at any time.
pub struct CalendarEngine {
    config: PickerConfig,
    clock: Box<dyn Clock>,
    /// The month/year on screen.
    anchor: NaiveDate,
    /// The committed, externally visible value.
    value: Option<NaiveDate>,
    /// Staged day when `update_on_click` is off.
    pending: Option<NaiveDate>,
    view: ViewMode,
    open: bool,
    year_window: YearWindow,
    days: Vec<DayCell>,
    months: Vec<MonthCell>,
    years: Vec<YearCell>,
    day_names: Vec<String>,
    title: String,
    observers: Observers,
}

impl CalendarEngine {
    pub fn new(config: PickerConfig) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    pub fn with_clock(config: PickerConfig, clock: Box<dyn Clock>) -> Self {
        let anchor = clock.today();
        let mut engine = CalendarEngine {
            day_names: day_names(config.first_day),
            config,
            clock,
            anchor,
            value: None,
            pending: None,
            view: ViewMode::Days,
            open: false,
            year_window: YearWindow::containing(anchor.year()),
            days: Vec::new(),
            months: Vec::new(),
            years: Vec::new(),
            title: String::new(),
            observers: Observers::default(),
        };
        engine.rebuild();
        engine
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn value(&self) -> Option<NaiveDate> {
        self.value
    }

    pub fn pending(&self) -> Option<NaiveDate> {
        self.pending
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn year_window(&self) -> YearWindow {
        self.year_window
    }

    pub fn days(&self) -> &[DayCell] {
        &self.days
    }

    pub fn months(&self) -> &[MonthCell] {
        &self.months
    }

    pub fn years(&self) -> &[YearCell] {
        &self.years
    }

    pub fn day_names(&self) -> &[String] {
        &self.day_names
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of cells in the grid for the current view.
    pub fn cell_count(&self) -> usize {
        match self.view {
            ViewMode::Days => self.days.len(),
            ViewMode::Months => self.months.len(),
            ViewMode::Years => self.years.len(),
        }
    }

    // ── Binding ───────────────────────────────────────────────────────────────

    pub fn register_on_change(&mut self, f: impl FnMut(Option<NaiveDate>) + 'static) {
        self.observers.set_on_change(Box::new(f));
    }

    pub fn register_on_touched(&mut self, f: impl FnMut() + 'static) {
        self.observers.set_on_touched(Box::new(f));
    }

    pub fn register_on_open_changed(&mut self, f: impl FnMut(bool) + 'static) {
        self.observers.set_on_open_changed(Box::new(f));
    }

    /// External value write. `None` leaves the engine untouched.
    pub fn write_value(&mut self, value: Option<NaiveDate>) {
        let Some(date) = value else {
            return;
        };
        debug!("write_value {date}");
        self.anchor = date;
        self.value = Some(date);
        self.rebuild();
    }

    /// Replaces the configuration, keeping anchor, value and view.
    pub fn set_config(&mut self, config: PickerConfig) {
        self.day_names = day_names(config.first_day);
        self.config = config;
        self.rebuild();
    }

    // ── Open state ────────────────────────────────────────────────────────────

    /// Host-driven open flag; does not notify the open observer.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Closes the picker, returning to the day view. In staged mode an unconfirmed
    /// selection is discarded and the anchor returns to the committed value.
    pub fn close(&mut self) {
        self.open = false;
        self.observers.open_changed(false);
        self.observers.touched();
        self.view = ViewMode::Days;

        if !self.config.update_on_click {
            if let Some(pending) = self.pending.take() {
                if Some(pending) != self.value {
                    debug!("discarding pending selection {pending}");
                    if let Some(value) = self.value {
                        self.anchor = value;
                    }
                }
            }
        }
        self.rebuild();
    }

    /// Reacts to a click anywhere in the host. Closes when open and the target is
    /// outside the surface, the toggle control and every cell.
    pub fn handle_document_click<T: ?Sized>(&mut self, target: &T, hit: &impl HitTest<T>) -> bool {
        if !self.open {
            return false;
        }
        match hit.classify(target) {
            HitRegion::Outside => {
                debug!("outside click, closing");
                self.close();
                true
            }
            HitRegion::Surface | HitRegion::Toggle | HitRegion::Cell => false,
        }
    }

    // ── Navigation ────────────────────────────────────────────────────────────

    pub fn next(&mut self) {
        match self.view {
            ViewMode::Days => self.shift_anchor(add_months(self.anchor, 1)),
            ViewMode::Months => self.shift_anchor(add_years(self.anchor, 1)),
            ViewMode::Years => self.shift_years(self.year_window.next()),
        }
    }

    pub fn prev(&mut self) {
        match self.view {
            ViewMode::Days => self.shift_anchor(add_months(self.anchor, -1)),
            ViewMode::Months => self.shift_anchor(add_years(self.anchor, -1)),
            ViewMode::Years => self.shift_years(self.year_window.prev()),
        }
    }

    pub fn toggle_view(&mut self) {
        self.view = self.view.toggled();
        debug!("view -> {}", self.view);
        self.refresh_title();
    }

    fn shift_anchor(&mut self, anchor: NaiveDate) {
        self.anchor = anchor;
        self.rebuild();
    }

    fn shift_years(&mut self, window: YearWindow) {
        self.year_window = window;
        self.rebuild_years();
        self.refresh_title();
    }

    // ── Selection ─────────────────────────────────────────────────────────────

    pub fn select_day(&mut self, index: usize) -> Result<(), EngineError> {
        let date = self.cell_at(ViewMode::Days, index, |e| e.days.get(index).map(|c| c.date))?;
        if self.config.update_on_click {
            debug!("select_day {date}: commit");
            self.anchor = date;
            self.commit(date);
            self.rebuild();
            self.close();
        } else {
            debug!("select_day {date}: staged");
            self.pending = Some(date);
            self.rebuild();
        }
        Ok(())
    }

    /// Commits the staged selection and closes. Without one it only closes.
    pub fn confirm_pending(&mut self) {
        if let Some(date) = self.pending.take() {
            debug!("confirm_pending {date}");
            self.anchor = date;
            self.commit(date);
            self.rebuild();
        }
        self.close();
    }

    pub fn select_month(&mut self, index: usize) -> Result<(), EngineError> {
        let month = self.cell_at(ViewMode::Months, index, |e| e.months.get(index).map(|c| c.month))?;
        debug!("select_month {month}");
        self.anchor = with_month_clamped(self.anchor, month);
        self.view = ViewMode::Days;
        self.rebuild();
        Ok(())
    }

    pub fn select_year(&mut self, index: usize) -> Result<(), EngineError> {
        let year = self.cell_at(ViewMode::Years, index, |e| e.years.get(index).map(|c| c.year))?;
        debug!("select_year {year}");
        self.anchor = with_year_clamped(self.anchor, year);
        self.year_window = YearWindow::containing(year);
        self.view = ViewMode::Days;
        self.rebuild();
        Ok(())
    }

    fn cell_at<V>(
        &self,
        view: ViewMode,
        index: usize,
        get: impl Fn(&Self) -> Option<V>,
    ) -> Result<V, EngineError> {
        get(self).ok_or_else(|| {
            let len = match view {
                ViewMode::Days => self.days.len(),
                ViewMode::Months => self.months.len(),
                ViewMode::Years => self.years.len(),
            };
            warn!("{view} index {index} out of range ({len})");
            EngineError::CellOutOfRange { view, index, len }
        })
    }

    fn commit(&mut self, date: NaiveDate) {
        self.value = Some(date);
        self.observers.changed(self.value);
    }

    // ── Recomputation ─────────────────────────────────────────────────────────

    /// The date every grid marks as selected.
    fn shown_selection(&self) -> Option<NaiveDate> {
        if self.config.update_on_click || self.pending.is_none() {
            self.value
        } else {
            self.pending
        }
    }

    fn rebuild(&mut self) {
        if !self.year_window.contains(self.anchor.year()) {
            self.year_window = YearWindow::containing(self.anchor.year());
        }
        self.rebuild_days();
        self.months = build_month_grid(
            self.anchor,
            self.shown_selection(),
            self.clock.today(),
            &self.config.bounds,
        );
        self.rebuild_years();
        self.refresh_title();
    }

    fn rebuild_days(&mut self) {
        let ctx = GridContext {
            today: self.clock.today(),
            selected: self.shown_selection(),
            bounds: self.config.bounds,
        };
        self.days = build_day_grid(self.anchor, self.config.first_day, &ctx);
    }

    fn rebuild_years(&mut self) {
        self.years = build_year_grid(
            self.year_window,
            self.shown_selection(),
            self.clock.today(),
            &self.config.bounds,
        );
    }

    fn refresh_title(&mut self) {
        self.title = match self.view {
            ViewMode::Days => self.config.title_format.format(self.anchor),
            ViewMode::Months => format!("{:04}", self.anchor.year()),
            ViewMode::Years => self.year_window.label(),
        };
    }
}

impl std::fmt::Debug for CalendarEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarEngine")
            .field("anchor", &self.anchor)
            .field("value", &self.value)
            .field("pending", &self.pending)
            .field("view", &self.view)
            .field("open", &self.open)
            .field("year_window", &self.year_window)
            .field("title", &self.title)
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}
