use chrono::NaiveDate;

pub type ChangeFn = Box<dyn FnMut(Option<NaiveDate>)>;
pub type TouchedFn = Box<dyn FnMut()>;
pub type OpenChangedFn = Box<dyn FnMut(bool)>;

/// Callbacks registered by the host. Unregistered slots are silently skipped.
#[derive(Default)]
pub struct Observers {
    on_change: Option<ChangeFn>,
    on_touched: Option<TouchedFn>,
    on_open_changed: Option<OpenChangedFn>,
}

impl Observers {
    pub fn set_on_change(&mut self, f: ChangeFn) {
        self.on_change = Some(f);
    }

    pub fn set_on_touched(&mut self, f: TouchedFn) {
        self.on_touched = Some(f);
    }

    pub fn set_on_open_changed(&mut self, f: OpenChangedFn) {
        self.on_open_changed = Some(f);
    }

    pub fn changed(&mut self, value: Option<NaiveDate>) {
        if let Some(f) = self.on_change.as_mut() {
            f(value);
        }
    }

    pub fn touched(&mut self) {
        if let Some(f) = self.on_touched.as_mut() {
            f();
        }
    }

    pub fn open_changed(&mut self, open: bool) {
        if let Some(f) = self.on_open_changed.as_mut() {
            f(open);
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("on_change", &self.on_change.is_some())
            .field("on_touched", &self.on_touched.is_some())
            .field("on_open_changed", &self.on_open_changed.is_some())
            .finish()
    }
}
