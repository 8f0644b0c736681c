pub mod options;
pub mod persistence;

pub use options::{DatepickerOptions, PickerConfig};
pub use persistence::Persistable;
