use serde::Serialize;
use std::fmt;

/// Which granularity the picker is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Days,
    Months,
    Years,
}

impl ViewMode {
    /// Days -> Months -> Years -> Days.
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Days => ViewMode::Months,
            ViewMode::Months => ViewMode::Years,
            ViewMode::Years => ViewMode::Days,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ViewMode::Days => "days",
            ViewMode::Months => "months",
            ViewMode::Years => "years",
        };
        f.write_str(s)
    }
}
