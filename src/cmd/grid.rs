use anyhow::{Context, Result};
use calpick::calc::{DayCell, MonthCell, YearCell};
use calpick::{CalendarEngine, PickerConfig, ViewMode};
use chrono::NaiveDate;
use serde::Serialize;

pub fn run(config: PickerConfig, date: Option<NaiveDate>, view: ViewMode, json: bool) -> Result<()> {
    let engine = engine_for(CalendarEngine::new(config), date, view);
    let mut out = std::io::stdout();
    if json {
        write_grid_json(&engine, &mut out)
    } else {
        write_grid(&engine, &mut out)
    }
}

/// Anchors on `date` (as a committed value) and switches to `view`.
pub(crate) fn engine_for(mut engine: CalendarEngine, date: Option<NaiveDate>, view: ViewMode) -> CalendarEngine {
    engine.write_value(date);
    while engine.view() != view {
        engine.toggle_view();
    }
    engine
}

#[derive(Serialize)]
struct GridDump<'a> {
    view: ViewMode,
    title: &'a str,
    value: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    day_names: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    days: Option<&'a [DayCell]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    months: Option<&'a [MonthCell]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    years: Option<&'a [YearCell]>,
}

pub(crate) fn write_grid_json<W: std::io::Write>(engine: &CalendarEngine, out: &mut W) -> Result<()> {
    let view = engine.view();
    let dump = GridDump {
        view,
        title: engine.title(),
        value: engine.value(),
        day_names: (view == ViewMode::Days).then(|| engine.day_names()),
        days: (view == ViewMode::Days).then(|| engine.days()),
        months: (view == ViewMode::Months).then(|| engine.months()),
        years: (view == ViewMode::Years).then(|| engine.years()),
    };
    let json = serde_json::to_string_pretty(&dump).context("failed to serialize grid")?;
    writeln!(out, "{json}")?;
    Ok(())
}

/// Marker after each cell: `#` selected, `*` today, `-` outside bounds.
fn marker(is_selected: bool, is_today: bool, is_valid: bool) -> char {
    if is_selected {
        '#'
    } else if is_today {
        '*'
    } else if !is_valid {
        '-'
    } else {
        ' '
    }
}

pub(crate) fn write_grid<W: std::io::Write>(engine: &CalendarEngine, out: &mut W) -> Result<()> {
    writeln!(out, "{}", engine.title())?;
    writeln!(out, "---")?;
    match engine.view() {
        ViewMode::Days => {
            let header: Vec<String> = engine.day_names().iter().map(|n| format!("{n:>4}")).collect();
            writeln!(out, "{}", header.join(""))?;
            for week in engine.days().chunks(7) {
                let mut line = String::new();
                for c in week {
                    if c.in_current_month {
                        line.push_str(&format!("{:>3}", c.day));
                    } else {
                        line.push_str(&format!("{:>3}", "."));
                    }
                    line.push(marker(c.is_selected, c.is_today, c.is_valid));
                }
                writeln!(out, "{}", line.trim_end())?;
            }
        }
        ViewMode::Months => {
            for row in engine.months().chunks(3) {
                let line: String = row
                    .iter()
                    .map(|c| format!("{:>10}{}", c.name, marker(c.is_selected, c.is_today, c.is_valid)))
                    .collect();
                writeln!(out, "{}", line.trim_end())?;
            }
        }
        ViewMode::Years => {
            for row in engine.years().chunks(5) {
                let line: String = row
                    .iter()
                    .map(|c| format!("{:>6}{}", c.year, marker(c.is_selected, c.is_today, c.is_valid)))
                    .collect();
                writeln!(out, "{}", line.trim_end())?;
            }
        }
    }
    writeln!(out, "---")?;
    writeln!(out, "# selected  * today  - outside bounds")?;
    Ok(())
}
