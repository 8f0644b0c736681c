use crate::ui::picker_view::{run_app, App};
use crate::ui::{restore_terminal, setup_terminal};
use anyhow::Result;
use calpick::{CalendarEngine, PickerConfig};
use chrono::NaiveDate;
use log::info;

/// Runs the interactive picker and prints the chosen date on exit.
pub fn run(config: PickerConfig, initial: Option<NaiveDate>) -> Result<()> {
    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::event::DisableMouseCapture,
            crossterm::terminal::LeaveAlternateScreen
        );
        original_hook(info);
    }));

    let mut terminal = setup_terminal()?;

    let engine = CalendarEngine::new(config);
    let mut app = App::new(engine, initial);
    info!("picker started");

    let result = run_app(&mut terminal, &mut app);

    restore_terminal(&mut terminal)?;

    match app.value() {
        Some(date) => println!("{}", date.format("%Y-%m-%d")),
        None => println!("No date selected."),
    }

    result
}
