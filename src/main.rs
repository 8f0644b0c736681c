mod cmd;
mod ui;

use anyhow::{Context, Result};
use calpick::data::{DatepickerOptions, Persistable};
use calpick::{PickerConfig, ViewMode};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "calpick", about = "pick a date from a terminal calendar")]
struct Cli {
    /// Directory containing datepicker.yaml (default: ./config)
    #[arg(long, default_value = "./config")]
    data_dir: PathBuf,

    /// Write log output to this file instead of stderr (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    overrides: OptionArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Command-line overrides for values in datepicker.yaml.
#[derive(Args, Default)]
struct OptionArgs {
    /// Header pattern for the day view, e.g. "MMMM YYYY"
    #[arg(long, global = true)]
    title_format: Option<String>,
    /// First weekday of each row: 0 = Sunday .. 6 = Saturday
    #[arg(long, global = true)]
    first_day: Option<u8>,
    /// Earliest selectable date (YYYY-MM-DD)
    #[arg(long, global = true)]
    min_date: Option<NaiveDate>,
    /// Latest selectable date (YYYY-MM-DD)
    #[arg(long, global = true)]
    max_date: Option<NaiveDate>,
    /// Stage day clicks until confirmed instead of committing immediately
    #[arg(long, global = true)]
    staged: bool,
}

impl From<OptionArgs> for DatepickerOptions {
    fn from(args: OptionArgs) -> Self {
        DatepickerOptions {
            bar_title_format: args.title_format,
            first_calendar_day: args.first_day,
            min_date: args.min_date,
            max_date: args.max_date,
            update_on_click: args.staged.then_some(false),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive picker (default)
    Pick {
        /// Initial value of the date field
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Print the calendar grid for a date
    Grid {
        /// Anchor date, also shown as selected (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long, value_enum, default_value_t = ViewMode::Days)]
        view: ViewMode,
        /// Emit JSON instead of a text table
        #[arg(long)]
        json: bool,
    },
    /// Write a default datepicker.yaml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let data_dir = if cli.data_dir.is_absolute() {
        cli.data_dir.clone()
    } else {
        std::env::current_dir()?.join(&cli.data_dir)
    };

    if let Some(Commands::Init { force }) = cli.command {
        return cmd::init::run(&data_dir, force);
    }

    let config = load_config(&data_dir, cli.overrides.into())?;

    match cli.command {
        None => cmd::root::run(config, None),
        Some(Commands::Pick { date }) => cmd::root::run(config, date),
        Some(Commands::Grid { date, view, json }) => cmd::grid::run(config, date, view, json),
        Some(Commands::Init { .. }) => Ok(()),
    }
}

/// Options file values, overridden by command-line flags, validated.
fn load_config(dir: &Path, overrides: DatepickerOptions) -> Result<PickerConfig> {
    let from_file = DatepickerOptions::load_from(dir)?;
    let config = from_file
        .overridden_by(overrides)
        .to_config()
        .context("invalid date picker options")?;
    Ok(config)
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}
