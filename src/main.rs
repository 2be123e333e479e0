use std::process::ExitCode;

use clap::Parser;
use note_calendar::{logging, CalendarDate, Cli, Command, Result};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let ctx = cmd::context::AppContext::from_cli(&cli)?;

    match cli.command {
        Command::Day { date, source } => cmd::day::run(&ctx, date, source),
        Command::Week { date, source } => cmd::week::run(&ctx, date, source),
        Command::Month { month, source } => cmd::month::run(&ctx, month, source),
    }
}

mod cmd {
    pub mod context;
    pub mod day;
    pub mod month;
    pub mod output;
    pub mod week;

    use super::{CalendarDate, Result};

    /// Parse a `YYYY-MM-DD` argument, defaulting to today
    pub fn parse_date(input: Option<&str>) -> Result<CalendarDate> {
        match input {
            Some(date) => CalendarDate::parse(date),
            None => Ok(CalendarDate::today()),
        }
    }
}
