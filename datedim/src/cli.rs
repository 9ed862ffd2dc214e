use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dd_time::Date;

use crate::config::CalendarKind;

/// Date-dimension generator.
#[derive(Debug, Parser)]
#[command(
    name = "datedim",
    version,
    about = "Generate a date-dimension table with workday numbering and holidays"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the calendar and write it as CSV.
    Generate(GenerateArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(Debug, clap::Args)]
pub struct GenerateArgs {
    /// Path to an optional TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// First year of the calendar (1970–2100).
    #[arg(short, long)]
    pub start_year: Option<u16>,

    /// Number of whole years to generate.
    #[arg(short, long)]
    pub years: Option<u16>,

    /// Output CSV path [default: calendar.csv].
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Day the current-period flags refer to (YYYY-MM-DD) [default: local date].
    #[arg(long)]
    pub today: Option<Date>,

    /// Holiday calendar.
    #[arg(long, value_enum)]
    pub calendar: Option<CalendarKind>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_generate() {
        let cli = Cli::try_parse_from([
            "datedim",
            "-vv",
            "generate",
            "--start-year",
            "2024",
            "-y",
            "2",
            "--today",
            "2024-04-02",
            "--calendar",
            "weekends-only",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Command::Generate(args) = cli.command;
        assert_eq!(args.start_year, Some(2024));
        assert_eq!(args.years, Some(2));
        assert_eq!(args.today, Some(Date::from_ymd(2024, 4, 2).unwrap()));
        assert_eq!(args.calendar, Some(CalendarKind::WeekendsOnly));
        assert!(args.config.is_none());
    }

    #[test]
    fn malformed_today_is_rejected() {
        assert!(Cli::try_parse_from(["datedim", "generate", "--today", "2024-4-2"]).is_err());
    }
}
