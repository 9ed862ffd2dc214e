//! Generate command: build the calendar and write it as CSV.

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{info, info_span};

use dd_calendar::{write_csv_path, CalendarBuilder};
use dd_time::Date;

use crate::cli::GenerateArgs;
use crate::config::{self, DatedimConfig, Settings};

/// Run the generation pipeline.
pub fn run(args: GenerateArgs) -> Result<()> {
    let _cmd = info_span!("generate").entered();

    let config = match &args.config {
        Some(path) => config::load(path)?,
        None => DatedimConfig::default(),
    };
    let local_today = Date::try_from(Local::now().date_naive()).context("local date out of range")?;
    let settings = Settings::resolve(&args, config, local_today)?;
    info!(
        start_year = settings.start_year,
        years = settings.years,
        today = %settings.today,
        calendar = ?settings.calendar,
        "generating calendar"
    );

    let table = CalendarBuilder::for_years(settings.start_year, settings.years)?
        .with_boxed_calendar(settings.calendar.calendar())
        .with_today(settings.today)
        .build()
        .with_context(|| {
            format!(
                "failed to generate calendar for {} year(s) from {}",
                settings.years, settings.start_year
            )
        })?;

    write_csv_path(&table, &settings.output)
        .with_context(|| format!("failed to write CSV: {}", settings.output.display()))?;
    info!(
        path = %settings.output.display(),
        rows = table.len(),
        workdays = table.workday_count(),
        "calendar written"
    );
    Ok(())
}
