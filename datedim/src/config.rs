use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use dd_time::{Calendar, CzechRepublic, Date, WeekendsOnly};
use serde::Deserialize;

use crate::cli::GenerateArgs;

/// Earliest accepted start year.
pub const MIN_START_YEAR: u16 = 1970;
/// Latest accepted start year.
pub const MAX_START_YEAR: u16 = 2100;

/// Holiday calendar selectable from the config file or command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CalendarKind {
    /// Czech public holidays.
    #[default]
    CzechRepublic,
    /// Saturdays and Sundays only.
    WeekendsOnly,
}

impl CalendarKind {
    /// Instantiate the calendar.
    pub fn calendar(self) -> Box<dyn Calendar> {
        match self {
            CalendarKind::CzechRepublic => Box::new(CzechRepublic::new()),
            CalendarKind::WeekendsOnly => Box::new(WeekendsOnly::new()),
        }
    }
}

/// Contents of the TOML configuration file.
///
/// Every key is optional; command-line flags take precedence.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatedimConfig {
    #[serde(default)]
    pub start_year: Option<u16>,
    #[serde(default)]
    pub years: Option<u16>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    /// `YYYY-MM-DD`, as a string.
    #[serde(default)]
    pub today: Option<Date>,
    #[serde(default)]
    pub calendar: Option<CalendarKind>,
}

/// Read and parse the configuration file at `path`.
pub fn load(path: &Path) -> Result<DatedimConfig> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

/// Validated settings of a `generate` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub start_year: u16,
    pub years: u16,
    pub output: PathBuf,
    pub today: Date,
    pub calendar: CalendarKind,
}

impl Settings {
    /// Merge command-line flags over the config file and validate.
    ///
    /// `local_today` is used when neither source sets `today`.
    pub fn resolve(args: &GenerateArgs, config: DatedimConfig, local_today: Date) -> Result<Self> {
        let start_year = args.start_year.or(config.start_year).ok_or_else(|| {
            anyhow::anyhow!("no start year: set start_year in config or use --start-year")
        })?;
        let years = args.years.or(config.years).unwrap_or(1);
        validate_start_year(start_year)?;
        validate_years(years)?;

        Ok(Self {
            start_year,
            years,
            output: args
                .output
                .clone()
                .or(config.output)
                .unwrap_or_else(|| PathBuf::from("calendar.csv")),
            today: args.today.or(config.today).unwrap_or(local_today),
            calendar: args.calendar.or(config.calendar).unwrap_or_default(),
        })
    }
}

/// Reject start years outside `[1970, 2100]`.
pub fn validate_start_year(year: u16) -> Result<()> {
    if !(MIN_START_YEAR..=MAX_START_YEAR).contains(&year) {
        bail!("invalid start year {year}: enter a year between {MIN_START_YEAR} and {MAX_START_YEAR}");
    }
    Ok(())
}

/// Reject an empty span.
pub fn validate_years(years: u16) -> Result<()> {
    if years == 0 {
        bail!("invalid number of years {years}: enter a positive integer");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn args() -> GenerateArgs {
        GenerateArgs {
            config: None,
            start_year: None,
            years: None,
            output: None,
            today: None,
            calendar: None,
        }
    }

    #[test]
    fn parse_full_config() {
        let config: DatedimConfig = toml::from_str(
            r#"
            start_year = 2020
            years = 5
            output = "out/dim_date.csv"
            today = "2022-06-15"
            calendar = "weekends-only"
            "#,
        )
        .unwrap();
        assert_eq!(config.start_year, Some(2020));
        assert_eq!(config.years, Some(5));
        assert_eq!(config.output, Some(PathBuf::from("out/dim_date.csv")));
        assert_eq!(config.today, Some(date(2022, 6, 15)));
        assert_eq!(config.calendar, Some(CalendarKind::WeekendsOnly));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<DatedimConfig>("start_year = 2020\nseed = 1").is_err());
        assert!(toml::from_str::<DatedimConfig>("calendar = \"atlantis\"").is_err());
        assert!(toml::from_str::<DatedimConfig>("today = \"15.06.2022\"").is_err());
    }

    #[test]
    fn flags_override_config() {
        let config = DatedimConfig {
            start_year: Some(2020),
            years: Some(5),
            output: Some(PathBuf::from("from_config.csv")),
            today: Some(date(2022, 6, 15)),
            calendar: None,
        };
        let mut args = args();
        args.years = Some(2);
        args.output = Some(PathBuf::from("from_flag.csv"));

        let settings = Settings::resolve(&args, config, date(2030, 1, 1)).unwrap();
        assert_eq!(settings.start_year, 2020);
        assert_eq!(settings.years, 2);
        assert_eq!(settings.output, PathBuf::from("from_flag.csv"));
        assert_eq!(settings.today, date(2022, 6, 15));
        assert_eq!(settings.calendar, CalendarKind::CzechRepublic);
    }

    #[test]
    fn defaults() {
        let mut flags = args();
        flags.start_year = Some(2024);
        let settings = Settings::resolve(&flags, DatedimConfig::default(), date(2024, 4, 2)).unwrap();
        assert_eq!(settings.years, 1);
        assert_eq!(settings.output, PathBuf::from("calendar.csv"));
        assert_eq!(settings.today, date(2024, 4, 2));
        assert_eq!(settings.calendar, CalendarKind::CzechRepublic);

        // Without a start year there is nothing to generate.
        assert!(Settings::resolve(&args(), DatedimConfig::default(), date(2024, 4, 2)).is_err());
    }

    #[test]
    fn year_bounds() {
        assert!(validate_start_year(1969).is_err());
        assert!(validate_start_year(1970).is_ok());
        assert!(validate_start_year(2100).is_ok());
        assert!(validate_start_year(2101).is_err());
        assert!(validate_years(0).is_err());
        assert!(validate_years(1).is_ok());
    }

    #[test]
    fn calendar_kinds() {
        assert_eq!(CalendarKind::CzechRepublic.calendar().name(), "Czech Republic");
        assert_eq!(CalendarKind::WeekendsOnly.calendar().name(), "Weekends Only");
    }
}
