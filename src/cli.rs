use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::optimizer::validate_count;
use crate::types::{Config, OutputFormat, SearchMode};

/// Pick voluntary holidays that minimize the total days-until-next-holiday over a year.
#[derive(Parser, Debug)]
#[command(
    name = "holiday-optimizer",
    version,
    about = "Choose voluntary holidays that minimize the wait for the next day off"
)]
pub struct Cli {
    /// Calendar year to optimize [default: current year].
    #[arg(allow_negative_numbers = true)]
    pub year: Option<i32>,

    /// Number of voluntary holidays to add [default: 5].
    #[arg(allow_negative_numbers = true)]
    pub num_voluntary_holidays: Option<i64>,

    /// Search strategy [default: greedy].
    #[arg(short, long, value_enum)]
    pub mode: Option<SearchMode>,

    /// Report format [default: text].
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub year: i32,
    pub num_voluntary_holidays: usize,
    pub mode: SearchMode,
    pub format: OutputFormat,
    pub exact_warn_threshold: u128,
}

impl Cli {
    /// Merge command line, config file and defaults (in that order of precedence)
    pub fn resolve(&self, config: &Config, current_year: i32) -> Result<RunSettings> {
        let raw_count = self
            .num_voluntary_holidays
            .unwrap_or(config.num_voluntary_holidays);

        Ok(RunSettings {
            year: self.year.unwrap_or(current_year),
            num_voluntary_holidays: validate_count(raw_count)?,
            mode: self.mode.unwrap_or(config.mode),
            format: self.format.unwrap_or(config.format),
            exact_warn_threshold: u128::from(config.exact_warn_threshold),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HolidayError;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("holiday-optimizer").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        let settings = cli.resolve(&Config::default(), 2026).unwrap();
        assert_eq!(settings.year, 2026);
        assert_eq!(settings.num_voluntary_holidays, 5);
        assert_eq!(settings.mode, SearchMode::Greedy);
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_positionals_and_mode() {
        let cli = parse(&["2025", "3", "--mode", "exact"]);
        let settings = cli.resolve(&Config::default(), 2026).unwrap();
        assert_eq!(settings.year, 2025);
        assert_eq!(settings.num_voluntary_holidays, 3);
        assert_eq!(settings.mode, SearchMode::Exact);
    }

    #[test]
    fn test_negative_count_rejected() {
        let cli = parse(&["2025", "-1"]);
        assert_eq!(cli.num_voluntary_holidays, Some(-1));
        let err = cli.resolve(&Config::default(), 2026).unwrap_err();
        assert!(matches!(err, HolidayError::InvalidParameter(_)));
    }

    #[test]
    fn test_non_numeric_year_rejected() {
        let result = Cli::try_parse_from(["holiday-optimizer", "twenty"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let result = Cli::try_parse_from(["holiday-optimizer", "--mode", "random"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_command_line_overrides_config() {
        let config = Config {
            num_voluntary_holidays: 2,
            mode: SearchMode::Exact,
            format: OutputFormat::Json,
            ..Config::default()
        };
        let settings = parse(&["2025"]).resolve(&config, 2026).unwrap();
        assert_eq!(settings.num_voluntary_holidays, 2);
        assert_eq!(settings.mode, SearchMode::Exact);
        assert_eq!(settings.format, OutputFormat::Json);

        let settings = parse(&["2025", "4", "-m", "greedy", "-f", "text"])
            .resolve(&config, 2026)
            .unwrap();
        assert_eq!(settings.num_voluntary_holidays, 4);
        assert_eq!(settings.mode, SearchMode::Greedy);
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_verbosity_count() {
        assert_eq!(parse(&["-vv"]).verbose, 2);
    }
}
