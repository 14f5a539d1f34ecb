/// Core type definitions for the holiday optimizer
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A holiday whose date is fully determined by the year and a hardcoded rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixedHoliday {
    pub name: String,
    pub date: NaiveDate,
    pub weekday: Weekday,
}

impl FixedHoliday {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        FixedHoliday {
            name: name.into(),
            date,
            weekday: date.weekday(),
        }
    }
}

/// An additional non-working day chosen by the search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoluntaryHoliday {
    pub date: NaiveDate,
    pub weekday: Weekday,
}

impl From<NaiveDate> for VoluntaryHoliday {
    fn from(date: NaiveDate) -> Self {
        VoluntaryHoliday {
            date,
            weekday: date.weekday(),
        }
    }
}

/// Search strategy used to pick voluntary holidays
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Exhaustive evaluation of every combination
    Exact,
    /// Forward selection of one locally optimal day per round
    #[default]
    Greedy,
}

impl SearchMode {
    pub fn as_str(&self) -> &str {
        match self {
            SearchMode::Exact => "exact",
            SearchMode::Greedy => "greedy",
        }
    }

    pub fn description(&self) -> &str {
        match self {
            SearchMode::Exact => "Exhaustive (slow but optimal)",
            SearchMode::Greedy => "Greedy (fast approximation)",
        }
    }
}

/// How the report is written to stdout
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Everything the reporter needs for one optimization run
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationResult {
    pub year: i32,
    pub fixed_holidays: Vec<FixedHoliday>,
    pub num_voluntary_holidays: usize,
    pub mode: SearchMode,
    pub baseline_total: u64,
    pub voluntary_holidays: Vec<VoluntaryHoliday>,
    pub optimized_total: u64,
    pub improvement: u64,
    pub improvement_pct: f64,
    pub average_days_per_day: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combinations_evaluated: Option<u128>,
}

/// Optional settings loaded from a TOML file; every key may be omitted
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_num_voluntary_holidays")]
    pub num_voluntary_holidays: i64,
    #[serde(default)]
    pub mode: SearchMode,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_exact_warn_threshold")]
    pub exact_warn_threshold: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            num_voluntary_holidays: default_num_voluntary_holidays(),
            mode: SearchMode::default(),
            format: OutputFormat::default(),
            log_level: default_log_level(),
            exact_warn_threshold: default_exact_warn_threshold(),
        }
    }
}

fn default_num_voluntary_holidays() -> i64 {
    5
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_exact_warn_threshold() -> u64 {
    50_000_000
}
