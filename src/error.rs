/// Centralized error types for the holiday optimizer
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HolidayError {
    // Argument Errors
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid year: {0} is outside the supported calendar range")]
    InvalidYear(i32),

    #[error("Infeasible request: {requested} voluntary holiday(s) requested but only {available} candidate day(s) are available")]
    InfeasibleRequest { requested: usize, available: usize },

    // Cost Function Errors
    #[error("Holiday set is empty: at least one holiday is required to compute days-until-holiday")]
    EmptyHolidaySet,

    #[error("Holiday {date} does not belong to year {year}")]
    DateOutsideYear { date: NaiveDate, year: i32 },

    // Configuration Errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    // File I/O Errors
    #[error("File I/O error: {0}")]
    FileError(#[from] std::io::Error),

    // Output Errors
    #[error("Serialization failed: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HolidayError>;

impl HolidayError {
    /// Check if error was caused by user input rather than an internal invariant
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            HolidayError::InvalidParameter(_)
                | HolidayError::InvalidYear(_)
                | HolidayError::InfeasibleRequest { .. }
                | HolidayError::ConfigError(_)
        )
    }

    /// Get error code for logging
    pub fn error_code(&self) -> &str {
        match self {
            HolidayError::InvalidParameter(_) => "ARG_001",
            HolidayError::InvalidYear(_) => "ARG_002",
            HolidayError::InfeasibleRequest { .. } => "ARG_003",
            HolidayError::EmptyHolidaySet => "COST_001",
            HolidayError::DateOutsideYear { .. } => "COST_002",
            HolidayError::ConfigError(_) => "CFG_001",
            HolidayError::FileError(_) => "FILE_001",
            HolidayError::SerializationError(_) => "OUT_001",
        }
    }
}
