//! Error types for the payslip generator.
//!
//! Every failure originates outside the calculation core: in input
//! validation, in the console session, or while loading configuration.
//! Each kind maps to its own process exit code.

use thiserror::Error;

/// The main error type for the payslip generator.
///
/// # Example
///
/// ```
/// use payslip_generator::error::PayslipError;
///
/// let error = PayslipError::NonPositiveSalary { salary: -5 };
/// assert_eq!(error.to_string(), "Annual salary must be a positive integer, got -5");
/// assert_eq!(error.exit_code(), 3);
/// ```
#[derive(Debug, Error)]
pub enum PayslipError {
    /// The annual salary was not a valid integer.
    #[error("Annual salary must be a whole number, got '{input}'")]
    MalformedSalary {
        /// The raw text that failed to parse.
        input: String,
    },

    /// The annual salary was zero or negative.
    #[error("Annual salary must be a positive integer, got {salary}")]
    NonPositiveSalary {
        /// The rejected salary.
        salary: i64,
    },

    /// The super rate was outside the accepted bound.
    #[error("Super rate must be between 0 and {max} inclusive, got {rate}")]
    SuperRateOutOfRange {
        /// The rejected rate.
        rate: i64,
        /// The inclusive upper bound in force.
        max: u8,
    },

    /// The super rate was not a valid integer.
    #[error("Super rate must be a whole number, got '{input}'")]
    MalformedSuperRate {
        /// The raw text that failed to parse.
        input: String,
    },

    /// Input ended before a required answer was read.
    #[error("Input ended before {field} was entered")]
    InputClosed {
        /// The field that was being prompted for.
        field: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value that cannot be used.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// Reading from or writing to the console failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PayslipError {
    /// Returns the process exit code for this error kind.
    ///
    /// Codes are distinct per kind so scripts can tell failures apart.
    pub fn exit_code(&self) -> u8 {
        match self {
            PayslipError::MalformedSalary { .. } => 2,
            PayslipError::NonPositiveSalary { .. } => 3,
            PayslipError::SuperRateOutOfRange { .. } => 4,
            PayslipError::MalformedSuperRate { .. } => 5,
            PayslipError::InputClosed { .. } => 6,
            PayslipError::ConfigNotFound { .. } => 7,
            PayslipError::ConfigParseError { .. } => 8,
            PayslipError::InvalidConfig { .. } => 9,
            PayslipError::Io(_) => 10,
        }
    }
}

/// Exit code for a command line that could not be parsed.
///
/// Kept apart from every [`PayslipError::exit_code`] so a bad flag is never
/// mistaken for bad input.
pub const USAGE_EXIT_CODE: u8 = 11;

/// A type alias for Results that return PayslipError.
pub type PayslipResult<T> = Result<T, PayslipError>;
