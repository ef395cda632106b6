//! Configuration types for the payslip generator.
//!
//! These structures are deserialized from a YAML settings file. They
//! cover presentation and input bounds only; the tax table is fixed in
//! code and cannot be configured.

use serde::{Deserialize, Serialize};

use crate::report::OutputFormat;
use crate::validation::DEFAULT_MAX_SUPER_RATE;

/// The closing line printed under every text payslip unless configured otherwise.
pub const DEFAULT_CLOSING_MESSAGE: &str = "Thank you for using MYOB!";

/// The address the HTTP server binds to unless configured otherwise.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Socket address for `payslip serve`, e.g. "0.0.0.0:8080".
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        }
    }
}

/// Application settings loaded from YAML.
///
/// Every field is optional in the file and falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Inclusive upper bound for the super rate, in percent (0 to 100).
    pub max_super_rate: u8,
    /// The last line of a text payslip.
    pub closing_message: String,
    /// How payslips are written to standard output.
    pub output_format: OutputFormat,
    /// HTTP server settings.
    pub server: ServerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_super_rate: DEFAULT_MAX_SUPER_RATE,
            closing_message: DEFAULT_CLOSING_MESSAGE.to_string(),
            output_format: OutputFormat::Text,
            server: ServerConfig::default(),
        }
    }
}
