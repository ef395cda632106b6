//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading application
//! settings from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PayslipError, PayslipResult};
use crate::report::OutputFormat;
use crate::validation::SUPER_RATE_CEILING;

use super::types::AppConfig;

/// Loads and provides access to application settings.
///
/// # File Format
///
/// ```text
/// max_super_rate: 50
/// closing_message: "Thank you for using MYOB!"
/// output_format: text        # text | json
/// server:
///   bind_address: "127.0.0.1:3000"
/// ```
///
/// # Example
///
/// ```no_run
/// use payslip_generator::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payslip.yaml")?;
/// println!("Super rate capped at {}%", loader.max_super_rate());
/// # Ok::<(), payslip_generator::error::PayslipError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Returns a loader holding the built-in defaults.
    pub fn defaults() -> Self {
        Self::default()
    }

    /// Loads settings from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file cannot be read (`ConfigNotFound`)
    /// - The file is not valid YAML or has unknown keys (`ConfigParseError`)
    /// - A value is out of bounds (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayslipResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayslipError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml_str(&content, &path_str)?;
        debug!(path = %path_str, "Loaded configuration");
        Ok(loader)
    }

    /// Parses settings from YAML text. `source` names the text in errors.
    pub fn from_yaml_str(content: &str, source: &str) -> PayslipResult<Self> {
        // An empty file holds no settings; serde_yaml reads it as null.
        let config: AppConfig = if content.trim().is_empty() {
            AppConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| PayslipError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?
        };

        Self::validate(&config)?;
        Ok(Self { config })
    }

    fn validate(config: &AppConfig) -> PayslipResult<()> {
        Self::check_max_super_rate(config.max_super_rate)?;

        if config.closing_message.trim().is_empty() {
            return Err(PayslipError::InvalidConfig {
                field: "closing_message".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        if config.server.bind_address.trim().is_empty() {
            return Err(PayslipError::InvalidConfig {
                field: "server.bind_address".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        Ok(())
    }

    fn check_max_super_rate(max_super_rate: u8) -> PayslipResult<()> {
        if max_super_rate > SUPER_RATE_CEILING {
            return Err(PayslipError::InvalidConfig {
                field: "max_super_rate".to_string(),
                message: format!(
                    "{} exceeds the {}% ceiling",
                    max_super_rate, SUPER_RATE_CEILING
                ),
            });
        }
        Ok(())
    }

    /// Replaces the super rate bound, applying the same ceiling as the file.
    pub fn set_max_super_rate(&mut self, max_super_rate: u8) -> PayslipResult<()> {
        Self::check_max_super_rate(max_super_rate)?;
        self.config.max_super_rate = max_super_rate;
        Ok(())
    }

    /// Replaces the output format.
    pub fn set_output_format(&mut self, output_format: OutputFormat) {
        self.config.output_format = output_format;
    }

    /// Replaces the HTTP bind address.
    pub fn set_bind_address(&mut self, bind_address: impl Into<String>) {
        self.config.server.bind_address = bind_address.into();
    }

    /// Returns the underlying settings.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the inclusive upper bound for the super rate.
    pub fn max_super_rate(&self) -> u8 {
        self.config.max_super_rate
    }

    /// Returns the closing line for text payslips.
    pub fn closing_message(&self) -> &str {
        &self.config.closing_message
    }

    /// Returns the configured output format.
    pub fn output_format(&self) -> OutputFormat {
        self.config.output_format
    }

    /// Returns the HTTP bind address.
    pub fn bind_address(&self) -> &str {
        &self.config.server.bind_address
    }
}
