//! Configuration loading and management for the payslip generator.
//!
//! This module loads application settings (super rate bound, closing
//! message, output format, server address) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use payslip_generator::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payslip.yaml").unwrap();
//! println!("Closing line: {}", config.closing_message());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, DEFAULT_BIND_ADDRESS, DEFAULT_CLOSING_MESSAGE, ServerConfig};
