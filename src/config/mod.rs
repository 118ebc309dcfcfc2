//! Configuration loading for the payroll engine.
//!
//! This module loads the statutory deduction rates and server settings from
//! a YAML file. The role policy is not configurable; it is a compile-time
//! constant in [`crate::authorization`].
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Tax rate: {}", config.settings().statutory_rates.tax_rate);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{EngineSettings, ServerSettings};
