//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::PayrollCalculator;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded configuration. It is read-only after startup, so
/// handlers share it through an `Arc` without locking.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the payroll calculator bound to the configured rates.
    pub fn calculator(&self) -> PayrollCalculator {
        self.config.calculator()
    }
}
