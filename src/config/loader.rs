//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! settings from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::calculation::PayrollCalculator;
use crate::error::{EngineError, EngineResult};

use super::types::EngineSettings;

/// Name of the settings file inside a configuration directory.
pub const CONFIG_FILE_NAME: &str = "payroll.yaml";

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── payroll.yaml    # Statutory rates and server settings
/// ```
///
/// Rates are validated at load time, so a loaded configuration always
/// yields a usable [`PayrollCalculator`].
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: EngineSettings,
    calculator: PayrollCalculator,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if:
    /// - `payroll.yaml` is missing
    /// - the file contains invalid YAML or unknown fields
    /// - the statutory rates are out of range
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref().join(CONFIG_FILE_NAME);
        let path_str = path.display().to_string();

        let content = fs::read_to_string(&path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let settings: EngineSettings =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        let loader = Self::from_settings(settings)?;
        info!(
            path = %path_str,
            tax_rate = %loader.settings.statutory_rates.tax_rate,
            social_security_rate = %loader.settings.statutory_rates.social_security_rate,
            "Loaded payroll configuration"
        );
        Ok(loader)
    }

    /// Builds a loader from already parsed settings, validating the rates.
    pub fn from_settings(settings: EngineSettings) -> EngineResult<Self> {
        let calculator = PayrollCalculator::with_rates(settings.statutory_rates)?;
        Ok(Self {
            settings,
            calculator,
        })
    }

    /// Returns the loaded settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Returns a calculator bound to the configured rates.
    pub fn calculator(&self) -> PayrollCalculator {
        self.calculator
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            settings: EngineSettings::default(),
            calculator: PayrollCalculator::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::StatutoryRates;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_shipped_default_config() {
        let loader = ConfigLoader::load("./config/default").unwrap();
        assert_eq!(loader.settings().statutory_rates, StatutoryRates::default());
        assert_eq!(loader.calculator(), PayrollCalculator::default());
    }

    #[test]
    fn test_load_missing_directory() {
        let err = ConfigLoader::load("./config/does-not-exist").unwrap_err();
        match err {
            EngineError::ConfigNotFound { path } => assert!(path.ends_with("payroll.yaml")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_from_settings_rejects_bad_rates() {
        let settings = EngineSettings {
            statutory_rates: StatutoryRates {
                tax_rate: dec("1.5"),
                social_security_rate: dec("0.0725"),
            },
            ..EngineSettings::default()
        };
        assert!(matches!(
            ConfigLoader::from_settings(settings),
            Err(EngineError::InvalidRates { .. })
        ));
    }

    #[test]
    fn test_from_settings_uses_custom_rates() {
        let settings = EngineSettings {
            statutory_rates: StatutoryRates {
                tax_rate: dec("0.2"),
                social_security_rate: dec("0"),
            },
            ..EngineSettings::default()
        };
        let loader = ConfigLoader::from_settings(settings).unwrap();
        let result = loader
            .calculator()
            .compute(dec("100"), crate::models::PayCycle::Weekly)
            .unwrap();
        assert_eq!(result.net_pay, dec("560"));
    }

    #[test]
    fn test_default_loader_is_statutory() {
        let loader = ConfigLoader::default();
        assert_eq!(loader.settings().server.port, 3000);
        assert_eq!(loader.calculator().rates(), StatutoryRates::default());
    }
}
