//! Configuration types.
//!
//! These are deserialized from `payroll.yaml`. Every section has defaults,
//! so an empty file yields the statutory rates and a local server address.

use serde::{Deserialize, Serialize};

use crate::calculation::StatutoryRates;

/// Top-level engine settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineSettings {
    /// Deduction rates applied by the payroll calculator.
    #[serde(default)]
    pub statutory_rates: StatutoryRates,
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerSettings,
}

/// Where the HTTP facade listens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSettings {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    /// Returns the `host:port` bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_empty_document_uses_defaults() {
        let settings: EngineSettings = serde_yaml::from_str("{}").unwrap();
        assert_eq!(settings, EngineSettings::default());
        assert_eq!(settings.server.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_rates_parse_from_strings() {
        let yaml = r#"
statutory_rates:
  tax_rate: "0.10"
  social_security_rate: "0.05"
server:
  port: 8080
"#;
        let settings: EngineSettings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            settings.statutory_rates.tax_rate,
            Decimal::from_str("0.10").unwrap()
        );
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "role_policy: {}\n";
        assert!(serde_yaml::from_str::<EngineSettings>(yaml).is_err());
    }
}
