use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub upstream: UpstreamSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    pub environment: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamSettings {
    /// Azure Face API subscription key. Must be supplied via
    /// `FACE_RELAY__UPSTREAM__SUBSCRIPTION_KEY`; there is no usable default.
    pub subscription_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub format: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            // Start with default values
            .set_default("application.host", "0.0.0.0")?
            .set_default("application.port", 3000)?
            .set_default("application.environment", environment.clone())?
            .set_default("upstream.subscription_key", "")?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "json")?
            // Add configuration file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{environment}")).required(false))
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with prefix
            .add_source(Environment::with_prefix("FACE_RELAY").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.application.host, self.application.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new().expect("Failed to load configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_can_be_loaded() {
        let settings = Settings::new();
        assert!(settings.is_ok());
    }

    #[test]
    fn test_port_defaults_to_3000() {
        let settings = Settings::new().unwrap();
        assert_eq!(settings.application.port, 3000);
    }

    #[test]
    fn test_listen_address_format() {
        let settings = Settings::new().unwrap();
        let addr = settings.listen_address();
        assert!(addr.contains(&settings.application.host));
        assert!(addr.ends_with(&settings.application.port.to_string()));
    }
}
