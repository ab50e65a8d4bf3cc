use std::env;

use chrono::Duration;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;
use token::ValidityWindow;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub token: TokenConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TokenConfig {
    #[serde(default = "default_max_age_hours")]
    pub max_age_hours: i64,
    #[serde(default = "default_slew_minutes")]
    pub slew_minutes: i64,
}

fn default_max_age_hours() -> i64 {
    25
}

fn default_slew_minutes() -> i64 {
    10
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            max_age_hours: default_max_age_hours(),
            slew_minutes: default_slew_minutes(),
        }
    }
}

impl TokenConfig {
    /// Validity window for the token verifier.
    pub fn window(&self) -> ValidityWindow {
        ValidityWindow::new(
            Duration::hours(self.max_age_hours),
            Duration::minutes(self.slew_minutes),
        )
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, TOKEN__MAX_AGE_HOURS, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_defaults_match_policy() {
        let token = TokenConfig::default();
        assert_eq!(token.max_age_hours, 25);
        assert_eq!(token.slew_minutes, 10);
        assert_eq!(token.window(), ValidityWindow::default());
    }
}
