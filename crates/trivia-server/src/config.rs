//! Server configuration
//!
//! Built-in defaults, then an optional `trivia.toml`, then `TRIVIA_*`
//! environment variables.

use anyhow::{Context, Result};
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use trivia_core::paging::DEFAULT_PAGE_SIZE;

pub const CONFIG_FILE: &str = "trivia";
pub const ENV_PREFIX: &str = "TRIVIA";

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
const DEFAULT_DATABASE_URL: &str = "sqlite://data/trivia.db";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub database_url: String,
    pub page_size: usize,
    /// Insert the sample categories and questions into an empty store
    pub seed: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            seed: true,
        }
    }
}

impl ServerConfig {
    pub fn load() -> Result<Self> {
        let builder = Self::defaults()
            .context("Failed to set configuration defaults")?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Self::environment());

        Self::from_builder(builder)
    }

    /// `TRIVIA_PAGE_SIZE=20` sets `page_size`, and so on
    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX).try_parsing(true)
    }

    fn defaults() -> std::result::Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("bind_address", defaults.bind_address)?
            .set_default("database_url", defaults.database_url)?
            .set_default("page_size", defaults.page_size as u64)?
            .set_default("seed", defaults.seed)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let config: ServerConfig = builder
            .build()
            .context("Failed to read configuration sources")?
            .try_deserialize()
            .context("Invalid configuration values")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            anyhow::bail!("page_size must be at least 1");
        }
        if self.database_url.trim().is_empty() {
            anyhow::bail!("database_url must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_defaults() -> Result<()> {
        let config = ServerConfig::from_builder(ServerConfig::defaults()?)?;
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.page_size, 10);
        assert!(config.seed);
        Ok(())
    }

    #[test]
    fn test_file_overrides_defaults() -> Result<()> {
        let builder = ServerConfig::defaults()?.add_source(File::from_str(
            "page_size = 5\nseed = false\ndatabase_url = \"sqlite::memory:\"",
            FileFormat::Toml,
        ));
        let config = ServerConfig::from_builder(builder)?;
        assert_eq!(config.page_size, 5);
        assert!(!config.seed);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
        Ok(())
    }

    #[test]
    fn test_environment_overrides_file() -> Result<()> {
        let env = config::Map::from([
            ("TRIVIA_PAGE_SIZE".to_string(), "7".to_string()),
            ("TRIVIA_SEED".to_string(), "false".to_string()),
            ("OTHER_PAGE_SIZE".to_string(), "3".to_string()),
        ]);
        let builder = ServerConfig::defaults()?
            .add_source(File::from_str("page_size = 5", FileFormat::Toml))
            .add_source(ServerConfig::environment().source(Some(env)));
        let config = ServerConfig::from_builder(builder)?;
        assert_eq!(config.page_size, 7);
        assert!(!config.seed);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        Ok(())
    }

    #[test]
    fn test_zero_page_size_rejected() -> Result<()> {
        let builder = ServerConfig::defaults()?
            .add_source(File::from_str("page_size = 0", FileFormat::Toml));
        assert!(ServerConfig::from_builder(builder).is_err());
        Ok(())
    }
}
