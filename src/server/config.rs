use std::{path::PathBuf, time::Duration};

use crate::server::{codec::DEFAULT_CODEC_TIMEOUT, error::config::ConfigError};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub generator_path: Option<PathBuf>,
    pub parser_path: Option<PathBuf>,
    pub codec_timeout: Duration,
}

impl Config {
    /// Reads the configuration from environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables are present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - `SDB_CODEC_TIMEOUT_SECS` is not a positive integer
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let database_url =
            var("DATABASE_URL").ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".into()))?;

        let codec_timeout = match var("SDB_CODEC_TIMEOUT_SECS") {
            Some(value) => parse_timeout(&value)?,
            None => DEFAULT_CODEC_TIMEOUT,
        };

        Ok(Self {
            database_url,
            bind_addr: var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            generator_path: var("SDB_GENERATOR_PATH").map(PathBuf::from),
            parser_path: var("SDB_PARSER_PATH").map(PathBuf::from),
            codec_timeout,
        })
    }
}

fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvValue {
        var: "SDB_CODEC_TIMEOUT_SECS".to_string(),
        reason,
    };

    match value.trim().parse::<u64>() {
        Ok(0) => Err(invalid("must be greater than zero".to_string())),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(invalid(e.to_string())),
    }
}
