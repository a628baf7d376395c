use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_CATALOG_PATH: &str = "data/catalog.json";
const DEFAULT_NEAREST_RADIUS_KM: f64 = 100.0;
const DEFAULT_NEAREST_LIMIT: usize = 12;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: String },
    #[error("unknown log level {0:?}")]
    InvalidLogLevel(String),
}

/// Server settings read from `MEETUP_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub catalog_path: PathBuf,
    pub nearest_radius_km: f64,
    pub nearest_limit: usize,
    pub log_level: log::Level,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            nearest_radius_km: DEFAULT_NEAREST_RADIUS_KM,
            nearest_limit: DEFAULT_NEAREST_LIMIT,
            log_level: log::Level::Info,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = lookup("MEETUP_CATALOG_PATH") {
            config.catalog_path = PathBuf::from(path);
        }
        if let Some(value) = lookup("MEETUP_NEAREST_RADIUS_KM") {
            let radius: f64 = parse("MEETUP_NEAREST_RADIUS_KM", &value)?;
            if radius <= 0.0 || !radius.is_finite() {
                return Err(ConfigError::NotPositive {
                    name: "MEETUP_NEAREST_RADIUS_KM",
                    value,
                });
            }
            config.nearest_radius_km = radius;
        }
        if let Some(value) = lookup("MEETUP_NEAREST_LIMIT") {
            let limit: usize = parse("MEETUP_NEAREST_LIMIT", &value)?;
            if limit == 0 {
                return Err(ConfigError::NotPositive {
                    name: "MEETUP_NEAREST_LIMIT",
                    value,
                });
            }
            config.nearest_limit = limit;
        }
        if let Some(value) = lookup("MEETUP_LOG") {
            config.log_level = value
                .parse()
                .map_err(|_| ConfigError::InvalidLogLevel(value))?;
        }

        Ok(config)
    }
}

fn parse<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        name,
        value: value.to_string(),
    })
}
