//! Configuration module for the rentals backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

/// Output format for the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Shared key guarding the admin dashboard (open when unset)
    pub admin_psk: Option<String>,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Plain text or JSON log lines
    pub log_format: LogFormat,
    /// Number of days of generated availability per property
    pub availability_days: u32,
    /// Chance that a generated date is marked unavailable
    pub unavailable_probability: f64,
    /// Price multiplier applied to Saturday and Sunday nights
    pub weekend_multiplier: f64,
    /// Seed for reproducible availability; random when unset
    pub availability_seed: Option<u64>,
    /// Artificial delay added to API responses, in milliseconds
    pub simulated_latency_ms: u64,
}

/// A variable was set but could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub variable: &'static str,
    pub value: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value for {}: {:?}", self.variable, self.value)
    }
}

impl std::error::Error for ConfigError {}

impl Default for Config {
    fn default() -> Self {
        Self {
            admin_psk: None,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            availability_days: 90,
            unavailable_probability: 0.15,
            weekend_multiplier: 1.2,
            availability_seed: None,
            simulated_latency_ms: 0,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let admin_psk = env::var("RENTALS_ADMIN_PSK")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let log_format = match env::var("RENTALS_LOG_FORMAT").ok().as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError {
                    variable: "RENTALS_LOG_FORMAT",
                    value: other.to_string(),
                })
            }
        };

        let unavailable_probability = parse_var(
            "RENTALS_UNAVAILABLE_PROBABILITY",
            defaults.unavailable_probability,
        )?;
        if !(0.0..=1.0).contains(&unavailable_probability) {
            return Err(ConfigError {
                variable: "RENTALS_UNAVAILABLE_PROBABILITY",
                value: unavailable_probability.to_string(),
            });
        }

        Ok(Self {
            admin_psk,
            bind_addr: parse_var("RENTALS_BIND_ADDR", defaults.bind_addr)?,
            log_level: env::var("RENTALS_LOG_LEVEL").unwrap_or(defaults.log_level),
            log_format,
            availability_days: parse_var("RENTALS_AVAILABILITY_DAYS", defaults.availability_days)?,
            unavailable_probability,
            weekend_multiplier: parse_var(
                "RENTALS_WEEKEND_MULTIPLIER",
                defaults.weekend_multiplier,
            )?,
            availability_seed: match env::var("RENTALS_AVAILABILITY_SEED") {
                Ok(raw) => Some(parse_value("RENTALS_AVAILABILITY_SEED", &raw)?),
                Err(_) => None,
            },
            simulated_latency_ms: parse_var(
                "RENTALS_SIMULATED_LATENCY_MS",
                defaults.simulated_latency_ms,
            )?,
        })
    }
}

fn parse_var<T: FromStr>(variable: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(variable) {
        Ok(raw) => parse_value(variable, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T: FromStr>(variable: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError {
        variable,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.admin_psk.is_none());
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.availability_days, 90);
        assert!((config.unavailable_probability - 0.15).abs() < f64::EPSILON);
        assert!((config.weekend_multiplier - 1.2).abs() < f64::EPSILON);
        assert!(config.availability_seed.is_none());
        assert_eq!(config.simulated_latency_ms, 0);
    }

    #[test]
    fn test_parse_value_reports_variable() {
        let err = parse_value::<u32>("RENTALS_AVAILABILITY_DAYS", "ninety").unwrap_err();
        assert_eq!(err.variable, "RENTALS_AVAILABILITY_DAYS");
        assert_eq!(
            err.to_string(),
            "invalid value for RENTALS_AVAILABILITY_DAYS: \"ninety\""
        );
    }

    #[test]
    fn test_parse_value_trims_whitespace() {
        let addr: SocketAddr = parse_value("RENTALS_BIND_ADDR", " 0.0.0.0:3000 ").unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:3000");
    }
}
