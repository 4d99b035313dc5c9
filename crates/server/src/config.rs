//! Server configuration from the environment

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use anyhow::Context;
use forecast_facade::{ForecastOverrides, Preset, ServiceConfig};

/// Listener address and forecast defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub preset: Preset,
    pub seed: Option<u64>,
    pub base_temperature: Option<f64>,
    pub noise_std: Option<f64>,
    /// Allowed CORS origin; any origin when unset
    pub cors_origin: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            preset: Preset::default(),
            seed: None,
            base_temperature: None,
            noise_std: None,
            cors_origin: None,
        }
    }
}

impl ServerConfig {
    /// Read `HOST`, `PORT`, `FORECAST_PRESET`, `FORECAST_SEED`,
    /// `BASE_TEMPERATURE`, `NOISE_STD` and `CORS_ORIGIN`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "PORT")?.unwrap_or(defaults.port),
            preset: parse_var(&lookup, "FORECAST_PRESET")?.unwrap_or(defaults.preset),
            seed: parse_var(&lookup, "FORECAST_SEED")?,
            base_temperature: parse_var(&lookup, "BASE_TEMPERATURE")?,
            noise_std: parse_var(&lookup, "NOISE_STD")?,
            cors_origin: lookup("CORS_ORIGIN").filter(|origin| !origin.trim().is_empty()),
        })
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid HOST:PORT '{}:{}'", self.host, self.port))
    }

    /// Preset defaults with the environment overrides applied.
    pub fn service_config(&self) -> anyhow::Result<ServiceConfig> {
        let overrides = ForecastOverrides {
            seed: self.seed,
            base_temperature: self.base_temperature,
            noise_std: self.noise_std,
            ..ForecastOverrides::default()
        };
        ServiceConfig::preset(self.preset)
            .apply(&overrides)
            .with_context(|| format!("Invalid forecast defaults for preset '{}'", self.preset))
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{} has invalid value '{}'", key, raw)),
        _ => Ok(None),
    }
}
