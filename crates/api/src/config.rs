//! Gateway configuration
//!
//! | Variable | Default |
//! |----------|---------|
//! | `TRIPDECK_PORT` | `8080` |
//! | `TRIPDECK_BIND` | `0.0.0.0` |
//! | `TRIPDECK_DATA_DIR` | `./bucket` |
//! | `TRIPDECK_EPHEMERAL` | `false` |
//!
//! Missing or invalid values fall back to the default with a log line.

use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

/// Where and how the gateway serves
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// TCP port
    pub port: u16,
    /// Interface address
    pub bind: String,
    /// Bucket directory holding the JSON objects
    pub data_dir: PathBuf,
    /// Keep documents in memory only
    pub ephemeral: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind: "0.0.0.0".to_string(),
            data_dir: PathBuf::from("./bucket"),
            ephemeral: false,
        }
    }
}

impl Config {
    /// Read the configuration from the environment
    pub fn load() -> Self {
        let defaults = Self::default();
        Self {
            port: try_load("TRIPDECK_PORT", defaults.port),
            bind: try_load("TRIPDECK_BIND", defaults.bind),
            data_dir: try_load("TRIPDECK_DATA_DIR", defaults.data_dir.display().to_string()).into(),
            ephemeral: try_load("TRIPDECK_EPHEMERAL", defaults.ephemeral),
        }
    }

    /// `bind:port`
    pub fn address(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Ok(raw) = env::var(key) else {
        info!("{key} not set, using default: {default}");
        return default;
    };
    raw.parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value '{raw}': {e}, using default: {default}");
        default
    })
}
