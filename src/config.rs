//! Process configuration read from the environment (and `.env`).

use log::warn;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::generators::common::get_static_dir;
use crate::generators::{EngineConfig, LayoutConfig};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
pub const DEFAULT_MAX_DATA_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
    /// Cap on the JSON `data` field.
    pub max_data_bytes: usize,
    pub layout: LayoutConfig,
    pub engine: EngineConfig,
    pub logo_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            max_data_bytes: DEFAULT_MAX_DATA_BYTES,
            layout: LayoutConfig::standard(),
            engine: EngineConfig::default(),
            logo_path: get_static_dir().join("logo.png"),
        }
    }
}

impl AppConfig {
    /// Build the configuration from environment variables.
    ///
    /// Unset variables use defaults; unparsable ones are logged and ignored.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let engine = EngineConfig {
            chrome_executable: lookup("CHROME_EXECUTABLE")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            idle_timeout: Duration::from_millis(parse_or(
                "RENDER_IDLE_TIMEOUT_MS",
                &lookup,
                defaults.engine.idle_timeout.as_millis() as u64,
            )),
        };

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or("PORT", &lookup, defaults.port),
            max_upload_bytes: parse_or("MAX_UPLOAD_BYTES", &lookup, defaults.max_upload_bytes),
            max_data_bytes: parse_or("MAX_DATA_BYTES", &lookup, defaults.max_data_bytes),
            layout: parse_or("CV_LAYOUT", &lookup, defaults.layout),
            engine,
            logo_path: lookup("LOGO_PATH").map(PathBuf::from).unwrap_or(defaults.logo_path),
        }
    }
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(e) => {
                warn!("Ignoring invalid {}={:?}: {}", key, raw, e);
                default
            }
        },
    }
}
