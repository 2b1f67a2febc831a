use std::path::PathBuf;
use std::time::Duration;

use crate::common::ConfigError;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_STATIC_DIR: &str = "./static";
pub const DEFAULT_VIEW_IDLE_MINUTES: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: String,
    /// JSON article library; the built-in demo library when unset.
    pub blog_data_path: Option<PathBuf>,
    pub static_dir: PathBuf,
    /// Dashboard views untouched for this long are dropped.
    pub view_idle: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            blog_data_path: None,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            view_idle: Duration::from_secs(DEFAULT_VIEW_IDLE_MINUTES * 60),
        }
    }
}

impl Config {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick
    /// up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();

        if let Some(addr) = var("BIND_ADDR") {
            config.bind_addr = addr;
        }
        config.blog_data_path = var("BLOG_DATA_PATH").map(PathBuf::from);
        if let Some(dir) = var("STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }
        if let Some(raw) = var("VIEW_IDLE_MINUTES") {
            let secs = raw
                .parse::<u64>()
                .ok()
                .filter(|m| *m > 0)
                .and_then(|m| m.checked_mul(60))
                .ok_or(ConfigError::Invalid {
                    name: "VIEW_IDLE_MINUTES",
                    expected: "a positive number of minutes",
                    value: raw.clone(),
                })?;
            config.view_idle = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
