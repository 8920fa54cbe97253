use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub api_prefix: String,
    pub log_dir: String,

    // Sessions
    pub session_idle_secs: u64,
    pub session_capacity: u64,

    // Rate limiting
    pub rate_login_per_min: u32,
    pub rate_protected_per_min: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: "127.0.0.1:8080".to_string(),
            api_prefix: "/api/v1".to_string(),
            log_dir: "logs".to_string(),
            session_idle_secs: 28_800, // 8 hours
            session_capacity: 10_000,
            rate_login_per_min: 60,
            rate_protected_per_min: 1000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let defaults = Self::default();

        Ok(Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or(defaults.server_addr),
            api_prefix: env::var("API_PREFIX").unwrap_or(defaults.api_prefix),
            log_dir: env::var("LOG_DIR").unwrap_or(defaults.log_dir),

            session_idle_secs: parse_var("SESSION_IDLE_SECS", defaults.session_idle_secs)?,
            session_capacity: parse_var("SESSION_CAPACITY", defaults.session_capacity)?,

            rate_login_per_min: parse_var("RATE_LOGIN_PER_MIN", defaults.rate_login_per_min)?,
            rate_protected_per_min: parse_var(
                "RATE_PROTECTED_PER_MIN",
                defaults.rate_protected_per_min,
            )?,
        })
    }
}

fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} must be a number, got {raw:?}")),
        Err(_) => Ok(default),
    }
}
