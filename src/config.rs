use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub openai_api_key: Option<String>,
    pub client_url: Option<String>,
    pub max_upload_bytes: usize,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

/// Ten years.
pub const MAX_TOKEN_TTL_HOURS: i64 = 24 * 365 * 10;

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            port: get_env_parse_or("PORT", 5000)?,
            database_url: get_env("DATABASE_URL")?,
            jwt_secret: get_env("JWT_SECRET")?,
            token_ttl_hours: check_token_ttl(get_env_parse_or("TOKEN_TTL_HOURS", 168)?)?,
            openai_api_key: get_env_opt("OPENAI_API_KEY"),
            client_url: get_env_opt("CLIENT_URL"),
            max_upload_bytes: get_env_parse_or("MAX_UPLOAD_BYTES", 5 * 1024 * 1024)?,
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

// Blank values count as unset so an empty `OPENAI_API_KEY=` in .env disables the LLM.
fn get_env_opt(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match get_env_opt(name) {
        Some(raw) => parse_value(name, &raw),
        None => Ok(default),
    }
}

fn parse_value<T>(name: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse()
        .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e)))
}

fn check_token_ttl(hours: i64) -> Result<i64> {
    if (1..=MAX_TOKEN_TTL_HOURS).contains(&hours) {
        Ok(hours)
    } else {
        Err(Error::Config(format!(
            "TOKEN_TTL_HOURS must be between 1 and {}, got {}",
            MAX_TOKEN_TTL_HOURS, hours
        )))
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
