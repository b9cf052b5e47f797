use std::str::FromStr;

use crate::server::error::config::ConfigError;

pub static DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3001";
pub const DEFAULT_SESSION_EXPIRY_DAYS: i64 = 7;
pub const DEFAULT_SESSION_CLEANUP_INTERVAL_SECS: u64 = 60 * 60;

pub struct Config {
    pub database_url: String,
    /// Origin allowed to call the state-changing auth endpoints
    pub cors_origin: String,
    pub listen_addr: String,
    pub session_expiry_days: i64,
    pub session_cleanup_interval_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from any variable source, `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            database_url: required(&lookup, "DATABASE_URL")?,
            cors_origin: required(&lookup, "CORS_ORIGIN")?,
            listen_addr: lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
            session_expiry_days: positive(
                &lookup,
                "SESSION_EXPIRY_DAYS",
                DEFAULT_SESSION_EXPIRY_DAYS,
            )?,
            session_cleanup_interval_secs: positive(
                &lookup,
                "SESSION_CLEANUP_INTERVAL_SECS",
                DEFAULT_SESSION_CLEANUP_INTERVAL_SECS,
            )?,
        })
    }
}

fn required<F>(lookup: &F, var: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvVar(var.to_string())),
    }
}

fn positive<F, T>(lookup: &F, var: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + PartialOrd + Default,
{
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };

    let invalid = || ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason: format!("expected a positive integer, got {:?}", raw),
    };

    let value = raw.trim().parse::<T>().map_err(|_| invalid())?;
    if value <= T::default() {
        return Err(invalid());
    }

    Ok(value)
}
