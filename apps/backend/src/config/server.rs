use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::AppError;

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub keep_alive: Duration,
    pub request_timeout: Duration,
    pub shutdown_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            keep_alive: Duration::from_secs(60),
            request_timeout: Duration::from_secs(10),
            shutdown_timeout: Duration::from_secs(30),
        }
    }
}

impl ServerConfig {
    /// Read settings from the environment. Blank values count as unset.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read settings through `lookup` instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let host = var("BACKEND_HOST")
            .map(|v| v.trim().to_string())
            .unwrap_or(defaults.host);
        // BACKEND_PORT wins; PORT is the conventional platform fallback
        let port = match var("BACKEND_PORT")
            .map(|raw| ("BACKEND_PORT", raw))
            .or_else(|| var("PORT").map(|raw| ("PORT", raw)))
        {
            Some((name, raw)) => must_parse::<u16>(name, &raw)?,
            None => defaults.port,
        };

        Ok(Self {
            host,
            port,
            keep_alive: secs(&var, "BACKEND_KEEP_ALIVE_SECS", defaults.keep_alive)?,
            request_timeout: secs(&var, "BACKEND_REQUEST_TIMEOUT_SECS", defaults.request_timeout)?,
            shutdown_timeout: secs(
                &var,
                "BACKEND_SHUTDOWN_TIMEOUT_SECS",
                defaults.shutdown_timeout,
            )?,
        })
    }

    /// `host:port` suitable for logging.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn secs<F>(var: &F, name: &str, default: Duration) -> Result<Duration, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match var(name) {
        Some(raw) => must_parse::<u64>(name, &raw).map(Duration::from_secs),
        None => Ok(default),
    }
}

fn must_parse<T: FromStr>(name: &str, raw: &str) -> Result<T, AppError>
where
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| {
        AppError::config(format!(
            "Environment variable '{name}' has invalid value '{raw}': {e}"
        ))
    })
}
