//! Backend connection settings baked into the browser bundle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser cannot read process environment at runtime, so the hosted
//! backend URL and public API key are captured at compile time with
//! `option_env!`. Parsing is separated from the source so it stays testable.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 15_000;

const URL_VAR: &str = "SUPABASE_URL";
const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";
const TIMEOUT_VAR: &str = "SUPABASE_REQUEST_TIMEOUT_MS";

/// Errors raised while assembling [`BackendConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing configuration value: {var}")]
    Missing { var: &'static str },
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Connection settings for the hosted auth + table backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Project base URL without a trailing slash.
    pub url: String,
    /// Public (anon) API key sent as the `apikey` header.
    pub anon_key: String,
    /// Global per-request deadline.
    pub request_timeout_ms: u64,
}

impl BackendConfig {
    /// Build config from values captured when the bundle was compiled.
    ///
    /// Required:
    /// - `SUPABASE_URL`
    /// - `SUPABASE_ANON_KEY`
    ///
    /// Optional:
    /// - `SUPABASE_REQUEST_TIMEOUT_MS`: default 15000
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required value is absent or malformed.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                URL_VAR => option_env!("SUPABASE_URL"),
                ANON_KEY_VAR => option_env!("SUPABASE_ANON_KEY"),
                TIMEOUT_VAR => option_env!("SUPABASE_REQUEST_TIMEOUT_MS"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Build config from an arbitrary key/value source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required value is absent or malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = required(&lookup, URL_VAR)?;
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::Invalid { var: URL_VAR, reason: format!("expected an http(s) URL, got '{url}'") });
        }
        let url = url.trim_end_matches('/').to_owned();
        let anon_key = required(&lookup, ANON_KEY_VAR)?;

        let request_timeout_ms = match lookup(TIMEOUT_VAR).map(|raw| raw.trim().to_owned()) {
            None => DEFAULT_REQUEST_TIMEOUT_MS,
            Some(raw) if raw.is_empty() => DEFAULT_REQUEST_TIMEOUT_MS,
            Some(raw) => match raw.parse::<u64>() {
                Ok(0) => {
                    return Err(ConfigError::Invalid { var: TIMEOUT_VAR, reason: "must be greater than zero".to_owned() });
                }
                Ok(ms) => ms,
                Err(e) => return Err(ConfigError::Invalid { var: TIMEOUT_VAR, reason: e.to_string() }),
            },
        };

        Ok(Self { url, anon_key, request_timeout_ms })
    }
}

fn required<F>(lookup: &F, var: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing { var })
}
