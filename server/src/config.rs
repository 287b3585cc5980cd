//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("invalid {key}: {reason}")]
    InvalidConfig { key: &'static str, reason: String },

    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Backend base URL handed to the page, without a trailing slash.
    pub api_base: String,
}

impl HostConfig {
    /// Build host config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SPARK_API_BASE`: default `http://127.0.0.1:8000`
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`] over an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HostError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT").as_deref().map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| HostError::InvalidConfig { key: "PORT", reason: format!("{raw:?}: {e}") })?,
        };
        let api_base = parse_api_base(lookup("SPARK_API_BASE").as_deref())?;
        Ok(Self { port, api_base })
    }
}

/// Why a `.env` load failed, or `None` when there simply is no file.
pub fn env_file_problem(err: &dotenvy::Error) -> Option<String> {
    (!err.not_found()).then(|| err.to_string())
}

fn parse_api_base(raw: Option<&str>) -> Result<String, HostError> {
    let trimmed = raw.unwrap_or("").trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(DEFAULT_API_BASE.to_owned());
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(HostError::InvalidConfig {
            key: "SPARK_API_BASE",
            reason: format!("{trimmed:?} is not an http(s) URL"),
        });
    }
    Ok(trimmed.to_owned())
}
