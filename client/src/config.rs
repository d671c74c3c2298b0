//! Client configuration
//!
//! Resolution order: command line, then environment (`.env` included), then
//! built-in defaults.

use std::time::Duration;

use url::Url;

use crate::error::{ClientError, ClientResult};

/// Service origin used when nothing else is configured
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Environment variable overriding the service origin
pub const API_BASE_ENV: &str = "WAREHOUSE_API_BASE";

/// Environment variable setting a per-request timeout in seconds
pub const TIMEOUT_ENV: &str = "WAREHOUSE_TIMEOUT_SECS";

/// Resolved client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Normalized origin without a trailing slash
    pub api_base: String,
    /// Per-request timeout; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a configuration for the given origin
    pub fn new(api_base: &str) -> ClientResult<Self> {
        Ok(Self {
            api_base: normalize_base(api_base)?,
            request_timeout: None,
        })
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Resolve from command-line values, falling back to the process environment
    pub fn resolve(api_base: Option<String>, timeout_secs: Option<u64>) -> ClientResult<Self> {
        Self::resolve_with(api_base, timeout_secs, |key| std::env::var(key).ok())
    }

    /// Resolve with an explicit environment lookup
    pub fn resolve_with<F>(api_base: Option<String>, timeout_secs: Option<u64>, lookup: F) -> ClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = api_base
            .or_else(|| lookup(API_BASE_ENV))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let timeout_secs = match timeout_secs {
            Some(secs) => Some(secs),
            None => match lookup(TIMEOUT_ENV) {
                Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| {
                    ClientError::config(format!("{TIMEOUT_ENV} must be a whole number of seconds, got '{raw}'"))
                })?),
                None => None,
            },
        };

        // Zero means no timeout
        let timeout = timeout_secs.filter(|secs| *secs > 0).map(Duration::from_secs);

        Ok(Self::new(&base)?.with_timeout(timeout))
    }

    /// Absolute URL of a service path such as `/upload`
    pub fn endpoint_url(&self, path: &str) -> String {
        if path == "/" {
            format!("{}/", self.api_base)
        } else {
            format!("{}/{}", self.api_base, path.trim_start_matches('/'))
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout: None,
        }
    }
}

fn normalize_base(raw: &str) -> ClientResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ClientError::config("service address is empty"));
    }

    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };

    let url = Url::parse(&with_scheme)
        .map_err(|e| ClientError::config(format!("invalid service address '{raw}': {e}")))?;
    if url.host_str().is_none() {
        return Err(ClientError::config(format!("service address '{raw}' has no host")));
    }

    Ok(with_scheme.trim_end_matches('/').to_string())
}
