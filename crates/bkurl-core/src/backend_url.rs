//! Validated backend base URL.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A backend base URL: `http` or `https`, a host, and optionally a port.
///
/// The string is kept as configured, minus surrounding whitespace, so that
/// resolution hands back the text the operator wrote (no trailing slash is
/// added, case is not folded).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BackendUrl {
    raw: String,
    scheme: String,
    host: String,
    port: Option<u16>,
}

impl BackendUrl {
    /// Parse and validate a backend URL. `field` names the config key for
    /// error messages.
    pub fn parse_field(field: &'static str, raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyUrl { field });
        }

        let parsed = ::url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidUrl {
            url: trimmed.to_string(),
            reason: e.to_string(),
        })?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ConfigError::UnsupportedScheme {
                    url: trimmed.to_string(),
                    scheme: other.to_string(),
                })
            }
        }

        let host = parsed
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| ConfigError::MissingHost {
                url: trimmed.to_string(),
            })?
            .to_string();

        if !parsed.username().is_empty() || parsed.password().is_some() {
            return Err(ConfigError::CredentialsInUrl { field, host });
        }

        if parsed.path() != "/" || parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ConfigError::NotABaseUrl {
                url: trimmed.to_string(),
            });
        }

        Ok(Self {
            raw: trimmed.to_string(),
            scheme: parsed.scheme().to_string(),
            host,
            port: parsed.port(),
        })
    }

    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        Self::parse_field("url", raw)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Lowercased scheme, `http` or `https`.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Explicit port, if the URL carries one other than the scheme default.
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn port_or_default(&self) -> u16 {
        self.port
            .unwrap_or(if self.scheme == "https" { 443 } else { 80 })
    }

    /// Same scheme, host and effective port, however the text was spelled.
    pub fn same_endpoint(&self, other: &BackendUrl) -> bool {
        self.scheme == other.scheme
            && self.host == other.host
            && self.port_or_default() == other.port_or_default()
    }
}

impl fmt::Display for BackendUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl TryFrom<String> for BackendUrl {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BackendUrl> for String {
    fn from(value: BackendUrl) -> Self {
        value.raw
    }
}

impl std::str::FromStr for BackendUrl {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
