//! Ambient host identifier: where it comes from and how it is extracted.
//!
//! A browser exposes the hostname of the page as `location.hostname`. A
//! server sees the same thing in the `Host` header of each request. Both are
//! reduced to a [`HostContext`] before resolution.

use crate::error::HostError;
use std::env::VarError;

/// Environment variable the CLI reads as the ambient host.
pub const HOST_ENV_VAR: &str = "BKURL_HOST";

/// Host identifier of the current execution context, if there is one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostContext {
    Host(String),
    Unavailable,
}

impl HostContext {
    pub fn host(name: impl Into<String>) -> Self {
        HostContext::Host(name.into())
    }

    /// Hostname portion of a page location, like `location.hostname`.
    ///
    /// `http://127.0.0.1:8080/index.html` gives `127.0.0.1`; a location
    /// without a host (e.g. `file:///index.html`) gives the empty string.
    pub fn from_page_url(location: &str) -> Result<Self, HostError> {
        let parsed = ::url::Url::parse(location.trim()).map_err(|e| HostError::InvalidPageUrl {
            url: location.to_string(),
            reason: e.to_string(),
        })?;
        Ok(HostContext::Host(
            parsed.host_str().unwrap_or_default().to_string(),
        ))
    }

    /// Hostname portion of an HTTP `Host` header value (`host[:port]`).
    pub fn from_authority(authority: &str) -> Self {
        HostContext::Host(hostname_from_authority(authority))
    }

    pub fn as_host(&self) -> Option<&str> {
        match self {
            HostContext::Host(h) => Some(h),
            HostContext::Unavailable => None,
        }
    }
}

/// Anything that can report the ambient host identifier.
pub trait HostSource {
    fn host_context(&self) -> Result<HostContext, HostError>;
}

impl HostSource for HostContext {
    fn host_context(&self) -> Result<HostContext, HostError> {
        Ok(self.clone())
    }
}

/// Reads the ambient host from `BKURL_HOST`; unset means unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvHost;

impl HostSource for EnvHost {
    fn host_context(&self) -> Result<HostContext, HostError> {
        match std::env::var(HOST_ENV_VAR) {
            Ok(v) => Ok(HostContext::Host(v.trim().to_string())),
            Err(VarError::NotPresent) => Ok(HostContext::Unavailable),
            Err(VarError::NotUnicode(_)) => Err(HostError::NotUnicodeEnv { var: HOST_ENV_VAR }),
        }
    }
}

/// Strip the port from `host[:port]` and lowercase the name.
/// Bracketed IPv6 literals keep their brackets, as `location.hostname` does.
fn hostname_from_authority(authority: &str) -> String {
    let authority = authority.trim();

    if authority.starts_with('[') {
        if let Some(end) = authority.find(']') {
            return authority[..=end].to_ascii_lowercase();
        }
        return authority.to_ascii_lowercase();
    }

    let host = match authority.rsplit_once(':') {
        // A second colon means an unbracketed IPv6 literal, not host:port.
        Some((h, port)) if !h.contains(':') && port.chars().all(|c| c.is_ascii_digit()) => h,
        _ => authority,
    };
    host.to_ascii_lowercase()
}
