//! Error types for configuration, resolution and publication.

use thiserror::Error;

/// A backend URL or environment name that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("backend URL for `{field}` is empty")]
    EmptyUrl { field: &'static str },

    #[error("backend URL `{url}` is not a valid URL: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("backend URL `{url}` uses unsupported scheme `{scheme}` (expected http or https)")]
    UnsupportedScheme { url: String, scheme: String },

    #[error("backend URL `{url}` has no host")]
    MissingHost { url: String },

    #[error("backend URL for `{field}` (host `{host}`) must not carry a username or password")]
    CredentialsInUrl { field: &'static str, host: String },

    #[error("backend URL `{url}` must be a base URL (scheme, host, optional port), not a path or query")]
    NotABaseUrl { url: String },

    #[error("unknown environment `{0}` (expected `local` or `production`)")]
    UnknownEnvironment(String),

    #[error("environment variable {var} is not valid unicode")]
    NotUnicodeEnv { var: &'static str },
}

/// Resolution could not pick a URL without guessing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Host(#[from] HostError),

    #[error("no host identifier available and no explicit environment configured; set `environment` in config or BKURL_ENV")]
    NoHostContext,
}

/// The process-wide `BACKEND_URL` slot was already written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PublishError {
    #[error("BACKEND_URL already published as `{existing}`, refusing to replace with `{attempted}`")]
    AlreadyPublished { existing: String, attempted: String },
}

/// A page location that could not be parsed to read its hostname.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("page location `{url}` is not a valid URL: {reason}")]
    InvalidPageUrl { url: String, reason: String },

    #[error("environment variable {var} is not valid unicode")]
    NotUnicodeEnv { var: &'static str },
}
