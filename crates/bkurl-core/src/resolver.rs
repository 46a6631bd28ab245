//! Picks the backend URL for a host.
//!
//! [`EnvironmentResolver::resolve`] is the plain two-way choice: a local
//! alias gets the local URL, anything else gets production. Callers that
//! have an explicit environment or may have no host at all go through
//! [`EnvironmentResolver::resolve_context`].
//!
//! In a server, resolve once per request from that request's `Host`; the
//! result must not be cached across requests.

use crate::backend_url::BackendUrl;
use crate::config::{BackendConfig, LOCAL_HOSTS};
use crate::environment::Environment;
use crate::error::ResolveError;
use crate::host::{HostContext, HostSource};

/// How the environment was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Named by config, `BKURL_ENV`, or a flag.
    Explicit,
    /// Derived from this host identifier.
    Host(String),
}

/// The backend URL chosen for this process (or request), with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBackend {
    pub url: BackendUrl,
    pub environment: Environment,
    pub selection: Selection,
}

impl ResolvedBackend {
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

#[derive(Debug, Clone)]
pub struct EnvironmentResolver {
    config: BackendConfig,
}

impl EnvironmentResolver {
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Exact match against the local aliases; everything else, including
    /// the empty string, is production.
    pub fn environment_for_host(host: &str) -> Environment {
        if LOCAL_HOSTS.contains(&host) {
            Environment::Local
        } else {
            Environment::Production
        }
    }

    pub fn resolve(&self, host: &str) -> &BackendUrl {
        self.config.url_for(Self::environment_for_host(host))
    }

    /// Explicit environment first, then the host, otherwise an error.
    pub fn resolve_context(&self, ctx: &HostContext) -> Result<ResolvedBackend, ResolveError> {
        if let Some(environment) = self.config.environment {
            return Ok(ResolvedBackend {
                url: self.config.url_for(environment).clone(),
                environment,
                selection: Selection::Explicit,
            });
        }

        match ctx {
            HostContext::Host(host) => {
                let environment = Self::environment_for_host(host);
                Ok(ResolvedBackend {
                    url: self.config.url_for(environment).clone(),
                    environment,
                    selection: Selection::Host(host.clone()),
                })
            }
            HostContext::Unavailable => Err(ResolveError::NoHostContext),
        }
    }

    pub fn resolve_from<S: HostSource + ?Sized>(
        &self,
        source: &S,
    ) -> Result<ResolvedBackend, ResolveError> {
        self.resolve_context(&source.host_context()?)
    }
}
