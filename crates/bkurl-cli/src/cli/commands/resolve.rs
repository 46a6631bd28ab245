//! `bkurl resolve` – print the backend URL for a host.

use crate::cli::HostArgs;
use anyhow::Result;
use bkurl_core::config::BackendConfig;
use bkurl_core::published;
use bkurl_core::{EnvironmentResolver, ResolvedBackend};

/// Resolve once from the CLI host arguments.
pub(crate) fn resolve_once(cfg: BackendConfig, host: &HostArgs) -> Result<ResolvedBackend> {
    let resolver = EnvironmentResolver::new(host.apply(cfg));
    let ctx = host.host_context()?;
    let resolved = resolver.resolve_context(&ctx)?;
    tracing::debug!(
        "resolved {} ({}) via {:?}",
        resolved.as_str(),
        resolved.environment,
        resolved.selection
    );
    Ok(resolved)
}

pub fn run_resolve(cfg: BackendConfig, host: &HostArgs) -> Result<()> {
    let resolved = resolve_once(cfg, host)?;
    let url = published::publish(&resolved)?;
    println!("{url}");
    Ok(())
}
