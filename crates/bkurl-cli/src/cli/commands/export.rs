//! `bkurl export` – print the resolved value in a consumer format.

use super::resolve_once;
use crate::cli::HostArgs;
use anyhow::Result;
use bkurl_core::config::BackendConfig;
use bkurl_core::export::{self, Format};

pub fn run_export(cfg: BackendConfig, host: &HostArgs, format: Format) -> Result<()> {
    let resolved = resolve_once(cfg, host)?;
    println!("{}", export::render(&resolved, format)?);
    Ok(())
}
