//! `bkurl check` – report configuration mistakes.

use anyhow::Result;
use bkurl_core::config::BackendConfig;

/// Print each warning; fail if there are any so deploy scripts can gate on it.
pub fn run_check(cfg: &BackendConfig) -> Result<()> {
    let warnings = cfg.warnings();
    if warnings.is_empty() {
        println!("config ok");
        return Ok(());
    }
    for w in &warnings {
        tracing::warn!("{w}");
        println!("warning: {w}");
    }
    anyhow::bail!("{} configuration warning(s)", warnings.len())
}
