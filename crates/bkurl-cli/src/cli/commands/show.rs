//! `bkurl show` – print the effective configuration.

use anyhow::Result;
use bkurl_core::config::BackendConfig;

pub fn run_show(cfg: &BackendConfig) -> Result<()> {
    println!("{:<12} {}", "local", cfg.local);
    println!("{:<12} {}", "production", cfg.production);
    let env = cfg
        .environment
        .map(|e| e.to_string())
        .unwrap_or_else(|| "- (from host)".to_string());
    println!("{:<12} {}", "environment", env);
    Ok(())
}
