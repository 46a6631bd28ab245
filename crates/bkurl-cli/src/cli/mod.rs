//! CLI for the bkurl backend URL resolver.

mod commands;

use anyhow::Result;
use bkurl_core::config::{self, BackendConfig};
use bkurl_core::export::Format;
use bkurl_core::host::{EnvHost, HostSource};
use bkurl_core::{Environment, HostContext};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_check, run_export, run_resolve, run_show};

/// Top-level CLI for bkurl.
#[derive(Debug, Parser)]
#[command(name = "bkurl")]
#[command(about = "bkurl: pick the backend base URL for the current host", long_about = None)]
pub struct Cli {
    /// Config file to read instead of ~/.config/bkurl/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Where the host identifier comes from. With none of these, `BKURL_HOST` is used.
#[derive(Debug, Clone, Default, Args)]
pub struct HostArgs {
    /// Hostname of the page, e.g. `localhost` or `example.com`.
    #[arg(long, conflicts_with_all = ["page_url", "authority"])]
    pub host: Option<String>,

    /// Full page location; its hostname is used.
    #[arg(long, value_name = "URL", conflicts_with = "authority")]
    pub page_url: Option<String>,

    /// HTTP `Host` header value (`host[:port]`).
    #[arg(long)]
    pub authority: Option<String>,

    /// Skip host detection and use this environment (local or production).
    #[arg(long, value_name = "ENV")]
    pub env: Option<Environment>,
}

impl HostArgs {
    pub fn host_context(&self) -> Result<HostContext> {
        if let Some(host) = &self.host {
            return Ok(HostContext::host(host.as_str()));
        }
        if let Some(page_url) = &self.page_url {
            return Ok(HostContext::from_page_url(page_url)?);
        }
        if let Some(authority) = &self.authority {
            return Ok(HostContext::from_authority(authority));
        }
        Ok(EnvHost.host_context()?)
    }

    /// `--env` wins over the config file and `BKURL_ENV`.
    pub fn apply(&self, cfg: BackendConfig) -> BackendConfig {
        match self.env {
            Some(env) => cfg.with_environment(Some(env)),
            None => cfg,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the backend URL for a host.
    Resolve {
        #[command(flatten)]
        host: HostArgs,
    },

    /// Print the effective configuration.
    Show,

    /// Validate the configuration and report operator mistakes.
    Check,

    /// Print the resolved value as a page script, dotenv line or JSON.
    Export {
        /// Output format: js, env or json.
        #[arg(long, default_value = "js")]
        format: Format,

        #[command(flatten)]
        host: HostArgs,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = load_config(cli.config.as_ref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Resolve { host } => run_resolve(cfg, &host)?,
            CliCommand::Show => run_show(&cfg)?,
            CliCommand::Check => run_check(&cfg)?,
            CliCommand::Export { format, host } => run_export(cfg, &host, format)?,
        }

        Ok(())
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<BackendConfig> {
    let cfg = match path {
        Some(p) => config::load_from(p)?,
        None => config::load_or_init()?,
    };
    cfg.apply_env_override()
}

#[cfg(test)]
mod tests;
