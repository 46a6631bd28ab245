//! Render the resolved backend for consumers: a page script, a dotenv line,
//! or JSON.

use crate::resolver::ResolvedBackend;
use anyhow::Result;
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// `window.BACKEND_URL = "...";`
    #[default]
    Js,
    /// `BACKEND_URL=...`
    Env,
    Json,
}

impl FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "js" | "javascript" => Ok(Format::Js),
            "env" | "dotenv" => Ok(Format::Env),
            "json" => Ok(Format::Json),
            other => anyhow::bail!("unknown export format `{other}` (expected js, env or json)"),
        }
    }
}

#[derive(Serialize)]
struct JsonExport<'a> {
    backend_url: &'a str,
    environment: &'a str,
}

pub fn render(resolved: &ResolvedBackend, format: Format) -> Result<String> {
    let url = resolved.as_str();
    let out = match format {
        Format::Js => format!("window.BACKEND_URL = {};", serde_json::to_string(url)?),
        Format::Env => format!("BACKEND_URL={url}"),
        Format::Json => serde_json::to_string_pretty(&JsonExport {
            backend_url: url,
            environment: resolved.environment.as_str(),
        })?,
    };
    Ok(out)
}
