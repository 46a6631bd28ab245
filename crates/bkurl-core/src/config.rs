use crate::backend_url::BackendUrl;
use crate::environment::Environment;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Local development backend.
pub const DEFAULT_LOCAL_URL: &str = "http://localhost:3000";

/// Shipped production value. Must be replaced with the deployed backend
/// before production use.
pub const PLACEHOLDER_PRODUCTION_URL: &str = "https://your-backend-url.onrender.com";

/// Hostnames treated as local development.
pub const LOCAL_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

/// Backend configuration loaded from `~/.config/bkurl/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Backend used when the page is served from a local alias.
    pub local: BackendUrl,
    /// Backend used everywhere else.
    pub production: BackendUrl,
    /// Explicit environment; when set, the host is not consulted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            local: BackendUrl::parse_field("local", DEFAULT_LOCAL_URL)
                .expect("default local URL is valid"),
            production: BackendUrl::parse_field("production", PLACEHOLDER_PRODUCTION_URL)
                .expect("default production URL is valid"),
            environment: None,
        }
    }
}

/// Operator mistakes that are not runtime errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// `production` still holds the shipped placeholder.
    PlaceholderProduction,
    /// `production` points at a local development host.
    ProductionIsLocal(String),
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigWarning::PlaceholderProduction => write!(
                f,
                "production URL is still the placeholder {PLACEHOLDER_PRODUCTION_URL}; set it to the deployed backend"
            ),
            ConfigWarning::ProductionIsLocal(host) => {
                write!(f, "production URL points at local host `{host}`")
            }
        }
    }
}

impl BackendConfig {
    pub fn new(local: BackendUrl, production: BackendUrl) -> Self {
        Self {
            local,
            production,
            environment: None,
        }
    }

    pub fn with_environment(mut self, environment: Option<Environment>) -> Self {
        self.environment = environment;
        self
    }

    pub fn url_for(&self, environment: Environment) -> &BackendUrl {
        match environment {
            Environment::Local => &self.local,
            Environment::Production => &self.production,
        }
    }

    /// Apply `BKURL_ENV` on top of the file value.
    pub fn apply_env_override(mut self) -> Result<Self> {
        if let Some(env) = Environment::from_env()? {
            tracing::debug!("environment overridden by {}: {}", crate::environment::ENV_VAR, env);
            self.environment = Some(env);
        }
        Ok(self)
    }

    pub fn warnings(&self) -> Vec<ConfigWarning> {
        let mut out = Vec::new();
        let is_placeholder = BackendUrl::parse(PLACEHOLDER_PRODUCTION_URL)
            .map(|p| self.production.same_endpoint(&p))
            .unwrap_or(false);
        if is_placeholder {
            out.push(ConfigWarning::PlaceholderProduction);
        }
        if LOCAL_HOSTS.contains(&self.production.host()) {
            out.push(ConfigWarning::ProductionIsLocal(
                self.production.host().to_string(),
            ));
        }
        out
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("bkurl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<BackendConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Same as [`load_or_init`] but for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<BackendConfig> {
    if !path.exists() {
        let default_cfg = BackendConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config dir {}", parent.display()))?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(path)
}

/// Load configuration from an existing file.
pub fn load_from(path: &Path) -> Result<BackendConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: BackendConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
