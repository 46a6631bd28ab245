//! Deployment environment and its explicit override.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::env::VarError;
use std::fmt;
use std::str::FromStr;

/// Environment variable that names the environment explicitly.
pub const ENV_VAR: &str = "BKURL_ENV";

/// Which of the two configured backend URLs applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }

    /// Read `BKURL_ENV`. Unset or blank means no explicit environment.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        match std::env::var(ENV_VAR) {
            Ok(v) => Self::parse_optional(&v),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicodeEnv { var: ENV_VAR }),
        }
    }

    fn parse_optional(value: &str) -> Result<Option<Self>, ConfigError> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(None);
        }
        value.parse().map(Some)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" | "dev" | "development" => Ok(Environment::Local),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(ConfigError::UnknownEnvironment(s.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names_and_aliases() {
        assert_eq!("local".parse::<Environment>().unwrap(), Environment::Local);
        assert_eq!("DEV".parse::<Environment>().unwrap(), Environment::Local);
        assert_eq!(
            " production ".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Production);
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            "staging".parse::<Environment>(),
            Err(ConfigError::UnknownEnvironment("staging".to_string()))
        );
    }

    #[test]
    fn blank_override_is_none() {
        assert_eq!(Environment::parse_optional("").unwrap(), None);
        assert_eq!(Environment::parse_optional("  ").unwrap(), None);
        assert_eq!(
            Environment::parse_optional("local").unwrap(),
            Some(Environment::Local)
        );
    }

    #[test]
    fn toml_lowercase() {
        #[derive(Deserialize)]
        struct Wrap {
            environment: Environment,
        }
        let w: Wrap = toml::from_str("environment = \"production\"").unwrap();
        assert_eq!(w.environment, Environment::Production);
    }
}
