use std::env;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Value sent back in `Access-Control-Allow-Origin`.
    pub allowed_origins: String,
    /// When set, cart and order routes need a bearer token.
    pub require_auth: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8081,
            allowed_origins: "*".to_string(),
            require_auth: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let host = lookup("APP_HOST").unwrap_or(defaults.host);
        let port = match lookup("APP_PORT").or_else(|| lookup("PORT")) {
            Some(p) => p
                .parse::<u16>()
                .with_context(|| format!("invalid port {p:?}"))?,
            None => defaults.port,
        };
        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .filter(|o| !o.is_empty())
            .unwrap_or(defaults.allowed_origins);
        let require_auth = match lookup("REQUIRE_AUTH") {
            Some(flag) => parse_flag(&flag)?,
            None => defaults.require_auth,
        };
        Ok(Self {
            host,
            port,
            allowed_origins,
            require_auth,
        })
    }
}

fn parse_flag(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("invalid REQUIRE_AUTH value {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{AppConfig, parse_flag};

    fn config_from(vars: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8081);
        assert_eq!(config.allowed_origins, "*");
        assert!(!config.require_auth);
    }

    #[test]
    fn app_port_wins_over_port() {
        let config = config_from(&[("APP_PORT", "9000"), ("PORT", "7000")]).unwrap();
        assert_eq!(config.port, 9000);

        let config = config_from(&[("PORT", "7000")]).unwrap();
        assert_eq!(config.port, 7000);
    }

    #[test]
    fn invalid_port_is_an_error() {
        assert!(config_from(&[("APP_PORT", "not-a-port")]).is_err());
        assert!(config_from(&[("PORT", "70000")]).is_err());
    }

    #[test]
    fn empty_allowed_origins_falls_back_to_wildcard() {
        let config = config_from(&[("ALLOWED_ORIGINS", "")]).unwrap();
        assert_eq!(config.allowed_origins, "*");

        let config = config_from(&[("ALLOWED_ORIGINS", "https://shop.example")]).unwrap();
        assert_eq!(config.allowed_origins, "https://shop.example");
    }

    #[test]
    fn require_auth_flag_is_read() {
        assert!(config_from(&[("REQUIRE_AUTH", "true")]).unwrap().require_auth);
        assert!(config_from(&[("REQUIRE_AUTH", "bogus")]).is_err());
    }

    #[test]
    fn parses_boolean_flags() {
        assert!(parse_flag("true").unwrap());
        assert!(parse_flag(" ON ").unwrap());
        assert!(!parse_flag("0").unwrap());
        assert!(!parse_flag("").unwrap());
        assert!(parse_flag("maybe").is_err());
    }
}
