use reqwest::Url;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:9000";
pub const DEFAULT_ORGANIZATION: &str = "default-organization";
pub const DEFAULT_PAGE_SIZE: u32 = 50;
const MAX_PAGE_SIZE: u32 = 500;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid server URL '{0}'")]
    InvalidUrl(String),
    #[error("Invalid page size '{0}' (expected 1 to 500)")]
    InvalidPageSize(String),
}

/// Application configuration
/// In debug builds: also loads a .env file before reading the environment
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Base URL of the web API, without trailing slash
    pub server_url: String,
    /// User token, sent as basic auth login
    pub token: Option<String>,
    /// Organization shown on startup
    pub organization: String,
    /// Members requested per page
    pub page_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            token: None,
            organization: DEFAULT_ORGANIZATION.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Dev mode activated - loaded .env file");
            } else {
                info!("No .env file found, using process environment");
            }
        }

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from a variable lookup (the process environment in production)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_url = match lookup("ORG_MEMBERS_SERVER_URL") {
            Some(raw) => parse_server_url(&raw)?,
            None => DEFAULT_SERVER_URL.to_string(),
        };

        let token = lookup("ORG_MEMBERS_TOKEN").filter(|t| !t.trim().is_empty());

        let organization = lookup("ORG_MEMBERS_ORGANIZATION")
            .filter(|o| !o.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ORGANIZATION.to_string());

        let page_size = match lookup("ORG_MEMBERS_PAGE_SIZE") {
            Some(raw) => parse_page_size(&raw)?,
            None => DEFAULT_PAGE_SIZE,
        };

        info!(
            "Server: {}, organization: {}, page size: {}, token: {}",
            server_url,
            organization,
            page_size,
            if token.is_some() { "set" } else { "none" }
        );

        Ok(Self {
            server_url,
            token,
            organization,
            page_size,
        })
    }
}

fn parse_server_url(raw: &str) -> Result<String, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|_| ConfigError::InvalidUrl(raw.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(raw.to_string()));
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}

fn parse_page_size(raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(size) if (1..=MAX_PAGE_SIZE).contains(&size) => Ok(size),
        _ => Err(ConfigError::InvalidPageSize(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = Config::from_lookup(lookup_from(&[
            ("ORG_MEMBERS_SERVER_URL", "https://sonar.example.com/"),
            ("ORG_MEMBERS_TOKEN", "squ_123"),
            ("ORG_MEMBERS_ORGANIZATION", "acme"),
            ("ORG_MEMBERS_PAGE_SIZE", "25"),
        ]))
        .unwrap();

        assert_eq!(config.server_url, "https://sonar.example.com");
        assert_eq!(config.token.as_deref(), Some("squ_123"));
        assert_eq!(config.organization, "acme");
        assert_eq!(config.page_size, 25);
    }

    #[test]
    fn test_blank_token_is_ignored() {
        let config =
            Config::from_lookup(lookup_from(&[("ORG_MEMBERS_TOKEN", "   ")])).unwrap();
        assert_eq!(config.token, None);
    }

    #[test]
    fn test_rejects_bad_url() {
        let result = Config::from_lookup(lookup_from(&[("ORG_MEMBERS_SERVER_URL", "ftp://x")]));
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));

        let result = Config::from_lookup(lookup_from(&[("ORG_MEMBERS_SERVER_URL", "not a url")]));
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_rejects_bad_page_size() {
        for raw in ["0", "501", "fifty"] {
            let result = Config::from_lookup(lookup_from(&[("ORG_MEMBERS_PAGE_SIZE", raw)]));
            assert!(matches!(result, Err(ConfigError::InvalidPageSize(_))));
        }
    }
}
