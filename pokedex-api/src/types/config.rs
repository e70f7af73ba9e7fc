//! Server configuration resolved once at startup

use std::{env, str::FromStr, time::Duration};

use crate::{catalog::DEFAULT_CATALOG_URL, pokedex::DEFAULT_DESCRIPTION_LOCALE};

use super::Environment;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DOCS_PATH: &str = "/api-doc";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
const DEFAULT_DETAIL_CONCURRENCY: usize = 1;

/// Settings shared by the server bootstrap and the router
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Port the HTTP listener binds to
    pub port: u16,
    /// Catalog collection URL replacing [`DEFAULT_CATALOG_URL`]
    pub base_url_override: Option<String>,
    /// Local development mode: API docs and human-readable logs
    pub dev_mode: bool,
    /// Route of the API reference page; the schema is served below it
    pub docs_path: String,
    /// Timeout applied to every outbound catalog call
    pub upstream_timeout: Duration,
    /// Timeout applied to every inbound request
    pub request_timeout: Duration,
    /// Number of detail requests in flight while building a list page
    pub detail_concurrency: usize,
    /// Locale code of the description returned by the details endpoint
    pub description_locale: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            base_url_override: None,
            dev_mode: true,
            docs_path: DEFAULT_DOCS_PATH.to_string(),
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            detail_concurrency: DEFAULT_DETAIL_CONCURRENCY,
            description_locale: DEFAULT_DESCRIPTION_LOCALE.to_string(),
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from environment variables
    ///
    /// Unset or unparsable values fall back to their defaults.
    #[must_use]
    pub fn from_env(environment: Environment) -> Self {
        let defaults = Self::default();

        Self {
            port: parse_var("PORT").unwrap_or(defaults.port),
            base_url_override: non_empty_var("CATALOG_BASE_URL"),
            dev_mode: environment.is_development(),
            docs_path: non_empty_var("DOCS_PATH")
                .map_or(defaults.docs_path, |path| normalize_path(&path)),
            upstream_timeout: parse_var("UPSTREAM_TIMEOUT_SECS")
                .map_or(defaults.upstream_timeout, Duration::from_secs),
            request_timeout: parse_var("REQUEST_TIMEOUT_SECS")
                .map_or(defaults.request_timeout, Duration::from_secs),
            detail_concurrency: parse_var::<usize>("DETAIL_CONCURRENCY")
                .map_or(defaults.detail_concurrency, |n| n.max(1)),
            description_locale: non_empty_var("DESCRIPTION_LOCALE")
                .unwrap_or(defaults.description_locale),
        }
    }

    /// Catalog collection URL in effect
    #[must_use]
    pub fn catalog_base_url(&self) -> &str {
        self.base_url_override
            .as_deref()
            .unwrap_or(DEFAULT_CATALOG_URL)
    }

    /// Route serving the generated `OpenAPI` document
    #[must_use]
    pub fn openapi_path(&self) -> String {
        format!("{}/openapi.json", self.docs_path)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    non_empty_var(key).and_then(|val| val.parse().ok())
}

fn normalize_path(path: &str) -> String {
    format!("/{}", path.trim_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 7] = [
        "PORT",
        "CATALOG_BASE_URL",
        "DOCS_PATH",
        "UPSTREAM_TIMEOUT_SECS",
        "REQUEST_TIMEOUT_SECS",
        "DETAIL_CONCURRENCY",
        "DESCRIPTION_LOCALE",
    ];

    fn clear_vars() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_env() {
        clear_vars();

        let config = ServerConfig::from_env(Environment::Development);

        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.catalog_base_url(), DEFAULT_CATALOG_URL);
        assert_eq!(config.openapi_path(), "/api-doc/openapi.json");
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_vars();
        env::set_var("PORT", "8080");
        env::set_var("CATALOG_BASE_URL", "http://localhost:4000/api/v2/pokemon");
        env::set_var("DOCS_PATH", "docs/");
        env::set_var("UPSTREAM_TIMEOUT_SECS", "3");
        env::set_var("DETAIL_CONCURRENCY", "4");
        env::set_var("DESCRIPTION_LOCALE", "en");

        let config = ServerConfig::from_env(Environment::Production);

        assert_eq!(config.port, 8080);
        assert_eq!(
            config.catalog_base_url(),
            "http://localhost:4000/api/v2/pokemon"
        );
        assert!(!config.dev_mode);
        assert_eq!(config.docs_path, "/docs");
        assert_eq!(config.openapi_path(), "/docs/openapi.json");
        assert_eq!(config.upstream_timeout, Duration::from_secs(3));
        assert_eq!(config.request_timeout, Duration::from_secs(60));
        assert_eq!(config.detail_concurrency, 4);
        assert_eq!(config.description_locale, "en");

        clear_vars();
    }

    #[test]
    #[serial]
    fn test_invalid_values_fall_back() {
        clear_vars();
        env::set_var("PORT", "not-a-port");
        env::set_var("DETAIL_CONCURRENCY", "0");
        env::set_var("CATALOG_BASE_URL", "   ");

        let config = ServerConfig::from_env(Environment::Staging);

        assert_eq!(config.port, 3000);
        assert_eq!(config.detail_concurrency, 1);
        assert!(config.base_url_override.is_none());

        clear_vars();
    }
}
