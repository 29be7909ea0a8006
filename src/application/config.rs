/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_DOTENV_PATH, DEFAULT_SECRETS_DIR, DEFAULT_TIMEOUT_SECS, DEMO_BASE_URL, ENV_API_KEY,
    ENV_API_SECRET, ENV_BASE_URL, ENV_ENVIRONMENT, ENV_SECRETS_DIR, ENV_TIMEOUT, LIVE_BASE_URL,
};
use crate::utils::config::{ConfigSource, ProcessEnv, get_or_default, read_secret};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Trading212 environment the server talks to
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Real-money account
    #[default]
    Live,
    /// Practice account
    Demo,
}

impl Environment {
    /// REST base URL for this environment
    #[must_use]
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Live => LIVE_BASE_URL,
            Environment::Demo => DEMO_BASE_URL,
        }
    }

    /// Parses a selector, treating anything other than `live` as `demo`
    #[must_use]
    pub fn from_selector(value: &str) -> Self {
        match value.parse() {
            Ok(environment) => environment,
            Err(_) => {
                warn!("Unknown environment '{}', falling back to demo", value);
                Environment::Demo
            }
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "live" => Ok(Environment::Live),
            "demo" => Ok(Environment::Demo),
            other => Err(format!("unknown environment: {other}")),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Live => write!(f, "LIVE"),
            Environment::Demo => write!(f, "DEMO"),
        }
    }
}

fn redact<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_empty() {
        serializer.serialize_str("")
    } else {
        serializer.serialize_str("***")
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Clone, Default)]
/// API key pair used for Basic authentication
///
/// Both values are redacted when the struct is printed.
pub struct Credentials {
    /// API key, empty when not configured
    #[serde(serialize_with = "redact")]
    pub api_key: String,
    /// API secret, empty when not configured
    #[serde(serialize_with = "redact")]
    pub api_secret: String,
}

impl Credentials {
    /// Creates a credential pair
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// True when both the key and the secret are present
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Clone)]
/// Main configuration for the Trading212 MCP server
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// Selected environment
    pub environment: Environment,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from `.env` files, mounted secrets and the process environment
    ///
    /// Missing credentials are logged as warnings and never abort startup.
    pub fn new() -> Self {
        dotenv().ok();
        if Path::new(DEFAULT_DOTENV_PATH).exists() {
            match dotenv::from_path(DEFAULT_DOTENV_PATH) {
                Ok(()) => info!("Loaded environment variables from {}", DEFAULT_DOTENV_PATH),
                Err(e) => warn!("Failed to load {}: {}", DEFAULT_DOTENV_PATH, e),
            }
        }

        let config = Self::from_source(&ProcessEnv);
        for name in config.missing_credentials() {
            warn!("{} not set", name);
        }
        config
    }

    /// Builds a configuration from any [`ConfigSource`]
    pub fn from_source(source: &impl ConfigSource) -> Self {
        let secrets_dir: PathBuf = source
            .var(ENV_SECRETS_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SECRETS_DIR));

        let api_key = read_secret(source, &secrets_dir, ENV_API_KEY).unwrap_or_default();
        let api_secret = read_secret(source, &secrets_dir, ENV_API_SECRET).unwrap_or_default();

        let environment = source
            .var(ENV_ENVIRONMENT)
            .map(|v| Environment::from_selector(&v))
            .unwrap_or_default();

        let base_url = source
            .var(ENV_BASE_URL)
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| environment.base_url().to_string());

        let timeout = match get_or_default(source, ENV_TIMEOUT, DEFAULT_TIMEOUT_SECS) {
            0 => {
                warn!(
                    "{} must be at least 1 second, using {}",
                    ENV_TIMEOUT, DEFAULT_TIMEOUT_SECS
                );
                DEFAULT_TIMEOUT_SECS
            }
            timeout => timeout,
        };

        debug!("Configuration resolved for {} ({})", environment, base_url);

        Config {
            credentials: Credentials::new(api_key, api_secret),
            environment,
            rest_api: RestApiConfig { base_url, timeout },
        }
    }

    /// Names of the credential variables that are not configured
    #[must_use]
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.credentials.api_key.is_empty() {
            missing.push(ENV_API_KEY);
        }
        if self.credentials.api_secret.is_empty() {
            missing.push(ENV_API_SECRET);
        }
        missing
    }

    /// Returns a copy pointed at a different environment, keeping everything else
    #[must_use]
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self.rest_api.base_url = environment.base_url().to_string();
        self
    }

    /// Returns a copy with an explicit base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}
