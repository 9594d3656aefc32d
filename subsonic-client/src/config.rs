//! Connection settings for a Subsonic server
//!
//! A [`ClientConfig`] can be built in code or read from the environment:
//!
//! | variable            | required | meaning                               |
//! |---------------------|----------|---------------------------------------|
//! | `SUBSONIC_URL`      | yes      | server base URL, e.g. `https://music` |
//! | `SUBSONIC_USERNAME` | yes      | account name                          |
//! | `SUBSONIC_PASSWORD` | yes      | account password                      |
//! | `SUBSONIC_AUTH`     | no       | `token` (default) or `plain`          |
//! | `SUBSONIC_CLIENT`   | no       | client name sent as `c`               |

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

/// Subsonic REST API version advertised with every request
pub const DEFAULT_API_VERSION: &str = "1.16.1";

/// Client name advertised with every request
pub const DEFAULT_CLIENT_NAME: &str = "subsonic-sdk";

/// How credentials are sent to the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// Salted MD5 token (`t` + `s`), supported since API 1.13.0
    #[default]
    Token,
    /// Hex-encoded password (`p=enc:...`) for older servers
    Plain,
}

impl FromStr for AuthMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "token" => Ok(AuthMode::Token),
            "plain" => Ok(AuthMode::Plain),
            other => Err(ConfigError::InvalidAuthMode(other.to_string())),
        }
    }
}

/// Configuration for a [`SubsonicClient`](crate::SubsonicClient)
///
/// `Debug` output never includes the password.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL, without the `/rest` suffix
    pub base_url: String,

    /// Account name (`u`)
    pub username: String,

    /// Account password, never sent in clear text in token mode
    pub password: String,

    /// Credential encoding
    /// Default: token
    pub auth_mode: AuthMode,

    /// Client identifier (`c`)
    /// Default: "subsonic-sdk"
    pub client_name: String,

    /// Protocol version (`v`)
    /// Default: "1.16.1"
    pub api_version: String,

    /// TCP connect timeout
    /// Default: 5 seconds
    pub connect_timeout: Duration,

    /// Read and write timeout
    /// Default: 15 seconds
    pub read_timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration with default protocol settings
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            username: username.into(),
            password: password.into(),
            auth_mode: AuthMode::default(),
            client_name: DEFAULT_CLIENT_NAME.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            connect_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_secs(15),
        }
    }

    /// Read the configuration from `SUBSONIC_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    ///
    /// `from_env` is this function over `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &'static str| lookup(key).ok_or(ConfigError::MissingVar(key));

        let mut config = Self::new(
            require("SUBSONIC_URL")?,
            require("SUBSONIC_USERNAME")?,
            require("SUBSONIC_PASSWORD")?,
        );

        if let Some(mode) = lookup("SUBSONIC_AUTH") {
            config.auth_mode = mode.parse()?;
        }
        if let Some(client) = lookup("SUBSONIC_CLIENT") {
            config.client_name = client;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_auth_mode(mut self, auth_mode: AuthMode) -> Self {
        self.auth_mode = auth_mode;
        self
    }

    pub fn with_client_name(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = client_name.into();
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn with_timeouts(mut self, connect: Duration, read: Duration) -> Self {
        self.connect_timeout = connect;
        self.read_timeout = read;
        self
    }

    /// Check that the base URL is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::InvalidUrl("URL cannot be empty".to_string()));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidUrl(format!(
                "{} must start with http:// or https://",
                url
            )));
        }
        Ok(())
    }

    /// Base URL with surrounding whitespace and trailing slashes removed
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("auth_mode", &self.auth_mode)
            .field("client_name", &self.client_name)
            .field("api_version", &self.api_version)
            .field("connect_timeout", &self.connect_timeout)
            .field("read_timeout", &self.read_timeout)
            .finish()
    }
}
