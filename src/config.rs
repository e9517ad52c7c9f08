//! Configuration management for spotrelay.
//!
//! Configuration comes from environment variables, optionally seeded from
//! `.env` files:
//! 1. Variables already set in the process environment (highest priority)
//! 2. `.env` in the current working directory
//! 3. `.env` in the local data directory (`<data_local_dir>/spotrelay/.env`)
//! 4. Defaults for the optional values
//!
//! Everything is read once at startup into a [`Config`], which is validated
//! there and then handed to the server. Nothing reads the environment after
//! that.

use std::{
    env,
    net::{IpAddr, SocketAddr},
    path::PathBuf,
};

use thiserror::Error;
use url::Url;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8888;
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:8888/callback";
pub const DEFAULT_SCOPE: &str =
    "user-read-private user-read-email user-top-read user-modify-playback-state";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com";

/// Reasons the configuration is rejected at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Validated runtime configuration.
#[derive(Clone)]
pub struct Config {
    // required
    pub client_id: String,
    pub client_secret: String,

    // optional
    pub redirect_uri: String,
    pub host: String,
    pub port: u16,
    pub scope: String,

    // Spotify endpoints, overridable for tests and proxies
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
}

impl Config {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as unset, so `SPOTIFY_CLIENT_ID=` in a `.env`
    /// template still fails validation instead of producing a client that
    /// Spotify will reject later.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                key: "PORT",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let redirect_uri = get("REDIRECT_URI").unwrap_or_else(|| DEFAULT_REDIRECT_URI.into());
        validate_url("REDIRECT_URI", &redirect_uri)?;

        let auth_url = get("SPOTIFY_API_AUTH_URL").unwrap_or_else(|| DEFAULT_AUTH_URL.into());
        validate_url("SPOTIFY_API_AUTH_URL", &auth_url)?;

        let token_url = get("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|| DEFAULT_TOKEN_URL.into());
        validate_url("SPOTIFY_API_TOKEN_URL", &token_url)?;

        let api_url = get("SPOTIFY_API_URL").unwrap_or_else(|| DEFAULT_API_URL.into());
        validate_url("SPOTIFY_API_URL", &api_url)?;

        let config = Config {
            client_id: required("SPOTIFY_CLIENT_ID")?,
            client_secret: required("SPOTIFY_CLIENT_SECRET")?,
            redirect_uri,
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.into()),
            port,
            scope: get("SPOTIFY_API_AUTH_SCOPE").unwrap_or_else(|| DEFAULT_SCOPE.into()),
            auth_url,
            token_url,
            api_url: api_url.trim_end_matches('/').to_string(),
        };

        config.socket_addr()?;
        Ok(config)
    }

    /// The address the server binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.host.parse().map_err(|e: std::net::AddrParseError| {
            ConfigError::Invalid {
                key: "HOST",
                value: self.host.clone(),
                reason: e.to_string(),
            }
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// The URL a browser should open to start the login flow.
    pub fn login_url(&self) -> String {
        let host = match self.host.as_str() {
            "0.0.0.0" | "127.0.0.1" | "::" | "::1" => "localhost".to_string(),
            other if other.contains(':') => format!("[{}]", other),
            other => other.to_string(),
        };
        format!("http://{}:{}/login", host, self.port)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("scope", &self.scope)
            .field("auth_url", &self.auth_url)
            .field("token_url", &self.token_url)
            .field("api_url", &self.api_url)
            .finish()
    }
}

fn validate_url(key: &'static str, value: &str) -> Result<(), ConfigError> {
    Url::parse(value).map(|_| ()).map_err(|e| ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Loads `.env` files into the process environment.
///
/// Looks in the current directory first and then in the platform-specific
/// local data directory:
/// - Linux: `~/.local/share/spotrelay/.env`
/// - macOS: `~/Library/Application Support/spotrelay/.env`
/// - Windows: `%LOCALAPPDATA%/spotrelay/.env`
///
/// Neither file is required. Variables that are already set are never
/// overwritten.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or if an
/// existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    match dotenv::dotenv() {
        Ok(_) => {}
        Err(e) if e.not_found() => {}
        Err(e) => return Err(format!("Cannot read ./.env: {}", e)),
    }

    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    match dotenv::from_path(&path) {
        Ok(()) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(format!("Cannot read {}: {}", path.display(), e)),
    }
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotrelay/.env");
    path
}
