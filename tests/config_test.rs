use std::collections::HashMap;

use spotrelay::config::*;
use spotrelay::spotify::auth::authorize_url;
use url::Url;

// Helper function to build a config from a fixed set of variables
fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

fn required_vars() -> Vec<(&'static str, &'static str)> {
    vec![
        ("SPOTIFY_CLIENT_ID", "client-id"),
        ("SPOTIFY_CLIENT_SECRET", "client-secret"),
    ]
}

#[test]
fn test_defaults_apply() {
    let config = config_from(&required_vars()).unwrap();

    assert_eq!(config.client_id, "client-id");
    assert_eq!(config.client_secret, "client-secret");
    assert_eq!(config.redirect_uri, DEFAULT_REDIRECT_URI);
    assert_eq!(config.port, 8888);
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.scope, DEFAULT_SCOPE);
    assert_eq!(config.auth_url, DEFAULT_AUTH_URL);
    assert_eq!(config.token_url, DEFAULT_TOKEN_URL);
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8888");
    assert_eq!(config.login_url(), "http://localhost:8888/login");
}

#[test]
fn test_overrides_apply() {
    let mut vars = required_vars();
    vars.push(("PORT", "9000"));
    vars.push(("HOST", "0.0.0.0"));
    vars.push(("REDIRECT_URI", "http://127.0.0.1:9000/callback"));
    vars.push(("SPOTIFY_API_URL", "http://localhost:1234/"));

    let config = config_from(&vars).unwrap();

    assert_eq!(config.port, 9000);
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.redirect_uri, "http://127.0.0.1:9000/callback");
    // trailing slash is dropped so endpoints can be joined with '/'
    assert_eq!(config.api_url, "http://localhost:1234");
}

#[test]
fn test_missing_client_id() {
    let err = config_from(&[("SPOTIFY_CLIENT_SECRET", "s")]).unwrap_err();
    assert_eq!(err, ConfigError::Missing("SPOTIFY_CLIENT_ID"));
    assert_eq!(err.to_string(), "SPOTIFY_CLIENT_ID must be set");
}

#[test]
fn test_missing_client_secret() {
    let err = config_from(&[("SPOTIFY_CLIENT_ID", "id")]).unwrap_err();
    assert_eq!(err, ConfigError::Missing("SPOTIFY_CLIENT_SECRET"));
}

#[test]
fn test_empty_value_counts_as_missing() {
    let err = config_from(&[("SPOTIFY_CLIENT_ID", ""), ("SPOTIFY_CLIENT_SECRET", "s")])
        .unwrap_err();
    assert_eq!(err, ConfigError::Missing("SPOTIFY_CLIENT_ID"));
}

#[test]
fn test_invalid_port() {
    let mut vars = required_vars();
    vars.push(("PORT", "not-a-port"));

    match config_from(&vars) {
        Err(ConfigError::Invalid { key, value, .. }) => {
            assert_eq!(key, "PORT");
            assert_eq!(value, "not-a-port");
        }
        other => panic!("expected invalid PORT, got {:?}", other),
    }
}

#[test]
fn test_invalid_redirect_uri() {
    let mut vars = required_vars();
    vars.push(("REDIRECT_URI", "not a url"));

    assert!(matches!(
        config_from(&vars),
        Err(ConfigError::Invalid {
            key: "REDIRECT_URI",
            ..
        })
    ));
}

#[test]
fn test_invalid_host() {
    let mut vars = required_vars();
    vars.push(("HOST", "not a host"));

    assert!(matches!(
        config_from(&vars),
        Err(ConfigError::Invalid { key: "HOST", .. })
    ));
}

#[test]
fn test_authorize_url_carries_all_parameters() {
    let config = config_from(&required_vars()).unwrap();

    let url = Url::parse(&authorize_url(&config, "abc123").unwrap()).unwrap();
    let params: HashMap<String, String> = url.query_pairs().into_owned().collect();

    assert_eq!(url.host_str(), Some("accounts.spotify.com"));
    assert_eq!(url.path(), "/authorize");
    assert_eq!(params["response_type"], "code");
    assert_eq!(params["client_id"], "client-id");
    assert_eq!(params["scope"], DEFAULT_SCOPE);
    assert_eq!(params["redirect_uri"], DEFAULT_REDIRECT_URI);
    assert_eq!(params["state"], "abc123");
}

#[test]
fn test_authorize_url_is_encoded() {
    let config = config_from(&required_vars()).unwrap();
    let url = authorize_url(&config, "abc123").unwrap();

    // the redirect URI and the space-separated scope must not leak raw
    assert!(!url.contains("http://localhost:8888/callback"));
    assert!(!url.contains(' '));
}

#[test]
fn test_debug_hides_client_secret() {
    let config = config_from(&required_vars()).unwrap();
    let printed = format!("{:?}", config);

    assert!(printed.contains("client-id"));
    assert!(!printed.contains("client-secret"));
}

#[test]
fn test_ipv6_host() {
    let mut vars = required_vars();
    vars.push(("HOST", "::1"));

    let config = config_from(&vars).unwrap();

    assert_eq!(config.socket_addr().unwrap().to_string(), "[::1]:8888");
    assert_eq!(config.login_url(), "http://localhost:8888/login");
}
