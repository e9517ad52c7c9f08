use chrono::Utc;
use reqwest::{Client, header};
use serde_json::Value;
use url::Url;

use crate::{
    config::Config,
    spotify::{SpotifyError, parse_json},
    types::Token,
    utils,
};

/// Lifetime assumed when the token endpoint does not report a usable one.
const DEFAULT_EXPIRES_IN: u64 = 3600;

/// Builds the accounts service authorize URL for the Authorization Code flow.
///
/// All parameters are URL-encoded; the scope is the space-separated list from
/// the configuration.
///
/// # Errors
///
/// Fails only if the configured authorize URL is not a valid URL, which
/// [`Config::from_lookup`] already rules out.
pub fn authorize_url(config: &Config, state: &str) -> Result<String, url::ParseError> {
    let mut url = Url::parse(&config.auth_url)?;
    url.query_pairs_mut()
        .append_pair("response_type", "code")
        .append_pair("client_id", &config.client_id)
        .append_pair("scope", &config.scope)
        .append_pair("redirect_uri", &config.redirect_uri)
        .append_pair("state", state);
    Ok(url.into())
}

/// Exchanges an authorization code for an access token.
///
/// One POST to the token endpoint with the client credentials in a Basic
/// `Authorization` header and a form body of `code`, `redirect_uri` and
/// `grant_type=authorization_code`. An empty `code` is sent as is so the
/// accounts service can reject it.
///
/// # Errors
///
/// - [`SpotifyError::Request`] on network failure
/// - [`SpotifyError::Parse`] if the body is not JSON
/// - [`SpotifyError::MissingAccessToken`] if the body has no `access_token`,
///   carrying the accounts service's error description when there is one
pub async fn exchange_code(
    client: &Client,
    config: &Config,
    code: &str,
) -> Result<Token, SpotifyError> {
    let res = client
        .post(&config.token_url)
        .header(
            header::AUTHORIZATION,
            utils::basic_auth_header(&config.client_id, &config.client_secret),
        )
        .form(&[
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ])
        .send()
        .await?;

    let body = res.text().await?;
    let json = parse_json(&body)?;

    into_token(&json)
}

/// Reads the token out of a token endpoint body.
///
/// Only `access_token` decides success. The other fields are informational,
/// so a missing or oddly typed one falls back to a default instead of
/// discarding a usable token.
fn into_token(json: &Value) -> Result<Token, SpotifyError> {
    let Some(access_token) = json["access_token"].as_str().filter(|t| !t.is_empty()) else {
        let reason = json["error_description"]
            .as_str()
            .or_else(|| json["error"].as_str())
            .unwrap_or("no access_token field")
            .to_string();
        return Err(SpotifyError::MissingAccessToken(reason));
    };

    let expires_in = match &json["expires_in"] {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };

    Ok(Token {
        access_token: access_token.to_string(),
        token_type: json["token_type"].as_str().unwrap_or("Bearer").to_string(),
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: expires_in.unwrap_or(DEFAULT_EXPIRES_IN),
        obtained_at: Utc::now().timestamp() as u64,
    })
}
