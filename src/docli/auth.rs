//! Token and endpoint resolution.
//!
//! A non-empty `DOCLI_TOKEN` always wins over the stored token; `docli token`
//! warns about this when it stores a token while the variable is set.

use crate::client::http::HttpClient;
use crate::config::DocliConfig;
use crate::error::{DocliError, Result};

pub const TOKEN_ENV: &str = "DOCLI_TOKEN";
pub const API_URL_ENV: &str = "DOCLI_API_URL";

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub fn resolve_token(env_token: Option<&str>, config: &DocliConfig) -> Result<String> {
    if let Some(token) = non_empty(env_token) {
        log::debug!("using token from {}", TOKEN_ENV);
        return Ok(token.to_string());
    }
    non_empty(config.token.as_deref())
        .map(str::to_string)
        .ok_or(DocliError::MissingToken)
}

pub fn resolve_api_url<'a>(env_url: Option<&'a str>, config: &'a DocliConfig) -> &'a str {
    non_empty(env_url).unwrap_or_else(|| config.api_url())
}

/// Builds the API client from the environment overrides and the stored config.
pub fn connect(
    config: &DocliConfig,
    env_token: Option<&str>,
    env_url: Option<&str>,
) -> Result<HttpClient> {
    let token = resolve_token(env_token, config)?;
    let api_url = resolve_api_url(env_url, config);
    log::debug!("connecting to {}", api_url);
    HttpClient::new(api_url, token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(token: &str) -> DocliConfig {
        DocliConfig {
            token: Some(token.into()),
            api_url: None,
        }
    }

    #[test]
    fn env_token_wins() {
        assert_eq!(resolve_token(Some("env"), &stored("file")).unwrap(), "env");
    }

    #[test]
    fn empty_env_token_is_ignored() {
        assert_eq!(resolve_token(Some("  "), &stored("file")).unwrap(), "file");
        assert_eq!(resolve_token(None, &stored("file")).unwrap(), "file");
    }

    #[test]
    fn no_token_anywhere() {
        let err = resolve_token(None, &DocliConfig::default()).unwrap_err();
        assert!(matches!(err, DocliError::MissingToken));
        assert!(resolve_token(Some(""), &stored("")).is_err());
    }

    #[test]
    fn api_url_precedence() {
        let mut config = DocliConfig::default();
        assert_eq!(
            resolve_api_url(None, &config),
            crate::config::DEFAULT_API_URL
        );
        config.api_url = Some("http://localhost:3000/v2".into());
        assert_eq!(resolve_api_url(None, &config), "http://localhost:3000/v2");
        assert_eq!(
            resolve_api_url(Some("http://127.0.0.1:9/v2"), &config),
            "http://127.0.0.1:9/v2"
        );
    }

    #[test]
    fn connect_requires_a_token() {
        assert!(matches!(
            connect(&DocliConfig::default(), None, None),
            Err(DocliError::MissingToken)
        ));
        assert!(connect(&stored("abc"), None, None).is_ok());
    }
}
