//! OAuth-WRAP authorization
//!
//! The identity service in front of the record API speaks the WRAP profile:
//! credentials are POSTed as a form to the token endpoint and the response
//! body is a form-encoded blob carrying `wrap_access_token`. The record API
//! expects that token rendered as `WRAP access_token="…"` in the
//! `Authorization` header.

use async_trait::async_trait;
use log::debug;

use crate::error::{Error, Result};
use crate::secret::Credentials;

/// Rendered `Authorization` header value for record-API calls
///
/// Valid for a single command invocation; never persisted.
#[derive(Clone)]
pub struct AuthHeader(String);

impl AuthHeader {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AuthHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthHeader(****)")
    }
}

/// Acquires an authorization header for record-API calls
#[async_trait]
pub trait AuthorizationProvider: Send + Sync {
    async fn get_auth_header(&self, credentials: &Credentials, scope: &str) -> Result<AuthHeader>;
}

/// WRAP token-exchange client
pub struct WrapAuthClient {
    http: reqwest::Client,
    endpoint: String,
}

impl WrapAuthClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl AuthorizationProvider for WrapAuthClient {
    async fn get_auth_header(&self, credentials: &Credentials, scope: &str) -> Result<AuthHeader> {
        debug!("requesting WRAP token from {}", self.endpoint);

        let response = self
            .http
            .post(&self.endpoint)
            .form(&[
                ("wrap_name", credentials.user_id.as_str()),
                ("wrap_password", credentials.password.expose()),
                ("wrap_scope", scope),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::api(status.as_u16(), body));
        }

        let token = token_from_response(&body)?;
        Ok(AuthHeader::new(wrap_header(&token)))
    }
}

/// Pull `wrap_access_token` out of a form-encoded token response
fn token_from_response(body: &str) -> Result<String> {
    url::form_urlencoded::parse(body.as_bytes())
        .find(|(key, _)| key == "wrap_access_token")
        .map(|(_, value)| value.into_owned())
        .ok_or_else(|| Error::Token(body.to_string()))
}

fn wrap_header(token: &str) -> String {
    format!("WRAP access_token=\"{token}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_extracted_from_form_response() {
        let body = "wrap_access_token=abc123&wrap_access_token_expires_in=1200";
        assert_eq!(token_from_response(body).unwrap(), "abc123");
    }

    #[test]
    fn test_token_value_is_url_decoded() {
        let body = "wrap_access_token=ab%3Dc%26d";
        assert_eq!(token_from_response(body).unwrap(), "ab=c&d");
    }

    #[test]
    fn test_missing_token_is_an_error() {
        let body = "error=invalid_grant";
        let error = token_from_response(body).unwrap_err();

        assert!(matches!(error, Error::Token(_)));
        assert!(error.to_string().contains("invalid_grant"));
    }

    #[test]
    fn test_wrap_header_format() {
        assert_eq!(wrap_header("abc123"), "WRAP access_token=\"abc123\"");
    }

    #[test]
    fn test_auth_header_debug_is_redacted() {
        let header = AuthHeader::new(wrap_header("abc123"));
        assert!(!format!("{header:?}").contains("abc123"));
    }
}
