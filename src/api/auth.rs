//! Auth Endpoints
//!
//! `POST /authenticate`, `GET /refresh` and `GET /logout`. The refresh
//! token is kept by the browser as an http-only cookie.

use reqwest::Method;
use serde_json::Value;

use super::{check_error_payload, ApiClient, ApiError};
use crate::models::{Credentials, TokenPair};

pub fn decode_token_pair(body: &str) -> Result<TokenPair, ApiError> {
    let value: Value = serde_json::from_str(body)?;
    check_error_payload(&value)?;
    Ok(serde_json::from_value(value)?)
}

/// `/refresh` answers with an empty body when no refresh cookie was sent
pub fn decode_refresh(body: &str) -> Result<Option<TokenPair>, ApiError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    decode_token_pair(body).map(Some)
}

impl ApiClient {
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<TokenPair, ApiError> {
        let payload = serde_json::to_string(credentials)?;
        let request = self.request(Method::POST, "/authenticate", None).body(payload);
        let body = self.send_text(request).await?;
        decode_token_pair(&body)
    }

    /// New token pair from the refresh cookie, if the browser holds one
    pub async fn refresh(&self) -> Result<Option<TokenPair>, ApiError> {
        let body = self.send_text(self.request(Method::GET, "/refresh", None)).await?;
        decode_refresh(&body)
    }

    /// Expire the refresh cookie
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send_text(self.request(Method::GET, "/logout", None)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_token_pair() {
        let pair = decode_token_pair(r#"{"access_token":"aaa.bbb.ccc","refresh_token":"rrr"}"#).unwrap();
        assert_eq!(pair.access_token, "aaa.bbb.ccc");
        assert_eq!(pair.refresh_token, "rrr");
    }

    #[test]
    fn test_invalid_credentials() {
        let err = decode_token_pair(r#"{"error":true,"message":"invalid credentials"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Application { ref message } if message == "invalid credentials"));
    }

    #[test]
    fn test_refresh_without_cookie() {
        assert_eq!(decode_refresh("").unwrap(), None);
        assert_eq!(decode_refresh("  \n").unwrap(), None);
    }

    #[test]
    fn test_refresh_unauthorized() {
        let err = decode_refresh(r#"{"error":true,"message":"unauthorized"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Application { .. }));
    }

    #[test]
    fn test_credentials_body() {
        let body = serde_json::to_string(&Credentials {
            email: "admin@example.com".to_string(),
            password: "secret".to_string(),
        })
        .unwrap();
        assert_eq!(body, r#"{"email":"admin@example.com","password":"secret"}"#);
    }
}
