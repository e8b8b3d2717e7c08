//! Backend API Client
//!
//! HTTP bindings to the movies backend, organized by endpoint family.

mod error;
mod graph;
mod movies;
mod genres;
mod auth;
mod admin;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, StatusCode};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::AppConfig;

// Re-export all public items
pub use error::*;
pub use graph::*;
pub use movies::*;
pub use genres::*;
pub use auth::*;
pub use admin::*;

/// Characters left unescaped in a path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Client for one backend; cheap to clone
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.backend_url.clone(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request with the JSON content type, plus the bearer token when given
    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let url = self.url(path);
        log::debug!("{} {}", method, url);
        let builder = self
            .http
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json");
        match token {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Send and return the raw body. Status codes are not checked, since
    /// the backend reports failures through the error payload, except for
    /// a bare 401 from the auth middleware.
    async fn send_text(&self, request: RequestBuilder) -> Result<String, ApiError> {
        let response = with_credentials(request).send().await?;
        let status = response.status();
        let body = response.text().await?;
        check_bare_unauthorized(status, &body)?;
        Ok(body)
    }

    async fn get_text(&self, path: &str) -> Result<String, ApiError> {
        self.send_text(self.request(Method::GET, path, None)).await
    }

    /// POST a GraphQL document to `/graph` and return the raw body
    async fn post_graph(&self, query: String) -> Result<String, ApiError> {
        let url = self.url("/graph");
        log::debug!("POST {} {}", url, query);
        let body = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/graphql")
            .body(query)
            .send()
            .await?
            .text()
            .await?;
        Ok(body)
    }
}

fn check_bare_unauthorized(status: StatusCode, body: &str) -> Result<(), ApiError> {
    if status == StatusCode::UNAUTHORIZED && body.trim().is_empty() {
        return Err(ApiError::Unauthorized);
    }
    Ok(())
}

/// The refresh token travels in a cookie, so fetch must send credentials
#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request
}

/// Percent-encode a value for use as one URL path segment
pub fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_uses_configured_backend() {
        let config = AppConfig::from_values(Some("http://movies.local:9000/"), None).unwrap();
        let client = ApiClient::new(&config);
        assert_eq!(client.base_url(), "http://movies.local:9000");
        assert_eq!(client.url("/genres"), "http://movies.local:9000/genres");
    }

    #[test]
    fn test_bare_unauthorized() {
        assert!(matches!(
            check_bare_unauthorized(StatusCode::UNAUTHORIZED, ""),
            Err(ApiError::Unauthorized)
        ));
        // A 401 with a payload is decoded like any other error body
        assert!(check_bare_unauthorized(StatusCode::UNAUTHORIZED, r#"{"error":true}"#).is_ok());
        assert!(check_bare_unauthorized(StatusCode::OK, "").is_ok());
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("12"), "12");
        assert_eq!(encode_segment("a b/c"), "a%20b%2Fc");
        assert_eq!(encode_segment("sci-fi_2.0~"), "sci-fi_2.0~");
    }
}
