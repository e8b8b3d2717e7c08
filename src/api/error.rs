//! API Errors

use serde_json::Value;
use thiserror::Error;

use crate::models::ErrorPayload;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Request could not be sent or its body not read
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend answered with an error payload
    #[error("backend error: {message}")]
    Application { message: String },

    /// Auth middleware rejected the bearer token
    #[error("unauthorized")]
    Unauthorized,

    /// Body did not have the expected shape
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ApiError {
    /// The session token is missing, expired or rejected
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Malformed(e.to_string())
    }
}

/// Fail with `Application` when `body` is the backend's error payload
pub(crate) fn check_error_payload(body: &Value) -> Result<(), ApiError> {
    let flagged = match body.get("error") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(_) => true,
    };
    if !flagged {
        return Ok(());
    }
    let message = match serde_json::from_value::<ErrorPayload>(body.clone()) {
        Ok(payload) => payload.message,
        // `{"error": "..."}` carries the message in the flag itself
        Err(_) => body
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    };
    Err(ApiError::Application { message })
}
