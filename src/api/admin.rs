//! Admin Endpoints
//!
//! Catalogue maintenance under `/admin/movies`, all bearer-authenticated.

use reqwest::Method;
use serde_json::Value;

use super::{check_error_payload, decode_movie_list, encode_segment, ApiClient, ApiError};
use crate::models::{Movie, MovieEdit, MoviePayload, StatusPayload};

pub fn decode_movie_edit(body: &str) -> Result<MovieEdit, ApiError> {
    let value: Value = serde_json::from_str(body)?;
    check_error_payload(&value)?;
    Ok(serde_json::from_value(value)?)
}

/// `{"error":false,"message":...}`; returns the message
pub fn decode_status(body: &str) -> Result<String, ApiError> {
    let value: Value = serde_json::from_str(body)?;
    check_error_payload(&value)?;
    let status: StatusPayload = serde_json::from_value(value)?;
    Ok(status.message)
}

/// Path of the insert (`id == 0`) or update call
pub fn admin_movie_path(id: u32) -> String {
    format!("/admin/movies/{}", id)
}

impl ApiClient {
    pub async fn admin_movies(&self, token: &str) -> Result<Vec<Movie>, ApiError> {
        let request = self.request(Method::GET, "/admin/movies", Some(token));
        decode_movie_list(&self.send_text(request).await?)
    }

    pub async fn admin_movie(&self, token: &str, id: &str) -> Result<MovieEdit, ApiError> {
        let path = format!("/admin/movies/{}", encode_segment(id));
        let request = self.request(Method::GET, &path, Some(token));
        decode_movie_edit(&self.send_text(request).await?)
    }

    /// Insert when `movie.id` is 0, update otherwise
    pub async fn save_movie(&self, token: &str, movie: &MoviePayload) -> Result<String, ApiError> {
        let method = if movie.id == 0 { Method::PUT } else { Method::PATCH };
        let payload = serde_json::to_string(movie)?;
        let request = self
            .request(method, &admin_movie_path(movie.id), Some(token))
            .body(payload);
        decode_status(&self.send_text(request).await?)
    }

    pub async fn delete_movie(&self, token: &str, id: u32) -> Result<String, ApiError> {
        let request = self.request(Method::DELETE, &admin_movie_path(id), Some(token));
        decode_status(&self.send_text(request).await?)
    }
}
