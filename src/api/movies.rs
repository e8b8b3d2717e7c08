//! Movie Endpoints
//!
//! `GET /movies` and `GET /movies/{id}`.

use serde_json::Value;

use super::{check_error_payload, encode_segment, ApiClient, ApiError};
use crate::models::Movie;

/// Decode a body holding a movie array; `null` means none
pub fn decode_movie_list(body: &str) -> Result<Vec<Movie>, ApiError> {
    let value: Value = serde_json::from_str(body)?;
    check_error_payload(&value)?;
    if value.is_null() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_value(value)?)
}

pub fn decode_movie(body: &str) -> Result<Movie, ApiError> {
    let value: Value = serde_json::from_str(body)?;
    check_error_payload(&value)?;
    Ok(serde_json::from_value(value)?)
}

impl ApiClient {
    pub async fn all_movies(&self) -> Result<Vec<Movie>, ApiError> {
        let body = self.get_text("/movies").await?;
        decode_movie_list(&body)
    }

    pub async fn movie(&self, id: &str) -> Result<Movie, ApiError> {
        let body = self.get_text(&format!("/movies/{}", encode_segment(id))).await?;
        decode_movie(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_movie_with_genres() {
        let body = r#"{
            "id": 4, "title": "Alien", "runtime": 117,
            "release_date": "1979-05-25T00:00:00Z", "mpaa_rating": "R",
            "description": "In space no one can hear you scream.",
            "image": "/vfrQk5IPloGg1v9Rzbh2Eg3VGyM.jpg",
            "genres": [{"id": 9, "genre": "Horror", "checked": false},
                       {"id": 12, "genre": "Sci-Fi", "checked": false}]
        }"#;
        let movie = decode_movie(body).unwrap();
        assert_eq!(movie.runtime, Some(117));
        assert_eq!(movie.display_release_date(), "5/25/1979");
        let genres = movie.genres.unwrap();
        assert_eq!(genres.len(), 2);
        assert_eq!(genres[1].genre, "Sci-Fi");
    }

    #[test]
    fn test_decode_movie_error() {
        let err = decode_movie(r#"{"error":true,"message":"sql: no rows in result set"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Application { .. }));
    }

    #[test]
    fn test_decode_movie_list_null() {
        assert!(decode_movie_list("null").unwrap().is_empty());
    }
}
