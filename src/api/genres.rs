//! Genre Endpoints
//!
//! `GET /genres` and `GET /movies/genres/{id}`.

use serde_json::Value;

use super::{check_error_payload, decode_movie_list, encode_segment, ApiClient, ApiError};
use crate::models::{Genre, Movie};

pub fn decode_genres(body: &str) -> Result<Vec<Genre>, ApiError> {
    let value: Value = serde_json::from_str(body)?;
    check_error_payload(&value)?;
    if value.is_null() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_value(value)?)
}

/// Array of movies, `null`, or the error payload
pub fn decode_genre_movies(body: &str) -> Result<Vec<Movie>, ApiError> {
    decode_movie_list(body)
}

impl ApiClient {
    pub async fn all_genres(&self) -> Result<Vec<Genre>, ApiError> {
        let body = self.get_text("/genres").await?;
        decode_genres(&body)
    }

    pub async fn movies_by_genre(&self, genre_id: &str) -> Result<Vec<Movie>, ApiError> {
        let body = self
            .get_text(&format!("/movies/genres/{}", encode_segment(genre_id)))
            .await?;
        decode_genre_movies(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_genres() {
        let genres = decode_genres(
            r#"[{"id":1,"genre":"Comedy","checked":false},{"id":2,"genre":"Sci-Fi","checked":false}]"#,
        )
        .unwrap();
        assert_eq!(genres.iter().map(|g| g.genre.as_str()).collect::<Vec<_>>(), vec!["Comedy", "Sci-Fi"]);
    }

    #[test]
    fn test_decode_genre_movies_array_keeps_order() {
        let movies = decode_genre_movies(
            r#"[{"id":3,"title":"C","release_date":"2001-01-01","mpaa_rating":"PG-13"},
                {"id":1,"title":"A","release_date":"2020-01-01","mpaa_rating":"PG"}]"#,
        )
        .unwrap();
        assert_eq!(movies.iter().map(|m| m.id).collect::<Vec<_>>(), vec![3, 1]);
    }

    #[test]
    fn test_decode_genre_movies_error() {
        let err = decode_genre_movies(r#"{"error":true,"message":"strconv.Atoi: parsing \"x\""}"#)
            .unwrap_err();
        assert!(matches!(err, ApiError::Application { ref message } if message.starts_with("strconv")));
    }

    #[test]
    fn test_decode_genre_movies_unexpected_object() {
        let err = decode_genre_movies(r#"{"movies":[]}"#).unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));
    }
}
