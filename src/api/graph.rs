//! GraphQL Queries
//!
//! `list` and `search` against the `/graph` endpoint.

use serde::Deserialize;
use serde_json::Value;

use super::{check_error_payload, ApiClient, ApiError};
use crate::models::Movie;

/// Selection set shared by both queries
const MOVIE_FIELDS: &str = "id title runtime release_date mpaa_rating";

pub fn list_query() -> String {
    format!("{{ list {{ {} }} }}", MOVIE_FIELDS)
}

pub fn search_query(term: &str) -> String {
    format!(
        "{{ search(titleContains: {}) {{ {} }} }}",
        graphql_string(term),
        MOVIE_FIELDS
    )
}

/// Quote `value` as a GraphQL string literal
pub fn graphql_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Pull `data.<field>` out of a GraphQL response body
///
/// A `null` collection is an empty result.
pub fn decode_graph_movies(body: &str, field: &str) -> Result<Vec<Movie>, ApiError> {
    let value: Value = serde_json::from_str(body)?;
    check_error_payload(&value)?;

    if let Some(message) = value
        .get("errors")
        .and_then(|errors| errors.get(0))
        .and_then(|first| first.get("message"))
        .and_then(Value::as_str)
    {
        if value.get("data").map_or(true, Value::is_null) {
            return Err(ApiError::Application { message: message.to_string() });
        }
    }

    let data = value
        .get("data")
        .ok_or_else(|| ApiError::Malformed("missing 'data'".to_string()))?;
    match data.get(field) {
        None => Err(ApiError::Malformed(format!("missing 'data.{}'", field))),
        Some(Value::Null) => Ok(Vec::new()),
        Some(list) => Ok(Vec::<Movie>::deserialize(list)?),
    }
}

impl ApiClient {
    pub async fn list_movies_graph(&self) -> Result<Vec<Movie>, ApiError> {
        let body = self.post_graph(list_query()).await?;
        decode_graph_movies(&body, "list")
    }

    pub async fn search_movies(&self, term: &str) -> Result<Vec<Movie>, ApiError> {
        let body = self.post_graph(search_query(term)).await?;
        decode_graph_movies(&body, "search")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_shape() {
        assert_eq!(list_query(), "{ list { id title runtime release_date mpaa_rating } }");
    }

    #[test]
    fn test_search_query_embeds_term() {
        assert_eq!(
            search_query("star"),
            "{ search(titleContains: \"star\") { id title runtime release_date mpaa_rating } }"
        );
    }

    #[test]
    fn test_graphql_string_escapes() {
        assert_eq!(graphql_string("say \"hi\""), r#""say \"hi\"""#);
        assert_eq!(graphql_string("a\\b"), r#""a\\b""#);
        assert_eq!(graphql_string("line\nbreak"), r#""line\nbreak""#);
        assert_eq!(graphql_string("Amélie"), "\"Amélie\"");
    }

    #[test]
    fn test_decode_list() {
        let body = r#"{"data":{"list":[
            {"id":1,"title":"A","release_date":"2020-01-01","mpaa_rating":"PG"},
            {"id":7,"title":"B","runtime":95,"release_date":"1999-03-31T00:00:00Z","mpaa_rating":"R"}
        ]}}"#;
        let movies = decode_graph_movies(body, "list").unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "A");
        assert_eq!(movies[0].display_release_date(), "1/1/2020");
        assert_eq!(movies[1].runtime, Some(95));
    }

    #[test]
    fn test_decode_null_search_is_empty() {
        let movies = decode_graph_movies(r#"{"data":{"search":null}}"#, "search").unwrap();
        assert!(movies.is_empty());
    }

    #[test]
    fn test_decode_wrong_field_is_malformed() {
        let err = decode_graph_movies(r#"{"data":{"list":[]}}"#, "search").unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));
        let err = decode_graph_movies(r#"{"data":{"list":[{"id":"x"}]}}"#, "list").unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));
        let err = decode_graph_movies("<html>", "list").unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));
    }

    #[test]
    fn test_decode_error_payload() {
        let err = decode_graph_movies(r#"{"error":true,"message":"error executing query"}"#, "list")
            .unwrap_err();
        assert!(matches!(err, ApiError::Application { ref message } if message == "error executing query"));
    }

    #[test]
    fn test_decode_graphql_errors() {
        let body = r#"{"data":null,"errors":[{"message":"Cannot query field \"lst\""}]}"#;
        let err = decode_graph_movies(body, "list").unwrap_err();
        assert!(matches!(err, ApiError::Application { ref message } if message.contains("lst")));
    }
}
