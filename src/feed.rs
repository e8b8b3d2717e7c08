//! Fetch Feed
//!
//! Result gate for pages that refetch when their path changes: only the
//! response to the newest request gets through.

use crate::api::ApiError;
use crate::sequence::{RequestSequence, Ticket};

#[derive(Debug)]
pub struct Feed<T> {
    sequence: RequestSequence,
    _marker: std::marker::PhantomData<fn() -> T>,
}

impl<T> Default for Feed<T> {
    fn default() -> Self {
        Self {
            sequence: RequestSequence::new(),
            _marker: std::marker::PhantomData,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum FeedUpdate<T> {
    Replace(T),
    /// Leave the current value alone; carries the reason to log, if any
    Keep(Option<String>),
}

impl<T> Feed<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticket for a fetch of a (possibly new) id
    pub fn begin(&mut self) -> Ticket {
        self.sequence.issue()
    }

    pub fn accept(&self, ticket: Ticket, result: Result<T, ApiError>) -> FeedUpdate<T> {
        if !self.sequence.is_current(ticket) {
            return FeedUpdate::Keep(None);
        }
        match result {
            Ok(value) => FeedUpdate::Replace(value),
            Err(ApiError::Application { message }) => FeedUpdate::Keep(Some(message)),
            Err(e) => FeedUpdate::Keep(Some(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{decode_genre_movies, decode_movie};
    use crate::models::Movie;

    #[test]
    fn test_array_replaces_list() {
        let mut feed = Feed::<Vec<Movie>>::new();
        let ticket = feed.begin();
        let result = decode_genre_movies(
            r#"[{"id":1,"title":"A","release_date":"2020-01-01","mpaa_rating":"PG"},
                {"id":2,"title":"B","release_date":"2021-05-02","mpaa_rating":"R"}]"#,
        );
        match feed.accept(ticket, result) {
            FeedUpdate::Replace(movies) => {
                assert_eq!(movies.iter().map(|m| m.id).collect::<Vec<_>>(), vec![1, 2]);
            }
            other => panic!("expected replace, got {:?}", other),
        }
    }

    #[test]
    fn test_error_payload_keeps_list() {
        let mut feed = Feed::<Vec<Movie>>::new();
        let ticket = feed.begin();
        let result = decode_genre_movies(r#"{"error":true,"message":"sql: no rows"}"#);
        assert_eq!(
            feed.accept(ticket, result),
            FeedUpdate::Keep(Some("sql: no rows".to_string()))
        );
    }

    #[test]
    fn test_superseded_genre_is_ignored() {
        let mut feed = Feed::<Vec<Movie>>::new();
        let old = feed.begin();
        let _new = feed.begin();
        assert_eq!(feed.accept(old, Ok(vec![])), FeedUpdate::Keep(None));
    }

    #[test]
    fn test_movie_detail_drops_slow_previous_movie() {
        let mut feed = Feed::<Movie>::new();
        let first = feed.begin();
        let second = feed.begin();

        let late = decode_movie(r#"{"id":1,"title":"A","release_date":"2020-01-01","mpaa_rating":"PG"}"#);
        assert_eq!(feed.accept(first, late), FeedUpdate::Keep(None));

        let current = decode_movie(r#"{"id":2,"title":"B","release_date":"2021-05-02","mpaa_rating":"R"}"#);
        match feed.accept(second, current) {
            FeedUpdate::Replace(movie) => assert_eq!(movie.title, "B"),
            other => panic!("expected replace, got {:?}", other),
        }
    }

    #[test]
    fn test_movie_detail_error_keeps_current() {
        let mut feed = Feed::<Movie>::new();
        let ticket = feed.begin();
        let result = decode_movie(r#"{"error":true,"message":"strconv.Atoi: parsing \"x\""}"#);
        assert!(matches!(feed.accept(ticket, result), FeedUpdate::Keep(Some(ref m)) if m.starts_with("strconv")));
    }
}
