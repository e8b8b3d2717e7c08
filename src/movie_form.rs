//! Movie Edit Form
//!
//! Field state behind the admin add/edit page and its validation into
//! the payload the backend accepts.

use chrono::NaiveDate;

use crate::models::{parse_release_date, Genre, MovieEdit, MoviePayload};

pub const MPAA_RATINGS: &[&str] = &["G", "PG", "PG13", "R", "NC17", "18A"];

/// Field names, as used for the `is-invalid` markers
pub const FIELD_TITLE: &str = "title";
pub const FIELD_RELEASE_DATE: &str = "release_date";
pub const FIELD_RUNTIME: &str = "runtime";
pub const FIELD_RATING: &str = "mpaa_rating";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_GENRES: &str = "genres";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieForm {
    /// 0 for a movie that isn't stored yet
    pub id: u32,
    pub title: String,
    /// `YYYY-MM-DD`, as a date input produces it
    pub release_date: String,
    pub runtime: String,
    pub mpaa_rating: String,
    pub description: String,
    pub genres: Vec<Genre>,
}

impl MovieForm {
    /// Blank form listing every genre unchecked
    pub fn new_movie(genres: Vec<Genre>) -> Self {
        Self {
            genres: genres
                .into_iter()
                .map(|g| Genre { checked: false, ..g })
                .collect(),
            ..Default::default()
        }
    }

    pub fn from_edit(edit: MovieEdit) -> Self {
        let movie = edit.movie;
        Self {
            id: movie.id,
            release_date: parse_release_date(&movie.release_date)
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or(movie.release_date),
            runtime: movie.runtime.map(|r| r.to_string()).unwrap_or_default(),
            title: movie.title,
            mpaa_rating: movie.mpaa_rating,
            description: movie.description.unwrap_or_default(),
            genres: edit.genres,
        }
    }

    pub fn is_new(&self) -> bool {
        self.id == 0
    }

    pub fn toggle_genre(&mut self, genre_id: u32) {
        if let Some(genre) = self.genres.iter_mut().find(|g| g.id == genre_id) {
            genre.checked = !genre.checked;
        }
    }

    /// Build the payload, or list every field that needs fixing
    pub fn validate(&self) -> Result<MoviePayload, Vec<&'static str>> {
        let mut invalid = Vec::new();

        if self.title.trim().is_empty() {
            invalid.push(FIELD_TITLE);
        }
        let release_date = NaiveDate::parse_from_str(self.release_date.trim(), "%Y-%m-%d").ok();
        if release_date.is_none() {
            invalid.push(FIELD_RELEASE_DATE);
        }
        let runtime = self.runtime.trim().parse::<u32>().ok().filter(|r| *r > 0);
        if runtime.is_none() {
            invalid.push(FIELD_RUNTIME);
        }
        if !MPAA_RATINGS.contains(&self.mpaa_rating.as_str()) {
            invalid.push(FIELD_RATING);
        }
        if self.description.trim().is_empty() {
            invalid.push(FIELD_DESCRIPTION);
        }
        let genres_array: Vec<u32> = self.genres.iter().filter(|g| g.checked).map(|g| g.id).collect();
        if genres_array.is_empty() {
            invalid.push(FIELD_GENRES);
        }

        match (release_date, runtime) {
            (Some(date), Some(runtime)) if invalid.is_empty() => Ok(MoviePayload {
                id: self.id,
                title: self.title.trim().to_string(),
                release_date: format!("{}T00:00:00Z", date.format("%Y-%m-%d")),
                runtime,
                mpaa_rating: self.mpaa_rating.clone(),
                description: self.description.trim().to_string(),
                genres_array,
            }),
            _ => Err(invalid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::decode_movie_edit;

    fn genres() -> Vec<Genre> {
        vec![
            Genre { id: 1, genre: "Comedy".to_string(), checked: true },
            Genre { id: 2, genre: "Drama".to_string(), checked: false },
        ]
    }

    fn filled() -> MovieForm {
        let mut form = MovieForm::new_movie(genres());
        form.title = "  Amélie ".to_string();
        form.release_date = "2001-04-25".to_string();
        form.runtime = "122".to_string();
        form.mpaa_rating = "R".to_string();
        form.description = "A shy waitress.".to_string();
        form.toggle_genre(2);
        form
    }

    #[test]
    fn test_new_movie_starts_unchecked() {
        let form = MovieForm::new_movie(genres());
        assert!(form.is_new());
        assert!(form.genres.iter().all(|g| !g.checked));
    }

    #[test]
    fn test_valid_form_builds_payload() {
        let payload = filled().validate().unwrap();
        assert_eq!(payload.id, 0);
        assert_eq!(payload.title, "Amélie");
        assert_eq!(payload.release_date, "2001-04-25T00:00:00Z");
        assert_eq!(payload.runtime, 122);
        assert_eq!(payload.genres_array, vec![2]);
    }

    #[test]
    fn test_empty_form_lists_every_field() {
        let invalid = MovieForm::new_movie(genres()).validate().unwrap_err();
        assert_eq!(
            invalid,
            vec![FIELD_TITLE, FIELD_RELEASE_DATE, FIELD_RUNTIME, FIELD_RATING, FIELD_DESCRIPTION, FIELD_GENRES]
        );
    }

    #[test]
    fn test_bad_runtime_and_rating() {
        let mut form = filled();
        form.runtime = "two hours".to_string();
        form.mpaa_rating = "PG-13".to_string();
        assert_eq!(form.validate().unwrap_err(), vec![FIELD_RUNTIME, FIELD_RATING]);
    }

    #[test]
    fn test_from_edit_round_trips_dates_and_genres() {
        let edit = decode_movie_edit(
            r#"{"movie":{"id":9,"title":"Alien","runtime":117,"release_date":"1979-05-25T00:00:00Z",
                "mpaa_rating":"R","description":"In space."},
                "genres":[{"id":1,"genre":"Horror","checked":true},{"id":2,"genre":"Comedy","checked":false}]}"#,
        )
        .unwrap();
        let form = MovieForm::from_edit(edit);
        assert!(!form.is_new());
        assert_eq!(form.release_date, "1979-05-25");
        assert_eq!(form.runtime, "117");

        let payload = form.validate().unwrap();
        assert_eq!(payload.id, 9);
        assert_eq!(payload.genres_array, vec![1]);
    }
}
