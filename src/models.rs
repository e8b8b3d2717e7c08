//! Frontend Models
//!
//! Data structures matching backend entities.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Movie record (matches backend `models.Movie`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u32,
    pub title: String,
    /// Minutes; the list queries may leave it out
    #[serde(default)]
    pub runtime: Option<u32>,
    pub release_date: String,
    pub mpaa_rating: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub genres: Option<Vec<Genre>>,
}

/// Genre record (matches backend `models.Genre`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub genre: String,
    #[serde(default)]
    pub checked: bool,
}

/// Error payload the backend writes instead of the expected body
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorPayload {
    pub error: bool,
    #[serde(default)]
    pub message: String,
}

/// Reply of the write endpoints, e.g. `{"error":false,"message":"movie deleted"}`
pub type StatusPayload = ErrorPayload;

/// Login form body for `POST /authenticate`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Token pair returned by `/authenticate` and `/refresh`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// `GET /admin/movies/{id}`: the movie plus every genre, checked where it applies
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieEdit {
    pub movie: Movie,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

/// Body of the admin insert and update calls
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoviePayload {
    pub id: u32,
    pub title: String,
    /// RFC 3339, midnight UTC
    pub release_date: String,
    pub runtime: u32,
    pub mpaa_rating: String,
    pub description: String,
    pub genres_array: Vec<u32>,
}

impl Movie {
    /// In-app path of the detail page
    pub fn href(&self) -> String {
        format!("/movies/{}", self.id)
    }

    /// In-app path of the admin edit form
    pub fn edit_href(&self) -> String {
        format!("/admin/movie/{}", self.id)
    }

    /// Release date as `M/D/YYYY`, or the raw text when it doesn't parse
    pub fn display_release_date(&self) -> String {
        format_release_date(&self.release_date)
    }
}

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date
pub fn parse_release_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

pub fn format_release_date(raw: &str) -> String {
    match parse_release_date(raw) {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => raw.to_string(),
    }
}
