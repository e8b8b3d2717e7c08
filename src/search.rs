//! Incremental Search Controller
//!
//! Decides, per keystroke, whether to query the backend or fall back to
//! the cached full list, and which responses may still be shown.

use crate::models::Movie;
use crate::sequence::{RequestSequence, Ticket};

/// Inputs longer than this many characters hit the backend
pub const SEARCH_THRESHOLD: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchAction {
    /// Send a `search` query for `term`, then hand the result to `accept_search`
    Query { ticket: Ticket, term: String },
    /// Show the baseline list right away
    Restore(Vec<Movie>),
}

#[derive(Debug, Default)]
pub struct SearchController {
    full_list: Vec<Movie>,
    sequence: RequestSequence,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn full_list(&self) -> &[Movie] {
        &self.full_list
    }

    /// Ticket for the initial `list` request
    pub fn begin_initial_load(&mut self) -> Ticket {
        self.sequence.issue()
    }

    /// Cache the full list as baseline. Returns the list to display, unless
    /// a newer search or restore was issued while it was in flight.
    pub fn accept_full_list(&mut self, ticket: Ticket, movies: Vec<Movie>) -> Option<Vec<Movie>> {
        self.full_list = movies;
        self.sequence
            .is_current(ticket)
            .then(|| self.full_list.clone())
    }

    pub fn on_input(&mut self, value: &str) -> SearchAction {
        let ticket = self.sequence.issue();
        if value.chars().count() > SEARCH_THRESHOLD {
            SearchAction::Query {
                ticket,
                term: value.to_string(),
            }
        } else {
            SearchAction::Restore(self.full_list.clone())
        }
    }

    /// Returns the movies to display, or None if the ticket was superseded
    pub fn accept_search(&self, ticket: Ticket, movies: Vec<Movie>) -> Option<Vec<Movie>> {
        self.sequence.is_current(ticket).then_some(movies)
    }
}
