//! Catalog Page State
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Movie;

/// State of the searchable catalog, with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    /// Movies currently displayed
    pub movies: Vec<Movie>,
    /// Raw contents of the search box
    pub search_term: String,
}

pub type CatalogStore = Store<CatalogState>;

/// Replace the displayed movies
pub fn store_set_movies(store: &CatalogStore, movies: Vec<Movie>) {
    *store.movies().write() = movies;
}

pub fn store_set_search_term(store: &CatalogStore, term: String) {
    *store.search_term().write() = term;
}
