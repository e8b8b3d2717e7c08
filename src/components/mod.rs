//! UI Components
//!
//! Reusable Leptos components.

mod movie_table;
mod nav_bar;

pub use movie_table::{MovieRow, MovieTable};
pub use nav_bar::NavBar;
