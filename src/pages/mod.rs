//! Routed Pages
//!
//! One component per path; each receives the API client as a prop.

mod home;
mod movies;
mod movie_detail;
mod genres;
mod one_genre;
mod graphql;
mod login;
mod manage_catalogue;
mod edit_movie;

pub use home::{HomePage, NotFound};
pub use movies::MoviesPage;
pub use movie_detail::MovieDetailPage;
pub use genres::GenresPage;
pub use one_genre::OneGenrePage;
pub use graphql::GraphQlPage;
pub use login::LoginPage;
pub use manage_catalogue::ManageCataloguePage;
pub use edit_movie::EditMoviePage;
