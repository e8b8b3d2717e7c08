//! Movie Table Component
//!
//! Striped table of movies, one row per record, titles linking to the
//! detail page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::models::Movie;

/// Display values for one table row
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRow {
    pub href: String,
    pub title: String,
    pub release_date: String,
    pub rating: String,
}

impl From<&Movie> for MovieRow {
    fn from(movie: &Movie) -> Self {
        Self {
            href: movie.href(),
            title: movie.title.clone(),
            release_date: movie.display_release_date(),
            rating: movie.mpaa_rating.clone(),
        }
    }
}

impl MovieRow {
    /// Row whose title opens the admin edit form instead
    pub fn for_edit(movie: &Movie) -> Self {
        Self {
            href: movie.edit_href(),
            ..Self::from(movie)
        }
    }
}

#[component]
pub fn MovieTable(
    #[prop(into)] movies: Signal<Vec<Movie>>,
    #[prop(into)] rating_label: String,
    #[prop(into)] empty_message: String,
    /// Link titles to the edit form
    #[prop(optional)] edit_links: bool,
) -> impl IntoView {
    view! {
        <Show
            when=move || !movies.get().is_empty()
            fallback=move || view! { <p>{empty_message.clone()}</p> }
        >
            <table class="table table-striped table-hover">
                <thead>
                    <tr>
                        <th>"Movie"</th>
                        <th>"Release Date"</th>
                        <th>{rating_label.clone()}</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || movies.get()
                        key=|movie| movie.id
                        children=move |movie| {
                            let row = if edit_links {
                                MovieRow::for_edit(&movie)
                            } else {
                                MovieRow::from(&movie)
                            };
                            view! {
                                <tr>
                                    <td>
                                        <A href=row.href>{row.title}</A>
                                    </td>
                                    <td>{row.release_date}</td>
                                    <td>{row.rating}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::decode_graph_movies;

    #[test]
    fn test_single_row_from_list_response() {
        let body = r#"{"data":{"list":[{"id":1,"title":"A","release_date":"2020-01-01","mpaa_rating":"PG"}]}}"#;
        let movies = decode_graph_movies(body, "list").unwrap();
        let rows: Vec<MovieRow> = movies.iter().map(MovieRow::from).collect();

        assert_eq!(rows.len(), 1);
        assert_eq!(
            format!("{} / {} / {}", rows[0].title, rows[0].release_date, rows[0].rating),
            "A / 1/1/2020 / PG"
        );
        assert_eq!(rows[0].href, "/movies/1");
    }

    #[test]
    fn test_edit_row_links_to_admin_form() {
        let movies = decode_graph_movies(
            r#"{"data":{"list":[{"id":7,"title":"G","release_date":"1999-03-31","mpaa_rating":"R"}]}}"#,
            "list",
        )
        .unwrap();
        let row = MovieRow::for_edit(&movies[0]);
        assert_eq!(row.href, "/admin/movie/7");
        assert_eq!(row.release_date, "3/31/1999");
    }
}
