//! Movie Detail Page
//!
//! One movie from `GET /movies/{id}`, refetched when the id in the path
//! changes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::api::ApiClient;
use crate::models::Movie;
use crate::feed::{Feed, FeedUpdate};

/// Poster base for the `image` paths the backend stores
const POSTER_BASE: &str = "https://image.tmdb.org/t/p/w200";

pub fn poster_url(image: &str) -> Option<String> {
    let image = image.trim();
    if image.is_empty() {
        return None;
    }
    if image.starts_with("http://") || image.starts_with("https://") {
        return Some(image.to_string());
    }
    Some(format!("{}/{}", POSTER_BASE, image.trim_start_matches('/')))
}

pub fn format_runtime(minutes: Option<u32>) -> String {
    match minutes {
        Some(m) => format!("{} minutes", m),
        None => "-".to_string(),
    }
}

#[component]
pub fn MovieDetailPage(api: ApiClient) -> impl IntoView {
    let params = use_params_map();
    let movie_id = Memo::new(move |_| params.with(|p| p.get("id")).unwrap_or_default());
    let (movie, set_movie) = signal::<Option<Movie>>(None);
    let feed = StoredValue::new(Feed::<Movie>::new());

    Effect::new(move |_| {
        let id = movie_id.get();
        let api = api.clone();
        let Some(ticket) = feed.try_update_value(|f| f.begin()) else {
            return;
        };
        spawn_local(async move {
            let result = api.movie(&id).await;
            match feed.try_with_value(|f| f.accept(ticket, result)) {
                Some(FeedUpdate::Replace(loaded)) => set_movie.set(Some(loaded)),
                Some(FeedUpdate::Keep(Some(reason))) => {
                    log::error!("loading movie {} failed: {}", id, reason)
                }
                Some(FeedUpdate::Keep(None)) | None => {
                    log::debug!("dropping stale response for movie {}", id)
                }
            }
        });
    });

    view! {
        {move || match movie.get() {
            None => view! { <p>"Loading..."</p> }.into_any(),
            Some(m) => {
                let genres = m.genres.clone().unwrap_or_default();
                let poster = m.image.as_deref().and_then(poster_url);
                view! {
                    <div>
                        <h2>"Movie: " {m.title.clone()}</h2>
                        <small>
                            <em>
                                {m.display_release_date()} ", "
                                {format_runtime(m.runtime)} ", Rated "
                                {m.mpaa_rating.clone()}
                            </em>
                        </small>
                        <br />
                        {genres.into_iter().map(|g| view! {
                            <span class="badge bg-secondary me-2">{g.genre}</span>
                        }).collect_view()}
                        <hr />
                        {poster.map(|src| view! {
                            <div class="mb-3">
                                <img src=src alt="poster" />
                            </div>
                        })}
                        <p>{m.description.clone().unwrap_or_default()}</p>
                    </div>
                }.into_any()
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poster_url() {
        assert_eq!(
            poster_url("/abc.jpg").as_deref(),
            Some("https://image.tmdb.org/t/p/w200/abc.jpg")
        );
        assert_eq!(poster_url("https://cdn.example/p.png").as_deref(), Some("https://cdn.example/p.png"));
        assert_eq!(poster_url(" "), None);
    }

    #[test]
    fn test_format_runtime() {
        assert_eq!(format_runtime(Some(117)), "117 minutes");
        assert_eq!(format_runtime(None), "-");
    }
}
