//! Genre Page
//!
//! Movies of one genre. The id comes from the path, the display name
//! from the history state the genres page attached to the navigation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_params_map};

use crate::api::ApiClient;
use crate::components::MovieTable;
use crate::context::GenreNavState;
use crate::feed::{Feed, FeedUpdate};
use crate::models::Movie;

#[component]
pub fn OneGenrePage(api: ApiClient) -> impl IntoView {
    let location = use_location();
    let genre_name = move || {
        location
            .state
            .with(GenreNavState::from_state)
            .map(|s| s.genre_name)
            .unwrap_or_default()
    };
    let params = use_params_map();
    let genre_id = Memo::new(move |_| params.with(|p| p.get("id")).unwrap_or_default());
    let (movies, set_movies) = signal(Vec::<Movie>::new());
    let feed = StoredValue::new(Feed::<Vec<Movie>>::new());

    // Fetch on mount and whenever the id changes
    Effect::new(move |_| {
        let id = genre_id.get();
        let api = api.clone();
        let Some(ticket) = feed.try_update_value(|f| f.begin()) else {
            return;
        };
        spawn_local(async move {
            let result = api.movies_by_genre(&id).await;
            match feed.try_with_value(|f| f.accept(ticket, result)) {
                Some(FeedUpdate::Replace(loaded)) => {
                    log::info!("genre {}: {} movies", id, loaded.len());
                    set_movies.set(loaded);
                }
                Some(FeedUpdate::Keep(Some(reason))) => log::error!("genre {}: {}", id, reason),
                Some(FeedUpdate::Keep(None)) | None => {
                    log::debug!("dropping stale response for genre {}", id)
                }
            }
        });
    });

    view! {
        <div>
            <h2>"Genre: " {genre_name}</h2>
            <hr />
            <MovieTable
                movies=movies
                rating_label="MPAA Rating"
                empty_message="No movies in this genre (yet)!"
            />
        </div>
    }
}
