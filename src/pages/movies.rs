//! Movies Page
//!
//! Every movie in the catalog, from `GET /movies`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::MovieTable;
use crate::models::Movie;

#[component]
pub fn MoviesPage(api: ApiClient) -> impl IntoView {
    let (movies, set_movies) = signal(Vec::<Movie>::new());

    // Load on mount
    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            match api.all_movies().await {
                Ok(loaded) => {
                    log::info!("loaded {} movies", loaded.len());
                    set_movies.set(loaded);
                }
                Err(e) => log::error!("loading movies failed: {}", e),
            }
        });
    });

    view! {
        <div>
            <h2>"Movies"</h2>
            <hr />
            <MovieTable
                movies=movies
                rating_label="MPAA Rating"
                empty_message="No movies (yet)!"
            />
        </div>
    }
}
