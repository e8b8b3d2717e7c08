//! GraphQL Search Page
//!
//! Full catalog from the `list` query, narrowed by a live `search` query
//! once the search box holds more than two characters.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::MovieTable;
use crate::search::{SearchAction, SearchController};
use crate::store::{store_set_movies, store_set_search_term, CatalogState, CatalogStateStoreFields};

#[component]
pub fn GraphQlPage(api: ApiClient) -> impl IntoView {
    let store = Store::new(CatalogState::default());
    let controller = StoredValue::new(SearchController::new());

    // Load the full list on mount
    let load_api = api.clone();
    Effect::new(move |_| {
        let api = load_api.clone();
        let Some(ticket) = controller.try_update_value(|c| c.begin_initial_load()) else {
            return;
        };
        spawn_local(async move {
            match api.list_movies_graph().await {
                Ok(loaded) => {
                    log::info!("list returned {} movies", loaded.len());
                    let shown = controller
                        .try_update_value(|c| c.accept_full_list(ticket, loaded))
                        .flatten();
                    if let Some(shown) = shown {
                        store_set_movies(&store, shown);
                    }
                }
                Err(e) => log::error!("list failed: {}", e),
            }
        });
    });

    let on_input = move |ev: web_sys::Event| {
        ev.prevent_default();
        let value = event_target_value(&ev);
        store_set_search_term(&store, value.clone());

        let Some(action) = controller.try_update_value(|c| c.on_input(&value)) else {
            return;
        };
        match action {
            SearchAction::Restore(full_list) => store_set_movies(&store, full_list),
            SearchAction::Query { ticket, term } => {
                let api = api.clone();
                spawn_local(async move {
                    match api.search_movies(&term).await {
                        Ok(found) => {
                            log::debug!("search '{}' returned {} movies", term, found.len());
                            let shown = controller
                                .try_with_value(|c| c.accept_search(ticket, found))
                                .flatten();
                            match shown {
                                Some(shown) => store_set_movies(&store, shown),
                                None => log::debug!("dropping stale results for '{}'", term),
                            }
                        }
                        Err(e) => log::error!("search '{}' failed: {}", term, e),
                    }
                });
            }
        }
    };

    view! {
        <div>
            <h2>"GraphQL"</h2>
            <hr />

            <form on:submit=|ev: web_sys::SubmitEvent| ev.prevent_default()>
                <div class="mb-3">
                    <label for="search" class="form-label">"Search"</label>
                    <input
                        type="search"
                        id="search"
                        name="search"
                        class="form-control"
                        autocomplete="off"
                        prop:value=move || store.search_term().get()
                        on:input=on_input
                    />
                </div>
            </form>

            <MovieTable
                movies=Signal::derive(move || store.movies().get())
                rating_label="Rating"
                empty_message="No movies (yet)!"
            />
        </div>
    }
}
