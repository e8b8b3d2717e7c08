//! Manage Catalogue Page
//!
//! Every movie from `GET /admin/movies`, each linking to its edit form.
//! Sends anyone without a session to the login page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::ApiClient;
use crate::components::MovieTable;
use crate::context::use_auth;
use crate::models::Movie;

#[component]
pub fn ManageCataloguePage(api: ApiClient) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (movies, set_movies) = signal(Vec::<Movie>::new());

    Effect::new(move |_| {
        let Some(token) = auth.token() else {
            navigate("/login", Default::default());
            return;
        };
        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api.admin_movies(&token).await {
                Ok(loaded) => {
                    log::info!("loaded {} movies for the catalogue", loaded.len());
                    set_movies.set(loaded);
                }
                Err(e) if e.is_unauthorized() => {
                    log::warn!("session rejected, logging out");
                    auth.clear();
                    navigate("/login", Default::default());
                }
                Err(e) => log::error!("loading catalogue failed: {}", e),
            }
        });
    });

    view! {
        <div>
            <h2>"Manage Catalogue"</h2>
            <hr />
            <MovieTable
                movies=movies
                rating_label="Rating"
                empty_message="No movies (yet)!"
                edit_links=true
            />
        </div>
    }
}
