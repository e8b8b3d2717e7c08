//! Genres Page
//!
//! Lists genres from `GET /genres`. Following a link hands the genre's
//! name to the genre page through navigation state.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::api::ApiClient;
use crate::context::GenreNavState;
use crate::models::Genre;

pub fn genre_path(genre: &Genre) -> String {
    format!("/genres/{}", genre.id)
}

#[component]
pub fn GenresPage(api: ApiClient) -> impl IntoView {
    let navigate = use_navigate();
    let (genres, set_genres) = signal(Vec::<Genre>::new());

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            match api.all_genres().await {
                Ok(loaded) => {
                    log::info!("loaded {} genres", loaded.len());
                    set_genres.set(loaded);
                }
                Err(e) => log::error!("loading genres failed: {}", e),
            }
        });
    });

    view! {
        <div>
            <h2>"Genres"</h2>
            <hr />
            <div class="list-group">
                <For
                    each=move || genres.get()
                    key=|genre| genre.id
                    children=move |genre| {
                        let path = genre_path(&genre);
                        let href = path.clone();
                        let nav_state = GenreNavState::new(genre.genre.clone());
                        let navigate = navigate.clone();
                        view! {
                            <a
                                href=href
                                class="list-group-item list-group-item-action"
                                on:click=move |ev: web_sys::MouseEvent| {
                                    ev.prevent_default();
                                    navigate(
                                        &path,
                                        NavigateOptions {
                                            state: nav_state.to_state(),
                                            ..Default::default()
                                        },
                                    );
                                }
                            >
                                {genre.genre}
                            </a>
                        }
                    }
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_path() {
        let genre = Genre { id: 12, genre: "Sci-Fi".to_string(), checked: false };
        assert_eq!(genre_path(&genre), "/genres/12");
    }
}
