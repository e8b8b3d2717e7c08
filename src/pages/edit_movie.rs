//! Edit Movie Page
//!
//! Admin form at `/admin/movie/:id`; id 0 adds a new movie. Saves through
//! `PUT`/`PATCH /admin/movies/{id}` and deletes behind an inline confirm.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::api::{ApiClient, ApiError};
use crate::context::use_auth;
use crate::movie_form::{
    MovieForm, FIELD_DESCRIPTION, FIELD_GENRES, FIELD_RATING, FIELD_RELEASE_DATE, FIELD_RUNTIME,
    FIELD_TITLE, MPAA_RATINGS,
};

const CATALOGUE_PATH: &str = "/manage-catalogue";

/// Bootstrap class of a field, marked when validation rejected it
pub fn field_class(base: &str, invalid: &[&str], field: &str) -> String {
    if invalid.contains(&field) {
        format!("{} is-invalid", base)
    } else {
        base.to_string()
    }
}

async fn load_form(api: &ApiClient, token: &str, id: &str) -> Result<MovieForm, ApiError> {
    if id == "0" {
        Ok(MovieForm::new_movie(api.all_genres().await?))
    } else {
        Ok(MovieForm::from_edit(api.admin_movie(token, id).await?))
    }
}

#[component]
pub fn EditMoviePage(api: ApiClient) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let params = use_params_map();
    let movie_id = Memo::new(move |_| params.with(|p| p.get("id")).unwrap_or_default());

    let form = RwSignal::new(MovieForm::default());
    let (invalid, set_invalid) = signal(Vec::<&'static str>::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (confirm_delete, set_confirm_delete) = signal(false);

    // Ends the session when the backend rejects the token
    let on_error = {
        let navigate = navigate.clone();
        move |action: &str, e: ApiError| {
            if e.is_unauthorized() {
                log::warn!("session rejected while trying to {}", action);
                auth.clear();
                navigate("/login", Default::default());
            } else {
                log::error!("could not {}: {}", action, e);
                set_error.set(Some(e.to_string()));
            }
        }
    };

    {
        let api = api.clone();
        let navigate = navigate.clone();
        let on_error = on_error.clone();
        Effect::new(move |_| {
            let id = movie_id.get();
            let Some(token) = auth.token() else {
                navigate("/login", Default::default());
                return;
            };
            let api = api.clone();
            let on_error = on_error.clone();
            spawn_local(async move {
                match load_form(&api, &token, &id).await {
                    Ok(loaded) => {
                        set_invalid.set(Vec::new());
                        form.set(loaded);
                    }
                    Err(e) => on_error("load the movie", e),
                }
            });
        });
    }

    let submit = {
        let api = api.clone();
        let navigate = navigate.clone();
        let on_error = on_error.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let payload = match form.with(MovieForm::validate) {
                Ok(payload) => payload,
                Err(fields) => {
                    log::debug!("form rejected: {:?}", fields);
                    set_invalid.set(fields);
                    return;
                }
            };
            set_invalid.set(Vec::new());
            let Some(token) = auth.token() else {
                navigate("/login", Default::default());
                return;
            };
            let api = api.clone();
            let navigate = navigate.clone();
            let on_error = on_error.clone();
            spawn_local(async move {
                match api.save_movie(&token, &payload).await {
                    Ok(message) => {
                        log::info!("saved movie {}: {}", payload.title, message);
                        navigate(CATALOGUE_PATH, Default::default());
                    }
                    Err(e) => on_error("save the movie", e),
                }
            });
        }
    };

    let delete = move |_: web_sys::MouseEvent| {
        let id = form.with(|f| f.id);
        let Some(token) = auth.token() else {
            navigate("/login", Default::default());
            return;
        };
        let api = api.clone();
        let navigate = navigate.clone();
        let on_error = on_error.clone();
        spawn_local(async move {
            match api.delete_movie(&token, id).await {
                Ok(message) => {
                    log::info!("deleted movie {}: {}", id, message);
                    navigate(CATALOGUE_PATH, Default::default());
                }
                Err(e) => on_error("delete the movie", e),
            }
        });
    };

    let class_of = move |base: &'static str, field: &'static str| {
        move || invalid.with(|fields| field_class(base, fields, field))
    };

    view! {
        <div>
            <h2>{move || if form.with(MovieForm::is_new) { "Add Movie" } else { "Edit Movie" }}</h2>
            <hr />
            {move || error.get().map(|message| view! {
                <div class="alert alert-danger">{message}</div>
            })}
            <form on:submit=submit>
                <div class="mb-3">
                    <label for="title" class="form-label">"Title"</label>
                    <input
                        id="title"
                        type="text"
                        class=class_of("form-control", FIELD_TITLE)
                        prop:value=move || form.with(|f| f.title.clone())
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                    />
                </div>
                <div class="mb-3">
                    <label for="release_date" class="form-label">"Release Date"</label>
                    <input
                        id="release_date"
                        type="date"
                        class=class_of("form-control", FIELD_RELEASE_DATE)
                        prop:value=move || form.with(|f| f.release_date.clone())
                        on:input=move |ev| form.update(|f| f.release_date = event_target_value(&ev))
                    />
                </div>
                <div class="mb-3">
                    <label for="runtime" class="form-label">"Runtime"</label>
                    <input
                        id="runtime"
                        type="text"
                        class=class_of("form-control", FIELD_RUNTIME)
                        prop:value=move || form.with(|f| f.runtime.clone())
                        on:input=move |ev| form.update(|f| f.runtime = event_target_value(&ev))
                    />
                </div>
                <div class="mb-3">
                    <label for="mpaa_rating" class="form-label">"MPAA Rating"</label>
                    <select
                        id="mpaa_rating"
                        class=class_of("form-select", FIELD_RATING)
                        prop:value=move || form.with(|f| f.mpaa_rating.clone())
                        on:change=move |ev| form.update(|f| f.mpaa_rating = event_target_value(&ev))
                    >
                        <option value="">"Choose..."</option>
                        {MPAA_RATINGS.iter().map(|rating| view! {
                            <option value=*rating>{*rating}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="mb-3">
                    <label for="description" class="form-label">"Description"</label>
                    <textarea
                        id="description"
                        rows="3"
                        class=class_of("form-control", FIELD_DESCRIPTION)
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </div>
                <hr />
                <h3>"Genres"</h3>
                <Show when=move || invalid.with(|fields| fields.contains(&FIELD_GENRES))>
                    <div class="text-danger mb-2">"Choose at least one genre."</div>
                </Show>
                {move || form.with(|f| f.genres.clone()).into_iter().map(|genre| {
                    let id = genre.id;
                    let input_id = format!("genre-{}", id);
                    view! {
                        <div class="form-check">
                            <input
                                id=input_id.clone()
                                type="checkbox"
                                class="form-check-input"
                                prop:checked=genre.checked
                                on:change=move |_| form.update(|f| f.toggle_genre(id))
                            />
                            <label for=input_id class="form-check-label">{genre.genre}</label>
                        </div>
                    }
                }).collect_view()}
                <hr />
                <input type="submit" class="btn btn-primary" value="Save" />
                <Show when=move || !form.with(MovieForm::is_new)>
                    {let delete = delete.clone(); view! {
                    <Show
                        when=move || confirm_delete.get()
                        fallback=move || view! {
                            <button
                                type="button"
                                class="btn btn-danger ms-2"
                                on:click=move |_| set_confirm_delete.set(true)
                            >
                                "Delete Movie"
                            </button>
                        }
                    >
                        <span class="ms-2">
                            "Delete this movie? "
                            <button type="button" class="btn btn-danger btn-sm" on:click=delete.clone()>
                                "Yes"
                            </button>
                            <button
                                type="button"
                                class="btn btn-secondary btn-sm ms-1"
                                on:click=move |_| set_confirm_delete.set(false)
                            >
                                "No"
                            </button>
                        </span>
                    </Show>
                    }}
                </Show>
            </form>
        </div>
    }
}
