//! Movies Frontend App
//!
//! Router and page shell.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::api::ApiClient;
use crate::components::NavBar;
use crate::config::AppConfig;
use crate::context::{session_after_refresh, AuthState};
use crate::pages::{
    EditMoviePage, GenresPage, GraphQlPage, HomePage, LoginPage, ManageCataloguePage,
    MovieDetailPage, MoviesPage, NotFound, OneGenrePage,
};

/// Access tokens live for 15 minutes on the backend
const REFRESH_INTERVAL_MS: u32 = 10 * 60 * 1000;

fn refresh_session(api: ApiClient, auth: AuthState) {
    spawn_local(async move {
        let change = session_after_refresh(api.refresh().await);
        log::debug!("token refresh: {:?}", change);
        auth.apply(change);
    });
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let api = ApiClient::new(&config);
    log::info!("using backend {}", api.base_url());

    let auth = AuthState::new();
    provide_context(auth);

    // Restore a session from the refresh cookie, then keep the token fresh
    refresh_session(api.clone(), auth);
    {
        let api = api.clone();
        Interval::new(REFRESH_INTERVAL_MS, move || {
            if auth.is_logged_in() {
                refresh_session(api.clone(), auth);
            }
        })
        .forget();
    }

    let movies_view = {
        let api = api.clone();
        move || view! { <MoviesPage api=api.clone() /> }
    };
    let movie_view = {
        let api = api.clone();
        move || view! { <MovieDetailPage api=api.clone() /> }
    };
    let genres_view = {
        let api = api.clone();
        move || view! { <GenresPage api=api.clone() /> }
    };
    let genre_view = {
        let api = api.clone();
        move || view! { <OneGenrePage api=api.clone() /> }
    };
    let graphql_view = {
        let api = api.clone();
        move || view! { <GraphQlPage api=api.clone() /> }
    };
    let login_view = {
        let api = api.clone();
        move || view! { <LoginPage api=api.clone() /> }
    };
    let catalogue_view = {
        let api = api.clone();
        move || view! { <ManageCataloguePage api=api.clone() /> }
    };
    let edit_view = {
        let api = api.clone();
        move || view! { <EditMoviePage api=api.clone() /> }
    };

    view! {
        <Router>
            <div class="container">
                <div class="row">
                    <div class="col">
                        <h1 class="mt-3">"Go Watch a Movie!"</h1>
                    </div>
                    <hr class="mb-3" />
                </div>
                <div class="row">
                    <div class="col-md-2">
                        <NavBar api=api.clone() />
                    </div>
                    <main class="col-md-10">
                        <Routes fallback=|| view! { <NotFound /> }>
                            <Route path=path!("/") view=HomePage />
                            <Route path=path!("/movies") view=movies_view />
                            <Route path=path!("/movies/:id") view=movie_view />
                            <Route path=path!("/genres") view=genres_view />
                            <Route path=path!("/genres/:id") view=genre_view />
                            <Route path=path!("/graphql") view=graphql_view />
                            <Route path=path!("/login") view=login_view />
                            <Route path=path!("/manage-catalogue") view=catalogue_view />
                            <Route path=path!("/admin/movie/:id") view=edit_view />
                        </Routes>
                    </main>
                </div>
            </div>
        </Router>
    }
}
