//! Navigation Bar Component
//!
//! Public links always; catalogue links and logout only with a session.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::api::ApiClient;
use crate::context::use_auth;

const LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/movies", "Movies"),
    ("/genres", "Genres"),
    ("/graphql", "GraphQL"),
];

const ADMIN_LINKS: &[(&str, &str)] = &[
    ("/admin/movie/0", "Add Movie"),
    ("/manage-catalogue", "Manage Catalogue"),
];

/// Links to render for the current session state
pub fn visible_links(logged_in: bool) -> Vec<(&'static str, &'static str)> {
    let mut links = LINKS.to_vec();
    if logged_in {
        links.extend_from_slice(ADMIN_LINKS);
    }
    links
}

#[component]
pub fn NavBar(api: ApiClient) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let logout = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let api = api.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            if let Err(e) = api.logout().await {
                log::warn!("logout request failed: {}", e);
            }
            auth.clear();
            navigate("/login", Default::default());
        });
    };

    view! {
        <div>
            <nav class="list-group">
                {move || visible_links(auth.is_logged_in()).into_iter().map(|(href, label)| view! {
                    <A href=href attr:class="list-group-item list-group-item-action">{label}</A>
                }).collect_view()}
            </nav>
            <div class="mt-3 text-end">
                <Show
                    when=move || auth.is_logged_in()
                    fallback=|| view! {
                        <A href="/login" attr:class="badge bg-success text-decoration-none">"Login"</A>
                    }
                >
                    <a href="#!" class="badge bg-danger text-decoration-none" on:click=logout.clone()>
                        "Logout"
                    </a>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_links_need_session() {
        let anonymous = visible_links(false);
        assert!(anonymous.iter().all(|(href, _)| !href.starts_with("/admin")));
        assert!(!anonymous.contains(&("/manage-catalogue", "Manage Catalogue")));

        let admin = visible_links(true);
        assert_eq!(admin.len(), LINKS.len() + ADMIN_LINKS.len());
        assert!(admin.contains(&("/admin/movie/0", "Add Movie")));
    }
}
