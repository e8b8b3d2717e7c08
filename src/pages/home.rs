use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="text-center">
            <h2>"Find a movie to watch tonight!"</h2>
            <hr />
            <p>
                "Browse the "
                <A href="/movies">"full catalog"</A>
                ", pick a "
                <A href="/genres">"genre"</A>
                ", or "
                <A href="/graphql">"search by title"</A>
                "."
            </p>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="text-center">
            <h2>"Page not found"</h2>
            <hr />
            <A href="/">"Back to home"</A>
        </div>
    }
}
